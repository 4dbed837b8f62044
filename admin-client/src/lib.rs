//! Admin Client - HTTP client and field manager for the admin server
//!
//! - [`HttpClient`]: network calls to the admin API
//! - [`RecordStore`]: async persistence seam for user fields
//! - [`UserFieldsController`]: ordered, in-memory list of user fields
//!   (create, reorder, destroy) backed by a [`RecordStore`]

pub mod config;
pub mod dialog;
pub mod error;
pub mod http;
pub mod i18n;
pub mod store;
pub mod user_fields;

pub use config::ClientConfig;
pub use dialog::{ConfirmDialog, ErrorPopup};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use i18n::Translations;
pub use store::{HttpRecordStore, MemoryRecordStore, RecordStore};
pub use user_fields::{DestroyOutcome, FieldKey, UserFieldsController};

// Re-export shared types for convenience
pub use shared::models::{ColorScheme, ColorSchemeParams, FieldType, UserField, UserFieldUpdate};
