//! Shared types for the admin service
//!
//! Domain models, the unified error type and small utilities used by both
//! `admin-server` and `admin-client`.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use error::{AppError, AppResult, ErrorBody, ErrorCode, SuccessBody};
pub use http;
pub use serde::{Deserialize, Serialize};
