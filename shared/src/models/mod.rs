//! Data models
//!
//! Shared between admin-server and admin-client (via API).
//! All persisted IDs are `i64`.

pub mod color_scheme;
pub mod user_field;

// Re-exports
pub use color_scheme::*;
pub use user_field::*;
