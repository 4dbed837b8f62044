//! Unified error system
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with code, message and field-level messages
//! - [`ErrorBody`]: The `{ "errors": [...] }` body every failed request returns
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Color scheme errors
//! - 2xxx: User field errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorBody};
//!
//! let err = AppError::validation_errors(
//!     ErrorCode::ColorSchemeInvalid,
//!     vec!["Color 'primary' hex is invalid".to_string()],
//! );
//! assert_eq!(err.http_status().as_u16(), 422);
//!
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.errors.len(), 1);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody, SuccessBody};
