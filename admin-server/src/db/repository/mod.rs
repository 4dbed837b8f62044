//! Repository Module
//!
//! CRUD operations over the SQLite tables. Functions take the pool (or a
//! connection inside a transaction) and return [`RepoResult`].

pub mod color_scheme;
pub mod user_field;

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    /// One message per failed check
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Rejected with a specific error code instead of the resource's default
    #[error("Rejected ({}): {}", .0, .1.join(", "))]
    Rejected(ErrorCode, Vec<String>),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Database(format!("Corrupt JSON column: {err}"))
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Error codes a resource reports its repository failures with
#[derive(Debug, Clone, Copy)]
pub struct ResourceCodes {
    pub not_found: ErrorCode,
    pub invalid: ErrorCode,
    pub duplicate: ErrorCode,
}

impl ResourceCodes {
    pub const GENERIC: Self = Self {
        not_found: ErrorCode::NotFound,
        invalid: ErrorCode::ValidationFailed,
        duplicate: ErrorCode::AlreadyExists,
    };
}

impl RepoError {
    /// Convert into an [`AppError`] carrying the resource's own codes
    pub fn into_app_error(self, codes: ResourceCodes) -> AppError {
        match self {
            RepoError::NotFound(msg) => AppError::with_message(codes.not_found, msg),
            RepoError::Duplicate(msg) => {
                AppError::with_message(codes.duplicate, msg.clone()).with_errors(vec![msg])
            }
            RepoError::Validation(errors) => AppError::validation_errors(codes.invalid, errors),
            RepoError::Rejected(code, errors) => AppError::validation_errors(code, errors),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Repository database error");
                AppError::database(msg)
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        err.into_app_error(ResourceCodes::GENERIC)
    }
}
