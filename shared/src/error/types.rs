//! Error type and the JSON bodies it renders to

use super::codes::ErrorCode;
use axum::extract::rejection::JsonRejection;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with structured error code and field-level messages
///
/// `message` is the summary; `errors` carries one full sentence per failed
/// validation (e.g. `"Color 'primary' hex is invalid"`). When `errors` is
/// empty the summary is rendered as the single entry of the body's list.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Field-level validation messages
    pub errors: Vec<String>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            errors: Vec::new(),
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Attach the list of field-level messages
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Messages to show the user: the field-level list, or the summary
    pub fn messages(&self) -> Vec<String> {
        if self.errors.is_empty() {
            vec![self.message.clone()]
        } else {
            self.errors.clone()
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error with a single message
    pub fn validation(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        Self::with_message(ErrorCode::ValidationFailed, msg.clone()).with_errors(vec![msg])
    }

    /// Create a validation error for `code` carrying every failed check
    pub fn validation_errors(code: ErrorCode, errors: Vec<String>) -> Self {
        Self::new(code).with_errors(errors)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::with_message(
            ErrorCode::AlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response
///
/// ```json
/// { "errors": ["Color 'primary' hex is invalid"], "error_type": "invalid_record", "code": 1002 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// One message per failure, never empty
    pub errors: Vec<String>,
    /// Machine-readable kind (`not_found`, `invalid_record`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Numeric [`ErrorCode`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            errors: err.messages(),
            error_type: Some(err.code.error_type().to_string()),
            code: Some(err.code.code()),
        }
    }
}

/// Body returned by delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessBody {
    pub success: String,
}

impl SuccessBody {
    pub fn ok() -> Self {
        Self {
            success: "OK".to_string(),
        }
    }
}

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // 语法正确但结构不符 -> 422
            JsonRejection::JsonDataError(e) => AppError::validation(e.body_text()),
            other => AppError::invalid_request(other.body_text()),
        }
    }
}
