//! Unified error codes for the admin service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Color scheme errors
//! - 2xxx: User field errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that both the server
/// and the client can exchange them without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Color scheme ====================
    /// Color scheme not found
    ColorSchemeNotFound = 1001,
    /// Color scheme failed validation
    ColorSchemeInvalid = 1002,
    /// Color scheme name already taken
    ColorSchemeNameExists = 1003,
    /// Referenced built-in palette does not exist
    BaseSchemeNotFound = 1004,

    // ==================== 2xxx: User field ====================
    /// User field not found
    UserFieldNotFound = 2001,
    /// User field failed validation
    UserFieldInvalid = 2002,
    /// Too many user fields
    UserFieldLimitReached = 2003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",

            ErrorCode::ColorSchemeNotFound => "Color scheme not found",
            ErrorCode::ColorSchemeInvalid => "Color scheme is invalid",
            ErrorCode::ColorSchemeNameExists => "Color scheme name has already been taken",
            ErrorCode::BaseSchemeNotFound => "Base color scheme does not exist",

            ErrorCode::UserFieldNotFound => "User field not found",
            ErrorCode::UserFieldInvalid => "User field is invalid",
            ErrorCode::UserFieldLimitReached => "Maximum number of user fields reached",

            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }

    /// Short machine-readable error kind, rendered as `error_type` in error bodies
    pub const fn error_type(&self) -> &'static str {
        match self {
            ErrorCode::Success => "ok",
            ErrorCode::NotFound | ErrorCode::ColorSchemeNotFound | ErrorCode::UserFieldNotFound => {
                "not_found"
            }
            ErrorCode::AlreadyExists => "conflict",
            ErrorCode::InvalidRequest | ErrorCode::InvalidFormat => "invalid_parameters",
            ErrorCode::ValidationFailed
            | ErrorCode::ColorSchemeInvalid
            | ErrorCode::ColorSchemeNameExists
            | ErrorCode::BaseSchemeNotFound
            | ErrorCode::UserFieldInvalid
            | ErrorCode::UserFieldLimitReached => "invalid_record",
            ErrorCode::InternalError | ErrorCode::DatabaseError => "server_error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),

            1001 => Ok(ErrorCode::ColorSchemeNotFound),
            1002 => Ok(ErrorCode::ColorSchemeInvalid),
            1003 => Ok(ErrorCode::ColorSchemeNameExists),
            1004 => Ok(ErrorCode::BaseSchemeNotFound),

            2001 => Ok(ErrorCode::UserFieldNotFound),
            2002 => Ok(ErrorCode::UserFieldInvalid),
            2003 => Ok(ErrorCode::UserFieldLimitReached),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
