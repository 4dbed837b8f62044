//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::ColorSchemeNotFound | Self::UserFieldNotFound => {
                StatusCode::NOT_FOUND
            }

            // 409 Conflict
            Self::AlreadyExists => StatusCode::CONFLICT,

            // 422 Unprocessable Entity: record failed model validation
            Self::ValidationFailed
            | Self::ColorSchemeInvalid
            | Self::ColorSchemeNameExists
            | Self::BaseSchemeNotFound
            | Self::UserFieldInvalid
            | Self::UserFieldLimitReached => StatusCode::UNPROCESSABLE_ENTITY,

            // 400 Bad Request: the request itself could not be understood
            Self::InvalidRequest | Self::InvalidFormat => StatusCode::BAD_REQUEST,

            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
