//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error, one message per failed check
    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The field manager already holds the maximum number of fields
    #[error("Field limit reached ({0})")]
    FieldLimitReached(usize),

    /// No field with this key in the field manager
    #[error("Unknown field")]
    UnknownField,
}

impl ClientError {
    /// Text suitable for an error popup
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(errors) => errors.join("\n"),
            ClientError::NotFound(msg)
            | ClientError::Forbidden(msg)
            | ClientError::Internal(msg) => msg.clone(),
            ClientError::Unauthorized => "You need to be logged in to do that.".to_string(),
            ClientError::FieldLimitReached(max) => {
                format!("You can only have {max} user fields")
            }
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_error() {
        let err = ClientError::Validation(vec![
            "Name can't be blank".to_string(),
            "Color 'primary' hex is invalid".to_string(),
        ]);
        assert_eq!(
            err.user_message(),
            "Name can't be blank\nColor 'primary' hex is invalid"
        );
    }

    #[test]
    fn test_field_limit_message() {
        assert_eq!(
            ClientError::FieldLimitReached(30).user_message(),
            "You can only have 30 user fields"
        );
    }
}
