//! UI seams used by the field manager
//!
//! The client library never renders anything itself. A UI layer implements
//! these traits; tests script them.

use async_trait::async_trait;

use crate::ClientError;

/// Yes/no confirmation prompt
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    /// Show `message` and resolve to `true` when the user confirms
    async fn yes_no_confirm(&self, message: &str) -> bool;
}

/// Surface an error to the user
pub trait ErrorPopup: Send + Sync {
    fn popup(&self, error: &ClientError);
}

/// Popup that only logs, for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct LogErrorPopup;

impl ErrorPopup for LogErrorPopup {
    fn popup(&self, error: &ClientError) {
        tracing::warn!(error = %error, "{}", error.user_message());
    }
}
