//! Wire DTOs for the chat endpoint and upload progress notifications.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// A single chat line as returned by `GET /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatMessage {
    /// Server-formatted timestamp, rendered verbatim inside brackets.
    pub timestamp: String,
    /// Message body.
    pub message: String,
}

/// Response body of `GET /chat`, ordered for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatHistory {
    pub messages: Vec<ChatMessage>,
}

/// One upload progress notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadProgress {
    /// Bytes sent so far.
    pub loaded: u64,
    /// Total bytes, when the browser can compute it.
    pub total: Option<u64>,
}

impl UploadProgress {
    /// Percentage of bytes sent, or `None` when the total is unknown or zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(self) -> Option<f64> {
        match self.total {
            Some(total) if total > 0 => Some((self.loaded as f64 / total as f64) * 100.0),
            _ => None,
        }
    }
}
