//! Client configuration and fixed DOM identifiers.
//!
//! DESIGN
//! ======
//! Endpoints and the poll cadence are plain data provided through Leptos
//! context, so widgets never hard-code URLs. Element ids are fixed because
//! external stylesheets and page markup target them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Default upload endpoint.
pub const DEFAULT_UPLOAD_URL: &str = "/upload";
/// Default chat endpoint (GET for history, POST for new messages).
pub const DEFAULT_CHAT_URL: &str = "/chat";
/// Default interval between chat refreshes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Fixed element identifiers rendered by the widgets.
pub mod ids {
    pub const UPLOAD_FORM: &str = "uploadForm";
    pub const FILE_INPUT: &str = "fileElem";
    pub const STATUS: &str = "message";
    pub const PREVIEW: &str = "preview";
    pub const PROGRESS_BAR: &str = "progressBar";
    pub const CHAT_FORM: &str = "chatForm";
    pub const CHAT_INPUT: &str = "chatInput";
    pub const CHAT_MESSAGES: &str = "chatMessages";
}

/// Runtime configuration shared by both widgets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Multipart upload target.
    pub upload_url: String,
    /// Chat history / submission endpoint.
    pub chat_url: String,
    /// Cadence of the background chat refresh.
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            upload_url: DEFAULT_UPLOAD_URL.to_owned(),
            chat_url: DEFAULT_CHAT_URL.to_owned(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = url.into();
        self
    }

    #[must_use]
    pub fn with_chat_url(mut self, url: impl Into<String>) -> Self {
        self.chat_url = url.into();
        self
    }

    /// Override the poll cadence. A zero interval is clamped to one second so
    /// the refresh loop cannot spin.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_secs(1));
        self
    }
}
