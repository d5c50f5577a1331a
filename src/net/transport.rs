//! Transport seams between widget flows and the HTTP layer.
//!
//! DESIGN
//! ======
//! The submit/refresh/upload sequences in `state` are written against these
//! traits so they run the same way over `net::api` in the browser and over
//! recording fakes in native tests.

use std::future::Future;

use super::error::{ChatError, UploadError};
use super::types::{ChatMessage, UploadProgress};

/// Sink for upload progress notifications.
pub type ProgressSender = futures::channel::mpsc::UnboundedSender<UploadProgress>;

/// Chat history fetch and message submission.
pub trait ChatTransport {
    fn fetch_messages(&self) -> impl Future<Output = Result<Vec<ChatMessage>, ChatError>>;

    fn post_message(&self, text: &str) -> impl Future<Output = Result<(), ChatError>>;
}

/// Single-file upload with a progress side channel.
///
/// Implementations drop `progress` when the returned future completes, which
/// closes the channel.
pub trait UploadTransport {
    type File;

    fn upload(&self, file: &Self::File, progress: ProgressSender) -> impl Future<Output = Result<(), UploadError>>;
}
