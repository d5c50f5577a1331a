//! Failure taxonomy for the upload and chat calls.
//!
//! ERROR HANDLING
//! ==============
//! `UploadError` renders directly as the status line shown under the upload
//! form, so its `Display` strings are part of the user-visible contract.
//! `ChatError` is never shown; chat handlers log it and carry on.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Terminal failure of an upload submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Please select a file first.")]
    NoFileSelected,
    #[error("Upload failed. ({0})")]
    Rejected(u16),
    #[error("Upload failed (network error).")]
    Network,
}

/// Failure of a chat refresh or post.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Status(u16),
    #[error("chat transport error: {0}")]
    Network(String),
    #[error("chat response decode error: {0}")]
    Decode(String),
}

/// Message shown after a completed upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Upload successful!";

/// Classify a completed upload by its HTTP status.
///
/// # Errors
///
/// Returns `UploadError::Rejected` for any status other than 200.
pub fn classify_upload_status(status: u16) -> Result<(), UploadError> {
    if status == 200 { Ok(()) } else { Err(UploadError::Rejected(status)) }
}
