//! Form body encoding and small display formatters.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Form field carrying the chat text.
pub const MESSAGE_FIELD: &str = "message";
/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";
/// Content type of the chat submission body.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Build the `application/x-www-form-urlencoded` body for a chat submission.
pub fn encode_message_body(text: &str) -> String {
    format!("{MESSAGE_FIELD}={}", urlencoding::encode(text))
}

/// Whether a MIME type gets an inline image preview.
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// CSS width value for the progress bar.
pub fn progress_width(percent: f64) -> String {
    format!("{percent}%")
}

/// Bracketed timestamp prefix for a chat line.
pub fn timestamp_label(timestamp: &str) -> String {
    format!("[{timestamp}]")
}
