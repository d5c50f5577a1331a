//! UI components for the two page widgets.

pub mod chat_widget;
pub mod upload_widget;
