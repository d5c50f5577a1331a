#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::store::Store;
use crate::net::error::ChatError;
use crate::net::transport::ChatTransport;
use crate::net::types::ChatMessage;

/// State for the chat widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Transcript as last returned by the server.
    pub messages: Vec<ChatMessage>,
    /// Current contents of the chat input.
    pub draft: String,
    /// Incremented on every successful refresh; drives scroll-to-bottom even
    /// when the new list equals the old one.
    pub render_seq: u64,
}

impl ChatState {
    /// Apply the result of a refresh. Failures leave the transcript
    /// untouched. Returns whether the list was replaced.
    pub fn apply_refresh(&mut self, result: Result<Vec<ChatMessage>, ChatError>) -> bool {
        match result {
            Ok(messages) => {
                self.messages = messages;
                self.render_seq += 1;
                true
            }
            Err(e) => {
                log::debug!("chat refresh skipped: {e}");
                false
            }
        }
    }

    /// Trimmed draft text to submit, or `None` if it is blank.
    pub fn submission(&self) -> Option<String> {
        let text = self.draft.trim();
        if text.is_empty() { None } else { Some(text.to_owned()) }
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }
}

/// Fetch the transcript once and apply it. Returns whether the list was
/// replaced.
pub async fn refresh<S, T>(store: &S, transport: &T) -> bool
where
    S: Store<ChatState>,
    T: ChatTransport,
{
    let result = transport.fetch_messages().await;
    store.modify(|c| c.apply_refresh(result)) == Some(true)
}

/// Submit the current draft: post it, clear the input, then refresh once.
///
/// A blank draft sends nothing and leaves the input alone. The post outcome
/// is logged and otherwise ignored. Returns whether anything was posted.
pub async fn submit<S, T>(store: &S, transport: &T) -> bool
where
    S: Store<ChatState>,
    T: ChatTransport,
{
    let Some(text) = store.peek(ChatState::submission).flatten() else {
        return false;
    };
    if let Err(e) = transport.post_message(&text).await {
        log::warn!("chat post failed: {e}");
    }
    store.modify(ChatState::clear_draft);
    refresh(store, transport).await;
    true
}
