use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn msg(timestamp: &str, message: &str) -> ChatMessage {
    ChatMessage { timestamp: timestamp.to_owned(), message: message.to_owned() }
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.draft.is_empty());
    assert_eq!(state.render_seq, 0);
}

// =============================================================
// Refresh
// =============================================================

#[test]
fn successful_refresh_replaces_whole_list() {
    let mut state = ChatState { messages: vec![msg("09:00", "old")], ..Default::default() };
    assert!(state.apply_refresh(Ok(vec![msg("12:00", "hi"), msg("12:01", "there")])));
    assert_eq!(state.messages, vec![msg("12:00", "hi"), msg("12:01", "there")]);
    assert_eq!(state.render_seq, 1);
}

#[test]
fn identical_refresh_still_bumps_render_seq() {
    let mut state = ChatState::default();
    state.apply_refresh(Ok(vec![msg("12:00", "hi")]));
    state.apply_refresh(Ok(vec![msg("12:00", "hi")]));
    assert_eq!(state.render_seq, 2);
}

#[test]
fn failed_refresh_leaves_list_unchanged() {
    let mut state = ChatState::default();
    state.apply_refresh(Ok(vec![msg("12:00", "hi")]));
    assert!(!state.apply_refresh(Err(ChatError::Status(500))));
    assert!(!state.apply_refresh(Err(ChatError::Network("offline".to_owned()))));
    assert!(!state.apply_refresh(Err(ChatError::Decode("bad json".to_owned()))));
    assert_eq!(state.messages, vec![msg("12:00", "hi")]);
    assert_eq!(state.render_seq, 1);
}

#[test]
fn empty_refresh_clears_list() {
    let mut state = ChatState { messages: vec![msg("12:00", "hi")], ..Default::default() };
    assert!(state.apply_refresh(Ok(Vec::new())));
    assert!(state.messages.is_empty());
}

#[test]
fn later_response_wins_regardless_of_request_order() {
    let mut state = ChatState::default();
    state.apply_refresh(Ok(vec![msg("12:00", "a"), msg("12:01", "b")]));
    state.apply_refresh(Ok(vec![msg("12:00", "a")]));
    assert_eq!(state.messages, vec![msg("12:00", "a")]);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn blank_draft_is_not_submitted() {
    let state = ChatState { draft: "   \t\n".to_owned(), ..Default::default() };
    assert_eq!(state.submission(), None);
    assert_eq!(state.draft, "   \t\n");
}

#[test]
fn empty_draft_is_not_submitted() {
    assert_eq!(ChatState::default().submission(), None);
}

#[test]
fn draft_is_trimmed_for_submission() {
    let state = ChatState { draft: "  hello world \n".to_owned(), ..Default::default() };
    assert_eq!(state.submission().as_deref(), Some("hello world"));
}

#[test]
fn clear_draft_empties_input() {
    let mut state = ChatState { draft: "hello".to_owned(), ..Default::default() };
    state.clear_draft();
    assert!(state.draft.is_empty());
}

// =============================================================
// submit / refresh flows
// =============================================================

/// Fake transport that logs each call together with the draft visible at
/// that moment.
struct RecordingChat {
    state: Rc<RefCell<ChatState>>,
    calls: RefCell<Vec<String>>,
    post_result: Result<(), ChatError>,
    fetch_result: Result<Vec<ChatMessage>, ChatError>,
}

impl RecordingChat {
    fn new(state: &Rc<RefCell<ChatState>>) -> Self {
        Self {
            state: Rc::clone(state),
            calls: RefCell::new(Vec::new()),
            post_result: Ok(()),
            fetch_result: Ok(vec![msg("12:00", "hi")]),
        }
    }
}

impl ChatTransport for RecordingChat {
    fn fetch_messages(&self) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, ChatError>> {
        let draft = self.state.borrow().draft.clone();
        self.calls.borrow_mut().push(format!("get(draft={draft})"));
        let result = self.fetch_result.clone();
        async move { result }
    }

    fn post_message(&self, text: &str) -> impl std::future::Future<Output = Result<(), ChatError>> {
        self.calls.borrow_mut().push(format!("post:{text}"));
        let result = self.post_result.clone();
        async move { result }
    }
}

fn drafted(text: &str) -> Rc<RefCell<ChatState>> {
    Rc::new(RefCell::new(ChatState { draft: text.to_owned(), ..Default::default() }))
}

#[test]
fn submit_posts_then_clears_then_refreshes() {
    let store = drafted("hi");
    let chat = RecordingChat::new(&store);
    assert!(block_on(submit(&*store, &chat)));
    assert_eq!(*chat.calls.borrow(), ["post:hi", "get(draft=)"]);
    assert_eq!(store.borrow().messages, vec![msg("12:00", "hi")]);
}

#[test]
fn failed_post_still_clears_and_refreshes() {
    let store = drafted("hi");
    let chat = RecordingChat { post_result: Err(ChatError::Status(500)), ..RecordingChat::new(&store) };
    assert!(block_on(submit(&*store, &chat)));
    assert_eq!(*chat.calls.borrow(), ["post:hi", "get(draft=)"]);
    assert!(store.borrow().draft.is_empty());
    assert_eq!(store.borrow().render_seq, 1);
}

#[test]
fn submit_posts_trimmed_text() {
    let store = drafted("  hello world \n");
    let chat = RecordingChat::new(&store);
    block_on(submit(&*store, &chat));
    assert_eq!(chat.calls.borrow()[0], "post:hello world");
}

#[test]
fn blank_submit_makes_no_requests() {
    let store = drafted("   ");
    let chat = RecordingChat::new(&store);
    assert!(!block_on(submit(&*store, &chat)));
    assert!(chat.calls.borrow().is_empty());
    assert_eq!(store.borrow().draft, "   ");
}

#[test]
fn failed_refresh_keeps_transcript() {
    let store = Rc::new(RefCell::new(ChatState { messages: vec![msg("09:00", "old")], ..Default::default() }));
    let chat = RecordingChat { fetch_result: Err(ChatError::Network("offline".to_owned())), ..RecordingChat::new(&store) };
    assert!(!block_on(refresh(&*store, &chat)));
    assert_eq!(store.borrow().messages, vec![msg("09:00", "old")]);
    assert_eq!(store.borrow().render_seq, 0);
}
