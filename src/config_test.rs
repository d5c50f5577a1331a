use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_targets_upload_and_chat_routes() {
    let config = ClientConfig::default();
    assert_eq!(config.upload_url, "/upload");
    assert_eq!(config.chat_url, "/chat");
}

#[test]
fn default_poll_interval_is_five_seconds() {
    assert_eq!(ClientConfig::default().poll_interval, Duration::from_secs(5));
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn with_urls_replace_endpoints() {
    let config = ClientConfig::default()
        .with_upload_url("/api/files")
        .with_chat_url("/api/chat");
    assert_eq!(config.upload_url, "/api/files");
    assert_eq!(config.chat_url, "/api/chat");
}

#[test]
fn with_poll_interval_clamps_zero() {
    let config = ClientConfig::default().with_poll_interval(Duration::ZERO);
    assert_eq!(config.poll_interval, Duration::from_secs(1));
}

#[test]
fn with_poll_interval_keeps_longer_values() {
    let config = ClientConfig::default().with_poll_interval(Duration::from_secs(30));
    assert_eq!(config.poll_interval, Duration::from_secs(30));
}

#[test]
fn element_ids_match_page_markup() {
    assert_eq!(ids::UPLOAD_FORM, "uploadForm");
    assert_eq!(ids::FILE_INPUT, "fileElem");
    assert_eq!(ids::CHAT_MESSAGES, "chatMessages");
}
