use gallery_core::error::{CoreError, SearchError, StorageError};
use gallery_core::{KeyValueStore, MemoryStore};

/// **VALUE**: Verifies constructor-built errors point at the calling line.
///
/// **WHY THIS MATTERS**: Log lines are the only diagnostics a TUI user can send us.
///
/// **BUG THIS CATCHES**: Would catch a dropped `#[track_caller]` reporting the
/// constructor's own file instead of the call site.
#[test]
fn given_search_error_constructor_when_formatted_then_location_is_call_site() {
    // GIVEN
    let expected_line = line!() + 1;
    let error = SearchError::from_status(429, "Rate Limit Exceeded");

    // WHEN
    let text = error.to_string();

    // THEN
    assert!(text.starts_with("Status Error: HTTP 429"), "got {text}");
    assert!(text.contains("Rate Limit Exceeded"));
    assert!(text.contains("formatting.rs"));
    assert!(text.contains(&format!(":{expected_line}:")));
    assert_eq!(error.error_category(), "rate_limited");
}

#[test]
fn given_missing_credential_when_wrapped_in_core_error_then_message_transparent() {
    let error: CoreError = SearchError::missing_credential().into();

    let text = error.to_string();

    assert!(text.starts_with("Missing Credential Error"));
    assert!(text.contains("formatting.rs"));
}

#[test]
fn given_invalid_storage_key_when_set_then_invalid_key_error() {
    let mut store = MemoryStore::new();

    let error = store.set("../escape", "[]").unwrap_err();

    assert!(matches!(error, StorageError::InvalidKey { .. }));
}
