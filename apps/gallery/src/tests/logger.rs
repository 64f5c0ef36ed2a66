// Unit tests for logger initialization
// Tests focus on idempotence and error handling

use crate::error::GalleryError;
use crate::logger::{LOG_FILE_NAME, file_dispatch, initialize};

use std::path::PathBuf;

use tempfile::TempDir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Logger initialization can be reached from more than one
/// path (startup, tests). A second call must not crash the app.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when setting a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = TempDir::new().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path());
    let result2 = initialize(temp_dir.path());

    // THEN: The second call is a no-op
    assert!(result2.is_ok(), "Second initialization should succeed (idempotent)");
    if result1.is_ok() {
        assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
    }
}

/// **VALUE**: Verifies an unusable log directory is reported, not panicked on.
///
/// **WHY THIS MATTERS**: A read-only or bogus data directory must produce a clear
/// startup error.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` being unwrapped.
#[test]
fn given_invalid_log_dir_when_building_dispatch_then_returns_error() {
    // GIVEN: A path that cannot hold a file on Unix-like systems
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN
    let result = file_dispatch(&invalid_dir);

    // THEN
    let err = result.err().expect("log file creation should fail");
    assert!(matches!(err, GalleryError::Gallery { .. }));
    assert!(err.to_string().contains("Failed to create log file"));
}

#[test]
fn given_writable_dir_when_building_dispatch_then_log_file_created() {
    let temp_dir = TempDir::new().unwrap();

    let result = file_dispatch(temp_dir.path());

    assert!(result.is_ok());
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}
