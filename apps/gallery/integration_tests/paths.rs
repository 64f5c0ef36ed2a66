use gallery::paths::log_dir_under;

use gallery_core::APP_DIR_NAME;

use tempfile::TempDir;

#[test]
fn given_fresh_base_dir_when_resolving_log_dir_then_created_under_app_dir() {
    // GIVEN
    let base = TempDir::new().unwrap();

    // WHEN
    let log_dir = log_dir_under(base.path()).unwrap();

    // THEN
    assert!(log_dir.is_dir());
    assert!(log_dir.starts_with(base.path().join(APP_DIR_NAME)));
}

#[test]
fn given_base_is_a_file_when_resolving_log_dir_then_gallery_error() {
    let base = TempDir::new().unwrap();
    let file = base.path().join("not-a-dir");
    std::fs::write(&file, "x").unwrap();

    let err = log_dir_under(&file).unwrap_err();

    assert!(err.to_string().starts_with("Gallery Error: Failed to create log directory"));
}
