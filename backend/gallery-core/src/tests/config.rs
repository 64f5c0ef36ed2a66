use crate::config::AppConfig;
use crate::error::config::ConfigError;
use crate::{DEFAULT_INITIAL_QUERY, UNSPLASH_API_BASE_URL};

use tempfile::TempDir;

/// **VALUE**: Verifies a missing config file yields defaults instead of an error.
///
/// **WHY THIS MATTERS**: First launch never has a config file.
///
/// **BUG THIS CATCHES**: Would catch `load()` treating NotFound as a read error.
#[test]
fn given_missing_config_file_when_loaded_then_returns_defaults() {
    // GIVEN: An empty directory
    let dir = TempDir::new().unwrap();

    // WHEN: Loading
    let config = AppConfig::load(dir.path()).expect("missing file is not an error");

    // THEN: Defaults
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.api.base_url, UNSPLASH_API_BASE_URL);
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.ui.initial_query, DEFAULT_INITIAL_QUERY);
    assert_eq!(config.storage.data_dir, None);
}

/// **VALUE**: Verifies save + load returns the same config.
///
/// **WHY THIS MATTERS**: A broken save would silently reset preferences each launch.
///
/// **BUG THIS CATCHES**: Would catch a temp file left behind instead of renamed.
#[test]
fn given_saved_config_when_loaded_then_matches() {
    // GIVEN: A customized config saved to disk
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.ui.initial_query = String::from("architecture");
    config.storage.data_dir = Some(dir.path().join("data").display().to_string());
    config.save(dir.path()).unwrap();

    // WHEN: Loading it back
    let loaded = AppConfig::load(dir.path()).unwrap();

    // THEN: Same values, no temp file left
    assert_eq!(loaded, config);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn given_partial_config_when_loaded_then_missing_fields_use_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "ui": { "initial_query": "ux design" } }"#,
    )
    .unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config.ui.initial_query, "ux design");
    assert_eq!(config.api.base_url, UNSPLASH_API_BASE_URL);
    assert_eq!(config.version, 1);
}

/// **VALUE**: Verifies corrupted JSON is reported, and `load_or_default` recovers.
///
/// **WHY THIS MATTERS**: A hand-edited config must never keep the app from starting.
///
/// **BUG THIS CATCHES**: Would catch a panic or a propagated error at startup.
#[test]
fn given_corrupted_config_when_loaded_then_parse_error_and_fallback_defaults() {
    // GIVEN: Invalid JSON on disk
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    // WHEN: Loading both ways
    let strict = AppConfig::load(dir.path());
    let lenient = AppConfig::load_or_default(dir.path());

    // THEN: Strict load errors, lenient load falls back
    assert!(matches!(strict, Err(ConfigError::ParseError { .. })));
    assert_eq!(lenient, AppConfig::default());
}

#[test]
fn given_invalid_values_when_validated_then_rejected() {
    let mut bad_url = AppConfig::default();
    bad_url.api.base_url = String::from("ftp://api.unsplash.com");

    let mut bad_timeout = AppConfig::default();
    bad_timeout.api.timeout_secs = 0;

    let mut bad_version = AppConfig::default();
    bad_version.version = 7;

    let mut blank_dir = AppConfig::default();
    blank_dir.storage.data_dir = Some(String::from("  "));

    for config in [bad_url, bad_timeout, bad_version, blank_dir] {
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "{config:?} should fail validation"
        );
    }
}

#[test]
fn given_data_dir_override_when_resolving_then_override_wins() {
    let mut config = AppConfig::default();
    config.storage.data_dir = Some(String::from("/tmp/gallery-data"));

    assert_eq!(
        config.data_dir(),
        Some(std::path::PathBuf::from("/tmp/gallery-data"))
    );
}
