// Tests for connector configuration loading

use silentpush_core::config::{ConfigError, ConnectorConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("config.json");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "server_url": "https://sp.internal/api/v1/merge-api/",
            "api_key": "abc123",
            "verify_server_cert": false,
            "timeout_secs": 12
        }"#,
    );

    let config = ConnectorConfig::load(&path).unwrap();
    assert_eq!(config.server_url, "https://sp.internal/api/v1/merge-api/");
    assert_eq!(config.api_key.as_deref(), Some("abc123"));
    assert!(!config.verify_server_cert);
    assert_eq!(config.timeout_secs, 12);
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"api_key": "abc123"}"#);

    let config = ConnectorConfig::load(&path).unwrap();
    let defaults = ConnectorConfig::default();
    assert_eq!(config.server_url, defaults.server_url);
    assert_eq!(config.timeout_secs, defaults.timeout_secs);
    assert!(config.verify_server_cert);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    let err = ConnectorConfig::load(&path.to_string_lossy()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));

    let config = ConnectorConfig::load_or_default(&path.to_string_lossy()).unwrap();
    assert_eq!(config, ConnectorConfig::default());
}

#[test]
fn test_load_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ not json");

    let err = ConnectorConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.json"));
}

#[test]
fn test_client_config_api_key_precedence() {
    let config = ConnectorConfig {
        api_key: Some("from-file".into()),
        timeout_secs: 7,
        ..ConnectorConfig::default()
    };

    let client = config.to_client_config(None).unwrap();
    assert_eq!(client.api_key, "from-file");
    assert_eq!(client.timeout_secs, 7);

    let client = config.to_client_config(Some("from-env")).unwrap();
    assert_eq!(client.api_key, "from-env");
}

#[test]
fn test_client_config_requires_api_key() {
    let config = ConnectorConfig::default();
    assert!(matches!(
        config.to_client_config(None),
        Err(ConfigError::MissingApiKey)
    ));
    assert!(matches!(
        config.to_client_config(Some("   ")),
        Err(ConfigError::MissingApiKey)
    ));
}

#[test]
fn test_load_errors_name_the_expanded_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-config.json");

    let err = ConnectorConfig::load(&path.to_string_lossy()).unwrap_err();
    match err {
        ConfigError::Io { path: shown, .. } => assert!(shown.ends_with("missing-config.json")),
        other => panic!("expected io error, got {:?}", other),
    }
}
