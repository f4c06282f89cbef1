//! Configuration loader tests
//!
//! Each test that touches the environment uses its own variable prefix so the
//! tests can run in parallel.

use sfe_infrastructure::config::{AppConfig, CacheProviderKind, ConfigLoader};
use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to set env var
fn set_env(key: &str, value: &str) {
    // SAFETY: keys are unique to the calling test
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var
fn remove_env(key: &str) {
    // SAFETY: keys are unique to the calling test
    unsafe {
        env::remove_var(key);
    }
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("sfe.toml");
    fs::write(&path, contents).unwrap();
    path
}

fn loader_for(path: &Path, prefix: &str) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_prefix(prefix)
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let loader = loader_for(&dir.path().join("absent.toml"), "SFE_TEST_DEFAULTS");

    let config = loader.load().unwrap();

    assert_eq!(config, AppConfig::default());
    assert!(config.sentry.event_filtering.messages.is_none());
    assert!(
        config
            .sentry
            .event_filtering
            .default_messages_external_location
            .is_empty()
    );
    assert!(!config.http.verify_tls);
    assert_eq!(config.http.timeout_secs, 10);
}

#[test]
fn test_toml_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[sentry.event_filtering]
messages = [{ message = "Deadlock found" }]
default_messages_external_location = "https://rules.example/sentry-filter.json"
discard_unparseable_defaults = true

[logging]
level = "debug"

[cache]
provider = "null"
"#,
    );

    let config = loader_for(&path, "SFE_TEST_TOML").load().unwrap();

    let filtering = &config.sentry.event_filtering;
    assert_eq!(
        filtering.messages,
        Some(serde_json::json!([{ "message": "Deadlock found" }]))
    );
    assert_eq!(
        filtering.default_messages_external_location,
        "https://rules.example/sentry-filter.json"
    );
    assert!(filtering.discard_unparseable_defaults);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.cache.provider, CacheProviderKind::Null);
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[logging]
level = "debug"
"#,
    );
    set_env("SFE_TEST_ENV__LOGGING__LEVEL", "warn");
    set_env(
        "SFE_TEST_ENV__SENTRY__EVENT_FILTERING__DEFAULT_MESSAGES_EXTERNAL_LOCATION",
        "https://rules.example/env.json",
    );

    let config = loader_for(&path, "SFE_TEST_ENV").load();

    remove_env("SFE_TEST_ENV__LOGGING__LEVEL");
    remove_env("SFE_TEST_ENV__SENTRY__EVENT_FILTERING__DEFAULT_MESSAGES_EXTERNAL_LOCATION");

    let config = config.unwrap();
    assert_eq!(config.logging.level, "warn");
    assert_eq!(
        config.sentry.event_filtering.default_messages_external_location,
        "https://rules.example/env.json"
    );
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nlevel = \"loud\"\n");

    assert!(loader_for(&path, "SFE_TEST_LEVEL").load().is_err());
}

#[test]
fn test_zero_timeout_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[http]\ntimeout_secs = 0\n");

    assert!(loader_for(&path, "SFE_TEST_TIMEOUT").load().is_err());
}

#[test]
fn test_non_http_location_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[sentry.event_filtering]\ndefault_messages_external_location = \"ftp://rules.example/list\"\n",
    );

    assert!(loader_for(&path, "SFE_TEST_LOCATION").load().is_err());
}

#[test]
fn test_zero_cache_size_only_matters_for_moka() {
    let dir = TempDir::new().unwrap();
    let moka = write_config(&dir, "[cache]\nprovider = \"moka\"\nmax_size = 0\n");
    assert!(loader_for(&moka, "SFE_TEST_CACHE").load().is_err());

    let null = write_config(&dir, "[cache]\nprovider = \"null\"\nmax_size = 0\n");
    assert!(loader_for(&null, "SFE_TEST_CACHE").load().is_ok());
}

#[test]
fn test_saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let loader = loader_for(&path, "SFE_TEST_SAVE");

    let mut config = AppConfig::default();
    config.sentry.event_filtering.messages = Some(serde_json::json!([{ "message": "Timeout" }]));
    config.sentry.event_filtering.default_messages_external_location =
        "https://rules.example/list.json".to_string();
    config.logging.json_format = true;

    loader.save_to_file(&config, &path).unwrap();

    assert_eq!(loader.load().unwrap(), config);
}
