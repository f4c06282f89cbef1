//! Figment configuration value tests

use sfe_domain::constants::{
    CONFIG_PATH_DEFAULT_MESSAGES_LOCATION, CONFIG_PATH_DISCARD_UNPARSEABLE_DEFAULTS,
    CONFIG_PATH_MESSAGES,
};
use sfe_domain::ports::ConfigValueProvider;
use sfe_domain::value_objects::{FilterRule, parse_rule_list};
use sfe_infrastructure::config::{ConfigLoader, FigmentConfigProvider};
use std::fs;
use tempfile::TempDir;

fn provider_for(dir: &TempDir, contents: &str) -> (FigmentConfigProvider, std::path::PathBuf) {
    let path = dir.path().join("sfe.toml");
    fs::write(&path, contents).unwrap();
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SFE_TEST_VALUES");
    (FigmentConfigProvider::new(loader), path)
}

#[test]
fn test_string_value_is_returned_verbatim() {
    let dir = TempDir::new().unwrap();
    let (provider, _) = provider_for(
        &dir,
        r#"
[sentry.event_filtering]
messages = '[{"message":"Foo bar"}]'
"#,
    );

    assert_eq!(
        provider.get_value(CONFIG_PATH_MESSAGES).unwrap().as_deref(),
        Some(r#"[{"message":"Foo bar"}]"#)
    );
}

#[test]
fn test_inline_rules_are_serialized_as_json() {
    let dir = TempDir::new().unwrap();
    let (provider, _) = provider_for(
        &dir,
        r#"
[sentry.event_filtering]
messages = [{ message = "Foo bar" }, { message = "Deadlock" }]
"#,
    );

    let serialized = provider.get_value(CONFIG_PATH_MESSAGES).unwrap().unwrap();

    assert_eq!(
        parse_rule_list(&serialized).unwrap(),
        vec![FilterRule::new("Foo bar"), FilterRule::new("Deadlock")]
    );
}

#[test]
fn test_unset_value_is_none() {
    let dir = TempDir::new().unwrap();
    let (provider, _) = provider_for(&dir, "");

    assert_eq!(provider.get_value(CONFIG_PATH_MESSAGES).unwrap(), None);
    assert_eq!(provider.get_value("sentry/unknown/path").unwrap(), None);
}

#[test]
fn test_default_location_is_blank() {
    let dir = TempDir::new().unwrap();
    let (provider, _) = provider_for(&dir, "");

    let location = provider
        .get_value(CONFIG_PATH_DEFAULT_MESSAGES_LOCATION)
        .unwrap()
        .unwrap_or_default();
    assert!(location.trim().is_empty());
}

#[test]
fn test_boolean_flag() {
    let dir = TempDir::new().unwrap();
    let (provider, _) = provider_for(
        &dir,
        "[sentry.event_filtering]\ndiscard_unparseable_defaults = true\n",
    );

    assert!(
        provider
            .is_set_flag(CONFIG_PATH_DISCARD_UNPARSEABLE_DEFAULTS)
            .unwrap()
    );
}

#[test]
fn test_values_are_read_fresh() {
    let dir = TempDir::new().unwrap();
    let (provider, path) = provider_for(
        &dir,
        "[sentry.event_filtering]\nmessages = '[{\"message\":\"First\"}]'\n",
    );
    assert_eq!(
        provider.get_value(CONFIG_PATH_MESSAGES).unwrap().as_deref(),
        Some(r#"[{"message":"First"}]"#)
    );

    fs::write(
        &path,
        "[sentry.event_filtering]\nmessages = '[{\"message\":\"Second\"}]'\n",
    )
    .unwrap();

    assert_eq!(
        provider.get_value(CONFIG_PATH_MESSAGES).unwrap().as_deref(),
        Some(r#"[{"message":"Second"}]"#)
    );
}
