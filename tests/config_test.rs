//! Tests for config module

use std::path::Path;

use prompt_boost::config::{Config, LogLevel, DEFAULT_CONFIG_FILE};

#[test]
fn test_default_config_values() {
    let config = Config::default();

    assert!(config.enabled_enhancers.is_empty());
    assert_eq!(config.default_context_depth, 3);
    assert_eq!(config.default_example_count, 2);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.context_template.contains("{{CONTEXT}}"));
    assert!(config.context_template.contains("{{PROMPT}}"));
    assert!(config.example_template.contains("{{EXAMPLES}}"));
    assert!(config.instruction_template.contains("{{INSTRUCTIONS}}"));
}

#[test]
fn test_default_config_file_name() {
    assert_eq!(DEFAULT_CONFIG_FILE, "prompt-boost-config.json");
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let (config, warning) = Config::load(Some(&path));

    assert!(warning.is_none());
    assert_eq!(config.default_context_depth, 3);
}

#[test]
fn test_load_partial_file_merges_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"defaultExampleCount": 4, "enabledEnhancers": ["context"]}"#,
    )
    .unwrap();

    let (config, warning) = Config::load(Some(&path));

    assert!(warning.is_none());
    assert_eq!(config.default_example_count, 4);
    assert_eq!(config.enabled_enhancers, vec!["context"]);
    // untouched fields keep their defaults
    assert_eq!(config.default_context_depth, 3);
    assert!(config.context_template.contains("{{CONTEXT}}"));
}

#[test]
fn test_load_log_level_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"logLevel": "debug"}"#).unwrap();

    let (config, _) = Config::load(Some(&path));

    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.as_str(), "debug");
}

#[test]
fn test_load_malformed_file_falls_back_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not valid json").unwrap();

    let (config, warning) = Config::load(Some(&path));

    assert!(warning.is_some());
    assert!(warning.unwrap().contains("default configuration"));
    assert_eq!(config.default_context_depth, 3);
}

#[test]
fn test_load_unknown_fields_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"someFutureSetting": true}"#).unwrap();

    let (config, warning) = Config::load(Some(&path));

    assert!(warning.is_none());
    assert_eq!(config.default_example_count, 2);
}

#[test]
fn test_load_wrong_type_falls_back_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"defaultExampleCount": "lots"}"#).unwrap();

    let (config, warning) = Config::load(Some(&path));

    assert!(warning.is_some());
    assert_eq!(config.default_example_count, 2);
}

#[test]
fn test_save_and_reload_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        enabled_enhancers: vec!["example".to_string()],
        default_example_count: 5,
        log_level: LogLevel::Warn,
        ..Config::default()
    };
    config.save(&path).unwrap();

    let (reloaded, warning) = Config::load(Some(&path));

    assert!(warning.is_none());
    assert_eq!(reloaded.enabled_enhancers, vec!["example"]);
    assert_eq!(reloaded.default_example_count, 5);
    assert_eq!(reloaded.log_level, LogLevel::Warn);
}

#[test]
fn test_save_writes_camel_case_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    Config::default().save(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("\"enabledEnhancers\""));
    assert!(content.contains("\"defaultContextDepth\""));
    assert!(content.contains("\"logLevel\""));
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let config = Config::default();
    let result = config.save(Path::new("/nonexistent-dir/config.json"));

    assert!(result.is_err());
}
