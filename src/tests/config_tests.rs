//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{to_toml, ConfigLoader, NiihauConfig, Validate};
use crate::data_structures::prefix_trie::{CompletionOrder, MatchPolicy};
use crate::error::config::ConfigError;
use crate::tests::test_utils::TestFixture;
use crate::vocabulary::VocabularyFormat;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = NiihauConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.trie.match_policy, MatchPolicy::StopAtDivergence);
    assert_eq!(config.trie.completion_order, CompletionOrder::Unordered);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = NiihauConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.vocabulary.path = Some(PathBuf::from("words.unknown"));
    assert!(config.validate().is_err());

    // An explicit format makes any extension acceptable
    config.vocabulary.format = Some(VocabularyFormat::Lines);
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    std::env::remove_var("TEST_FILE__TRIE__MATCH_POLICY");

    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_file_test.toml",
            r#"
    [trie]
    match_policy = "longest_terminal"

    [vocabulary]
    path = "routes.json"
    "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_FILE").load().unwrap();

    assert_eq!(config.trie.match_policy, MatchPolicy::LongestTerminal);
    assert_eq!(config.vocabulary.path, Some(PathBuf::from("routes.json")));

    // Other values should be defaults
    assert_eq!(config.trie.completion_order, CompletionOrder::Unordered);
    assert!(config.vocabulary.skip_blank_lines);
    assert_eq!(config.log.level, "warn");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_env_test.json",
            r#"{ "trie": { "completion_order": "unordered" } }"#,
        )
        .unwrap();

    std::env::set_var("TEST_ENV__TRIE__COMPLETION_ORDER", "sorted");
    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load();
    std::env::remove_var("TEST_ENV__TRIE__COMPLETION_ORDER");

    assert_eq!(config.unwrap().trie.completion_order, CompletionOrder::Sorted);
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_config_file() {
    let loader = ConfigLoader::new(Some("/nonexistent/niihau.toml"), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

/// Test that unsupported extensions are rejected before parsing.
#[test]
fn test_unsupported_config_format() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.write_file("niihau.ini", "[trie]").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INI");
    assert!(matches!(loader.load(), Err(ConfigError::UnsupportedFormat(_))));
}

/// Test that an invalid value in a file fails validation.
#[test]
fn test_invalid_file_value_fails_validation() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("config_invalid.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ValidationError(_))));
}

/// Test that the generated default configuration loads back unchanged.
#[test]
fn test_generated_config_loads_back() {
    let fixture = TestFixture::new().unwrap();
    let rendered = to_toml(&NiihauConfig::default()).unwrap();
    let config_path = fixture.write_file("generated.toml", rendered).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_GENERATED").load().unwrap();
    assert_eq!(config.trie, NiihauConfig::default().trie);
    assert_eq!(config.log.level, "warn");
}
