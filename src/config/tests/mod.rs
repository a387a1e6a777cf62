//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]

use crate::config::{Config, IndicatorConfig};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, "info");
    assert_eq!(config.indicator.probe_url, "https://test.nextdns.io");
    assert_eq!(config.indicator.expected_provider, "nextdns");
    assert_eq!(config.indicator.confirmed_status, "ok");
    assert!(config.indicator.secure_protocols.iter().any(|p| p == "DOH"));
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[indicator]"));
    assert!(toml_str.contains("probe_url"));
}

#[test]
fn config_deserialize_partial_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [indicator]
        expected_provider = "mullvad"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, "debug");
    assert_eq!(config.indicator.expected_provider, "mullvad");
    // Untouched fields keep their defaults.
    assert_eq!(config.indicator.probe_url, "https://test.nextdns.io");
    assert_eq!(config.indicator.probe_timeout_secs, 10);
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config::default();

    let toml_str = toml::to_string(&original).unwrap();

    let deserialized: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(format!("{original:?}"), format!("{deserialized:?}"));
}

#[test]
fn config_empty_toml() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.general.log_level, "info");
    assert_eq!(config.indicator.status_field, "status");
}

#[test]
fn config_load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.indicator.expected_provider, "nextdns");
}

#[test]
fn config_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[indicator]\nprobe_timeout_secs = 5\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.indicator.probe_timeout_secs, 5);
    assert_eq!(config.general.log_level, "info");
}

#[test]
fn config_load_from_rejects_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[indicator\nbroken").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn indicator_settings_conversion() {
    let config = IndicatorConfig {
        probe_timeout_secs: 3,
        ..IndicatorConfig::default()
    };

    let settings = config.to_settings();

    assert_eq!(settings.probe_timeout.as_secs(), 3);
    assert_eq!(settings.probe_url, config.probe_url);
    assert_eq!(settings.secure_protocols, config.secure_protocols);
}

#[test]
fn secure_protocol_membership_ignores_case() {
    let settings = IndicatorConfig::default().to_settings();

    assert!(settings.is_secure_protocol("doh"));
    assert!(settings.is_secure_protocol("DNS-over-https"));
    assert!(!settings.is_secure_protocol("unencrypted"));
}
