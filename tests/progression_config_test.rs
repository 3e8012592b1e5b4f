// ABOUTME: Tests for progression config profiles, JSON file overrides, env overrides, and validation
// ABOUTME: Env-driven tests run serially and clear every IRONLOG_* variable they touch
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::assert_close;
use ironlog_core::config::{ConfigError, ConfigProfile, ProgressionConfig};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

const ENV_VARS: [&str; 10] = [
    "IRONLOG_PROFILE",
    "IRONLOG_CONFIG_FILE",
    "IRONLOG_PATTERN_SAMPLE_SIZE",
    "IRONLOG_PATTERN_MIN_WORKOUTS",
    "IRONLOG_PATTERN_WEIGHT_THRESHOLD",
    "IRONLOG_PATTERN_CONFIDENCE_THRESHOLD",
    "IRONLOG_VOLUME_WINDOW_DAYS",
    "IRONLOG_MAX_WEIGHT_JUMP",
    "IRONLOG_ADVANCED_USER_EVENTS",
    "IRONLOG_PLATEAU_DAYS",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_profile_names_parse() {
    assert_eq!("dev".parse::<ConfigProfile>().unwrap(), ConfigProfile::Development);
    assert_eq!(
        "Production".parse::<ConfigProfile>().unwrap(),
        ConfigProfile::Production
    );
    assert_eq!(
        "default".parse::<ConfigProfile>().unwrap(),
        ConfigProfile::Default
    );
    assert!(matches!(
        "staging".parse::<ConfigProfile>(),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_for_profile_matches_constructors() {
    assert_eq!(
        ProgressionConfig::for_profile(ConfigProfile::Development),
        ProgressionConfig::development()
    );
    assert_eq!(
        ProgressionConfig::for_profile(ConfigProfile::Default),
        ProgressionConfig::default()
    );
}

#[test]
fn test_every_profile_is_valid() {
    for profile in [
        ConfigProfile::Default,
        ConfigProfile::Development,
        ConfigProfile::Production,
    ] {
        let warnings = ProgressionConfig::for_profile(profile).validate().unwrap();
        assert!(warnings.is_empty(), "{profile}: {warnings:?}");
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ProgressionConfig::from_env().unwrap();

    assert_eq!(config, ProgressionConfig::default());
}

#[test]
#[serial]
fn test_from_env_profile_and_overrides() {
    clear_env();
    std::env::set_var("IRONLOG_PROFILE", "dev");
    std::env::set_var("IRONLOG_MAX_WEIGHT_JUMP", "0.25");
    std::env::set_var("IRONLOG_PLATEAU_DAYS", "35");

    let config = ProgressionConfig::from_env();
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.pattern_detection.min_workouts_for_analysis, 2);
    assert_close(config.thresholds.max_weight_jump_fraction, 0.25);
    assert_eq!(config.thresholds.plateau_days, 35);
}

#[test]
#[serial]
fn test_from_env_reads_config_file_before_overrides() {
    clear_env();
    let file = json_file(
        r#"{
            "pattern_detection": { "sample_size": 8 },
            "thresholds": { "max_weight_jump_fraction": 0.3 }
        }"#,
    );
    std::env::set_var("IRONLOG_CONFIG_FILE", file.path());
    std::env::set_var("IRONLOG_MAX_WEIGHT_JUMP", "0.4");

    let config = ProgressionConfig::from_env();
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.pattern_detection.sample_size, 8);
    // Env overrides win over the file
    assert_close(config.thresholds.max_weight_jump_fraction, 0.4);
}

#[test]
#[serial]
fn test_from_env_rejects_unparseable_override() {
    clear_env();
    std::env::set_var("IRONLOG_VOLUME_WINDOW_DAYS", "a month");

    let result = ProgressionConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_result() {
    clear_env();
    std::env::set_var("IRONLOG_PATTERN_CONFIDENCE_THRESHOLD", "1.5");

    let result = ProgressionConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_from_env_rejects_non_unicode_profile() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    clear_env();
    std::env::set_var("IRONLOG_PROFILE", OsString::from_vec(vec![0x66, 0x6f, 0x80]));

    let result = ProgressionConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::EnvVar(_))));
}

#[test]
#[serial]
fn test_from_env_missing_file() {
    clear_env();
    std::env::set_var("IRONLOG_CONFIG_FILE", "/nonexistent/ironlog.json");

    let result = ProgressionConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = json_file(r#"{ "readiness": { "ready_threshold": 0.85 } }"#);

    let config = ProgressionConfig::from_json_file(file.path()).unwrap();

    assert_close(config.readiness.ready_threshold, 0.85);
    assert_close(
        config.readiness.close_threshold,
        ProgressionConfig::default().readiness.close_threshold,
    );
    assert_eq!(config.thresholds.max_sets, 6);
}

#[test]
fn test_malformed_file_is_rejected() {
    let file = json_file("{ not json");
    assert!(matches!(
        ProgressionConfig::from_json_file(file.path()),
        Err(ConfigError::Json(_))
    ));

    let wrong_type = json_file(r#"{ "thresholds": { "max_sets": "six" } }"#);
    assert!(matches!(
        ProgressionConfig::from_json_file(wrong_type.path()),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_validate_rejects_unordered_readiness_thresholds() {
    let mut config = ProgressionConfig::default();
    config.readiness.close_threshold = 0.9;

    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_validate_rejects_negative_weights() {
    let mut config = ProgressionConfig::default();
    config.readiness.weights_without_form.rep_achievement = -0.1;

    assert!(matches!(config.validate(), Err(ConfigError::InvalidWeights(_))));
}

#[test]
fn test_validate_rejects_bad_deload_factor() {
    let mut config = ProgressionConfig::default();
    config.thresholds.deload_factor = 1.2;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_validate_rejects_inverted_default_rep_range() {
    let mut config = ProgressionConfig::default();
    config.default_preferences.min_reps_target = 15;
    config.default_preferences.max_reps_target = 10;

    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_validate_warns_on_questionable_values() {
    let mut config = ProgressionConfig::default();
    config.pattern_detection.sample_size = 50;
    config.volume_tracking.window_days = 3;
    config.readiness.weights_with_form.form_quality = 0.5;

    let warnings = config.validate().unwrap();

    assert_eq!(warnings.len(), 3, "{warnings:?}");
    assert!(warnings.iter().any(|w| w.contains("clamped")));
    assert!(warnings.iter().any(|w| w.contains("noisy")));
    assert!(warnings.iter().any(|w| w.contains("weights_with_form")));
}
