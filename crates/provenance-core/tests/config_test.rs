//! Tests for the provenance configuration system.

use std::collections::HashMap;

use provenance_core::config::defaults;
use provenance_core::config::ProvenanceConfig;
use provenance_core::errors::ConfigError;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_documented_values() {
    let config = ProvenanceConfig::default();
    assert_eq!(config.tracer.default_max_depth, 100);
    assert_eq!(config.tracer.default_min_occurrences, 5);
    assert_eq!(config.tracer.default_lookup_limit, 100);
    assert!(!config.tracer.parallel_fetch);
    assert_eq!(
        config.patterns.baseline_firing_probability,
        defaults::DEFAULT_BASELINE_FIRING_PROBABILITY
    );
    assert_eq!(config.observability.log_level, "info");
    config.validate().unwrap();
}

#[test]
fn zero_arguments_normalize_to_defaults() {
    let tracer = ProvenanceConfig::default().tracer;
    assert_eq!(tracer.max_depth_or_default(0), 100);
    assert_eq!(tracer.max_depth_or_default(7), 7);
    assert_eq!(tracer.min_occurrences_or_default(0), 5);
    assert_eq!(tracer.lookup_limit_or_default(0), 100);
    assert_eq!(tracer.lookup_limit_or_default(3), 3);
}

#[test]
fn partial_toml_keeps_defaults_for_missing_keys() {
    let config = ProvenanceConfig::from_toml(
        r#"
[tracer]
default_max_depth = 12
parallel_fetch = true

[observability]
json_logs = true
"#,
    )
    .unwrap();

    assert_eq!(config.tracer.default_max_depth, 12);
    assert!(config.tracer.parallel_fetch);
    assert_eq!(config.tracer.default_min_occurrences, 5);
    assert!(config.observability.json_logs);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = ProvenanceConfig::from_toml("[tracer\ndefault_max_depth = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn file_then_env_resolution() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("provenance.toml");
    std::fs::write(
        &path,
        r#"
[tracer]
default_max_depth = 20
default_lookup_limit = 50

[patterns]
baseline_firing_probability = 0.1
"#,
    )
    .unwrap();

    let mut config = ProvenanceConfig::from_file(&path).unwrap();
    config
        .apply_env_overrides_from(env(&[
            ("PROVENANCE_MAX_DEPTH", "8"),
            ("PROVENANCE_PARALLEL_FETCH", "true"),
            ("PROVENANCE_LOG_LEVEL", "DEBUG"),
        ]))
        .unwrap();
    config.validate().unwrap();

    // Env wins over file.
    assert_eq!(config.tracer.default_max_depth, 8);
    // File wins over defaults.
    assert_eq!(config.tracer.default_lookup_limit, 50);
    assert!((config.patterns.baseline_firing_probability - 0.1).abs() < f64::EPSILON);
    assert!(config.tracer.parallel_fetch);
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = ProvenanceConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn unparseable_env_value_is_invalid() {
    let mut config = ProvenanceConfig::default();
    let err = config
        .apply_env_overrides_from(env(&[("PROVENANCE_MAX_DEPTH", "deep")]))
        .unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => assert_eq!(field, "PROVENANCE_MAX_DEPTH"),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn validation_rejects_out_of_range_values() {
    let mut config = ProvenanceConfig::default();
    config.patterns.baseline_firing_probability = 1.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));

    let mut config = ProvenanceConfig::default();
    config.tracer.default_max_depth = 0;
    assert!(config.validate().is_err());

    let mut config = ProvenanceConfig::default();
    config.observability.log_level = "verbose".to_string();
    assert!(config.validate().is_err());
}
