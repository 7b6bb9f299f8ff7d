//! Top-level configuration with layered resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, PatternConfig, TracerConfig};
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PROVENANCE_*`)
/// 2. Config file (TOML)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProvenanceConfig {
    pub tracer: TracerConfig,
    pub patterns: PatternConfig,
    pub observability: ObservabilityConfig,
}

impl ProvenanceConfig {
    /// Load configuration: defaults, then `path` if given, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides_from(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Missing keys fall back to defaults; unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `PROVENANCE_*` overrides read through `lookup`.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PROVENANCE_MAX_DEPTH") {
            self.tracer.default_max_depth = parse_env("PROVENANCE_MAX_DEPTH", &v)?;
        }
        if let Some(v) = lookup("PROVENANCE_MIN_OCCURRENCES") {
            self.tracer.default_min_occurrences = parse_env("PROVENANCE_MIN_OCCURRENCES", &v)?;
        }
        if let Some(v) = lookup("PROVENANCE_LOOKUP_LIMIT") {
            self.tracer.default_lookup_limit = parse_env("PROVENANCE_LOOKUP_LIMIT", &v)?;
        }
        if let Some(v) = lookup("PROVENANCE_PARALLEL_FETCH") {
            self.tracer.parallel_fetch = parse_env("PROVENANCE_PARALLEL_FETCH", &v)?;
        }
        if let Some(v) = lookup("PROVENANCE_BASELINE_PROBABILITY") {
            self.patterns.baseline_firing_probability =
                parse_env("PROVENANCE_BASELINE_PROBABILITY", &v)?;
        }
        if let Some(v) = lookup("PROVENANCE_LOG_LEVEL") {
            self.observability.log_level = v.trim().to_ascii_lowercase();
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.patterns.baseline_firing_probability;
        if !(p > 0.0 && p < 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "patterns.baseline_firing_probability".to_string(),
                message: "must be strictly between 0.0 and 1.0".to_string(),
            });
        }
        for (field, value) in [
            ("tracer.default_max_depth", self.tracer.default_max_depth),
            (
                "tracer.default_min_occurrences",
                self.tracer.default_min_occurrences,
            ),
            ("tracer.default_lookup_limit", self.tracer.default_lookup_limit),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        field: key.to_string(),
        message: e.to_string(),
    })
}
