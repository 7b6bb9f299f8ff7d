use serde::{Deserialize, Serialize};

use super::defaults;

/// Emergent-pattern scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Null-model probability that a single neuron fires in a given event.
    pub baseline_firing_probability: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            baseline_firing_probability: defaults::DEFAULT_BASELINE_FIRING_PROBABILITY,
        }
    }
}
