//! SpikeEvent: a firing event in a spiking neuron population. Root of every causal chain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fingerprint;

/// A spike event. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpikeEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Nanosecond precision timestamp, when the producer has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ns: Option<i64>,
    pub population_id: String,
    pub layer_index: u32,
    pub neuron_indices: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spike_counts: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub membrane_potentials: Vec<f64>,
    /// Deterministic fingerprint of the firing pattern.
    pub pattern_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inference_id: Option<String>,
    #[serde(default)]
    pub is_emergent: bool,
    #[serde(default)]
    pub entropy: f64,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl SpikeEvent {
    /// New spike event with a fresh id, the current time, and a computed fingerprint.
    pub fn new(population_id: &str, layer_index: u32, neuron_indices: Vec<u32>) -> Self {
        let pattern_hash =
            fingerprint::pattern_fingerprint(population_id, layer_index, &neuron_indices);
        Self {
            id: super::new_node_id(),
            timestamp: Utc::now(),
            timestamp_ns: None,
            population_id: population_id.to_string(),
            layer_index,
            neuron_indices,
            spike_counts: Vec::new(),
            membrane_potentials: Vec::new(),
            pattern_hash,
            inference_id: None,
            is_emergent: false,
            entropy: 0.0,
            metadata: serde_json::Value::Null,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_inference(mut self, inference_id: &str) -> Self {
        self.inference_id = Some(inference_id.to_string());
        self
    }
}
