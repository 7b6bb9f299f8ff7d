//! Spike pattern aggregates and detected emergent patterns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fingerprint's occurrences in a time window, as grouped by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAggregate {
    pub pattern_hash: String,
    pub count: u64,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub population_id: String,
    pub neuron_indices: Vec<u32>,
}

/// A fingerprint recurring at least `min_occurrences` times, with its significance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergentPattern {
    pub pattern_hash: String,
    pub occurrence_count: u64,
    pub neuron_indices: Vec<u32>,
    pub population_id: String,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    /// Higher means less likely to be chance co-firing.
    pub significance: f64,
}

impl EmergentPattern {
    pub fn from_aggregate(aggregate: PatternAggregate, significance: f64) -> Self {
        Self {
            pattern_hash: aggregate.pattern_hash,
            occurrence_count: aggregate.count,
            neuron_indices: aggregate.neuron_indices,
            population_id: aggregate.population_id,
            first_seen: aggregate.first_seen,
            last_seen: aggregate.last_seen,
            significance,
        }
    }
}
