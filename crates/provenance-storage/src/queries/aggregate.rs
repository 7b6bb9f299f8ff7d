//! Time-ranged grouping of spike events by pattern fingerprint.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use provenance_core::models::{CausalEntity, PatternAggregate};

use crate::graph::IndexedGraph;

/// Group spike events with `start <= timestamp <= end` by fingerprint.
///
/// Population and neuron set come from the earliest occurrence; indices are
/// sorted and de-duplicated. Results are ordered by fingerprint.
pub fn spikes_by_pattern(
    graph: &IndexedGraph,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<PatternAggregate> {
    if start > end {
        return Vec::new();
    }

    let mut groups: BTreeMap<&str, PatternAggregate> = BTreeMap::new();

    for idx in graph.spikes() {
        let Some(CausalEntity::SpikeEvent(spike)) = graph.graph.node_weight(*idx) else {
            continue;
        };
        if spike.timestamp < start || spike.timestamp > end {
            continue;
        }

        match groups.get_mut(spike.pattern_hash.as_str()) {
            Some(agg) => {
                agg.count += 1;
                if spike.timestamp < agg.first_seen {
                    agg.first_seen = spike.timestamp;
                    agg.population_id = spike.population_id.clone();
                    agg.neuron_indices = canonical(&spike.neuron_indices);
                }
                agg.last_seen = agg.last_seen.max(spike.timestamp);
            }
            None => {
                groups.insert(
                    spike.pattern_hash.as_str(),
                    PatternAggregate {
                        pattern_hash: spike.pattern_hash.clone(),
                        count: 1,
                        first_seen: spike.timestamp,
                        last_seen: spike.timestamp,
                        population_id: spike.population_id.clone(),
                        neuron_indices: canonical(&spike.neuron_indices),
                    },
                );
            }
        }
    }

    groups.into_values().collect()
}

fn canonical(indices: &[u32]) -> Vec<u32> {
    let mut out = indices.to_vec();
    out.sort_unstable();
    out.dedup();
    out
}
