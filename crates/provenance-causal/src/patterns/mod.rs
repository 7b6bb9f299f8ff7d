//! Emergent pattern detection over store-side spike aggregates.

pub mod significance;

pub use significance::{PoissonBaseline, SignificanceModel};

use std::cmp::Ordering;

use provenance_core::models::{EmergentPattern, PatternAggregate};

/// Keep fingerprints seen at least `min_occurrences` times and score them.
///
/// `total_events` for the null model is the number of spike events in the window,
/// counted before filtering. Ordered by count desc, then last seen desc, then fingerprint.
pub fn detect(
    aggregates: Vec<PatternAggregate>,
    min_occurrences: usize,
    model: &dyn SignificanceModel,
) -> Vec<EmergentPattern> {
    let total_events: u64 = aggregates.iter().map(|a| a.count).sum();
    let threshold = min_occurrences as u64;

    let mut patterns: Vec<EmergentPattern> = aggregates
        .into_iter()
        .filter(|a| a.count >= threshold)
        .map(|a| {
            let significance = model.significance(&a, total_events);
            EmergentPattern::from_aggregate(a, significance)
        })
        .collect();
    patterns.sort_by(rank);
    patterns
}

fn rank(a: &EmergentPattern, b: &EmergentPattern) -> Ordering {
    b.occurrence_count
        .cmp(&a.occurrence_count)
        .then_with(|| b.last_seen.cmp(&a.last_seen))
        .then_with(|| a.pattern_hash.cmp(&b.pattern_hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn aggregate(hash: &str, count: u64, last_offset_s: i64) -> PatternAggregate {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        PatternAggregate {
            pattern_hash: hash.to_string(),
            count,
            first_seen: t0,
            last_seen: t0 + Duration::seconds(last_offset_s),
            population_id: "pop".to_string(),
            neuron_indices: vec![1, 2, 3],
        }
    }

    #[test]
    fn filters_then_orders_by_count_and_recency() {
        let aggregates = vec![
            aggregate("a", 3, 100),
            aggregate("b", 7, 10),
            aggregate("c", 7, 50),
            aggregate("d", 9, 0),
            aggregate("e", 7, 50),
        ];
        let patterns = detect(aggregates, 5, &PoissonBaseline::default());
        let order: Vec<_> = patterns.iter().map(|p| p.pattern_hash.as_str()).collect();
        assert_eq!(order, vec!["d", "c", "e", "b"]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let patterns = detect(vec![aggregate("a", 5, 0)], 5, &PoissonBaseline::default());
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].occurrence_count, 5);
    }
}
