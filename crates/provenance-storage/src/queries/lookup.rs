//! Secondary index lookups: fingerprint, inference id, workflow containment.

use std::collections::HashSet;

use petgraph::Direction;

use provenance_core::models::NodeType;
use provenance_core::traits::{Neighborhood, NodeRecord};

use crate::graph::IndexedGraph;

/// Up to `limit` spike events with `fingerprint`, oldest first.
pub fn by_fingerprint(graph: &IndexedGraph, fingerprint: &str, limit: usize) -> Vec<NodeRecord> {
    let mut records: Vec<NodeRecord> = graph
        .by_fingerprint(fingerprint)
        .iter()
        .filter_map(|idx| graph.graph.node_weight(*idx))
        .map(|e| e.to_record())
        .collect();
    // Stable sort keeps insertion order among equal timestamps.
    records.sort_by_key(|r| r.timestamp);
    records.truncate(limit);
    records
}

/// Spike events and routing decisions of one inference run, plus the
/// decision → spike edges whose endpoints are both in the set.
pub fn by_inference(graph: &IndexedGraph, inference_id: &str) -> Neighborhood {
    let members = graph.by_inference(inference_id);
    let in_set: HashSet<_> = members.iter().copied().collect();

    let mut result = Neighborhood::default();
    for idx in members {
        let Some(entity) = graph.graph.node_weight(*idx) else {
            continue;
        };
        result.nodes.push(entity.to_record());
        if entity.node_type() == NodeType::RoutingDecision {
            result.edges.extend(
                graph
                    .links(*idx, Direction::Outgoing)
                    .into_iter()
                    .filter(|(parent, _)| in_set.contains(parent))
                    .map(|(_, edge)| edge),
            );
        }
    }
    result
}

/// Workflow executions nested directly inside `execution_id`, in creation order.
pub fn nested_executions(graph: &IndexedGraph, execution_id: &str) -> Vec<NodeRecord> {
    graph
        .nested_in(execution_id)
        .iter()
        .filter_map(|idx| graph.graph.node_weight(*idx))
        .map(|e| e.to_record())
        .collect()
}
