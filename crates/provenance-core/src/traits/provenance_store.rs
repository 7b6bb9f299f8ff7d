use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::StorageResult;
use crate::models::{CausalEdge, NodeType, PatternAggregate};

/// A node as returned by the store: identity, kind, time, and key attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub node_type: NodeType,
    pub timestamp: DateTime<Utc>,
    /// Action latency or workflow duration, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl NodeRecord {
    pub fn new(id: &str, node_type: NodeType, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            node_type,
            timestamp,
            latency_ms: None,
            metadata: Map::new(),
        }
    }

    /// String attribute from `metadata`, if present.
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }
}

/// Immediate causal neighbours of one node and the edges to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<CausalEdge>,
}

impl Neighborhood {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Read side of the store collaborator.
///
/// Edges are always oriented effect → cause, whichever direction is queried.
/// Neighbours come back in link creation order. The nested-workflow containment
/// relation is never returned as a causal neighbour.
pub trait IProvenanceStore: Send + Sync {
    // --- Point lookup ---
    /// `None` when the id is absent or belongs to another kind.
    fn get_node(&self, id: &str, node_type: NodeType) -> StorageResult<Option<NodeRecord>>;

    // --- Causal edges ---
    /// Immediate causes. Empty (not an error) for spike events.
    fn get_parents(&self, id: &str, node_type: NodeType) -> StorageResult<Neighborhood>;
    /// Immediate effects. Empty (not an error) for external outputs.
    fn get_children(&self, id: &str, node_type: NodeType) -> StorageResult<Neighborhood>;

    // --- Aggregation ---
    /// Spike events in `[start, end]` grouped by pattern fingerprint.
    fn aggregate_spikes_by_pattern(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StorageResult<Vec<PatternAggregate>>;

    // --- Index lookups ---
    /// Up to `limit` spike events with this fingerprint, oldest first.
    fn lookup_by_fingerprint(&self, fingerprint: &str, limit: usize)
        -> StorageResult<Vec<NodeRecord>>;
    /// Spike events and routing decisions of one inference run, with the edges among them.
    fn lookup_by_inference_id(&self, inference_id: &str) -> StorageResult<Neighborhood>;
}
