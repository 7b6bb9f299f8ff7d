//! CausalPath: the assembled result of a causal traversal, and its derived views.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{EdgeType, NodeType};
use crate::traits::NodeRecord;

/// A node reached by a traversal, tagged with its BFS distance from the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub timestamp: DateTime<Utc>,
    pub depth: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl CausalNode {
    pub fn from_record(record: NodeRecord, depth: usize) -> Self {
        Self {
            id: record.id,
            node_type: record.node_type,
            timestamp: record.timestamp,
            depth,
            latency_ms: record.latency_ms,
            metadata: record.metadata,
        }
    }
}

/// An effect → cause edge. `source` is the effect, `target` the cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalEdge {
    pub source_id: String,
    pub source_type: NodeType,
    pub target_id: String,
    pub target_type: NodeType,
    pub edge_type: EdgeType,
    /// Certainty of the link, 0.0–1.0. 1.0 for structurally guaranteed edges.
    pub confidence: f64,
}

/// Result of a trace: visited nodes in BFS level order plus every edge seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalPath {
    /// The anchor id (an output id, an action id, or an inference id for index lookups).
    pub output_id: String,
    pub nodes: Vec<CausalNode>,
    pub edges: Vec<CausalEdge>,
    /// Maximum node depth reached.
    pub depth: usize,
    /// Sum of self-reported latencies over the visited nodes.
    pub total_latency_ms: f64,
    pub traced_at: DateTime<Utc>,
    /// True when the traversal was cancelled and the path holds only complete levels.
    #[serde(default)]
    pub cancelled: bool,
}

impl CausalPath {
    /// Empty path anchored at `output_id`, stamped now.
    pub fn new(output_id: &str) -> Self {
        Self {
            output_id: output_id.to_string(),
            nodes: Vec::new(),
            edges: Vec::new(),
            depth: 0,
            total_latency_ms: 0.0,
            traced_at: Utc::now(),
            cancelled: false,
        }
    }

    /// Append a node, keeping `depth` and `total_latency_ms` current.
    pub fn push_node(&mut self, node: CausalNode) {
        self.depth = self.depth.max(node.depth);
        if let Some(latency) = node.latency_ms {
            self.total_latency_ms += latency;
        }
        self.nodes.push(node);
    }

    /// All nodes of the given kind, in path order.
    pub fn nodes_of_type(&self, node_type: NodeType) -> Vec<CausalNode> {
        self.nodes
            .iter()
            .filter(|n| n.node_type == node_type)
            .cloned()
            .collect()
    }

    pub fn spike_events(&self) -> Vec<CausalNode> {
        self.nodes_of_type(NodeType::SpikeEvent)
    }

    pub fn decisions(&self) -> Vec<CausalNode> {
        self.nodes_of_type(NodeType::RoutingDecision)
    }

    pub fn actions(&self) -> Vec<CausalNode> {
        self.nodes_of_type(NodeType::AgentAction)
    }

    pub fn workflows(&self) -> Vec<CausalNode> {
        self.nodes_of_type(NodeType::WorkflowExecution)
    }

    pub fn outputs(&self) -> Vec<CausalNode> {
        self.nodes_of_type(NodeType::ExternalOutput)
    }

    /// Node counts grouped by kind. Kinds with no nodes are absent.
    pub fn count_by_type(&self) -> BTreeMap<NodeType, usize> {
        let mut counts = BTreeMap::new();
        for node in &self.nodes {
            *counts.entry(node.node_type).or_insert(0) += 1;
        }
        counts
    }

    /// Whether the walk stopped at the depth ceiling, meaning the chain may continue.
    pub fn reached_ceiling(&self, max_depth: usize) -> bool {
        self.depth == max_depth
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }
}
