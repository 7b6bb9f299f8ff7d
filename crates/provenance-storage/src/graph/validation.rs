//! Write-time link validation.
//!
//! Every link must point exactly one level up the causal chain, so the graph is
//! acyclic by construction. `find_cycles` double-checks that in tests.

use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;

use provenance_core::errors::{StorageError, StorageResult};
use provenance_core::models::{EdgeType, NodeType};
use provenance_core::traits::CausalLink;

use super::{IndexedGraph, LinkWeight};

/// Resolve and check the causal links of a new `child_type` node `child_id`.
///
/// Returns the parent indexes with their edge weights, in link order.
pub fn resolve_links(
    graph: &IndexedGraph,
    child_id: &str,
    child_type: NodeType,
    causes: &[CausalLink],
) -> StorageResult<Vec<(NodeIndex, LinkWeight)>> {
    let invalid = |parent_id: &str, reason: String| StorageError::InvalidLink {
        child_id: child_id.to_string(),
        parent_id: parent_id.to_string(),
        reason,
    };

    let (Some(parent_type), Some(edge_type)) =
        (child_type.parent_type(), EdgeType::for_child(child_type))
    else {
        return match causes.first() {
            Some(link) => Err(invalid(
                &link.parent_id,
                format!("{child_type} has no causal parents"),
            )),
            None => Ok(Vec::new()),
        };
    };

    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(causes.len());
    for link in causes {
        if !(0.0..=1.0).contains(&link.confidence) {
            return Err(invalid(
                &link.parent_id,
                format!("confidence {} outside [0, 1]", link.confidence),
            ));
        }
        if !seen.insert(link.parent_id.as_str()) {
            return Err(invalid(&link.parent_id, "duplicate link".to_string()));
        }
        let idx = graph
            .get_node(&link.parent_id)
            .ok_or_else(|| invalid(&link.parent_id, "parent does not exist".to_string()))?;
        let actual = graph
            .graph
            .node_weight(idx)
            .map(|e| e.node_type())
            .ok_or_else(|| invalid(&link.parent_id, "parent does not exist".to_string()))?;
        if actual != parent_type {
            return Err(invalid(
                &link.parent_id,
                format!("{child_type} must be caused by {parent_type}, not {actual}"),
            ));
        }
        resolved.push((
            idx,
            LinkWeight {
                edge_type,
                confidence: link.confidence,
            },
        ));
    }
    Ok(resolved)
}

/// Check that a nested workflow's container exists and is a workflow execution.
pub fn check_container(
    graph: &IndexedGraph,
    child_id: &str,
    parent_execution_id: &str,
) -> StorageResult<()> {
    match graph.entity(parent_execution_id).map(|e| e.node_type()) {
        Some(NodeType::WorkflowExecution) => Ok(()),
        Some(other) => Err(StorageError::InvalidLink {
            child_id: child_id.to_string(),
            parent_id: parent_execution_id.to_string(),
            reason: format!("parent execution is a {other}"),
        }),
        None => Err(StorageError::InvalidLink {
            child_id: child_id.to_string(),
            parent_id: parent_execution_id.to_string(),
            reason: "parent execution does not exist".to_string(),
        }),
    }
}

/// Strongly connected components with more than one node, i.e. cycles.
pub fn find_cycles(graph: &IndexedGraph) -> Vec<Vec<NodeIndex>> {
    tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .collect()
}
