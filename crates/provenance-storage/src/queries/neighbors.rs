//! Immediate causes and effects of a node.

use petgraph::Direction;

use provenance_core::models::NodeType;
use provenance_core::traits::Neighborhood;

use crate::graph::IndexedGraph;

/// Immediate causes of `id`. Empty when the id is unknown or not of `node_type`.
pub fn parents(graph: &IndexedGraph, id: &str, node_type: NodeType) -> Neighborhood {
    collect(graph, id, node_type, Direction::Outgoing)
}

/// Immediate effects of `id`. Empty when the id is unknown or not of `node_type`.
pub fn children(graph: &IndexedGraph, id: &str, node_type: NodeType) -> Neighborhood {
    collect(graph, id, node_type, Direction::Incoming)
}

fn collect(graph: &IndexedGraph, id: &str, node_type: NodeType, direction: Direction) -> Neighborhood {
    let idx = match graph.get_node(id) {
        Some(idx) => idx,
        None => return Neighborhood::default(),
    };
    match graph.graph.node_weight(idx) {
        Some(entity) if entity.node_type() == node_type => {}
        _ => return Neighborhood::default(),
    }

    let mut result = Neighborhood::default();
    for (neighbour, edge) in graph.links(idx, direction) {
        if let Some(entity) = graph.graph.node_weight(neighbour) {
            result.nodes.push(entity.to_record());
            result.edges.push(edge);
        }
    }
    result
}
