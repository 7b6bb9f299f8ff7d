//! StableGraph wrapper with id → NodeIndex mapping and secondary indexes.
//!
//! Edges point effect → cause: the child is the petgraph source, the parent the target.
//! Outgoing edges of a node are its causes, incoming edges its effects.

use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use provenance_core::models::{CausalEdge, CausalEntity, EdgeType};

/// Edge weight in the provenance graph.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkWeight {
    pub edge_type: EdgeType,
    pub confidence: f64,
}

/// The provenance graph plus its lookup indexes.
#[derive(Debug, Default)]
pub struct IndexedGraph {
    pub graph: StableGraph<CausalEntity, LinkWeight>,
    node_index: HashMap<String, NodeIndex>,
    /// pattern_hash → spike events, insertion order.
    fingerprint_index: HashMap<String, Vec<NodeIndex>>,
    /// inference_id → spike events and routing decisions, insertion order.
    inference_index: HashMap<String, Vec<NodeIndex>>,
    /// parent execution id → nested executions, insertion order.
    containment: HashMap<String, Vec<NodeIndex>>,
    /// All spike events, insertion order.
    spikes: Vec<NodeIndex>,
}

impl IndexedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_node(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub fn entity(&self, id: &str) -> Option<&CausalEntity> {
        self.get_node(id)
            .and_then(|idx| self.graph.node_weight(idx))
    }

    pub fn entity_mut(&mut self, id: &str) -> Option<&mut CausalEntity> {
        let idx = self.get_node(id)?;
        self.graph.node_weight_mut(idx)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Insert an entity and index it. The caller has already checked the id is unused.
    pub fn add_entity(&mut self, entity: CausalEntity) -> NodeIndex {
        let id = entity.id().to_string();
        let inference_id = entity.inference_id().map(str::to_string);
        let (fingerprint, parent_execution) = match &entity {
            CausalEntity::SpikeEvent(e) => (Some(e.pattern_hash.clone()), None),
            CausalEntity::WorkflowExecution(e) => (None, e.parent_execution_id.clone()),
            _ => (None, None),
        };

        let idx = self.graph.add_node(entity);
        self.node_index.insert(id, idx);

        if let Some(fingerprint) = fingerprint {
            self.fingerprint_index.entry(fingerprint).or_default().push(idx);
            self.spikes.push(idx);
        }
        if let Some(inference_id) = inference_id {
            self.inference_index.entry(inference_id).or_default().push(idx);
        }
        if let Some(parent) = parent_execution {
            self.containment.entry(parent).or_default().push(idx);
        }
        idx
    }

    /// Add an effect → cause edge.
    pub fn add_link(&mut self, child: NodeIndex, parent: NodeIndex, weight: LinkWeight) -> EdgeIndex {
        self.graph.add_edge(child, parent, weight)
    }

    /// Edges touching `idx` in `direction`, in creation order.
    ///
    /// `Outgoing` yields the node's causes, `Incoming` its effects.
    /// Each item is `(neighbour, edge)` with the edge oriented child → parent.
    pub fn links(&self, idx: NodeIndex, direction: Direction) -> Vec<(NodeIndex, CausalEdge)> {
        let mut refs: Vec<_> = self.graph.edges_directed(idx, direction).collect();
        // petgraph walks adjacency lists newest first.
        refs.sort_by_key(|e| e.id());

        refs.into_iter()
            .filter_map(|e| {
                let (child_idx, parent_idx) = self.graph.edge_endpoints(e.id())?;
                let child = self.graph.node_weight(child_idx)?;
                let parent = self.graph.node_weight(parent_idx)?;
                let neighbour = match direction {
                    Direction::Outgoing => parent_idx,
                    Direction::Incoming => child_idx,
                };
                let edge = CausalEdge {
                    source_id: child.id().to_string(),
                    source_type: child.node_type(),
                    target_id: parent.id().to_string(),
                    target_type: parent.node_type(),
                    edge_type: e.weight().edge_type,
                    confidence: e.weight().confidence,
                };
                Some((neighbour, edge))
            })
            .collect()
    }

    pub fn spikes(&self) -> &[NodeIndex] {
        &self.spikes
    }

    pub fn by_fingerprint(&self, fingerprint: &str) -> &[NodeIndex] {
        self.fingerprint_index
            .get(fingerprint)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn by_inference(&self, inference_id: &str) -> &[NodeIndex] {
        self.inference_index
            .get(inference_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn nested_in(&self, execution_id: &str) -> &[NodeIndex] {
        self.containment
            .get(execution_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provenance_core::models::{DecisionType, RoutingDecision, SpikeEvent};

    #[test]
    fn links_come_back_in_creation_order() {
        let mut g = IndexedGraph::new();
        let decision = g.add_entity(RoutingDecision::new("inf", DecisionType::Route).with_id("d").into());
        let spikes: Vec<_> = ["s1", "s2", "s3"]
            .iter()
            .map(|id| g.add_entity(SpikeEvent::new("pop", 0, vec![1]).with_id(id).into()))
            .collect();
        for spike in &spikes {
            g.add_link(
                decision,
                *spike,
                LinkWeight {
                    edge_type: EdgeType::CausedBy,
                    confidence: 0.5,
                },
            );
        }

        let parents: Vec<_> = g
            .links(decision, Direction::Outgoing)
            .into_iter()
            .map(|(_, e)| e.target_id)
            .collect();
        assert_eq!(parents, vec!["s1", "s2", "s3"]);

        let children = g.links(spikes[1], Direction::Incoming);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].0, decision);
        assert_eq!(children[0].1.source_id, "d");
        assert_eq!(children[0].1.target_id, "s2");
    }

    #[test]
    fn spikes_are_indexed_by_fingerprint_and_inference() {
        let mut g = IndexedGraph::new();
        let a = SpikeEvent::new("pop", 0, vec![3, 1]).with_id("a").with_inference("inf-1");
        let b = SpikeEvent::new("pop", 0, vec![1, 3]).with_id("b");
        let hash = a.pattern_hash.clone();
        g.add_entity(a.into());
        g.add_entity(b.into());

        assert_eq!(g.by_fingerprint(&hash).len(), 2);
        assert_eq!(g.by_inference("inf-1").len(), 1);
        assert!(g.by_inference("inf-2").is_empty());
        assert_eq!(g.spikes().len(), 2);
    }
}
