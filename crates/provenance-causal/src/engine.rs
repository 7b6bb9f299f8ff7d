//! CausalTracer: the public API of the tracer.
//!
//! Owns the store handle, the tracer config, and the significance model.
//! Every operation is read-only; one tracer can serve many concurrent calls.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use provenance_core::config::{ProvenanceConfig, TracerConfig};
use provenance_core::errors::{ProvenanceError, ProvenanceResult};
use provenance_core::models::{
    AgentDecisionPath, CausalNode, CausalPath, EmergentPattern, NodeType,
};
use provenance_core::traits::{Cancellable, IProvenanceStore, NeverCancelled, NodeRecord};

use crate::patterns::{self, PoissonBaseline, SignificanceModel};
use crate::traversal::{decision_path, trace_effects, trace_origins, Direction, WalkOptions};

pub struct CausalTracer {
    store: Arc<dyn IProvenanceStore>,
    config: TracerConfig,
    significance: Box<dyn SignificanceModel>,
}

impl CausalTracer {
    /// Tracer with compiled defaults and the Poisson baseline model.
    pub fn new(store: Arc<dyn IProvenanceStore>) -> Self {
        Self {
            store,
            config: TracerConfig::default(),
            significance: Box::new(PoissonBaseline::default()),
        }
    }

    /// Tracer configured from a resolved `ProvenanceConfig`.
    pub fn from_config(store: Arc<dyn IProvenanceStore>, config: &ProvenanceConfig) -> Self {
        Self {
            store,
            config: config.tracer.clone(),
            significance: Box::new(PoissonBaseline::new(
                config.patterns.baseline_firing_probability,
            )),
        }
    }

    pub fn with_config(mut self, config: TracerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_significance_model(mut self, model: Box<dyn SignificanceModel>) -> Self {
        self.significance = model;
        self
    }

    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    // --- Traversal ---

    /// Trace backward from an external output to all of its transitive causes.
    ///
    /// `max_depth == 0` uses the configured default ceiling.
    pub fn trace_causality(&self, output_id: &str, max_depth: usize) -> ProvenanceResult<CausalPath> {
        self.trace_causality_cancellable(output_id, max_depth, &NeverCancelled)
    }

    pub fn trace_causality_cancellable(
        &self,
        output_id: &str,
        max_depth: usize,
        cancel: &dyn Cancellable,
    ) -> ProvenanceResult<CausalPath> {
        self.trace_origins_cancellable(output_id, NodeType::ExternalOutput, max_depth, cancel)
    }

    /// Trace backward from any node.
    pub fn trace_origins(
        &self,
        id: &str,
        node_type: NodeType,
        max_depth: usize,
    ) -> ProvenanceResult<CausalPath> {
        self.trace_origins_cancellable(id, node_type, max_depth, &NeverCancelled)
    }

    pub fn trace_origins_cancellable(
        &self,
        id: &str,
        node_type: NodeType,
        max_depth: usize,
        cancel: &dyn Cancellable,
    ) -> ProvenanceResult<CausalPath> {
        self.traverse(id, node_type, Direction::Backward, max_depth, cancel)
    }

    /// Trace forward from any node.
    pub fn trace_effects(
        &self,
        id: &str,
        node_type: NodeType,
        max_depth: usize,
    ) -> ProvenanceResult<CausalPath> {
        self.trace_effects_cancellable(id, node_type, max_depth, &NeverCancelled)
    }

    pub fn trace_effects_cancellable(
        &self,
        id: &str,
        node_type: NodeType,
        max_depth: usize,
        cancel: &dyn Cancellable,
    ) -> ProvenanceResult<CausalPath> {
        self.traverse(id, node_type, Direction::Forward, max_depth, cancel)
    }

    fn traverse(
        &self,
        id: &str,
        node_type: NodeType,
        direction: Direction,
        max_depth: usize,
        cancel: &dyn Cancellable,
    ) -> ProvenanceResult<CausalPath> {
        let options = self.walk_options(max_depth);
        let _span = crate::trace_span!(id, direction, options.max_depth).entered();

        let root = self.resolve(id, node_type)?;
        let path = match direction {
            Direction::Backward => trace_origins::trace(self.store.as_ref(), root, options, cancel)?,
            Direction::Forward => trace_effects::trace(self.store.as_ref(), root, options, cancel)?,
        };
        info!(
            nodes = path.nodes.len(),
            edges = path.edges.len(),
            depth = path.depth,
            cancelled = path.cancelled,
            "trace complete"
        );
        Ok(path)
    }

    /// Upstream causes and downstream effects of one agent action.
    ///
    /// Fails with `NotFound` if the action is absent or belongs to another agent.
    pub fn agent_decision_path(
        &self,
        agent_id: &str,
        action_id: &str,
    ) -> ProvenanceResult<AgentDecisionPath> {
        self.agent_decision_path_cancellable(agent_id, action_id, &NeverCancelled)
    }

    pub fn agent_decision_path_cancellable(
        &self,
        agent_id: &str,
        action_id: &str,
        cancel: &dyn Cancellable,
    ) -> ProvenanceResult<AgentDecisionPath> {
        let _span = crate::decision_path_span!(agent_id, action_id).entered();

        let action = self.resolve(action_id, NodeType::AgentAction)?;
        if action.attribute_str("agent_id") != Some(agent_id) {
            return Err(ProvenanceError::not_found(NodeType::AgentAction, action_id));
        }
        let report = decision_path::assemble(
            self.store.as_ref(),
            agent_id,
            action,
            self.walk_options(0),
            cancel,
        )?;
        info!(
            spike_events = report.spike_events.len(),
            decisions = report.decisions.len(),
            workflows = report.workflows.len(),
            outputs = report.outputs.len(),
            total_depth = report.total_depth,
            "decision path assembled"
        );
        Ok(report)
    }

    // --- Patterns ---

    /// Spike fingerprints recurring at least `min_occurrences` times in `[start, end]`.
    ///
    /// `min_occurrences == 0` uses the configured default. An inverted window is empty.
    pub fn find_emergent_patterns(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        min_occurrences: usize,
    ) -> ProvenanceResult<Vec<EmergentPattern>> {
        let min_occurrences = self.config.min_occurrences_or_default(min_occurrences);
        let _span = crate::patterns_span!(min_occurrences).entered();
        if start > end {
            return Ok(Vec::new());
        }

        let aggregates = self.store.aggregate_spikes_by_pattern(start, end)?;
        let fingerprints = aggregates.len();
        let found = patterns::detect(aggregates, min_occurrences, self.significance.as_ref());
        info!(fingerprints, emergent = found.len(), "pattern scan complete");
        Ok(found)
    }

    // --- Index lookups ---

    /// Spike events sharing `fingerprint`, oldest first, as depth-0 nodes.
    pub fn query_by_pattern_hash(
        &self,
        fingerprint: &str,
        limit: usize,
    ) -> ProvenanceResult<Vec<CausalNode>> {
        let limit = self.config.lookup_limit_or_default(limit);
        let _span = crate::lookup_span!("fingerprint", fingerprint).entered();

        let records = self.store.lookup_by_fingerprint(fingerprint, limit)?;
        Ok(records
            .into_iter()
            .take(limit)
            .map(|r| CausalNode::from_record(r, 0))
            .collect())
    }

    /// Spike events and routing decisions of one inference run, with the edges among them.
    pub fn query_by_inference_id(&self, inference_id: &str) -> ProvenanceResult<CausalPath> {
        let _span = crate::lookup_span!("inference_id", inference_id).entered();

        let hood = self.store.lookup_by_inference_id(inference_id)?;
        let mut path = CausalPath::new(inference_id);
        for record in hood.nodes {
            path.push_node(CausalNode::from_record(record, 0));
        }
        path.edges = hood.edges;
        Ok(path)
    }

    fn resolve(&self, id: &str, node_type: NodeType) -> ProvenanceResult<NodeRecord> {
        self.store
            .get_node(id, node_type)?
            .ok_or_else(|| ProvenanceError::not_found(node_type, id))
    }

    fn walk_options(&self, max_depth: usize) -> WalkOptions {
        WalkOptions {
            max_depth: self.config.max_depth_or_default(max_depth),
            parallel: self.config.parallel_fetch,
        }
    }
}
