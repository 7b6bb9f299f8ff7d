//! GraphStore: owns the indexed graph behind a RwLock and implements
//! IProvenanceStore + IProvenanceWriter.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::debug;

use provenance_core::errors::{StorageError, StorageResult};
use provenance_core::models::{
    ActionCompletion, AgentAction, CausalEntity, ExternalOutput, NodeType, OutputStatus,
    PatternAggregate, RoutingDecision, SpikeEvent, WorkflowCompletion, WorkflowExecution,
};
use provenance_core::traits::{
    CausalLink, IProvenanceStore, IProvenanceWriter, Neighborhood, NodeRecord,
};

use crate::graph::{validation, IndexedGraph};
use crate::queries;

/// In-memory provenance store. Many concurrent readers, one writer at a time.
#[derive(Debug, Default)]
pub struct GraphStore {
    graph: RwLock<IndexedGraph>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, operation: &str) -> StorageResult<RwLockReadGuard<'_, IndexedGraph>> {
        self.graph
            .read()
            .map_err(|e| StorageError::unavailable(operation, e.to_string()))
    }

    fn write(&self, operation: &str) -> StorageResult<RwLockWriteGuard<'_, IndexedGraph>> {
        self.graph
            .write()
            .map_err(|e| StorageError::unavailable(operation, e.to_string()))
    }

    /// Validate and insert one entity with its causal links. All-or-nothing.
    fn insert(&self, entity: CausalEntity, causes: &[CausalLink]) -> StorageResult<()> {
        let mut graph = self.write("insert")?;
        let id = entity.id().to_string();
        let node_type = entity.node_type();

        if graph.contains(&id) {
            return Err(StorageError::DuplicateId { id });
        }
        let links = validation::resolve_links(&graph, &id, node_type, causes)?;
        if let CausalEntity::WorkflowExecution(execution) = &entity {
            if let Some(container) = &execution.parent_execution_id {
                validation::check_container(&graph, &id, container)?;
            }
        }

        let idx = graph.add_entity(entity);
        for (parent, weight) in links {
            graph.add_link(idx, parent, weight);
        }
        debug!(id = %id, node_type = %node_type, links = causes.len(), "recorded entity");
        Ok(())
    }

    /// Workflow executions nested directly inside `execution_id`.
    ///
    /// Containment is not causation: these never show up in causal traversals.
    pub fn child_executions(&self, execution_id: &str) -> StorageResult<Vec<NodeRecord>> {
        let graph = self.read("child_executions")?;
        Ok(queries::lookup::nested_executions(&graph, execution_id))
    }

    pub fn node_count(&self) -> StorageResult<usize> {
        Ok(self.read("node_count")?.node_count())
    }

    pub fn edge_count(&self) -> StorageResult<usize> {
        Ok(self.read("edge_count")?.edge_count())
    }
}

impl IProvenanceStore for GraphStore {
    fn get_node(&self, id: &str, node_type: NodeType) -> StorageResult<Option<NodeRecord>> {
        let graph = self.read("get_node")?;
        Ok(graph
            .entity(id)
            .filter(|e| e.node_type() == node_type)
            .map(CausalEntity::to_record))
    }

    fn get_parents(&self, id: &str, node_type: NodeType) -> StorageResult<Neighborhood> {
        let graph = self.read("get_parents")?;
        Ok(queries::neighbors::parents(&graph, id, node_type))
    }

    fn get_children(&self, id: &str, node_type: NodeType) -> StorageResult<Neighborhood> {
        let graph = self.read("get_children")?;
        Ok(queries::neighbors::children(&graph, id, node_type))
    }

    fn aggregate_spikes_by_pattern(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StorageResult<Vec<PatternAggregate>> {
        let graph = self.read("aggregate_spikes_by_pattern")?;
        Ok(queries::aggregate::spikes_by_pattern(&graph, start, end))
    }

    fn lookup_by_fingerprint(
        &self,
        fingerprint: &str,
        limit: usize,
    ) -> StorageResult<Vec<NodeRecord>> {
        let graph = self.read("lookup_by_fingerprint")?;
        Ok(queries::lookup::by_fingerprint(&graph, fingerprint, limit))
    }

    fn lookup_by_inference_id(&self, inference_id: &str) -> StorageResult<Neighborhood> {
        let graph = self.read("lookup_by_inference_id")?;
        Ok(queries::lookup::by_inference(&graph, inference_id))
    }
}

impl IProvenanceWriter for GraphStore {
    fn record_spike_event(&self, event: &SpikeEvent) -> StorageResult<()> {
        self.insert(event.clone().into(), &[])
    }

    fn record_routing_decision(
        &self,
        decision: &RoutingDecision,
        causes: &[CausalLink],
    ) -> StorageResult<()> {
        self.insert(decision.clone().into(), causes)
    }

    fn record_agent_action(&self, action: &AgentAction, causes: &[CausalLink]) -> StorageResult<()> {
        self.insert(action.clone().into(), causes)
    }

    fn record_workflow_execution(
        &self,
        execution: &WorkflowExecution,
        causes: &[CausalLink],
    ) -> StorageResult<()> {
        self.insert(execution.clone().into(), causes)
    }

    fn record_external_output(
        &self,
        output: &ExternalOutput,
        causes: &[CausalLink],
    ) -> StorageResult<()> {
        self.insert(output.clone().into(), causes)
    }

    fn complete_agent_action(&self, id: &str, completion: &ActionCompletion) -> StorageResult<()> {
        let mut graph = self.write("complete_agent_action")?;
        queries::completion::complete_action(&mut graph, id, completion)?;
        debug!(id, status = completion.status.as_str(), "agent action completed");
        Ok(())
    }

    fn complete_workflow_execution(
        &self,
        id: &str,
        completion: &WorkflowCompletion,
    ) -> StorageResult<()> {
        let mut graph = self.write("complete_workflow_execution")?;
        queries::completion::complete_workflow(&mut graph, id, completion)?;
        debug!(id, status = completion.status.as_str(), "workflow execution completed");
        Ok(())
    }

    fn update_output_status(&self, id: &str, status: OutputStatus) -> StorageResult<()> {
        let mut graph = self.write("update_output_status")?;
        queries::completion::update_output_status(&mut graph, id, status)?;
        debug!(id, status = status.as_str(), "external output status updated");
        Ok(())
    }
}
