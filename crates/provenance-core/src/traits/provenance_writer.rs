use serde::{Deserialize, Serialize};

use crate::errors::StorageResult;
use crate::models::{
    ActionCompletion, AgentAction, ExternalOutput, OutputStatus, RoutingDecision, SpikeEvent,
    WorkflowCompletion, WorkflowExecution,
};

/// A link from a new entity to one of its immediate causes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalLink {
    pub parent_id: String,
    /// Certainty of the link, 0.0–1.0.
    pub confidence: f64,
}

impl CausalLink {
    pub fn new(parent_id: &str, confidence: f64) -> Self {
        Self {
            parent_id: parent_id.to_string(),
            confidence,
        }
    }

    /// A structurally guaranteed link (confidence 1.0).
    pub fn certain(parent_id: &str) -> Self {
        Self::new(parent_id, 1.0)
    }
}

/// Write side of the store collaborator.
///
/// Entities are write-once. Links must point one level up the chain.
/// The only later mutation is a single completion update.
pub trait IProvenanceWriter: Send + Sync {
    // --- Create ---
    fn record_spike_event(&self, event: &SpikeEvent) -> StorageResult<()>;
    fn record_routing_decision(
        &self,
        decision: &RoutingDecision,
        causes: &[CausalLink],
    ) -> StorageResult<()>;
    fn record_agent_action(&self, action: &AgentAction, causes: &[CausalLink])
        -> StorageResult<()>;
    fn record_workflow_execution(
        &self,
        execution: &WorkflowExecution,
        causes: &[CausalLink],
    ) -> StorageResult<()>;
    fn record_external_output(
        &self,
        output: &ExternalOutput,
        causes: &[CausalLink],
    ) -> StorageResult<()>;

    // --- Completion ---
    fn complete_agent_action(&self, id: &str, completion: &ActionCompletion) -> StorageResult<()>;
    fn complete_workflow_execution(
        &self,
        id: &str,
        completion: &WorkflowCompletion,
    ) -> StorageResult<()>;
    fn update_output_status(&self, id: &str, status: OutputStatus) -> StorageResult<()>;
}
