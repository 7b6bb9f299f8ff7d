//! The five-level causal model and the tracer's result records.

pub mod agent_action;
pub mod causal_path;
pub mod decision_path;
pub mod emergent_pattern;
pub mod entity;
pub mod external_output;
pub mod node_type;
pub mod routing_decision;
pub mod spike_event;
pub mod workflow_execution;

pub use agent_action::{ActionCompletion, ActionStatus, AgentAction};
pub use causal_path::{CausalEdge, CausalNode, CausalPath};
pub use decision_path::AgentDecisionPath;
pub use emergent_pattern::{EmergentPattern, PatternAggregate};
pub use entity::CausalEntity;
pub use external_output::{ExternalOutput, OutputStatus, OutputType};
pub use node_type::{EdgeType, NodeType};
pub use routing_decision::{DecisionType, RoutingDecision};
pub use spike_event::SpikeEvent;
pub use workflow_execution::{WorkflowCompletion, WorkflowExecution, WorkflowStatus};

/// Generate a fresh globally unique node id.
pub fn new_node_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
