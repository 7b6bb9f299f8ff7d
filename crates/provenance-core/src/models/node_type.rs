//! Node kinds of the causal chain and the edge kinds linking adjacent levels.

use serde::{Deserialize, Serialize};

/// The five entity kinds, ordered from root cause to terminal observable:
/// SpikeEvent → RoutingDecision → AgentAction → WorkflowExecution → ExternalOutput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    SpikeEvent,
    RoutingDecision,
    AgentAction,
    WorkflowExecution,
    ExternalOutput,
}

impl NodeType {
    pub const COUNT: usize = 5;

    /// All variants in causal order (root first).
    pub const ALL: [NodeType; 5] = [
        Self::SpikeEvent,
        Self::RoutingDecision,
        Self::AgentAction,
        Self::WorkflowExecution,
        Self::ExternalOutput,
    ];

    /// The kind of this node's immediate causes. `None` for spike events.
    pub fn parent_type(&self) -> Option<NodeType> {
        match self {
            Self::SpikeEvent => None,
            Self::RoutingDecision => Some(Self::SpikeEvent),
            Self::AgentAction => Some(Self::RoutingDecision),
            Self::WorkflowExecution => Some(Self::AgentAction),
            Self::ExternalOutput => Some(Self::WorkflowExecution),
        }
    }

    /// The kind of this node's immediate effects. `None` for external outputs.
    pub fn child_type(&self) -> Option<NodeType> {
        match self {
            Self::SpikeEvent => Some(Self::RoutingDecision),
            Self::RoutingDecision => Some(Self::AgentAction),
            Self::AgentAction => Some(Self::WorkflowExecution),
            Self::WorkflowExecution => Some(Self::ExternalOutput),
            Self::ExternalOutput => None,
        }
    }

    /// Position in the chain, 0 for spike events.
    pub fn level(&self) -> usize {
        match self {
            Self::SpikeEvent => 0,
            Self::RoutingDecision => 1,
            Self::AgentAction => 2,
            Self::WorkflowExecution => 3,
            Self::ExternalOutput => 4,
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "spike_event" => Some(Self::SpikeEvent),
            "routing_decision" => Some(Self::RoutingDecision),
            "agent_action" => Some(Self::AgentAction),
            "workflow_execution" => Some(Self::WorkflowExecution),
            "external_output" => Some(Self::ExternalOutput),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpikeEvent => "spike_event",
            Self::RoutingDecision => "routing_decision",
            Self::AgentAction => "agent_action",
            Self::WorkflowExecution => "workflow_execution",
            Self::ExternalOutput => "external_output",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of an effect → cause edge, determined by the effect's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// ExternalOutput → WorkflowExecution.
    ProducedBy,
    /// WorkflowExecution → AgentAction.
    ExecutedBy,
    /// AgentAction → RoutingDecision.
    TriggeredBy,
    /// RoutingDecision → SpikeEvent.
    CausedBy,
}

impl EdgeType {
    /// Edge kind for an edge whose effect (source) is of kind `child`.
    pub fn for_child(child: NodeType) -> Option<Self> {
        match child {
            NodeType::ExternalOutput => Some(Self::ProducedBy),
            NodeType::WorkflowExecution => Some(Self::ExecutedBy),
            NodeType::AgentAction => Some(Self::TriggeredBy),
            NodeType::RoutingDecision => Some(Self::CausedBy),
            NodeType::SpikeEvent => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProducedBy => "produced_by",
            Self::ExecutedBy => "executed_by",
            Self::TriggeredBy => "triggered_by",
            Self::CausedBy => "caused_by",
        }
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
