//! Type-erased entity held by a store, and its projection to a `NodeRecord`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{AgentAction, ExternalOutput, NodeType, RoutingDecision, SpikeEvent, WorkflowExecution};
use crate::traits::NodeRecord;

/// Any one of the five causal entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CausalEntity {
    SpikeEvent(SpikeEvent),
    RoutingDecision(RoutingDecision),
    AgentAction(AgentAction),
    WorkflowExecution(WorkflowExecution),
    ExternalOutput(ExternalOutput),
}

impl CausalEntity {
    pub fn id(&self) -> &str {
        match self {
            Self::SpikeEvent(e) => &e.id,
            Self::RoutingDecision(e) => &e.id,
            Self::AgentAction(e) => &e.id,
            Self::WorkflowExecution(e) => &e.id,
            Self::ExternalOutput(e) => &e.id,
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Self::SpikeEvent(_) => NodeType::SpikeEvent,
            Self::RoutingDecision(_) => NodeType::RoutingDecision,
            Self::AgentAction(_) => NodeType::AgentAction,
            Self::WorkflowExecution(_) => NodeType::WorkflowExecution,
            Self::ExternalOutput(_) => NodeType::ExternalOutput,
        }
    }

    /// Creation time. Workflow executions use `started_at`.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::SpikeEvent(e) => e.timestamp,
            Self::RoutingDecision(e) => e.timestamp,
            Self::AgentAction(e) => e.timestamp,
            Self::WorkflowExecution(e) => e.started_at,
            Self::ExternalOutput(e) => e.timestamp,
        }
    }

    /// The inference run this entity belongs to, if it carries one.
    pub fn inference_id(&self) -> Option<&str> {
        match self {
            Self::SpikeEvent(e) => e.inference_id.as_deref(),
            Self::RoutingDecision(e) => Some(&e.inference_id),
            _ => None,
        }
    }

    /// Self-reported latency: action latency or workflow duration.
    pub fn latency_ms(&self) -> Option<f64> {
        match self {
            Self::AgentAction(e) => e.latency_ms,
            Self::WorkflowExecution(e) => e.duration_ms,
            _ => None,
        }
    }

    /// Project to the record shape returned by store lookups.
    pub fn to_record(&self) -> NodeRecord {
        NodeRecord {
            id: self.id().to_string(),
            node_type: self.node_type(),
            timestamp: self.timestamp(),
            latency_ms: self.latency_ms(),
            metadata: self.key_attributes(),
        }
    }

    fn key_attributes(&self) -> Map<String, Value> {
        let value = match self {
            Self::SpikeEvent(e) => json!({
                "population_id": e.population_id,
                "layer_index": e.layer_index,
                "neuron_indices": e.neuron_indices,
                "pattern_hash": e.pattern_hash,
                "entropy": e.entropy,
                "is_emergent": e.is_emergent,
            }),
            Self::RoutingDecision(e) => json!({
                "inference_id": e.inference_id,
                "decision_type": e.decision_type.as_str(),
                "layer_index": e.layer_index,
                "gate_probability": e.gate_probability,
                "confidence": e.confidence,
                "selected_model": e.selected_model,
            }),
            Self::AgentAction(e) => json!({
                "agent_id": e.agent_id,
                "agent_type": e.agent_type,
                "action_type": e.action_type,
                "status": e.status.as_str(),
                "session_id": e.session_id,
                "user_id": e.user_id,
            }),
            Self::WorkflowExecution(e) => json!({
                "workflow_id": e.workflow_id,
                "step_index": e.step_index,
                "status": e.status.as_str(),
                "parent_execution_id": e.parent_execution_id,
            }),
            Self::ExternalOutput(e) => json!({
                "output_type": e.output_type.as_str(),
                "destination": e.destination,
                "destination_id": e.destination_id,
                "transaction_id": e.transaction_id,
                "content_hash": e.content_hash,
                "status": e.status.as_str(),
                "domain": e.domain,
                "compliance": e.compliance,
            }),
        };
        match value {
            Value::Object(map) => map
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .collect(),
            _ => Map::new(),
        }
    }
}

impl From<SpikeEvent> for CausalEntity {
    fn from(e: SpikeEvent) -> Self {
        Self::SpikeEvent(e)
    }
}

impl From<RoutingDecision> for CausalEntity {
    fn from(e: RoutingDecision) -> Self {
        Self::RoutingDecision(e)
    }
}

impl From<AgentAction> for CausalEntity {
    fn from(e: AgentAction) -> Self {
        Self::AgentAction(e)
    }
}

impl From<WorkflowExecution> for CausalEntity {
    fn from(e: WorkflowExecution) -> Self {
        Self::WorkflowExecution(e)
    }
}

impl From<ExternalOutput> for CausalEntity {
    fn from(e: ExternalOutput) -> Self {
        Self::ExternalOutput(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DecisionType, OutputType};

    #[test]
    fn record_carries_key_attributes() {
        let mut action = AgentAction::new("agent-1", "aria", "submit_trade").with_id("act-1");
        action.latency_ms = Some(12.5);
        let record = CausalEntity::from(action).to_record();

        assert_eq!(record.id, "act-1");
        assert_eq!(record.node_type, NodeType::AgentAction);
        assert_eq!(record.latency_ms, Some(12.5));
        assert_eq!(record.attribute_str("agent_id"), Some("agent-1"));
        assert_eq!(record.attribute_str("status"), Some("pending"));
        // Unset optionals are dropped rather than serialized as null.
        assert!(!record.metadata.contains_key("session_id"));
    }

    #[test]
    fn output_record_carries_compliance_and_settlement_ids() {
        let mut output = ExternalOutput::new(OutputType::TradeExecution, "sha256:ff").with_id("out-1");
        output.transaction_id = Some("0xabc".to_string());
        output.destination_id = Some("acct-9".to_string());
        output.compliance = json!({ "regime": "SEC", "rule": "17a-4" });
        let record = CausalEntity::from(output).to_record();

        assert_eq!(record.attribute_str("transaction_id"), Some("0xabc"));
        assert_eq!(record.attribute_str("destination_id"), Some("acct-9"));
        assert_eq!(record.metadata["compliance"]["regime"], "SEC");

        let bare = CausalEntity::from(ExternalOutput::new(OutputType::Document, "h")).to_record();
        assert!(!bare.metadata.contains_key("compliance"));
        assert!(!bare.metadata.contains_key("transaction_id"));
    }

    #[test]
    fn inference_id_only_on_spikes_and_decisions() {
        let spike = SpikeEvent::new("pop", 0, vec![1]).with_inference("inf-1");
        let decision = RoutingDecision::new("inf-2", DecisionType::Route);
        let output = ExternalOutput::new(OutputType::Document, "h");

        assert_eq!(CausalEntity::from(spike).inference_id(), Some("inf-1"));
        assert_eq!(CausalEntity::from(decision).inference_id(), Some("inf-2"));
        assert_eq!(CausalEntity::from(output).inference_id(), None);
    }
}
