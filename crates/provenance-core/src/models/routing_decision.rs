//! RoutingDecision: a gate decision taken during an inference, caused by spike events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the router decided to do at a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    Exit,
    Skip,
    Route,
    Escalate,
    Iterate,
}

impl DecisionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Skip => "skip",
            Self::Route => "route",
            Self::Escalate => "escalate",
            Self::Iterate => "iterate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub inference_id: String,
    pub decision_type: DecisionType,
    #[serde(default)]
    pub layer_index: u32,
    /// Gate network output, 0.0–1.0.
    #[serde(default)]
    pub gate_probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_model: Option<String>,
    #[serde(default)]
    pub iteration_count: u32,
    /// Confidence in the decision, 0.0–1.0.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl RoutingDecision {
    pub fn new(inference_id: &str, decision_type: DecisionType) -> Self {
        Self {
            id: super::new_node_id(),
            timestamp: Utc::now(),
            inference_id: inference_id.to_string(),
            decision_type,
            layer_index: 0,
            gate_probability: 0.0,
            selected_model: None,
            iteration_count: 0,
            confidence: 0.0,
            domain: None,
            metadata: serde_json::Value::Null,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
