//! AgentAction: an action taken by an agent, triggered by routing decisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Pending,
    Executing,
    Completed,
    Failed,
    Cancelled,
}

impl ActionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Executing => "executing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentAction {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub agent_id: String,
    /// aria, persona, conductor, ...
    pub agent_type: String,
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_resource: Option<String>,
    pub status: ActionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl AgentAction {
    pub fn new(agent_id: &str, agent_type: &str, action_type: &str) -> Self {
        Self {
            id: super::new_node_id(),
            timestamp: Utc::now(),
            agent_id: agent_id.to_string(),
            agent_type: agent_type.to_string(),
            action_type: action_type.to_string(),
            action_name: None,
            target_resource: None,
            status: ActionStatus::Pending,
            result: None,
            error: None,
            latency_ms: None,
            session_id: None,
            user_id: None,
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

/// The one-time completion update an action receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCompletion {
    pub status: ActionStatus,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
}
