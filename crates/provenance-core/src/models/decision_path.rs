//! AgentDecisionPath: the causal neighbourhood of one agent action.

use serde::{Deserialize, Serialize};

use super::CausalNode;

/// Upstream causes and downstream effects of a single action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDecisionPath {
    pub agent_id: String,
    pub action_id: String,
    pub spike_events: Vec<CausalNode>,
    pub decisions: Vec<CausalNode>,
    pub workflows: Vec<CausalNode>,
    pub outputs: Vec<CausalNode>,
    /// Max of the backward and forward traversal depths.
    pub total_depth: usize,
    #[serde(default)]
    pub cancelled: bool,
}
