//! Agent decision path: both directions from one action, merged into one report.

use provenance_core::errors::ProvenanceResult;
use provenance_core::models::AgentDecisionPath;
use provenance_core::traits::{Cancellable, IProvenanceStore, NodeRecord};

use super::{trace_effects, trace_origins, WalkOptions};

/// Walk upstream to spikes and decisions, downstream to workflows and outputs.
///
/// The forward walk is skipped if the backward one was cancelled.
pub fn assemble(
    store: &dyn IProvenanceStore,
    agent_id: &str,
    action: NodeRecord,
    options: WalkOptions,
    cancel: &dyn Cancellable,
) -> ProvenanceResult<AgentDecisionPath> {
    let action_id = action.id.clone();
    let origins = trace_origins::trace(store, action.clone(), options, cancel)?;

    let (effects_depth, workflows, outputs, cancelled) = if origins.cancelled {
        (0, Vec::new(), Vec::new(), true)
    } else {
        let effects = trace_effects::trace(store, action, options, cancel)?;
        (
            effects.depth,
            effects.workflows(),
            effects.outputs(),
            effects.cancelled,
        )
    };

    Ok(AgentDecisionPath {
        agent_id: agent_id.to_string(),
        action_id,
        spike_events: origins.spike_events(),
        decisions: origins.decisions(),
        workflows,
        outputs,
        total_depth: origins.depth.max(effects_depth),
        cancelled,
    })
}
