//! The single completion update each action, workflow, or output may receive.
//!
//! A completion must move the entity into a terminal state, so a second
//! update always hits `AlreadyCompleted`.

use provenance_core::errors::{StorageError, StorageResult};
use provenance_core::models::{ActionCompletion, CausalEntity, OutputStatus, WorkflowCompletion};

use crate::graph::IndexedGraph;

pub fn complete_action(
    graph: &mut IndexedGraph,
    id: &str,
    completion: &ActionCompletion,
) -> StorageResult<()> {
    let Some(CausalEntity::AgentAction(action)) = graph.entity_mut(id) else {
        return Err(unknown(id));
    };
    if action.status.is_terminal() {
        return Err(already_completed(id, action.status.as_str()));
    }
    if !completion.status.is_terminal() {
        return Err(non_terminal(id, completion.status.as_str()));
    }
    if completion.latency_ms.is_some_and(|ms| ms < 0.0 || ms.is_nan()) {
        return Err(invalid(id, "latency_ms must be non-negative"));
    }
    action.status = completion.status;
    action.result = completion.result.clone();
    action.error = completion.error.clone();
    if completion.latency_ms.is_some() {
        action.latency_ms = completion.latency_ms;
    }
    Ok(())
}

pub fn complete_workflow(
    graph: &mut IndexedGraph,
    id: &str,
    completion: &WorkflowCompletion,
) -> StorageResult<()> {
    let Some(CausalEntity::WorkflowExecution(execution)) = graph.entity_mut(id) else {
        return Err(unknown(id));
    };
    if execution.status.is_terminal() {
        return Err(already_completed(id, execution.status.as_str()));
    }
    if !completion.status.is_terminal() {
        return Err(non_terminal(id, completion.status.as_str()));
    }
    if completion.completed_at < execution.started_at {
        return Err(invalid(id, "completed_at precedes started_at"));
    }
    if completion.duration_ms.is_some_and(|ms| ms < 0.0 || ms.is_nan()) {
        return Err(invalid(id, "duration_ms must be non-negative"));
    }
    let elapsed = completion.completed_at - execution.started_at;
    execution.status = completion.status;
    execution.completed_at = Some(completion.completed_at);
    execution.error = completion.error.clone();
    execution.duration_ms = completion
        .duration_ms
        .or_else(|| elapsed.num_microseconds().map(|us| us as f64 / 1000.0));
    Ok(())
}

pub fn update_output_status(
    graph: &mut IndexedGraph,
    id: &str,
    status: OutputStatus,
) -> StorageResult<()> {
    let Some(CausalEntity::ExternalOutput(output)) = graph.entity_mut(id) else {
        return Err(unknown(id));
    };
    if output.status.is_terminal() {
        return Err(already_completed(id, output.status.as_str()));
    }
    if !status.is_terminal() {
        return Err(non_terminal(id, status.as_str()));
    }
    output.status = status;
    Ok(())
}

fn unknown(id: &str) -> StorageError {
    StorageError::UnknownNode { id: id.to_string() }
}

fn already_completed(id: &str, status: &str) -> StorageError {
    StorageError::AlreadyCompleted {
        id: id.to_string(),
        status: status.to_string(),
    }
}

fn non_terminal(id: &str, status: &str) -> StorageError {
    invalid(id, &format!("status {status} is not terminal"))
}

fn invalid(id: &str, reason: &str) -> StorageError {
    StorageError::InvalidCompletion {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
