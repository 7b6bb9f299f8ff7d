//! Store collaborator errors.

use super::error_code::{self, ProvenanceErrorCode};

/// Errors raised by an `IProvenanceStore` / `IProvenanceWriter` implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend could not serve the call (timeout, connection loss, poisoned lock).
    #[error("store unavailable during {operation}: {reason}")]
    Unavailable { operation: String, reason: String },

    /// A write tried to reuse an id. Ids are unique across all five entity kinds.
    #[error("duplicate node id: {id}")]
    DuplicateId { id: String },

    /// A write tried to create an edge the causal schema does not allow.
    #[error("invalid causal link {child_id} -> {parent_id}: {reason}")]
    InvalidLink {
        child_id: String,
        parent_id: String,
        reason: String,
    },

    /// A completion update targeted an id the store does not hold.
    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    /// A completion update targeted an entity already in a terminal state.
    #[error("node {id} already completed with status {status}")]
    AlreadyCompleted { id: String, status: String },

    /// A completion update carried a non-terminal status or an impossible timing.
    #[error("invalid completion for {id}: {reason}")]
    InvalidCompletion { id: String, reason: String },
}

impl StorageError {
    pub fn unavailable(operation: &str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}

impl ProvenanceErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::STORE_UNAVAILABLE,
            Self::DuplicateId { .. } => error_code::DUPLICATE_ID,
            Self::InvalidLink { .. } => error_code::INVALID_LINK,
            Self::UnknownNode { .. } => error_code::UNKNOWN_NODE,
            Self::AlreadyCompleted { .. } => error_code::ALREADY_COMPLETED,
            Self::InvalidCompletion { .. } => error_code::INVALID_COMPLETION,
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
