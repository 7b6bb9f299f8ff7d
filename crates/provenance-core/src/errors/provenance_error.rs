//! Top-level error returned by tracer operations.

use super::error_code::{self, ProvenanceErrorCode};
use super::{ConfigError, StorageError};
use crate::models::NodeType;

/// Errors surfaced to callers of the tracer.
///
/// A depth-ceiling truncation is not an error, and non-positive limits are
/// normalized to defaults rather than rejected.
#[derive(Debug, thiserror::Error)]
pub enum ProvenanceError {
    /// The anchor node of a trace does not exist.
    #[error("{node_type} not found: {id}")]
    NotFound { node_type: NodeType, id: String },

    /// A store call failed; the in-flight traversal was aborted.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ProvenanceError {
    pub fn not_found(node_type: NodeType, id: &str) -> Self {
        Self::NotFound {
            node_type,
            id: id.to_string(),
        }
    }
}

impl ProvenanceErrorCode for ProvenanceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::StoreUnavailable(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type ProvenanceResult<T> = Result<T, ProvenanceError>;
