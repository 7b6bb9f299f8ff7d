//! # provenance-core
//!
//! Foundation crate for the causal provenance tracer.
//! Defines the five-level causal model, the store traits, errors, config, and defaults.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod fingerprint;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ProvenanceConfig;
pub use errors::{ProvenanceError, ProvenanceResult, StorageError, StorageResult};
pub use models::{
    AgentDecisionPath, CausalEdge, CausalNode, CausalPath, EdgeType, EmergentPattern, NodeType,
};
pub use traits::{
    Cancellable, CancellationToken, IProvenanceStore, IProvenanceWriter, NodeRecord,
};
