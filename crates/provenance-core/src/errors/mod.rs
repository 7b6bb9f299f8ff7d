//! Error handling for the provenance tracer.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod provenance_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::ProvenanceErrorCode;
pub use provenance_error::{ProvenanceError, ProvenanceResult};
pub use storage_error::{StorageError, StorageResult};
