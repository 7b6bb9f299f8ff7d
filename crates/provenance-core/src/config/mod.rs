//! Configuration for the provenance tracer.
//! TOML-based, resolved as: env > file > compiled defaults.

pub mod defaults;
pub mod observability_config;
pub mod pattern_config;
pub mod provenance_config;
pub mod tracer_config;

pub use observability_config::ObservabilityConfig;
pub use pattern_config::PatternConfig;
pub use provenance_config::ProvenanceConfig;
pub use tracer_config::TracerConfig;
