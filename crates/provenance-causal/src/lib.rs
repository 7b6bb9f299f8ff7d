//! # provenance-causal
//!
//! The causal provenance tracer. Walks the five-level causal chain
//! (spike event → routing decision → agent action → workflow execution → external output)
//! through an injected `IProvenanceStore`, and scores recurring spike patterns.

pub mod engine;
pub mod patterns;
pub mod spans;
pub mod tracing_setup;
pub mod traversal;

pub use engine::CausalTracer;
pub use patterns::{PoissonBaseline, SignificanceModel};
pub use traversal::Direction;
