//! # provenance-storage
//!
//! `GraphStore`: an in-memory provenance store built on a petgraph `StableGraph`.
//! Implements the read contract the tracer consumes and the validated write paths
//! the producing subsystems use. Secondary indexes cover pattern fingerprints,
//! inference ids, and nested-workflow containment.

pub mod engine;
pub mod graph;
pub mod queries;

pub use engine::GraphStore;
