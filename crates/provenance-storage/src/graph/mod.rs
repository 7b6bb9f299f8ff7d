//! Graph representation: the indexed `StableGraph` and write-time link validation.

pub mod indexed_graph;
pub mod validation;

pub use indexed_graph::{IndexedGraph, LinkWeight};
