//! Backward traversal: "what caused this?" Follows parent edges.

use provenance_core::errors::ProvenanceResult;
use provenance_core::models::CausalPath;
use provenance_core::traits::{Cancellable, IProvenanceStore, NodeRecord};

use super::{walk, Direction, WalkOptions};

/// Trace backward from `root` to its transitive causes.
pub fn trace(
    store: &dyn IProvenanceStore,
    root: NodeRecord,
    options: WalkOptions,
    cancel: &dyn Cancellable,
) -> ProvenanceResult<CausalPath> {
    walk(store, root, Direction::Backward, options, cancel)
}
