//! Forward traversal: "what did this cause?" Follows child edges.

use provenance_core::errors::ProvenanceResult;
use provenance_core::models::CausalPath;
use provenance_core::traits::{Cancellable, IProvenanceStore, NodeRecord};

use super::{walk, Direction, WalkOptions};

/// Trace forward from `root` to its transitive effects.
pub fn trace(
    store: &dyn IProvenanceStore,
    root: NodeRecord,
    options: WalkOptions,
    cancel: &dyn Cancellable,
) -> ProvenanceResult<CausalPath> {
    walk(store, root, Direction::Forward, options, cancel)
}
