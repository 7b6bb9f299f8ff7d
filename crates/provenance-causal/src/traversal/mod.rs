//! Traversal engine: level-synchronous breadth-first walks over the causal chain.
//!
//! Backward walks follow `get_parents` ("what caused this?"), forward walks follow
//! `get_children` ("what did this cause?"). Both share `walk`.

pub mod decision_path;
pub mod trace_effects;
pub mod trace_origins;

use std::collections::HashSet;
use std::fmt;

use rayon::prelude::*;
use tracing::{debug, warn};

use provenance_core::errors::ProvenanceResult;
use provenance_core::models::{CausalNode, CausalPath};
use provenance_core::traits::{Cancellable, IProvenanceStore, Neighborhood, NodeRecord};

/// Which way a walk follows causal edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward causes, via `get_parents`.
    Backward,
    /// Toward effects, via `get_children`.
    Forward,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backward => "backward",
            Self::Forward => "forward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knobs for one walk.
#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
    /// Already normalized: nodes at this depth are recorded but not expanded.
    pub max_depth: usize,
    /// Fetch one level's neighbourhoods on the rayon pool.
    pub parallel: bool,
}

/// Breadth-first walk from an already-resolved root.
///
/// Each level is de-duplicated against the visited set in discovery order, recorded,
/// then expanded unless it sits at the ceiling. Every edge returned by the store is
/// kept, including edges into already-visited nodes. On cancellation the path holds
/// every complete level and `cancelled` is set; a store failure aborts the walk.
pub fn walk(
    store: &dyn IProvenanceStore,
    root: NodeRecord,
    direction: Direction,
    options: WalkOptions,
    cancel: &dyn Cancellable,
) -> ProvenanceResult<CausalPath> {
    let mut path = CausalPath::new(&root.id);
    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier = vec![root];
    let mut depth = 0;

    loop {
        let level: Vec<NodeRecord> = frontier
            .drain(..)
            .filter(|record| visited.insert(record.id.clone()))
            .collect();
        if level.is_empty() {
            break;
        }

        for record in &level {
            path.push_node(CausalNode::from_record(record.clone(), depth));
        }
        debug!(depth, nodes = level.len(), direction = %direction, "level recorded");

        if depth >= options.max_depth {
            break;
        }

        let fetched = if options.parallel {
            fetch_parallel(store, &level, direction, cancel)?
        } else {
            fetch_sequential(store, &level, direction, cancel)?
        };
        let Some(neighborhoods) = fetched else {
            warn!(depth, nodes = path.nodes.len(), "traversal cancelled");
            path.cancelled = true;
            break;
        };

        for hood in neighborhoods {
            path.edges.extend(hood.edges);
            frontier.extend(
                hood.nodes
                    .into_iter()
                    .filter(|n| !visited.contains(&n.id)),
            );
        }
        depth += 1;
    }

    Ok(path)
}

fn fetch_one(
    store: &dyn IProvenanceStore,
    record: &NodeRecord,
    direction: Direction,
) -> ProvenanceResult<Neighborhood> {
    let result = match direction {
        Direction::Backward => store.get_parents(&record.id, record.node_type),
        Direction::Forward => store.get_children(&record.id, record.node_type),
    };
    result.map_err(|e| {
        warn!(id = %record.id, error = %e, "store call failed; aborting traversal");
        e.into()
    })
}

/// `None` when cancelled before the level finished.
fn fetch_sequential(
    store: &dyn IProvenanceStore,
    level: &[NodeRecord],
    direction: Direction,
    cancel: &dyn Cancellable,
) -> ProvenanceResult<Option<Vec<Neighborhood>>> {
    let mut out = Vec::with_capacity(level.len());
    for record in level {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        out.push(fetch_one(store, record, direction)?);
    }
    Ok(Some(out))
}

/// Fan the level out on rayon; results come back in frontier order.
fn fetch_parallel(
    store: &dyn IProvenanceStore,
    level: &[NodeRecord],
    direction: Direction,
    cancel: &dyn Cancellable,
) -> ProvenanceResult<Option<Vec<Neighborhood>>> {
    if cancel.is_cancelled() {
        return Ok(None);
    }
    let out = level
        .par_iter()
        .map(|record| fetch_one(store, record, direction))
        .collect::<ProvenanceResult<Vec<_>>>()?;
    Ok(Some(out))
}
