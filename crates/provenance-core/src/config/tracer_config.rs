use serde::{Deserialize, Serialize};

use super::defaults;

/// Traversal and lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    /// Depth ceiling used when a caller passes 0.
    pub default_max_depth: usize,
    /// Occurrence threshold used when a caller passes 0.
    pub default_min_occurrences: usize,
    /// Index lookup limit used when a caller passes 0.
    pub default_lookup_limit: usize,
    /// Fetch the neighbours of one BFS level concurrently.
    pub parallel_fetch: bool,
}

impl TracerConfig {
    pub fn max_depth_or_default(&self, max_depth: usize) -> usize {
        if max_depth == 0 {
            self.default_max_depth
        } else {
            max_depth
        }
    }

    pub fn min_occurrences_or_default(&self, min_occurrences: usize) -> usize {
        if min_occurrences == 0 {
            self.default_min_occurrences
        } else {
            min_occurrences
        }
    }

    pub fn lookup_limit_or_default(&self, limit: usize) -> usize {
        if limit == 0 {
            self.default_lookup_limit
        } else {
            limit
        }
    }
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            default_max_depth: defaults::DEFAULT_MAX_DEPTH,
            default_min_occurrences: defaults::DEFAULT_MIN_OCCURRENCES,
            default_lookup_limit: defaults::DEFAULT_LOOKUP_LIMIT,
            parallel_fetch: defaults::DEFAULT_PARALLEL_FETCH,
        }
    }
}
