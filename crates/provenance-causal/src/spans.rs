//! Span definitions per tracer operation.

/// Span for a backward or forward causal traversal.
#[macro_export]
macro_rules! trace_span {
    ($anchor_id:expr, $direction:expr, $max_depth:expr) => {
        tracing::info_span!(
            "provenance.trace",
            anchor_id = %$anchor_id,
            direction = %$direction,
            max_depth = $max_depth
        )
    };
}

/// Span for assembling an agent decision path.
#[macro_export]
macro_rules! decision_path_span {
    ($agent_id:expr, $action_id:expr) => {
        tracing::info_span!("provenance.decision_path", agent_id = %$agent_id, action_id = %$action_id)
    };
}

/// Span for emergent pattern detection.
#[macro_export]
macro_rules! patterns_span {
    ($min_occurrences:expr) => {
        tracing::info_span!("provenance.patterns", min_occurrences = $min_occurrences)
    };
}

/// Span for an index lookup.
#[macro_export]
macro_rules! lookup_span {
    ($index:expr, $key:expr) => {
        tracing::info_span!("provenance.lookup", index = $index, key = %$key)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TRACE: &str = "provenance.trace";
    pub const DECISION_PATH: &str = "provenance.decision_path";
    pub const PATTERNS: &str = "provenance.patterns";
    pub const LOOKUP: &str = "provenance.lookup";
}
