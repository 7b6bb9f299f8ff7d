// Single source of truth for all default values.

// --- Tracer ---
pub const DEFAULT_MAX_DEPTH: usize = 100;
pub const DEFAULT_MIN_OCCURRENCES: usize = 5;
pub const DEFAULT_LOOKUP_LIMIT: usize = 100;
pub const DEFAULT_PARALLEL_FETCH: bool = false;

// --- Patterns ---
pub const DEFAULT_BASELINE_FIRING_PROBABILITY: f64 = 0.05;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const LOG_ENV_VAR: &str = "PROVENANCE_LOG";
