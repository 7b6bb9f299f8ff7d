//! Test fixture loader for provenance golden graphs.
//!
//! Provides typed deserialization of the golden JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root directory of the fixtures (the `test-fixtures` crate directory).
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until a sibling test-fixtures/golden exists.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    loop {
        if path.join("golden").is_dir() && path.ends_with("test-fixtures") {
            return path;
        }
        let candidate = path.join("test-fixtures");
        if candidate.join("golden").is_dir() {
            return candidate;
        }
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

// ---------------------------------------------------------------------------
// Golden graph types
// ---------------------------------------------------------------------------

fn default_confidence() -> f64 {
    1.0
}

/// A link from a fixture entity to one of its causes.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkFixture {
    pub id: String,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpikeFixture {
    pub id: String,
    pub population_id: String,
    #[serde(default)]
    pub layer_index: u32,
    pub neuron_indices: Vec<u32>,
    /// Seconds after the fixture's `base_time`.
    #[serde(default)]
    pub offset_s: i64,
    #[serde(default)]
    pub inference_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecisionFixture {
    pub id: String,
    pub inference_id: String,
    pub decision_type: String,
    #[serde(default)]
    pub causes: Vec<LinkFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionFixture {
    pub id: String,
    pub agent_id: String,
    pub agent_type: String,
    pub action_type: String,
    #[serde(default)]
    pub latency_ms: Option<f64>,
    #[serde(default)]
    pub causes: Vec<LinkFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowFixture {
    pub id: String,
    pub workflow_id: String,
    #[serde(default)]
    pub step_index: u32,
    #[serde(default)]
    pub parent_execution_id: Option<String>,
    #[serde(default)]
    pub causes: Vec<LinkFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputFixture {
    pub id: String,
    pub output_type: String,
    pub content_hash: String,
    #[serde(default)]
    pub causes: Vec<LinkFixture>,
}

/// The five entity lists of a golden graph, each in creation order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GraphFixture {
    pub spikes: Vec<SpikeFixture>,
    pub decisions: Vec<DecisionFixture>,
    pub actions: Vec<ActionFixture>,
    pub workflows: Vec<WorkflowFixture>,
    pub outputs: Vec<OutputFixture>,
}

/// Expected node of a traced path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpectedNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub depth: usize,
}

/// One trace to run against the golden graph and its expected result.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceCase {
    pub output_id: String,
    #[serde(default)]
    pub max_depth: usize,
    pub expected_nodes: Vec<ExpectedNode>,
    pub expected_edge_count: usize,
    pub expected_depth: usize,
    #[serde(default)]
    pub expected_count_by_type: BTreeMap<String, usize>,
    /// Ids that must not appear (e.g. containment-only relatives).
    #[serde(default)]
    pub excluded_ids: Vec<String>,
}

/// A golden traversal fixture: a graph plus the traces to run against it.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceFixture {
    pub description: String,
    /// RFC 3339 anchor for `offset_s` values.
    pub base_time: String,
    pub graph: GraphFixture,
    pub traces: Vec<TraceCase>,
}

/// A series of spike events sharing one firing pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct SpikeSeries {
    pub name: String,
    pub population_id: String,
    #[serde(default)]
    pub layer_index: u32,
    pub neuron_indices: Vec<u32>,
    /// One spike event per offset, in seconds after `base_time`.
    pub offsets_s: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedPattern {
    pub series: String,
    pub occurrence_count: u64,
}

/// A golden emergent-pattern fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternFixture {
    pub description: String,
    pub base_time: String,
    pub series: Vec<SpikeSeries>,
    pub window_start_s: i64,
    pub window_end_s: i64,
    pub min_occurrences: usize,
    /// Expected results in order.
    pub expected: Vec<ExpectedPattern>,
}
