//! Golden dataset tests: build each fixture graph, run its traces, compare.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use provenance_causal::CausalTracer;
use provenance_core::models::{
    AgentAction, DecisionType, ExternalOutput, OutputType, RoutingDecision, SpikeEvent,
    WorkflowExecution,
};
use provenance_core::traits::{CausalLink, IProvenanceWriter};
use provenance_storage::GraphStore;
use test_fixtures::{list_fixtures, load_fixture, LinkFixture, PatternFixture, TraceFixture};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_time(s: &str) -> DateTime<Utc> {
    s.parse().unwrap_or_else(|e| panic!("bad base_time {s}: {e}"))
}

fn parse_decision(s: &str) -> DecisionType {
    match s {
        "exit" => DecisionType::Exit,
        "skip" => DecisionType::Skip,
        "route" => DecisionType::Route,
        "escalate" => DecisionType::Escalate,
        "iterate" => DecisionType::Iterate,
        other => panic!("unknown decision type {other}"),
    }
}

fn parse_output(s: &str) -> OutputType {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .unwrap_or_else(|e| panic!("unknown output type {s}: {e}"))
}

fn links(causes: &[LinkFixture]) -> Vec<CausalLink> {
    causes
        .iter()
        .map(|c| CausalLink::new(&c.id, c.confidence))
        .collect()
}

fn build_store(fixture: &TraceFixture) -> GraphStore {
    let base = parse_time(&fixture.base_time);
    let graph = &fixture.graph;
    let store = GraphStore::new();

    for s in &graph.spikes {
        let mut event = SpikeEvent::new(&s.population_id, s.layer_index, s.neuron_indices.clone())
            .with_id(&s.id)
            .at(base + Duration::seconds(s.offset_s));
        if let Some(inference) = &s.inference_id {
            event = event.with_inference(inference);
        }
        store.record_spike_event(&event).unwrap();
    }
    for d in &graph.decisions {
        let decision = RoutingDecision::new(&d.inference_id, parse_decision(&d.decision_type))
            .with_id(&d.id)
            .at(base);
        store.record_routing_decision(&decision, &links(&d.causes)).unwrap();
    }
    for a in &graph.actions {
        let mut action = AgentAction::new(&a.agent_id, &a.agent_type, &a.action_type)
            .with_id(&a.id)
            .at(base);
        action.latency_ms = a.latency_ms;
        store.record_agent_action(&action, &links(&a.causes)).unwrap();
    }
    for w in &graph.workflows {
        let mut execution = WorkflowExecution::new(&w.workflow_id, w.step_index)
            .with_id(&w.id)
            .at(base);
        if let Some(container) = &w.parent_execution_id {
            execution = execution.nested_in(container);
        }
        store
            .record_workflow_execution(&execution, &links(&w.causes))
            .unwrap();
    }
    for o in &graph.outputs {
        let output = ExternalOutput::new(parse_output(&o.output_type), &o.content_hash)
            .with_id(&o.id)
            .at(base);
        store.record_external_output(&output, &links(&o.causes)).unwrap();
    }
    store
}

// ---------------------------------------------------------------------------
// Traversal goldens
// ---------------------------------------------------------------------------

fn run_trace_fixture(name: &str) {
    let fixture: TraceFixture = load_fixture(&format!("golden/provenance/{name}"));
    let tracer = CausalTracer::new(Arc::new(build_store(&fixture)));

    for case in &fixture.traces {
        let path = tracer
            .trace_causality(&case.output_id, case.max_depth)
            .unwrap_or_else(|e| panic!("{name}: {e}"));

        let actual: Vec<(String, String, usize)> = path
            .nodes
            .iter()
            .map(|n| (n.id.clone(), n.node_type.as_str().to_string(), n.depth))
            .collect();
        let expected: Vec<(String, String, usize)> = case
            .expected_nodes
            .iter()
            .map(|n| (n.id.clone(), n.node_type.clone(), n.depth))
            .collect();
        assert_eq!(actual, expected, "{name}: {}", fixture.description);
        assert_eq!(path.edges.len(), case.expected_edge_count, "{name}: edge count");
        assert_eq!(path.depth, case.expected_depth, "{name}: depth");

        if !case.expected_count_by_type.is_empty() {
            let counts = serde_json::to_value(path.count_by_type()).unwrap();
            let expected = serde_json::to_value(&case.expected_count_by_type).unwrap();
            assert_eq!(counts, expected, "{name}: count_by_type");
        }
        for id in &case.excluded_ids {
            assert!(!path.contains(id), "{name}: {id} must not be traced");
        }
    }
}

#[test]
fn golden_linear_chain() {
    run_trace_fixture("linear_chain.json");
}

#[test]
fn golden_fan_in() {
    run_trace_fixture("fan_in.json");
}

#[test]
fn golden_multi_workflow() {
    run_trace_fixture("multi_workflow.json");
}

#[test]
fn golden_nested_workflows() {
    run_trace_fixture("nested_workflows.json");
}

#[test]
fn golden_root_only() {
    run_trace_fixture("root_only.json");
}

#[test]
fn every_trace_golden_is_covered() {
    let covered = [
        "linear_chain.json",
        "fan_in.json",
        "multi_workflow.json",
        "nested_workflows.json",
        "root_only.json",
        "patterns_window.json",
    ];
    for path in list_fixtures("golden/provenance") {
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(covered.contains(&name.as_str()), "golden {name} has no test");
    }
}

// ---------------------------------------------------------------------------
// Pattern golden
// ---------------------------------------------------------------------------

#[test]
fn golden_patterns_window() {
    let fixture: PatternFixture = load_fixture("golden/provenance/patterns_window.json");
    let base = parse_time(&fixture.base_time);
    let store = GraphStore::new();

    let mut hash_of = std::collections::HashMap::new();
    for series in &fixture.series {
        for (i, offset) in series.offsets_s.iter().enumerate() {
            let event = SpikeEvent::new(
                &series.population_id,
                series.layer_index,
                series.neuron_indices.clone(),
            )
            .with_id(&format!("{}-{i}", series.name))
            .at(base + Duration::seconds(*offset));
            hash_of.insert(series.name.clone(), event.pattern_hash.clone());
            store.record_spike_event(&event).unwrap();
        }
    }

    let tracer = CausalTracer::new(Arc::new(store));
    let found = tracer
        .find_emergent_patterns(
            base + Duration::seconds(fixture.window_start_s),
            base + Duration::seconds(fixture.window_end_s),
            fixture.min_occurrences,
        )
        .unwrap();

    assert_eq!(found.len(), fixture.expected.len(), "{}", fixture.description);
    for (pattern, expected) in found.iter().zip(&fixture.expected) {
        assert_eq!(pattern.pattern_hash, hash_of[&expected.series]);
        assert_eq!(pattern.occurrence_count, expected.occurrence_count);
        assert!(pattern.significance > 0.0);
    }
}
