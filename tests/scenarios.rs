//! End-to-end validation scenarios through the public API.

use pipecheck::prelude::*;

fn ids(names: &[&str]) -> Vec<NodeId> {
    names.iter().map(|n| NodeId::from(*n)).collect()
}

fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
    pairs.iter().map(|(s, t)| Edge::new(*s, *t)).collect()
}

fn summary(node_count: usize, edge_count: usize, is_valid: bool) -> PipelineSummary {
    PipelineSummary {
        node_count,
        edge_count,
        is_valid,
    }
}

#[test]
fn single_node_without_edges_is_valid() {
    let result = validate(&ids(&["A"]), &[]).unwrap();
    assert_eq!(result, summary(1, 0, true));
}

#[test]
fn simple_edge_is_valid() {
    let result = validate(&ids(&["A", "B"]), &edges(&[("A", "B")])).unwrap();
    assert_eq!(result, summary(2, 1, true));
}

#[test]
fn two_node_cycle_is_invalid() {
    let result = validate(&ids(&["A", "B"]), &edges(&[("A", "B"), ("B", "A")])).unwrap();
    assert_eq!(result, summary(2, 2, false));
}

#[test]
fn isolated_node_is_invalid() {
    let result = validate(&ids(&["A", "B", "C"]), &edges(&[("A", "B")])).unwrap();
    assert_eq!(result, summary(3, 1, false));
}

#[test]
fn triangle_dag_is_valid() {
    let result = validate(
        &ids(&["A", "B", "C"]),
        &edges(&[("A", "B"), ("B", "C"), ("A", "C")]),
    )
    .unwrap();
    assert_eq!(result, summary(3, 3, true));
}

#[test]
fn empty_pipeline_is_invalid() {
    let result = validate(&[], &[]).unwrap();
    assert_eq!(result, summary(0, 0, false));
}

#[test]
fn single_node_self_loop_is_invalid() {
    let result = validate(&ids(&["A"]), &edges(&[("A", "A")])).unwrap();
    assert_eq!(result, summary(1, 1, false));
}

#[test]
fn duplicate_ids_keep_raw_count_and_are_invalid() {
    let result = validate(&ids(&["A", "B", "A"]), &edges(&[("A", "B")])).unwrap();
    assert_eq!(result, summary(3, 1, false));

    let report = ValidationPipeline::default()
        .validate(&ids(&["A", "A"]), &[])
        .unwrap();
    assert_eq!(
        report.reason,
        Some(Invalidity::DuplicateNodes { ids: ids(&["A"]) })
    );
}

#[test]
fn dangling_endpoint_is_an_error() {
    let err = validate(&ids(&["A", "B"]), &edges(&[("A", "C")])).unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownNode {
            edge_index: 0,
            end: EdgeEnd::Target,
            id: NodeId::from("C"),
        }
    );
}

#[test]
fn components_that_are_each_acyclic_still_fail() {
    let report = ValidationPipeline::default()
        .validate(
            &ids(&["A", "B", "C", "D"]),
            &edges(&[("A", "B"), ("C", "D")]),
        )
        .unwrap();
    assert!(!report.is_valid());
    assert!(matches!(
        report.reason,
        Some(Invalidity::Disconnected { components: 2, .. })
    ));
}

#[test]
fn json_request_round_trip() {
    let body = r#"{
        "pipeline": "etl",
        "nodes": [
            {"id": "extract", "type": "customInput", "position": {"x": 0, "y": 0}},
            {"id": "transform", "data": {"label": "Transform"}},
            {"id": "load"}
        ],
        "edges": [
            {"id": "e1", "source": "extract", "target": "transform", "sourceHandle": "out"},
            {"id": "e2", "source": "transform", "target": "load"}
        ]
    }"#;
    let pipeline = SerializedPipeline::from_json(body).unwrap();
    let response = pipeline.validate().unwrap();

    assert_eq!(
        response,
        PipelineResponse {
            num_nodes: 3,
            num_edges: 2,
            is_dag: true,
        }
    );
}
