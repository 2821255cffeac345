use super::*;
use crate::error::GraphError;
use serde_json::json;

fn graph_with(keys: &[&str]) -> Graph {
    let mut graph = Graph::new("name");
    graph
        .insert(keys.iter().map(|k| json!({ "name": k })))
        .unwrap();
    graph
}

/// S -> A (4), S -> B (1), B -> A (2), A -> C (1), B -> C (5), D isolated
fn weighted() -> Graph {
    let mut graph = graph_with(&["S", "A", "B", "C", "D"]);
    graph.link("S").to_weighted(&["A", "B"], &[4.0, 1.0]).unwrap();
    graph.link("B").to_weighted(&["A", "C"], &[2.0, 5.0]).unwrap();
    graph.link("A").to_weighted(&["C"], &[1.0]).unwrap();
    graph
}

#[test]
fn test_dijkstra_distances() {
    let paths = dijkstra(&weighted(), "S").unwrap();

    assert_eq!(paths.source(), "S");
    assert_eq!(paths.distance("S"), Some(0.0));
    assert_eq!(paths.distance("B"), Some(1.0));
    assert_eq!(paths.distance("A"), Some(3.0));
    assert_eq!(paths.distance("C"), Some(4.0));
    assert_eq!(paths.distance("D"), Some(f64::INFINITY));
    assert_eq!(paths.distance("Nerva"), None);
    assert_eq!(paths.distances().len(), 5);
}

#[test]
fn test_dijkstra_path_reconstruction() {
    let paths = dijkstra(&weighted(), "S").unwrap();

    assert_eq!(
        paths.path_to("C").unwrap(),
        vec!["S".to_string(), "B".to_string(), "A".to_string(), "C".to_string()]
    );
    assert_eq!(paths.path_to("S").unwrap(), vec!["S".to_string()]);
    assert!(paths.path_to("D").is_none());
    assert!(!paths.is_reachable("D"));
}

#[test]
fn test_dijkstra_rejects_negative_weight() {
    let mut graph = weighted();
    graph.link("C").to_weighted(&["D"], &[-0.5]).unwrap();

    let err = dijkstra(&graph, "S").unwrap_err();
    assert!(matches!(
        err,
        GraphError::InvalidWeight { ref from, ref to, weight }
            if from == "C" && to == "D" && weight == -0.5
    ));
}

#[test]
fn test_dijkstra_rejects_nan_weight() {
    let mut graph = graph_with(&["A", "B"]);
    graph.link("A").to_weighted(&["B"], &[f64::NAN]).unwrap();

    assert!(matches!(
        dijkstra(&graph, "A").unwrap_err(),
        GraphError::InvalidWeight { .. }
    ));
}

#[test]
fn test_dijkstra_missing_start() {
    let err = dijkstra(&weighted(), "Nerva").unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound { .. }));
}

#[test]
fn test_unweighted_edges_use_default_weight() {
    let mut graph = graph_with(&["A", "B", "C"]);
    graph.link("A").to(&["B"]);
    graph.link("B").to(&["C"]);

    let paths = dijkstra(&graph, "A").unwrap();
    assert_eq!(paths.distance("C"), Some(2.0));
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = graph_with(&["A", "B", "C"]);
    graph.link("A").to_weighted(&["B"], &[0.0]).unwrap();
    graph.link("B").to_weighted(&["C"], &[0.0]).unwrap();

    let paths = dijkstra(&graph, "A").unwrap();
    assert_eq!(paths.distance("C"), Some(0.0));
}

#[test]
fn test_bellman_ford_matches_dijkstra() {
    let graph = weighted();
    let expected = dijkstra(&graph, "S").unwrap();
    let actual = bellman_ford(&graph, "S").unwrap();

    assert_eq!(actual.distances(), expected.distances());
    assert_eq!(actual.path_to("C"), expected.path_to("C"));
}

#[test]
fn test_bellman_ford_negative_edge() {
    // S -> A (4), S -> B (5), B -> A (-3): A is cheaper through B
    let mut graph = graph_with(&["S", "A", "B"]);
    graph.link("S").to_weighted(&["A", "B"], &[4.0, 5.0]).unwrap();
    graph.link("B").to_weighted(&["A"], &[-3.0]).unwrap();

    let paths = bellman_ford(&graph, "S").unwrap();
    assert_eq!(paths.distance("A"), Some(2.0));
    assert_eq!(
        paths.path_to("A").unwrap(),
        vec!["S".to_string(), "B".to_string(), "A".to_string()]
    );
}

#[test]
fn test_bellman_ford_negative_two_cycle() {
    let mut graph = graph_with(&["A", "B"]);
    graph.link("A").to_weighted(&["B"], &[-1.0]).unwrap();
    graph.link("B").to_weighted(&["A"], &[-1.0]).unwrap();

    let err = bellman_ford(&graph, "A").unwrap_err();
    assert!(matches!(err, GraphError::NegativeCycle { .. }));
}

#[test]
fn test_bellman_ford_negative_self_loop() {
    let mut graph = graph_with(&["A"]);
    graph.link("A").to_weighted(&["A"], &[-1.0]).unwrap();

    assert!(matches!(
        bellman_ford(&graph, "A").unwrap_err(),
        GraphError::NegativeCycle { .. }
    ));
}

#[test]
fn test_bellman_ford_ignores_unreachable_negative_cycle() {
    let mut graph = graph_with(&["S", "T", "X", "Y"]);
    graph.link("S").to_weighted(&["T"], &[2.0]).unwrap();
    graph.link("X").to_weighted(&["Y"], &[-1.0]).unwrap();
    graph.link("Y").to_weighted(&["X"], &[-1.0]).unwrap();

    let paths = bellman_ford(&graph, "S").unwrap();
    assert_eq!(paths.distance("T"), Some(2.0));
    assert_eq!(paths.distance("X"), Some(f64::INFINITY));
}

#[test]
fn test_bellman_ford_missing_start() {
    let err = bellman_ford(&weighted(), "Nerva").unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound { .. }));
}

#[test]
fn test_single_vertex() {
    let graph = graph_with(&["A"]);
    assert_eq!(dijkstra(&graph, "A").unwrap().distance("A"), Some(0.0));
    assert_eq!(bellman_ford(&graph, "A").unwrap().distance("A"), Some(0.0));
}
