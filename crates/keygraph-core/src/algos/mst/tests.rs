use super::*;
use crate::algos::cycle::has_cycle;
use crate::error::GraphError;
use crate::graph::Graph;
use serde_json::json;

fn graph_with(keys: &[&str]) -> Graph {
    let mut graph = Graph::new("name");
    graph
        .insert(keys.iter().map(|k| json!({ "name": k })))
        .unwrap();
    graph
}

/// Link `a` and `b` in both directions with the same weight
fn connect(graph: &mut Graph, a: &str, b: &str, weight: f64) {
    graph.link(a).to_weighted(&[b], &[weight]).unwrap();
    graph.link(b).to_weighted(&[a], &[weight]).unwrap();
}

/// Classic 4-vertex example: MST is A-B (1), B-C (2), C-D (1), weight 4
fn square() -> Graph {
    let mut graph = graph_with(&["A", "B", "C", "D"]);
    connect(&mut graph, "A", "B", 1.0);
    connect(&mut graph, "B", "C", 2.0);
    connect(&mut graph, "C", "D", 1.0);
    connect(&mut graph, "D", "A", 3.0);
    connect(&mut graph, "A", "C", 4.0);
    graph
}

#[test]
fn test_kruskal_square() {
    let tree = kruskal_mst(&square());

    assert_eq!(tree.vertex_count(), 4);
    assert_eq!(tree.edge_count(), 3);
    assert_eq!(tree.total_weight(), 4.0);
    assert!(tree.edge("A", "B").is_some());
    assert!(tree.edge("C", "D").is_some());
    assert!(tree.edge("B", "C").is_some());
    assert!(!has_cycle(&tree));
}

#[test]
fn test_prim_square() {
    let tree = prim_mst(&square(), "A").unwrap();

    assert_eq!(tree.edge_count(), 3);
    assert_eq!(tree.total_weight(), 4.0);
    // Edges point away from the start
    assert!(tree.edge("A", "B").is_some());
    assert!(tree.edge("B", "C").is_some());
    assert!(tree.edge("C", "D").is_some());
}

#[test]
fn test_prim_from_other_start_same_weight() {
    let graph = square();
    for start in ["A", "B", "C", "D"] {
        let tree = prim_mst(&graph, start).unwrap();
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.total_weight(), 4.0);
    }
}

#[test]
fn test_one_directional_links_are_undirected() {
    // Only C -> A reaches A; Prim from A must still use it
    let mut graph = graph_with(&["A", "B", "C"]);
    graph.link("B").to_weighted(&["A"], &[5.0]).unwrap();
    graph.link("C").to_weighted(&["A", "B"], &[1.0, 1.0]).unwrap();

    let kruskal = kruskal_mst(&graph);
    let prim = prim_mst(&graph, "A").unwrap();

    assert_eq!(kruskal.edge_count(), 2);
    assert_eq!(prim.edge_count(), 2);
    assert_eq!(kruskal.total_weight(), 2.0);
    assert_eq!(prim.total_weight(), 2.0);
    assert!(kruskal.edge("C", "A").is_some());
    assert!(prim.edge("A", "C").is_some());
}

#[test]
fn test_kruskal_ties_follow_insertion_order() {
    let mut graph = graph_with(&["A", "B", "C"]);
    graph.link("A").to_weighted(&["B"], &[1.0]).unwrap();
    graph.link("B").to_weighted(&["C"], &[1.0]).unwrap();
    graph.link("A").to_weighted(&["C"], &[1.0]).unwrap();

    let tree = kruskal_mst(&graph);
    assert!(tree.edge("A", "B").is_some());
    assert!(tree.edge("B", "C").is_some());
    assert!(tree.edge("A", "C").is_none());
}

#[test]
fn test_disconnected_graph_yields_forest() {
    let mut graph = graph_with(&["A", "B", "C", "X", "Y", "Lonely"]);
    connect(&mut graph, "A", "B", 2.0);
    connect(&mut graph, "B", "C", 3.0);
    connect(&mut graph, "A", "C", 1.0);
    connect(&mut graph, "X", "Y", 7.0);

    // V = 6, C = 3
    let kruskal = kruskal_mst(&graph);
    let prim = prim_mst(&graph, "X").unwrap();

    assert_eq!(kruskal.edge_count(), 3);
    assert_eq!(prim.edge_count(), 3);
    assert_eq!(kruskal.total_weight(), 10.0);
    assert_eq!(prim.total_weight(), 10.0);
    assert_eq!(prim.vertex_count(), 6);
}

#[test]
fn test_self_loops_and_mirrors_ignored() {
    let mut graph = graph_with(&["A", "B"]);
    graph.link("A").to_weighted(&["A"], &[0.0]).unwrap();
    connect(&mut graph, "A", "B", 3.0);

    assert_eq!(kruskal_mst(&graph).edge_count(), 1);
    assert_eq!(prim_mst(&graph, "B").unwrap().edge_count(), 1);
}

#[test]
fn test_result_keeps_payloads_and_config() {
    let mut graph = Graph::new("code");
    graph
        .insert(vec![
            json!({"code": "ROM", "pop": 1000}),
            json!({"code": "OST", "pop": 50}),
        ])
        .unwrap();
    graph.link("ROM").to(&["OST"]);

    let tree = kruskal_mst(&graph);
    assert_eq!(tree.key_field(), "code");
    assert_eq!(tree.select("OST").unwrap().payload()["pop"], 50);
    // Unweighted source edge carries the default weight explicitly
    assert_eq!(tree.edge("ROM", "OST").unwrap().weight(), Some(1.0));
}

#[test]
fn test_prim_missing_start() {
    let err = prim_mst(&square(), "Nerva").unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound { .. }));
}

#[test]
fn test_empty_graph() {
    let graph = graph_with(&[]);
    assert_eq!(kruskal_mst(&graph).edge_count(), 0);
}

#[test]
fn test_non_finite_weights_still_span() {
    for weight in [f64::INFINITY, f64::NAN] {
        let mut graph = graph_with(&["A", "B"]);
        connect(&mut graph, "A", "B", weight);

        assert_eq!(kruskal_mst(&graph).edge_count(), 1, "kruskal, weight {weight}");
        for start in ["A", "B"] {
            let tree = prim_mst(&graph, start).unwrap();
            assert_eq!(tree.edge_count(), 1, "prim from {start}, weight {weight}");
        }
    }
}

#[test]
fn test_infinite_edge_loses_to_finite_path() {
    let mut graph = graph_with(&["A", "B", "C"]);
    connect(&mut graph, "A", "B", f64::INFINITY);
    connect(&mut graph, "B", "C", 1.0);
    connect(&mut graph, "A", "C", 2.0);

    let prim = prim_mst(&graph, "A").unwrap();
    assert_eq!(prim.edge_count(), 2);
    assert_eq!(prim.total_weight(), 3.0);
    assert_eq!(kruskal_mst(&graph).total_weight(), 3.0);
}
