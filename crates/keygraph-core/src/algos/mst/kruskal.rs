use crate::algos::disjoint_set::DisjointSet;
use crate::graph::Graph;
use std::time::Instant;

/// Kruskal's algorithm.
///
/// Edges are sorted ascending by effective weight with a stable sort, so equal
/// weights keep edge insertion order and the result is reproducible.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn kruskal_mst(graph: &Graph) -> Graph {
    let begin = Instant::now();

    let mut candidates: Vec<_> = graph
        .edges()
        .map(|edge| (edge, graph.effective_weight(edge)))
        .collect();
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut sets = DisjointSet::for_graph(graph);
    let mut tree = graph.vertex_skeleton();
    let target_edges = graph.vertex_count().saturating_sub(1);

    for (edge, weight) in candidates {
        if tree.edge_count() == target_edges {
            break;
        }
        if sets.union(edge.source(), edge.target()) == Some(true) {
            tree.insert_edge(edge.source(), edge.target(), Some(weight));
        }
    }

    tracing::debug!(tree_edges = tree.edge_count(), total_weight = tree.total_weight(), "kruskal complete");
    crate::trace_time!(begin, "kruskal_mst");
    tree
}
