use crate::algos::shared::{resolve_start, HeapEntry, UndirectedAdjacency};
use crate::error::Result;
use crate::graph::{Graph, VertexId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Prim's algorithm, growing the first tree from `start`.
///
/// `best[v]` is the lightest known edge joining `v` to the tree (`None` until
/// `v` is first reached) and `parent[v]` its other endpoint. Weights compare
/// with `total_cmp`, the order Kruskal sorts by, so infinite and NaN weights
/// still join their endpoints. Superseded heap entries are skipped on pop.
/// Once the start's component is spanned, growth restarts from the first
/// unreached vertex in insertion order until every vertex is in the forest.
#[tracing::instrument(skip(graph), fields(start = %start, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn prim_mst(graph: &Graph, start: &str) -> Result<Graph> {
    let begin = Instant::now();
    let root = resolve_start(graph, start)?;
    let adjacency = UndirectedAdjacency::build(graph);

    let n = graph.vertex_count();
    let mut best: Vec<Option<f64>> = vec![None; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut included = vec![false; n];
    let mut tree = graph.vertex_skeleton();
    let mut heap = BinaryHeap::new();

    let roots = std::iter::once(root).chain(graph.vertices().map(|v| v.id()));
    for tree_root in roots {
        if included[tree_root.0] {
            continue;
        }

        best[tree_root.0] = Some(0.0);
        heap.push(Reverse(HeapEntry {
            distance: 0.0,
            vertex: tree_root,
        }));

        while let Some(Reverse(HeapEntry { distance, vertex })) = heap.pop() {
            if included[vertex.0] {
                continue;
            }
            included[vertex.0] = true;

            if let Some(from) = parent[vertex.0] {
                tree.insert_edge(from, vertex, Some(distance));
            }

            for &(next, weight) in adjacency.neighbors(vertex) {
                let lighter = best[next.0].is_none_or(|known| weight.total_cmp(&known).is_lt());
                if !included[next.0] && lighter {
                    best[next.0] = Some(weight);
                    parent[next.0] = Some(vertex);
                    heap.push(Reverse(HeapEntry {
                        distance: weight,
                        vertex: next,
                    }));
                }
            }
        }
    }

    tracing::debug!(tree_edges = tree.edge_count(), total_weight = tree.total_weight(), "prim complete");
    crate::trace_time!(begin, "prim_mst");
    Ok(tree)
}
