use crate::algos::shared::{resolve_start, HeapEntry};
use crate::algos::shortest_path::ShortestPaths;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Reject the graph up front if any effective weight is negative or NaN
fn check_weights(graph: &Graph) -> Result<()> {
    for edge in graph.edges() {
        let weight = graph.effective_weight(edge);
        if weight.is_nan() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: edge.from().to_string(),
                to: edge.to().to_string(),
                weight,
            });
        }
    }
    Ok(())
}

/// Dijkstra's algorithm from `start`.
///
/// Every edge weight must be non-negative; the whole edge table is checked
/// before the search starts, so no partial result is produced. Heap entries
/// made stale by a later improvement are skipped when popped.
#[tracing::instrument(skip(graph), fields(start = %start, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra(graph: &Graph, start: &str) -> Result<ShortestPaths> {
    let begin = Instant::now();
    let source = resolve_start(graph, start)?;
    check_weights(graph)?;

    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<VertexId>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source.0] = 0.0;
    heap.push(Reverse(HeapEntry {
        distance: 0.0,
        vertex: source,
    }));

    let mut stale = 0usize;
    while let Some(Reverse(HeapEntry { distance, vertex })) = heap.pop() {
        if distance > dist[vertex.0] {
            stale += 1;
            continue;
        }

        for edge in graph.outgoing(vertex) {
            let next = edge.target();
            let candidate = distance + graph.effective_weight(edge);
            if candidate < dist[next.0] {
                dist[next.0] = candidate;
                pred[next.0] = Some(vertex);
                heap.push(Reverse(HeapEntry {
                    distance: candidate,
                    vertex: next,
                }));
            }
        }
    }

    tracing::debug!(stale_pops = stale, "dijkstra complete");
    crate::trace_time!(begin, "dijkstra");
    Ok(ShortestPaths::from_arrays(graph, source, &dist, &pred))
}
