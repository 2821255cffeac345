use crate::algos::shared::resolve_start;
use crate::algos::shortest_path::ShortestPaths;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use std::time::Instant;

/// Bellman-Ford from `start`.
///
/// Relaxes every edge, in insertion order, `V - 1` times (stopping early once
/// a pass changes nothing), then makes one more pass: any edge that still
/// relaxes lies on or behind a negative cycle reachable from `start`, and the
/// call fails with `NegativeCycle`. Negative cycles the source cannot reach
/// do not affect the result.
#[tracing::instrument(skip(graph), fields(start = %start, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn bellman_ford(graph: &Graph, start: &str) -> Result<ShortestPaths> {
    let begin = Instant::now();
    let source = resolve_start(graph, start)?;

    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<VertexId>> = vec![None; n];
    dist[source.0] = 0.0;

    let mut passes = 0usize;
    for _ in 1..n {
        passes += 1;
        let mut changed = false;
        for edge in graph.edges() {
            let (u, v) = (edge.source().0, edge.target().0);
            if dist[u] == f64::INFINITY {
                continue;
            }
            let candidate = dist[u] + graph.effective_weight(edge);
            if candidate < dist[v] {
                dist[v] = candidate;
                pred[v] = Some(edge.source());
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    for edge in graph.edges() {
        let (u, v) = (edge.source().0, edge.target().0);
        if dist[u] != f64::INFINITY && dist[u] + graph.effective_weight(edge) < dist[v] {
            tracing::debug!(from = %edge.from(), to = %edge.to(), "negative cycle detected");
            return Err(GraphError::NegativeCycle {
                from: edge.from().to_string(),
                to: edge.to().to_string(),
            });
        }
    }

    tracing::debug!(passes, "bellman-ford complete");
    crate::trace_time!(begin, "bellman_ford");
    Ok(ShortestPaths::from_arrays(graph, source, &dist, &pred))
}
