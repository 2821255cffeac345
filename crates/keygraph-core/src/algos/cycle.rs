//! Cycle detection
//!
//! `has_cycle` treats the graph as undirected and runs union-find over the
//! edge table: an edge whose endpoints already share a set closes a cycle.
//! A pair linked in both directions counts as one undirected edge, so modeling
//! an undirected tree with mirrored links does not report a cycle. A self-loop
//! is a cycle.
//!
//! `has_directed_cycle` answers the directed question (dependency graphs) with
//! a three-colour DFS. Union-find cannot answer it.

use crate::algos::disjoint_set::DisjointSet;
use crate::algos::shared::unordered;
use crate::graph::{Graph, VertexId};
use std::collections::HashSet;

/// First edge, in insertion order, that closes an undirected cycle
pub fn first_cycle_edge(graph: &Graph) -> Option<(String, String)> {
    let mut sets = DisjointSet::for_graph(graph);
    let mut seen = HashSet::new();

    for edge in graph.edges() {
        if !seen.insert(unordered(edge.source(), edge.target())) {
            continue;
        }
        if sets.union(edge.source(), edge.target()) == Some(false) {
            tracing::debug!(from = %edge.from(), to = %edge.to(), "edge closes a cycle");
            return Some((edge.from().to_string(), edge.to().to_string()));
        }
    }

    None
}

/// Whether the graph, read as undirected, contains a cycle
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn has_cycle(graph: &Graph) -> bool {
    first_cycle_edge(graph).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    White,
    Grey,
    Black,
}

/// Whether the graph contains a directed cycle
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn has_directed_cycle(graph: &Graph) -> bool {
    let mut colour = vec![Colour::White; graph.vertex_count()];

    for root in graph.vertices().map(|v| v.id()) {
        if colour[root.0] != Colour::White {
            continue;
        }

        // (vertex, index of the next neighbor to examine)
        let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];
        colour[root.0] = Colour::Grey;

        while let Some(frame) = stack.last_mut() {
            let (current, next) = *frame;
            match graph.neighbors(current).get(next) {
                Some(&neighbor) => {
                    frame.1 += 1;
                    match colour[neighbor.0] {
                        Colour::Grey => {
                            tracing::debug!(
                                from = %graph.key(current),
                                to = %graph.key(neighbor),
                                "back edge closes a directed cycle"
                            );
                            return true;
                        }
                        Colour::White => {
                            colour[neighbor.0] = Colour::Grey;
                            stack.push((neighbor, 0));
                        }
                        Colour::Black => {}
                    }
                }
                None => {
                    colour[current.0] = Colour::Black;
                    stack.pop();
                }
            }
        }
    }

    false
}
