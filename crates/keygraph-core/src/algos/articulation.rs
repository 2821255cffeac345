//! Articulation points (cut vertices)
//!
//! Tarjan-style low-link DFS over the undirected reading of the graph, run
//! with an explicit stack so deep graphs cannot overflow the call stack.
//! Each stack frame carries the vertex, its position in its neighbor list and
//! its DFS parent; discovery and low-link values are updated in the same order
//! as the recursive formulation.
//!
//! A vertex `v` is an articulation point when
//! - `v` is a DFS root with more than one DFS child, or
//! - `v` is not a root and some DFS child `w` has `low[w] >= disc[v]`.
//!
//! A visited neighbor other than the DFS parent is a back edge and tightens
//! `low[v]` with its discovery time; the edge back to the parent never does.

use crate::algos::shared::{resolve_start, UndirectedAdjacency};
use crate::error::Result;
use crate::graph::{Graph, VertexId};

struct Frame {
    vertex: VertexId,
    parent: Option<VertexId>,
    next: usize,
}

/// Articulation points of the whole graph, in vertex insertion order.
///
/// The first DFS tree is rooted at `start`; remaining components are searched
/// from their first vertex in insertion order.
#[tracing::instrument(skip(graph), fields(start = %start, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn articulation_points(graph: &Graph, start: &str) -> Result<Vec<String>> {
    let root = resolve_start(graph, start)?;
    let adjacency = UndirectedAdjacency::build(graph);

    let n = graph.vertex_count();
    let mut disc: Vec<Option<usize>> = vec![None; n];
    let mut low = vec![0usize; n];
    let mut is_cut = vec![false; n];
    let mut clock = 0usize;

    let roots = std::iter::once(root).chain(graph.vertices().map(|v| v.id()));
    for tree_root in roots {
        if disc[tree_root.0].is_some() {
            continue;
        }

        disc[tree_root.0] = Some(clock);
        low[tree_root.0] = clock;
        clock += 1;

        let mut root_children = 0usize;
        let mut stack = vec![Frame {
            vertex: tree_root,
            parent: None,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let v = frame.vertex;
            let parent = frame.parent;
            let neighbors = adjacency.neighbors(v);

            if let Some(&(w, _)) = neighbors.get(frame.next) {
                frame.next += 1;
                match disc[w.0] {
                    None => {
                        if v == tree_root {
                            root_children += 1;
                        }
                        disc[w.0] = Some(clock);
                        low[w.0] = clock;
                        clock += 1;
                        stack.push(Frame {
                            vertex: w,
                            parent: Some(v),
                            next: 0,
                        });
                    }
                    Some(disc_w) if Some(w) != parent => {
                        low[v.0] = low[v.0].min(disc_w);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All neighbors of v done: fold its low-link into the parent
            stack.pop();
            if let Some(p) = parent {
                low[p.0] = low[p.0].min(low[v.0]);
                let disc_p = disc[p.0].unwrap_or_default();
                if p != tree_root && low[v.0] >= disc_p {
                    is_cut[p.0] = true;
                }
            }
        }

        if root_children > 1 {
            is_cut[tree_root.0] = true;
        }
    }

    let points: Vec<String> = graph
        .vertices()
        .filter(|v| is_cut[v.id().0])
        .map(|v| v.key().to_string())
        .collect();
    tracing::debug!(found = points.len(), "articulation points computed");
    Ok(points)
}
