//! Breadth-first and depth-first traversal
//!
//! Both share one skeleton parameterized over the frontier: a FIFO queue gives
//! BFS, a stack gives DFS. Vertices are marked visited when pushed, so a vertex
//! reachable along several paths enters the frontier once.
//!
//! The DFS is iterative. Because neighbors are pushed in link order and popped
//! last-in first-out, siblings come out in reverse link order: for
//! `A -> [B, C]` the DFS order is `A, C, B`. A recursive pre-order DFS would
//! give `A, B, C`.

use crate::algos::shared::{resolve_start, Frontier};
use crate::error::Result;
use crate::graph::{Graph, VertexId};
use std::collections::VecDeque;

/// Level-order traversal of the vertices reachable from `start`
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn bfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    let root = resolve_start(graph, start)?;
    Ok(traverse(graph, root, VecDeque::new()))
}

/// Stack-based depth-first traversal of the vertices reachable from `start`
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn dfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    let root = resolve_start(graph, start)?;
    Ok(traverse(graph, root, Vec::new()))
}

fn traverse<F: Frontier>(graph: &Graph, root: VertexId, mut frontier: F) -> Vec<String> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();

    visited[root.0] = true;
    frontier.push(root);

    while let Some(current) = frontier.pop() {
        order.push(graph.key(current).to_string());
        for &next in graph.neighbors(current) {
            if !visited[next.0] {
                visited[next.0] = true;
                frontier.push(next);
            }
        }
    }

    tracing::debug!(visited = order.len(), "traversal complete");
    order
}
