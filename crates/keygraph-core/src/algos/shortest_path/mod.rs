//! Single-source shortest paths
//!
//! - `dijkstra`: non-negative weights, binary heap with lazy deletion
//! - `bellman_ford`: any weights, fails on a reachable negative cycle
//!
//! Both return a [`ShortestPaths`] holding a distance for every vertex in the
//! graph. Unreachable vertices have distance `f64::INFINITY`.

pub mod bellman_ford;
pub mod dijkstra;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;

use crate::graph::{Graph, VertexId};
use serde::Serialize;
use std::collections::HashMap;

/// Distances and predecessor links from a single source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    source: String,
    distances: HashMap<String, f64>,
    predecessors: HashMap<String, String>,
}

impl ShortestPaths {
    /// Assemble from per-vertex arrays indexed by `VertexId`
    pub(crate) fn from_arrays(
        graph: &Graph,
        source: VertexId,
        dist: &[f64],
        pred: &[Option<VertexId>],
    ) -> Self {
        let mut distances = HashMap::with_capacity(dist.len());
        let mut predecessors = HashMap::new();

        for vertex in graph.vertices() {
            let i = vertex.id().0;
            distances.insert(vertex.key().to_string(), dist[i]);
            if let Some(p) = pred[i] {
                predecessors.insert(vertex.key().to_string(), graph.key(p).to_string());
            }
        }

        Self {
            source: graph.key(source).to_string(),
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distance to `key`; `None` only when `key` is not in the graph
    pub fn distance(&self, key: &str) -> Option<f64> {
        self.distances.get(key).copied()
    }

    pub fn is_reachable(&self, key: &str) -> bool {
        self.distance(key).is_some_and(f64::is_finite)
    }

    /// Full key -> distance map, including unreachable vertices at infinity
    pub fn distances(&self) -> &HashMap<String, f64> {
        &self.distances
    }

    pub fn into_distances(self) -> HashMap<String, f64> {
        self.distances
    }

    /// Vertex keys from the source to `key`, or `None` when unreachable
    pub fn path_to(&self, key: &str) -> Option<Vec<String>> {
        if !self.is_reachable(key) {
            return None;
        }

        let mut path = vec![key.to_string()];
        let mut current = key;
        while current != self.source {
            current = self.predecessors.get(current).map(String::as_str)?;
            path.push(current.to_string());
            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests;
