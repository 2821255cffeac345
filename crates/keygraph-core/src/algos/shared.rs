use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};

/// Resolve a start key or fail with `VertexNotFound`
pub fn resolve_start(graph: &Graph, start: &str) -> Result<VertexId> {
    graph
        .id_of(start)
        .ok_or_else(|| GraphError::vertex_not_found(start))
}

/// Min-heap entry keyed by tentative distance (Dijkstra) or connecting weight (Prim).
///
/// Wrap in `Reverse` for use with `BinaryHeap`. Ties on distance fall back to
/// vertex insertion order so pops are deterministic.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub distance: f64,
    pub vertex: VertexId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Frontier of a generic traversal: a stack yields DFS, a queue yields BFS
pub trait Frontier {
    fn push(&mut self, vertex: VertexId);
    fn pop(&mut self) -> Option<VertexId>;
}

impl Frontier for Vec<VertexId> {
    fn push(&mut self, vertex: VertexId) {
        Vec::push(self, vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        Vec::pop(self)
    }
}

impl Frontier for VecDeque<VertexId> {
    fn push(&mut self, vertex: VertexId) {
        self.push_back(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.pop_front()
    }
}

/// Undirected view of a graph's edge table.
///
/// Every directed edge `u -> v` contributes `v` to `u`'s list and `u` to `v`'s
/// list, so a pair linked in both directions is one undirected edge. Lists are
/// ordered by edge insertion and hold each neighbor once, carrying the smallest
/// effective weight seen between the two endpoints.
pub struct UndirectedAdjacency {
    lists: Vec<Vec<(VertexId, f64)>>,
}

impl UndirectedAdjacency {
    pub fn build(graph: &Graph) -> Self {
        let mut lists: Vec<Vec<(VertexId, f64)>> = vec![Vec::new(); graph.vertex_count()];

        for edge in graph.edges() {
            let weight = graph.effective_weight(edge);
            let (u, v) = (edge.source(), edge.target());
            Self::connect(&mut lists[u.0], v, weight);
            if u != v {
                Self::connect(&mut lists[v.0], u, weight);
            }
        }

        Self { lists }
    }

    fn connect(list: &mut Vec<(VertexId, f64)>, neighbor: VertexId, weight: f64) {
        match list.iter_mut().find(|(n, _)| *n == neighbor) {
            Some(entry) => entry.1 = entry.1.min(weight),
            None => list.push((neighbor, weight)),
        }
    }

    pub fn neighbors(&self, vertex: VertexId) -> &[(VertexId, f64)] {
        self.lists
            .get(vertex.0)
            .map(|l| l.as_slice())
            .unwrap_or_default()
    }
}

/// Canonical unordered pair, used to collapse `u -> v` and `v -> u`
pub fn unordered(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Collapse reverse-direction duplicates, keeping edge insertion order
pub fn undirected_pairs(graph: &Graph) -> Vec<(VertexId, VertexId, f64)> {
    let mut seen = HashSet::new();
    graph
        .edges()
        .filter(|e| seen.insert(unordered(e.source(), e.target())))
        .map(|e| (e.source(), e.target(), graph.effective_weight(e)))
        .collect()
}
