//! Union-find over the vertices of a graph
//!
//! Path compression plus union by rank. Built fresh per algorithm call and
//! never stored on the graph.

use crate::graph::{Graph, VertexId};

#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Singleton sets `0..n`, each of rank 0
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// One singleton set per vertex of `graph`
    pub fn for_graph(graph: &Graph) -> Self {
        Self::new(graph.vertex_count())
    }

    /// Representative of `x`'s set, or `None` when `x` is out of range.
    /// Every node on the walk is re-pointed directly at the representative.
    pub fn find(&mut self, x: VertexId) -> Option<VertexId> {
        self.contains(x).then(|| VertexId(self.find_index(x.0)))
    }

    fn contains(&self, x: VertexId) -> bool {
        x.0 < self.parent.len()
    }

    fn find_index(&mut self, x: usize) -> usize {
        let parent = self.parent[x];
        if parent == x {
            return x;
        }
        let root = self.find_index(parent);
        self.parent[x] = root;
        root
    }

    /// Merge the sets of `x` and `y`.
    ///
    /// `Some(false)` means they were already in the same set, which callers
    /// use as the cycle signal. `None` when either id is out of range.
    pub fn union(&mut self, x: VertexId, y: VertexId) -> Option<bool> {
        if !self.contains(x) || !self.contains(y) {
            return None;
        }
        let mut rx = self.find_index(x.0);
        let mut ry = self.find_index(y.0);
        if rx == ry {
            return Some(false);
        }

        if self.rank[rx] < self.rank[ry] {
            std::mem::swap(&mut rx, &mut ry);
        }
        self.parent[ry] = rx;
        if self.rank[rx] == self.rank[ry] {
            self.rank[rx] += 1;
        }
        Some(true)
    }

    /// False when either id is out of range
    pub fn same_set(&mut self, x: VertexId, y: VertexId) -> bool {
        match (self.find(x), self.find(y)) {
            (Some(rx), Some(ry)) => rx == ry,
            _ => false,
        }
    }

    pub fn rank(&self, x: VertexId) -> Option<u32> {
        self.rank.get(x.0).copied()
    }

    /// Number of disjoint sets
    pub fn count(&mut self) -> usize {
        (0..self.parent.len())
            .filter(|&i| self.find_index(i) == i)
            .count()
    }
}

/// Connected components of the graph, treating every edge as undirected.
///
/// Components are listed in order of their first vertex, and vertices within
/// a component in insertion order.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn connected_components(graph: &Graph) -> Vec<Vec<String>> {
    let mut sets = DisjointSet::for_graph(graph);
    for edge in graph.edges() {
        sets.union(edge.source(), edge.target());
    }

    let mut slot_of_root: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut components: Vec<Vec<String>> = Vec::new();
    for vertex in graph.vertices() {
        let Some(root) = sets.find(vertex.id()) else {
            continue;
        };
        let slot = *slot_of_root[root.0].get_or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(vertex.key().to_string());
    }

    tracing::debug!(components = components.len(), "computed components");
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_singletons() {
        let mut sets = DisjointSet::new(3);
        assert_eq!(sets.count(), 3);
        for i in 0..3 {
            assert_eq!(sets.find(VertexId(i)), Some(VertexId(i)));
            assert_eq!(sets.rank(VertexId(i)), Some(0));
        }
    }

    #[test]
    fn test_union_reports_already_joined() {
        let mut sets = DisjointSet::new(3);
        assert_eq!(sets.union(VertexId(0), VertexId(1)), Some(true));
        assert_eq!(sets.union(VertexId(1), VertexId(2)), Some(true));
        assert_eq!(sets.union(VertexId(0), VertexId(2)), Some(false));
        assert_eq!(sets.count(), 1);
    }

    #[test]
    fn test_equal_rank_union_increments_root_rank() {
        let mut sets = DisjointSet::new(2);
        sets.union(VertexId(0), VertexId(1));
        let root = sets.find(VertexId(1)).unwrap();
        assert_eq!(root, VertexId(0));
        assert_eq!(sets.rank(root), Some(1));
    }

    #[test]
    fn test_lower_rank_attaches_under_higher() {
        let mut sets = DisjointSet::new(3);
        sets.union(VertexId(0), VertexId(1));
        // {0,1} has rank 1, {2} has rank 0: 2 goes under 0
        sets.union(VertexId(2), VertexId(1));
        assert_eq!(sets.find(VertexId(2)), Some(VertexId(0)));
        assert_eq!(sets.rank(VertexId(0)), Some(1));
    }

    #[test]
    fn test_path_compression() {
        let mut sets = DisjointSet::new(4);
        sets.union(VertexId(0), VertexId(1));
        sets.union(VertexId(2), VertexId(3));
        sets.union(VertexId(0), VertexId(2));
        // 3 -> 2 -> 0 before compression
        assert_eq!(sets.parent[3], 2);
        assert_eq!(sets.find(VertexId(3)), Some(VertexId(0)));
        assert_eq!(sets.parent[3], 0);
    }

    #[test]
    fn test_ids_from_a_larger_graph() {
        let mut sets = DisjointSet::new(2);
        let foreign = VertexId(5);

        assert_eq!(sets.find(foreign), None);
        assert_eq!(sets.union(VertexId(0), foreign), None);
        assert_eq!(sets.rank(foreign), None);
        assert!(!sets.same_set(foreign, foreign));
        assert_eq!(sets.count(), 2);
    }

    #[test]
    fn test_connected_components() {
        let mut graph = Graph::new("name");
        graph
            .insert(["A", "B", "C", "D", "E"].map(|k| json!({ "name": k })))
            .unwrap();
        graph.link("A").to(&["B"]);
        graph.link("D").to(&["C"]);

        let components = connected_components(&graph);
        assert_eq!(
            components,
            vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["C".to_string(), "D".to_string()],
                vec!["E".to_string()],
            ]
        );
    }
}
