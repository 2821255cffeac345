//! Keyed graph model
//!
//! A [`Graph`] owns a [`KeyedStore`] of vertices and a deduplicated table of
//! directed edges. Vertices are identified by the value of a configured key
//! field in their payload; edges by their `(from, to)` pair.
//!
//! - `add`/`insert`: first insert of a key wins, re-adds are no-ops
//! - `link(from).to(targets)`: absent targets are skipped and reported
//! - Undirected graphs are modeled by linking both directions
//!
//! `add` and `link` are the only mutators. Algorithms take `&Graph`, so
//! concurrent read-only invocations are safe by construction.

mod link;
mod store;
pub mod types;

use crate::config::GraphConfig;
use crate::error::Result;
use serde_json::Value;
use std::collections::HashMap;

pub use link::{LinkBuilder, LinkReport};
pub use store::KeyedStore;
pub use types::{AddOutcome, Edge, EdgeId, Vertex, VertexId};

#[derive(Debug, Clone)]
pub struct Graph {
    config: GraphConfig,
    store: KeyedStore,
    edges: Vec<Edge>,
    edge_index: HashMap<(VertexId, VertexId), EdgeId>,
}

impl Graph {
    /// Create an empty graph keyed on `key_field`
    pub fn new(key_field: impl Into<String>) -> Self {
        Self::with_config(GraphConfig::with_key_field(key_field))
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            store: KeyedStore::new(config.key_field.clone()),
            config,
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn key_field(&self) -> &str {
        self.store.key_field()
    }

    /// Add a vertex, returning the id of the new or already-present vertex
    pub fn add(&mut self, payload: Value) -> Result<VertexId> {
        self.store.add(payload).map(|outcome| outcome.id())
    }

    /// Add a vertex and report whether it was inserted or already present
    pub fn add_with_outcome(&mut self, payload: Value) -> Result<AddOutcome> {
        self.store.add(payload)
    }

    /// Add many vertices, stopping at the first payload without a usable key
    pub fn insert<I>(&mut self, records: I) -> Result<Vec<VertexId>>
    where
        I: IntoIterator<Item = Value>,
    {
        records.into_iter().map(|record| self.add(record)).collect()
    }

    /// Start linking from `from`; see [`LinkBuilder::to`]
    pub fn link(&mut self, from: &str) -> LinkBuilder<'_> {
        LinkBuilder::new(self, from)
    }

    pub fn select(&self, key: &str) -> Option<&Vertex> {
        self.store.select(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.store.id_of(key).is_some()
    }

    pub fn id_of(&self, key: &str) -> Option<VertexId> {
        self.store.id_of(key)
    }

    /// Look up a vertex by id. Ids from another graph may be out of range.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.store.get(id)
    }

    /// Key of a vertex issued by this graph
    pub(crate) fn key(&self, id: VertexId) -> &str {
        self.store.get(id).map(|v| v.key()).unwrap_or_default()
    }

    /// Direct successors of `key` in link order, or `None` if `key` is absent
    pub fn adjacent_vertices(&self, key: &str) -> Option<impl Iterator<Item = &Vertex> + '_> {
        let vertex = self.store.select(key)?;
        Some(
            vertex
                .neighbors()
                .iter()
                .filter_map(move |&id| self.store.get(id)),
        )
    }

    pub(crate) fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.store.get(id).map(|v| v.neighbors()).unwrap_or_default()
    }

    /// Outgoing edges of `id` in link order
    pub(crate) fn outgoing(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.store
            .get(id)
            .map(|v| v.outgoing())
            .unwrap_or_default()
            .iter()
            .map(move |e| &self.edges[e.0])
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.store.iter()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Edge table keyed by `from|to`
    pub fn edges_by_label(&self) -> HashMap<String, &Edge> {
        self.edges.iter().map(|e| (e.label(), e)).collect()
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
        let source = self.store.id_of(from)?;
        let target = self.store.id_of(to)?;
        self.edge_between(source, target)
    }

    pub fn edge_between(&self, source: VertexId, target: VertexId) -> Option<&Edge> {
        self.edge_index
            .get(&(source, target))
            .map(|id| &self.edges[id.0])
    }

    /// Weight used by weighted algorithms: the edge's own, else the configured default
    pub fn effective_weight(&self, edge: &Edge) -> f64 {
        edge.weight().unwrap_or(self.config.default_weight)
    }

    /// Sum of effective weights over all edges
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| self.effective_weight(e)).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.store.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Insert `source -> target` unless the pair already exists.
    /// Returns the new edge id, or `None` for a duplicate.
    pub(crate) fn insert_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: Option<f64>,
    ) -> Option<EdgeId> {
        if self.edge_index.contains_key(&(source, target))
            || self.store.get(source).is_none()
            || self.store.get(target).is_none()
        {
            return None;
        }

        let id = EdgeId(self.edges.len());
        let edge = Edge::new(
            id,
            (source, self.key(source)),
            (target, self.key(target)),
            weight,
        );
        self.edges.push(edge);
        self.edge_index.insert((source, target), id);
        self.store.get_mut(source)?.attach(target, id);
        Some(id)
    }

    /// Empty graph sharing this graph's config, holding a copy of every vertex
    pub(crate) fn vertex_skeleton(&self) -> Graph {
        let mut graph = Graph::with_config(self.config.clone());
        for vertex in self.store.iter() {
            graph
                .store
                .add_keyed(vertex.key().to_string(), vertex.payload().clone());
        }
        graph
    }
}
