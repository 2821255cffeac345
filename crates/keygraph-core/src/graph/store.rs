//! Keyed vertex storage
//!
//! Vertices are stored in insertion order and indexed by the value of the
//! configured key field. The store owns vertex identity: a key maps to exactly
//! one `VertexId` for the store's lifetime.

use crate::error::{GraphError, Result};
use crate::graph::types::{AddOutcome, Vertex, VertexId};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct KeyedStore {
    key_field: String,
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
}

impl KeyedStore {
    pub fn new(key_field: impl Into<String>) -> Self {
        Self {
            key_field: key_field.into(),
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    /// Extract the vertex key from a payload.
    ///
    /// Strings are used verbatim; numbers and booleans are rendered with their
    /// JSON text. Null, arrays and objects are rejected.
    pub fn extract_key(&self, payload: &Value) -> Result<String> {
        let field = payload
            .as_object()
            .and_then(|obj| obj.get(&self.key_field))
            .ok_or_else(|| GraphError::MissingKey {
                field: self.key_field.clone(),
            })?;

        match field {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(GraphError::InvalidKey {
                field: self.key_field.clone(),
                value: other.to_string(),
            }),
        }
    }

    /// Insert a payload unless its key is already present
    pub fn add(&mut self, payload: Value) -> Result<AddOutcome> {
        let key = self.extract_key(&payload)?;
        Ok(self.add_keyed(key, payload))
    }

    /// Insert a payload whose key has already been extracted
    pub(crate) fn add_keyed(&mut self, key: String, payload: Value) -> AddOutcome {
        if let Some(&existing) = self.index.get(&key) {
            tracing::trace!(key = %key, "vertex already present, keeping first insert");
            return AddOutcome::Existing(existing);
        }

        let id = VertexId(self.vertices.len());
        self.index.insert(key.clone(), id);
        self.vertices.push(Vertex::new(id, key, payload));
        AddOutcome::Inserted(id)
    }

    pub fn select(&self, key: &str) -> Option<&Vertex> {
        self.id_of(key).map(|id| &self.vertices[id.0])
    }

    pub fn id_of(&self, key: &str) -> Option<VertexId> {
        self.index.get(key).copied()
    }

    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id.0)
    }

    /// All vertices in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
