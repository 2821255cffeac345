use serde::Serialize;
use serde_json::Value;

/// Stable handle to a vertex, valid for the lifetime of the graph that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Position of the vertex in insertion order
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Stable handle to an edge, valid for the lifetime of the graph that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in insertion order
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A keyed vertex wrapping an arbitrary JSON payload
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    key: String,
    payload: Value,
    neighbors: Vec<VertexId>,
    outgoing: Vec<EdgeId>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, key: String, payload: Value) -> Self {
        Self {
            id,
            key,
            payload,
            neighbors: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Direct successors, one entry per distinct neighbor, in link order
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// Outgoing edges, parallel to `neighbors()`
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    pub fn has_neighbor(&self, id: VertexId) -> bool {
        self.neighbors.contains(&id)
    }

    /// Record a new successor. The caller guarantees the pair is new.
    pub(crate) fn attach(&mut self, neighbor: VertexId, edge: EdgeId) {
        self.neighbors.push(neighbor);
        self.outgoing.push(edge);
    }
}

/// A directed edge with an optional weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    #[serde(skip)]
    id: EdgeId,
    #[serde(skip)]
    source: VertexId,
    #[serde(skip)]
    target: VertexId,
    from: String,
    to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
}

impl Edge {
    pub(crate) fn new(
        id: EdgeId,
        (source, from): (VertexId, &str),
        (target, to): (VertexId, &str),
        weight: Option<f64>,
    ) -> Self {
        Self {
            id,
            source,
            target,
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Key of the tail vertex
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Key of the head vertex
    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Composite `from|to` key identifying this edge in the edge table
    pub fn label(&self) -> String {
        format!("{}|{}", self.from, self.to)
    }
}

/// Result of adding a payload: first insert wins, re-adds return the existing vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted(VertexId),
    Existing(VertexId),
}

impl AddOutcome {
    pub fn id(&self) -> VertexId {
        match self {
            AddOutcome::Inserted(id) | AddOutcome::Existing(id) => *id,
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, AddOutcome::Inserted(_))
    }
}
