//! Keygraph Core Library
//!
//! A keyed, directed-first graph model and a family of classical graph
//! algorithms: traversal, cycle detection, shortest paths, minimum spanning
//! trees and articulation points.

pub mod algos;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use algos::{
    articulation_points, bellman_ford, bfs, connected_components, dfs, dijkstra,
    has_cycle, has_directed_cycle, kruskal_mst, prim_mst, ShortestPaths,
};
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{AddOutcome, Edge, EdgeId, Graph, LinkReport, Vertex, VertexId};
