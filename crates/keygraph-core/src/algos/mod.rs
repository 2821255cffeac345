//! Graph algorithm implementations
//!
//! Every algorithm borrows the graph immutably and allocates its own working
//! state (visited sets, distance arrays, heaps, disjoint sets) per call.
//!
//! - `traversal`: BFS and stack-based DFS
//! - `cycle`: undirected cycle detection via union-find, directed via colouring
//! - `shortest_path`: Dijkstra and Bellman-Ford
//! - `mst`: Kruskal and Prim
//! - `articulation`: cut vertices via low-link DFS
//! - `disjoint_set`: union-find shared by cycle detection and Kruskal
//! - `shared`: heap entry, traversal frontier, undirected adjacency

pub mod articulation;
pub mod cycle;
pub mod disjoint_set;
pub mod mst;
pub mod shared;
pub mod shortest_path;
pub mod traversal;

pub use articulation::articulation_points;
pub use cycle::{first_cycle_edge, has_cycle, has_directed_cycle};
pub use disjoint_set::{connected_components, DisjointSet};
pub use mst::{kruskal_mst, prim_mst};
pub use shortest_path::{bellman_ford, dijkstra, ShortestPaths};
pub use traversal::{bfs, dfs};
