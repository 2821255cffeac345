//! Minimum spanning trees
//!
//! Edges are read as undirected. A pair linked in both directions is one
//! undirected edge; self-loops never enter a tree. On a disconnected graph
//! both algorithms return a minimum spanning forest with `V - C` edges, one
//! tree per connected component.
//!
//! The result is a new [`Graph`] with the source's config, a copy of every
//! source vertex, and one directed edge per tree edge carrying its effective
//! weight in the source graph.

pub mod kruskal;
pub mod prim;

pub use kruskal::kruskal_mst;
pub use prim::prim_mst;

#[cfg(test)]
mod tests;
