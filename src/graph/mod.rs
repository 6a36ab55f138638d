//! Directed weighted graphs behind trait seams.
//!
//! # Low-level graphs and `KeyedDigraph`
//!
//! Vertices in low level graphs are lightweight ID's.
//! They are essentially `usize`.
//! Algorithm authors may feel free to copy and store these ID's, and
//! to index per-vertex tables with them.
//!
//! There is also [KeyedDigraph] to let vertices carry caller-chosen
//! keys. Users hand it an adjacency mapping over their own label type
//! and get results back in that label type.
//!
//! # Backings
//!
//! [VecBackedGraph] is the default backing, dense vectors in both edge
//! directions. [PetgraphBackedGraph] implements the same traits over
//! `petgraph` and exists to cross-check the default in tests and
//! benches.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod vec_backed;
pub use self::vec_backed::*;
mod petgraph_backed;
pub use self::petgraph_backed::*;
mod keyed;
pub use self::keyed::*;

#[cfg(test)]
pub use self::tests::*;
