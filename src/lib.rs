//! Maximum mean cycle search for directed weighted graphs.
//!
//! Given a finite directed graph with real-valued edge weights, this
//! crate finds a simple cycle whose arithmetic-mean edge weight is
//! maximal, together with that mean. The search is Karp's algorithm:
//! dynamic programming over walks of each exact length, a min-over-k
//! bound per vertex, and a replay of the recorded predecessors to turn
//! the bound into a concrete cycle. It runs in $O(|V| \cdot |E|)$ time
//! and $O(|V|^2)$ transient memory.
//!
//! # Graphs and `KeyedDigraph`
//!
//! Vertices in low level graphs are lightweight ID's, essentially
//! `usize`, cheap to copy and to index tables with. Callers usually
//! label vertices with their own types instead; [graph::KeyedDigraph]
//! binds arbitrary hashable keys to low level ID's and translates
//! results back at the boundary.
//!
//! ```rust
//! use meancycle::{algorithm::*, graph::*};
//!
//! let graph = KeyedDigraph::<&str>::from_adjacency([
//!     ("X", vec![("Y", 10.0)]),
//!     ("Y", vec![("X", -5.0)]),
//! ])
//! .unwrap();
//! let (cycle, mean) = graph.max_mean_cycle_by_key().unwrap();
//! assert_eq!(cycle, vec!["X", "Y", "X"]);
//! assert_eq!(mean, 2.5);
//! ```
//!
//! Graphs without any cycle, and graphs without any vertex, are
//! reported as explicit errors rather than degenerate results.

pub mod algorithm;
pub mod graph;
