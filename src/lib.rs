//! Labeled directed and undirected multigraphs, pluggable traversals and A* shortest paths.
//!
//! * [graph] holds [Graph](graph::Graph), a multigraph whose vertices and edges carry
//!   caller-supplied labels and are addressed by lightweight ids.
//! * [traversal] drives general, depth-first and breadth-first walks over a graph,
//!   reporting each step to a [Visitor](traversal::Visitor).
//! * [algorithm] provides A* shortest paths, with weights supplied either by
//!   external accessors or by the labels themselves.
//!
//! ```rust
//! use labgraph::{algorithm::*, graph::*};
//! use std::collections::HashMap;
//!
//! let mut g = DirectedGraph::<&str, f64>::new();
//! let a = g.add_vertex("A");
//! let b = g.add_vertex("B");
//! let c = g.add_vertex("C");
//! g.add_edge(a, b, 1.0);
//! g.add_edge(b, c, 2.0);
//! let direct = g.add_edge(a, c, 5.0).unwrap();
//!
//! let mut scores: HashMap<&str, f64> = HashMap::new();
//! let path = g
//!     .shortest_path(a, c, &ZeroDistancer, &mut scores, &|w: &f64| *w)
//!     .unwrap();
//! assert_eq!(path.len(), 2);
//! assert!(!path.contains(&direct));
//! ```

pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
pub mod traversal;
