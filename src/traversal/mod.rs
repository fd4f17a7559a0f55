//! Generalized traversals over a [Graph](crate::graph::Graph).
//!
//! At any time there is a set of untraversed vertices, the fringe.
//! A traversal repeatedly takes a vertex from the fringe, visits it,
//! and admits its unmarked successors to the fringe.
//! Which vertex comes out next depends on the kind of traversal:
//!
//! * a general traversal keeps the fringe ordered by a comparator over vertex labels;
//! * a depth-first traversal keeps it as a stack, and revisits each vertex
//!   through `post_visit` once its successors are done;
//! * a breadth-first traversal keeps it as a queue, and calls `post_visit`
//!   on every visited vertex, in visiting order, after the walk.
//!
//! Clients react to the walk through a [Visitor], whose hooks may answer
//! [Flow::Reject] to prune or [Flow::Stop] to halt.
//!
//! ```rust
//! use labgraph::{graph::*, traversal::*};
//!
//! struct Collect(Vec<&'static str>);
//!
//! impl Visitor<&'static str, (), Directed> for Collect {
//!     fn visit(&mut self, g: &DirectedGraph<&'static str, ()>, v: VertexId) -> Flow {
//!         self.0.push(g.vertex_label(v).copied().unwrap_or_default());
//!         Flow::Continue
//!     }
//! }
//!
//! let mut g = DirectedGraph::new();
//! let a = g.add_vertex("a");
//! let b = g.add_vertex("b");
//! let c = g.add_vertex("c");
//! g.add_default_edge(a, b);
//! g.add_default_edge(b, c);
//!
//! let mut seen = Collect(vec![]);
//! let walk = Traversal::new(&g).breadth_first_traverse(a, &mut seen);
//! assert_eq!(walk, Walk::Exhausted);
//! assert_eq!(seen.0, vec!["a", "b", "c"]);
//! ```
mod visitor;
pub use self::visitor::*;
mod engine;
pub use self::engine::*;
