//! Labeled directed and undirected multigraphs.
//!
//! # Ids and labels
//!
//! Vertices and edges of a [Graph] are addressed by lightweight ids,
//! [VertexId] and [EdgeId], which are essentially `usize`.
//! Feel free to copy and store them.
//! Labels, the caller-supplied values attached to vertices and edges,
//! live in the graph and are looked up by id.
//!
//! # Directed and undirected graphs
//!
//! Directedness is a type parameter, [Directed] or [Undirected],
//! and both flavors share all of their code.
//! An undirected edge is stored as a pair of mirrored directed records.
//!
//! # Enumerations
//!
//! Every enumeration returns an [Iteration], a snapshot taken when it is created.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod iteration;
pub use self::iteration::*;
mod labeled;
pub use self::labeled::*;
mod path;
mod graph_debug;
pub use self::graph_debug::*;

#[cfg(test)]
mod ops;
#[cfg(test)]
pub use self::ops::*;
