use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

/// Result type alias for fallible graph requests.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Malformed requests against a graph.
///
/// Absent members are not errors: queries answer with zero, `false` or `None`,
/// and removals of absent members are no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Asked for the far end of an edge from a vertex that is not one of its endpoints.
    #[error("{vertex:?} is not incident to {edge:?}")]
    NotIncident { vertex: VertexId, edge: EdgeId },
}
