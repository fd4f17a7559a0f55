use super::VertexId;
use crate::{GraphError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// ID for edges, which are essentially `usize`.
///
/// Like [VertexId], edge ids are unique across all graphs in the process.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

static NEXT_EDGE_ID: AtomicUsize = AtomicUsize::new(0);

/// Endpoints of an edge.
///
/// An edge exits `source` (v0) and enters `sink` (v1).
/// In an undirected graph, every logical edge is stored as two of these,
/// one per direction, with distinct ids and a shared label.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
}

impl EdgeId {
    pub const MIN: EdgeId = EdgeId(0);
    pub const MAX: EdgeId = EdgeId(usize::MAX);

    pub(crate) fn one_more() -> Self {
        Self(NEXT_EDGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

impl Edge {
    /// Returns the endpoint at the other end of me from `v`.
    ///
    /// For a self edge, the other end of its only endpoint is itself.
    pub fn other_end(&self, v: VertexId) -> Result<VertexId> {
        if v == self.source {
            Ok(self.sink)
        } else if v == self.sink {
            Ok(self.source)
        } else {
            Err(GraphError::NotIncident {
                vertex: v,
                edge: self.id,
            })
        }
    }

    pub(crate) fn reversed(&self, id: EdgeId) -> Self {
        Self {
            id,
            source: self.sink,
            sink: self.source,
        }
    }
}
