use std::sync::atomic::{AtomicUsize, Ordering};

/// ID for vertices, which are essentially `usize`.
///
/// Ids are drawn from a process-wide counter, so a vertex of one graph never
/// aliases a vertex of another, and ids are never reused after removal.
/// Within a graph, ids grow in the order vertices are added.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

static NEXT_VERTEX_ID: AtomicUsize = AtomicUsize::new(0);

impl VertexId {
    pub const MIN: VertexId = VertexId(0);
    pub const MAX: VertexId = VertexId(usize::MAX);

    pub(crate) fn one_more() -> Self {
        Self(NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}
