use crate::graph::*;

/// What a [Visitor] hook tells the traversal to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Go on as usual.
    Continue,
    /// From `pre_visit`: do not admit the far end of this edge to the fringe.
    /// From `visit`: do not explore successors of this vertex.
    /// From `post_visit`: no effect.
    Reject,
    /// Halt the traversal immediately.
    Stop,
}

/// How a traversal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// The fringe ran empty.
    Exhausted,
    /// A hook returned [Flow::Stop].
    Stopped,
}

/// Reactions to the steps of a traversal.
///
/// Every hook does nothing but [Flow::Continue] by default.
pub trait Visitor<V, E, D> {
    /// Called before the far end of `edge`, leaving `from`, is admitted to the fringe.
    fn pre_visit(&mut self, _graph: &Graph<V, E, D>, _edge: Edge, _from: VertexId) -> Flow {
        Flow::Continue
    }

    /// Called when `v` leaves the fringe and becomes the current vertex.
    fn visit(&mut self, _graph: &Graph<V, E, D>, _v: VertexId) -> Flow {
        Flow::Continue
    }

    /// Called once all successors of `v` are processed.
    /// Only depth-first and breadth-first traversals call it.
    fn post_visit(&mut self, _graph: &Graph<V, E, D>, _v: VertexId) -> Flow {
        Flow::Continue
    }
}

/// A visitor which lets the traversal run to its end.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisitor;

impl<V, E, D> Visitor<V, E, D> for NoopVisitor {}
