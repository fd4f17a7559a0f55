use crate::graph::*;
use crate::traversal::*;
use ahash::RandomState;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::rc::Rc;

type LabelOrder<'g, V> = Rc<dyn Fn(&V, &V) -> Ordering + 'g>;

enum Kind<'g, V> {
    General(LabelOrder<'g, V>),
    DepthFirst,
    BreadthFirst,
}

impl<'g, V> Clone for Kind<'g, V> {
    fn clone(&self) -> Self {
        match self {
            Kind::General(order) => Kind::General(Rc::clone(order)),
            Kind::DepthFirst => Kind::DepthFirst,
            Kind::BreadthFirst => Kind::BreadthFirst,
        }
    }
}

enum Step {
    Skipped,
    Visited,
    Stopped,
}

enum Frame {
    Enter(VertexId),
    Leave(VertexId),
}

/// A vertex waiting in the fringe of a general traversal.
///
/// Greater means taken earlier, so that [BinaryHeap] yields the least label first
/// and, among equal labels, the earliest admitted.
struct Ranked<'a, V> {
    vertex: VertexId,
    label: &'a V,
    admission: usize,
    order: &'a dyn Fn(&V, &V) -> Ordering,
}

impl<'a, V> Ord for Ranked<'a, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.order)(other.label, self.label).then_with(|| other.admission.cmp(&self.admission))
    }
}

impl<'a, V> PartialOrd for Ranked<'a, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, V> PartialEq for Ranked<'a, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<'a, V> Eq for Ranked<'a, V> {}

/// Traversals over one graph, sharing one set of marks.
///
/// A vertex is marked when it is visited, and marked vertices are never visited again
/// until [clear_marks](Self::clear_marks).
/// So a second traversal, e.g. by [continue_traversing](Self::continue_traversing),
/// only walks into the part of the graph left untouched so far.
pub struct Traversal<'g, V, E, D = Directed> {
    graph: &'g Graph<V, E, D>,
    marks: HashSet<VertexId, RandomState>,
    last: Option<Kind<'g, V>>,
    final_vertex: Option<VertexId>,
    final_edge: Option<Edge>,
}

impl<'g, V, E, D> Traversal<'g, V, E, D>
where
    D: DirectedOrNot,
{
    pub fn new(graph: &'g Graph<V, E, D>) -> Self {
        Self::with_marks(graph, std::iter::empty())
    }

    /// Starts with `marks` already marked, e.g. those of an earlier traversal.
    pub fn with_marks<I>(graph: &'g Graph<V, E, D>, marks: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut res = Self {
            graph,
            marks: HashSet::with_hasher(RandomState::new()),
            last: None,
            final_vertex: None,
            final_edge: None,
        };
        res.marks.extend(marks);
        res
    }

    pub fn the_graph(&self) -> &'g Graph<V, E, D> {
        self.graph
    }

    pub fn is_marked(&self, v: VertexId) -> bool {
        self.marks.contains(&v)
    }

    pub fn marks(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.marks.iter().copied()
    }

    pub fn into_marks(self) -> HashSet<VertexId, RandomState> {
        self.marks
    }

    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }

    /// The vertex being handled when the last traversal was stopped.
    pub fn final_vertex(&self) -> Option<VertexId> {
        self.final_vertex
    }

    /// The edge being handled when the last traversal was stopped,
    /// if it was stopped by `pre_visit`.
    pub fn final_edge(&self) -> Option<Edge> {
        self.final_edge
    }

    /// Traverses from `root`, always taking next the vertex in the fringe
    /// whose label is least by `order`.
    /// Vertices with equal labels are taken in the order they were admitted.
    ///
    /// `post_visit` is never called.
    pub fn traverse<F, T>(&mut self, root: VertexId, order: F, visitor: &mut T) -> Walk
    where
        F: Fn(&V, &V) -> Ordering + 'g,
        T: Visitor<V, E, D> + ?Sized,
    {
        let order: LabelOrder<'g, V> = Rc::new(order);
        self.last = Some(Kind::General(Rc::clone(&order)));
        self.general(root, &*order, visitor)
    }

    /// Traverses from `root` depth first.
    ///
    /// `post_visit` on a vertex comes after all of its successors are visited,
    /// also when `visit` on it answered [Flow::Reject].
    pub fn depth_first_traverse<T>(&mut self, root: VertexId, visitor: &mut T) -> Walk
    where
        T: Visitor<V, E, D> + ?Sized,
    {
        self.last = Some(Kind::DepthFirst);
        self.depth_first(root, visitor)
    }

    /// Traverses from `root` breadth first.
    ///
    /// `post_visit` is called on each visited vertex, in visiting order,
    /// after the fringe runs empty.
    pub fn breadth_first_traverse<T>(&mut self, root: VertexId, visitor: &mut T) -> Walk
    where
        T: Visitor<V, E, D> + ?Sized,
    {
        self.last = Some(Kind::BreadthFirst);
        self.breadth_first(root, visitor)
    }

    /// Runs the same kind of traversal as the last one from a new `root`,
    /// keeping the marks.
    ///
    /// Does nothing if there was no traversal before.
    pub fn continue_traversing<T>(&mut self, root: VertexId, visitor: &mut T) -> Walk
    where
        T: Visitor<V, E, D> + ?Sized,
    {
        match self.last.clone() {
            None => {
                debug!("no traversal to continue from {root:?}");
                self.final_vertex = None;
                self.final_edge = None;
                Walk::Exhausted
            }
            Some(Kind::General(order)) => self.general(root, &*order, visitor),
            Some(Kind::DepthFirst) => self.depth_first(root, visitor),
            Some(Kind::BreadthFirst) => self.breadth_first(root, visitor),
        }
    }

    fn general<T>(
        &mut self,
        root: VertexId,
        order: &dyn Fn(&V, &V) -> Ordering,
        visitor: &mut T,
    ) -> Walk
    where
        T: Visitor<V, E, D> + ?Sized,
    {
        if !self.begin(root) {
            return Walk::Exhausted;
        }
        let graph = self.graph;
        let mut fringe = BinaryHeap::new();
        let mut admitted = 0usize;
        let mut pending = vec![root];
        loop {
            for v in pending.drain(..) {
                if let Some(label) = graph.vertex_label(v) {
                    fringe.push(Ranked {
                        vertex: v,
                        label,
                        admission: admitted,
                        order,
                    });
                    admitted += 1;
                }
            }
            let current = match fringe.pop() {
                Some(ranked) => ranked.vertex,
                None => break,
            };
            if let Step::Stopped = self.step(current, visitor, |v| pending.push(v)) {
                return Walk::Stopped;
            }
        }
        trace!("general traversal from {root:?} exhausted");
        Walk::Exhausted
    }

    fn depth_first<T>(&mut self, root: VertexId, visitor: &mut T) -> Walk
    where
        T: Visitor<V, E, D> + ?Sized,
    {
        if !self.begin(root) {
            return Walk::Exhausted;
        }
        let mut stack = vec![Frame::Enter(root)];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(current) => {
                    let mut children = vec![];
                    match self.step(current, visitor, |v| children.push(v)) {
                        Step::Skipped => {}
                        Step::Stopped => return Walk::Stopped,
                        Step::Visited => {
                            stack.push(Frame::Leave(current));
                            // the first successor is explored first
                            stack.extend(children.into_iter().rev().map(Frame::Enter));
                        }
                    }
                }
                Frame::Leave(current) => {
                    if let Flow::Stop = visitor.post_visit(self.graph, current) {
                        self.halt(current, None);
                        return Walk::Stopped;
                    }
                }
            }
        }
        trace!("depth-first traversal from {root:?} exhausted");
        Walk::Exhausted
    }

    fn breadth_first<T>(&mut self, root: VertexId, visitor: &mut T) -> Walk
    where
        T: Visitor<V, E, D> + ?Sized,
    {
        if !self.begin(root) {
            return Walk::Exhausted;
        }
        let mut queue = VecDeque::from([root]);
        let mut visited = vec![];
        while let Some(current) = queue.pop_front() {
            match self.step(current, visitor, |v| queue.push_back(v)) {
                Step::Skipped => {}
                Step::Stopped => return Walk::Stopped,
                Step::Visited => visited.push(current),
            }
        }
        for current in visited {
            if let Flow::Stop = visitor.post_visit(self.graph, current) {
                self.halt(current, None);
                return Walk::Stopped;
            }
        }
        trace!("breadth-first traversal from {root:?} exhausted");
        Walk::Exhausted
    }

    /// Resets what the last traversal left behind,
    /// and tells whether a traversal from `root` can start at all.
    fn begin(&mut self, root: VertexId) -> bool {
        self.final_vertex = None;
        self.final_edge = None;
        if self.graph.contains_vertex(root) {
            true
        } else {
            debug!("traversal from {root:?}, which is not in the graph");
            false
        }
    }

    /// Marks and visits `current`, then hands each successor admitted by `pre_visit` to `admit`.
    fn step<T, F>(&mut self, current: VertexId, visitor: &mut T, mut admit: F) -> Step
    where
        T: Visitor<V, E, D> + ?Sized,
        F: FnMut(VertexId),
    {
        if !self.marks.insert(current) {
            return Step::Skipped;
        }
        trace!("visiting {current:?}");
        match visitor.visit(self.graph, current) {
            Flow::Stop => {
                self.halt(current, None);
                return Step::Stopped;
            }
            Flow::Reject => {
                trace!("successors of {current:?} rejected");
                return Step::Visited;
            }
            Flow::Continue => {}
        }
        for edge in self.graph.out_edges(current) {
            if self.marks.contains(&edge.sink) {
                continue;
            }
            match visitor.pre_visit(self.graph, edge, current) {
                Flow::Stop => {
                    self.halt(current, Some(edge));
                    return Step::Stopped;
                }
                Flow::Reject => trace!("{:?} rejected", edge.id),
                Flow::Continue => admit(edge.sink),
            }
        }
        Step::Visited
    }

    fn halt(&mut self, v: VertexId, edge: Option<Edge>) {
        debug!("traversal stopped at {v:?}, {edge:?}");
        self.final_vertex = Some(v);
        self.final_edge = edge;
    }
}
