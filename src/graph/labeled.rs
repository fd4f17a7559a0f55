use crate::graph::*;
use ahash::RandomState;
use log::debug;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::marker::PhantomData;

/// A labeled multigraph, directed or undirected according to `D`.
///
/// Vertices carry labels of type `V` and edges carry labels of type `E`.
/// Self edges and parallel edges are allowed;
/// edges are told apart by their [EdgeId]s, never by their labels.
///
/// In an undirected graph, each logical edge is stored as two directed records,
/// `(v0, v1)` and `(v1, v0)`, sharing one label.
/// Both count toward degrees, but the pair counts once toward [edge_size](Self::edge_size)
/// and appears once in [edges](Self::edges).
///
/// | Operation              | Complexity                                                    |
/// | ---------------------- | ------------------------------------------------------------- |
/// | `add_vertex`           | $O(\log \|V\|)$                                               |
/// | `add_edge`             | $O(\log \|E\|)$                                               |
/// | `remove_edge`          | $O(\|E\|)$, dominated by maintaining the order of `edges()`   |
/// | `remove_vertex`        | $O(\|E\| + \|E'\| \log \|E\|)$, where $E'$ are incident edges |
/// | `out_degree`/`in_degree` | $O(\log \|E\| + d)$                                         |
/// | `contains`             | $O(\log \|E\|)$                                               |
#[derive(Clone)]
pub struct Graph<V, E, D = Directed> {
    vertices: BTreeMap<VertexId, V>,
    edges: HashMap<EdgeId, EdgeEntry, RandomState>,
    // keyed by canonical edge ids
    edge_labels: HashMap<EdgeId, E, RandomState>,
    // canonical edge ids in the order `edges()` yields them
    sequence: Vec<EdgeId>,
    // (source, sink, edge)
    out_edges: BTreeSet<(VertexId, VertexId, EdgeId)>,
    // (sink, source, edge)
    in_edges: BTreeSet<(VertexId, VertexId, EdgeId)>,
    directedness: PhantomData<D>,
}

/// A labeled directed multigraph.
pub type DirectedGraph<V, E> = Graph<V, E, Directed>;
/// A labeled undirected multigraph.
pub type UndirectedGraph<V, E> = Graph<V, E, Undirected>;

#[derive(Debug, Clone, Copy)]
struct EdgeEntry {
    edge: Edge,
    canonical: EdgeId,
    mirror: Option<EdgeId>,
}

impl<V, E, D> DirectedOrNot for Graph<V, E, D>
where
    D: DirectedOrNot,
{
    const DIRECTED_OR_NOT: bool = D::DIRECTED_OR_NOT;
}

impl<V, E, D> Default for Graph<V, E, D>
where
    D: DirectedOrNot,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, D> Graph<V, E, D>
where
    D: DirectedOrNot,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edges: HashMap::with_hasher(RandomState::new()),
            edge_labels: HashMap::with_hasher(RandomState::new()),
            sequence: vec![],
            out_edges: BTreeSet::new(),
            in_edges: BTreeSet::new(),
            directedness: PhantomData,
        }
    }

    pub fn is_directed(&self) -> bool {
        D::DIRECTED_OR_NOT
    }

    /// Adds a vertex labeled `label`, with no incident edges.
    pub fn add_vertex(&mut self, label: V) -> VertexId {
        let vid = VertexId::one_more();
        self.vertices.insert(vid, label);
        vid
    }

    /// Adds an edge from `from` to `to` labeled `label`.
    ///
    /// For undirected graphs, the mirrored edge is added as well,
    /// and the returned one is the edge leaving `from`.
    /// Returns `None` and adds nothing if either endpoint is not in this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, label: E) -> Option<Edge> {
        if !self.vertices.contains_key(&from) || !self.vertices.contains_key(&to) {
            debug!("no edge added between foreign endpoints {from:?} and {to:?}");
            return None;
        }
        let edge = Edge {
            id: EdgeId::one_more(),
            source: from,
            sink: to,
        };
        if D::DIRECTED_OR_NOT {
            self.link(edge, edge.id, None);
        } else {
            let mirror = edge.reversed(EdgeId::one_more());
            self.link(edge, edge.id, Some(mirror.id));
            self.link(mirror, edge.id, Some(edge.id));
        }
        self.edge_labels.insert(edge.id, label);
        self.sequence.push(edge.id);
        Some(edge)
    }

    /// Adds an edge from `from` to `to` with a default label.
    pub fn add_default_edge(&mut self, from: VertexId, to: VertexId) -> Option<Edge>
    where
        E: Default,
    {
        self.add_edge(from, to, E::default())
    }

    /// Removes `vertex` and every edge incident to it, in either direction.
    ///
    /// Returns the label of the removed vertex, or `None` if it is not in this graph.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Option<V> {
        if !self.vertices.contains_key(&vertex) {
            return None;
        }
        let incident: BTreeSet<EdgeId> = adjacent(&self.out_edges, vertex)
            .chain(adjacent(&self.in_edges, vertex))
            .filter_map(|(_, _, eid)| self.canonical_of(eid))
            .collect();
        for eid in incident.iter() {
            self.detach(eid);
        }
        self.sequence.retain(|eid| !incident.contains(eid));
        debug!(
            "removed {vertex:?} with {} incident edges",
            incident.len()
        );
        self.vertices.remove(&vertex)
    }

    /// Removes an edge, together with its mirror in undirected graphs.
    ///
    /// Either record of an undirected edge may be passed.
    /// Returns the label of the removed edge, or `None` if it is not in this graph.
    pub fn remove_edge(&mut self, edge: EdgeId) -> Option<E> {
        let canonical = self.canonical_of(&edge)?;
        let label = self.detach(&canonical);
        self.sequence.retain(|eid| *eid != canonical);
        label
    }

    /// Removes all edges from `v1` to `v2`.
    ///
    /// For undirected graphs, that is all edges between them in either direction.
    /// Returns how many edges are removed.
    pub fn remove_edges_between(&mut self, v1: VertexId, v2: VertexId) -> usize {
        let doomed: BTreeSet<EdgeId> = between(&self.out_edges, v1, v2)
            .filter_map(|(_, _, eid)| self.canonical_of(eid))
            .collect();
        for eid in doomed.iter() {
            self.detach(eid);
        }
        if !doomed.is_empty() {
            self.sequence.retain(|eid| !doomed.contains(eid));
            debug!("removed {} edges from {v1:?} to {v2:?}", doomed.len());
        }
        doomed.len()
    }

    pub fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, each undirected edge counting once.
    pub fn edge_size(&self) -> usize {
        if D::DIRECTED_OR_NOT {
            self.edges.len()
        } else {
            self.edges.len() / 2
        }
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains_key(&v)
    }

    pub fn contains_edge(&self, e: EdgeId) -> bool {
        self.edges.contains_key(&e)
    }

    pub fn find_edge(&self, e: EdgeId) -> Option<Edge> {
        self.edges.get(&e).map(|entry| entry.edge)
    }

    pub fn vertex_label(&self, v: VertexId) -> Option<&V> {
        self.vertices.get(&v)
    }

    pub fn vertex_label_mut(&mut self, v: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(&v)
    }

    /// Label of an edge; both records of an undirected edge share it.
    pub fn edge_label(&self, e: EdgeId) -> Option<&E> {
        self.canonical_of(&e)
            .and_then(|canonical| self.edge_labels.get(&canonical))
    }

    pub fn edge_label_mut(&mut self, e: EdgeId) -> Option<&mut E> {
        let canonical = self.canonical_of(&e)?;
        self.edge_labels.get_mut(&canonical)
    }

    /// Number of edges leaving `v`, or 0 if `v` is not in this graph.
    pub fn out_degree(&self, v: VertexId) -> usize {
        adjacent(&self.out_edges, v).count()
    }

    /// Number of edges entering `v`, or 0 if `v` is not in this graph.
    pub fn in_degree(&self, v: VertexId) -> usize {
        adjacent(&self.in_edges, v).count()
    }

    /// A synonym of [out_degree](Self::out_degree), for undirected graphs.
    pub fn degree(&self, v: VertexId) -> usize {
        self.out_degree(v)
    }

    /// Whether there is an edge `(u, v)` with any label.
    /// Undirected graphs ignore the order of `u` and `v`.
    pub fn contains(&self, u: VertexId, v: VertexId) -> bool {
        let found = between(&self.out_edges, u, v).next().is_some();
        if D::DIRECTED_OR_NOT {
            found
        } else {
            found || between(&self.out_edges, v, u).next().is_some()
        }
    }

    /// Whether there is an edge `(u, v)` labeled `label`.
    /// Undirected graphs ignore the order of `u` and `v`.
    pub fn contains_labeled(&self, u: VertexId, v: VertexId, label: &E) -> bool
    where
        E: PartialEq,
    {
        let labeled = |from: VertexId, to: VertexId| {
            between(&self.out_edges, from, to)
                .any(|(_, _, eid)| self.edge_label(*eid) == Some(label))
        };
        if D::DIRECTED_OR_NOT {
            labeled(u, v)
        } else {
            labeled(u, v) || labeled(v, u)
        }
    }

    /// All vertices, in the order they were added.
    pub fn vertices(&self) -> Iteration<VertexId> {
        self.vertices.keys().copied().collect()
    }

    pub fn successors(&self, v: VertexId) -> Iteration<VertexId> {
        adjacent(&self.out_edges, v)
            .map(|(_, sink, _)| *sink)
            .collect()
    }

    pub fn predecessors(&self, v: VertexId) -> Iteration<VertexId> {
        adjacent(&self.in_edges, v)
            .map(|(_, source, _)| *source)
            .collect()
    }

    /// A synonym of [successors](Self::successors), for undirected graphs.
    pub fn neighbors(&self, v: VertexId) -> Iteration<VertexId> {
        self.successors(v)
    }

    /// All edges, each undirected edge once.
    ///
    /// The order is the one set by the last [order_edges_by](Self::order_edges_by),
    /// followed by edges added since.
    pub fn edges(&self) -> Iteration<Edge> {
        self.sequence
            .iter()
            .filter_map(|eid| self.find_edge(*eid))
            .collect()
    }

    pub fn out_edges(&self, v: VertexId) -> Iteration<Edge> {
        adjacent(&self.out_edges, v)
            .map(|(source, sink, id)| Edge {
                id: *id,
                source: *source,
                sink: *sink,
            })
            .collect()
    }

    pub fn in_edges(&self, v: VertexId) -> Iteration<Edge> {
        adjacent(&self.in_edges, v)
            .map(|(sink, source, id)| Edge {
                id: *id,
                source: *source,
                sink: *sink,
            })
            .collect()
    }

    /// A synonym of [out_edges](Self::out_edges), for undirected graphs.
    pub fn edges_of(&self, v: VertexId) -> Iteration<Edge> {
        self.out_edges(v)
    }

    /// All edges leaving `source` and entering `sink`.
    pub fn edges_connecting(&self, source: VertexId, sink: VertexId) -> Iteration<Edge> {
        between(&self.out_edges, source, sink)
            .map(|(_, _, id)| Edge {
                id: *id,
                source,
                sink,
            })
            .collect()
    }

    /// Lets [edges](Self::edges) deliver edges sorted by `cmp` over their labels.
    ///
    /// Sorting is stable. Edges added afterwards are not kept in order.
    pub fn order_edges_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        let labels = &self.edge_labels;
        self.sequence
            .sort_by(|a, b| match (labels.get(a), labels.get(b)) {
                (Some(x), Some(y)) => cmp(x, y),
                _ => Ordering::Equal,
            });
    }

    /// [order_edges_by](Self::order_edges_by) the natural order of labels.
    pub fn order_edges(&mut self)
    where
        E: Ord,
    {
        self.order_edges_by(|a, b| a.cmp(b))
    }

    fn canonical_of(&self, e: &EdgeId) -> Option<EdgeId> {
        self.edges.get(e).map(|entry| entry.canonical)
    }

    fn link(&mut self, edge: Edge, canonical: EdgeId, mirror: Option<EdgeId>) {
        self.out_edges.insert((edge.source, edge.sink, edge.id));
        self.in_edges.insert((edge.sink, edge.source, edge.id));
        self.edges.insert(
            edge.id,
            EdgeEntry {
                edge,
                canonical,
                mirror,
            },
        );
    }

    fn unlink(&mut self, e: &EdgeId) -> Option<EdgeEntry> {
        let entry = self.edges.remove(e)?;
        let edge = entry.edge;
        self.out_edges.remove(&(edge.source, edge.sink, edge.id));
        self.in_edges.remove(&(edge.sink, edge.source, edge.id));
        Some(entry)
    }

    /// Unlinks a logical edge by its canonical id, leaving `sequence` to the caller.
    fn detach(&mut self, canonical: &EdgeId) -> Option<E> {
        let entry = self.unlink(canonical)?;
        if let Some(mirror) = entry.mirror {
            self.unlink(&mirror);
        }
        self.edge_labels.remove(canonical)
    }
}

fn adjacent(
    index: &BTreeSet<(VertexId, VertexId, EdgeId)>,
    v: VertexId,
) -> impl Iterator<Item = &(VertexId, VertexId, EdgeId)> + '_ {
    index.range((v, VertexId::MIN, EdgeId::MIN)..=(v, VertexId::MAX, EdgeId::MAX))
}

fn between(
    index: &BTreeSet<(VertexId, VertexId, EdgeId)>,
    from: VertexId,
    to: VertexId,
) -> impl Iterator<Item = &(VertexId, VertexId, EdgeId)> + '_ {
    index.range((from, to, EdgeId::MIN)..=(from, to, EdgeId::MAX))
}
