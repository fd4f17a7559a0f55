//! Random scripts of graph mutations, and a naive oracle to check graphs against.
use crate::graph::*;
use quickcheck::{Arbitrary, Gen};
use rs_quickcheck_util::*;
use std::collections::BTreeSet;

/// Vertices and edges are referred to by the order they were (tried to be) added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    AddVertex,
    RemoveVertex(usize),
    AddEdge(usize, usize),
    RemoveEdge(usize),
    RemoveEdgesBetween(usize, usize),
}

#[derive(Clone)]
pub struct Ops {
    pub ops: Vec<Op>,
}

/// A graph built from [Ops], with vertex `i` labeled `i` and
/// the `k`-th edge addition labeled `k`.
pub struct Applied<D> {
    pub graph: Graph<u32, u32, D>,
    pub vids: Vec<VertexId>,
    pub eids: Vec<Option<EdgeId>>,
}

pub struct Oracle {
    directed: bool,
    vertices: Vec<bool>,
    // (source, sink, alive)
    edges: Vec<Option<(usize, usize, bool)>>,
}

impl std::fmt::Debug for Ops {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.ops)
    }
}

impl Ops {
    pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
        self.ops.iter()
    }

    pub fn apply<D: DirectedOrNot>(&self) -> (Applied<D>, Oracle) {
        let mut trial = Applied {
            graph: Graph::new(),
            vids: vec![],
            eids: vec![],
        };
        let mut oracle = Oracle {
            directed: D::DIRECTED_OR_NOT,
            vertices: vec![],
            edges: vec![],
        };
        for op in self.iter() {
            trial.apply(op);
            oracle.apply(op);
        }
        (trial, oracle)
    }
}

impl<D: DirectedOrNot> Applied<D> {
    fn apply(&mut self, op: &Op) {
        match *op {
            Op::AddVertex => {
                let label = self.vids.len() as u32;
                self.vids.push(self.graph.add_vertex(label));
            }
            Op::RemoveVertex(v) => {
                self.graph.remove_vertex(self.vids[v]);
            }
            Op::AddEdge(src, snk) => {
                let label = self.eids.len() as u32;
                let e = self.graph.add_edge(self.vids[src], self.vids[snk], label);
                self.eids.push(e.map(|e| e.id));
            }
            Op::RemoveEdge(e) => {
                if let Some(eid) = self.eids[e] {
                    self.graph.remove_edge(eid);
                }
            }
            Op::RemoveEdgesBetween(v1, v2) => {
                self.graph.remove_edges_between(self.vids[v1], self.vids[v2]);
            }
        }
    }
}

impl Oracle {
    fn apply(&mut self, op: &Op) {
        match *op {
            Op::AddVertex => self.vertices.push(true),
            Op::RemoveVertex(v) => {
                if self.vertices[v] {
                    self.vertices[v] = false;
                    for (src, snk, alive) in self.edges.iter_mut().flatten() {
                        if *src == v || *snk == v {
                            *alive = false;
                        }
                    }
                }
            }
            Op::AddEdge(src, snk) => {
                if self.vertices[src] && self.vertices[snk] {
                    self.edges.push(Some((src, snk, true)));
                } else {
                    self.edges.push(None);
                }
            }
            Op::RemoveEdge(e) => {
                if let Some((_, _, alive)) = self.edges[e].as_mut() {
                    *alive = false;
                }
            }
            Op::RemoveEdgesBetween(v1, v2) => {
                let directed = self.directed;
                for (src, snk, alive) in self.edges.iter_mut().flatten() {
                    if (*src == v1 && *snk == v2) || (!directed && *src == v2 && *snk == v1) {
                        *alive = false;
                    }
                }
            }
        }
    }

    fn alive_edges(&self) -> impl Iterator<Item = (usize, (usize, usize))> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(k, e)| match e {
                Some((src, snk, true)) => Some((k, (*src, *snk))),
                _ => None,
            })
    }

    pub fn vertex_size(&self) -> usize {
        self.vertices.iter().filter(|alive| **alive).count()
    }

    pub fn edge_size(&self) -> usize {
        self.alive_edges().count()
    }

    pub fn out_degree(&self, v: usize) -> usize {
        let out = self.alive_edges().filter(|(_, (src, _))| *src == v).count();
        if self.directed {
            out
        } else {
            out + self.alive_edges().filter(|(_, (_, snk))| *snk == v).count()
        }
    }

    pub fn in_degree(&self, v: usize) -> usize {
        let ins = self.alive_edges().filter(|(_, (_, snk))| *snk == v).count();
        if self.directed {
            ins
        } else {
            ins + self.alive_edges().filter(|(_, (src, _))| *src == v).count()
        }
    }

    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.alive_edges().any(|(_, (src, snk))| {
            (src == u && snk == v) || (!self.directed && src == v && snk == u)
        })
    }

    pub fn edge_labels(&self) -> BTreeSet<u32> {
        self.alive_edges().map(|(k, _)| k as u32).collect()
    }

    pub fn is_alive(&self, v: usize) -> bool {
        self.vertices.get(v).copied().unwrap_or(false)
    }

    /// Indices of vertices reachable from `from`, `from` included if alive.
    pub fn reachable(&self, from: usize) -> BTreeSet<usize> {
        let mut reached = BTreeSet::new();
        if !self.is_alive(from) {
            return reached;
        }
        let mut stack = vec![from];
        while let Some(u) = stack.pop() {
            if !reached.insert(u) {
                continue;
            }
            for (_, (src, snk)) in self.alive_edges() {
                if src == u {
                    stack.push(snk);
                } else if !self.directed && snk == u {
                    stack.push(src);
                }
            }
        }
        reached
    }
}

impl Arbitrary for Ops {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut vertex_count = 0usize;
        let mut edge_count = 0usize;
        let ops = gen_bytes(g, b"abcd.", b'.', 0..)
            .iter()
            .map(|_| {
                let kind = if vertex_count == 0 {
                    0
                } else {
                    u8::arbitrary(g) % 5
                };
                match kind {
                    0 => {
                        vertex_count += 1;
                        Op::AddVertex
                    }
                    1 => Op::RemoveVertex(usize::arbitrary(g) % vertex_count),
                    2 => {
                        let src = usize::arbitrary(g) % vertex_count;
                        let snk = usize::arbitrary(g) % vertex_count;
                        edge_count += 1;
                        Op::AddEdge(src, snk)
                    }
                    3 if edge_count > 0 => Op::RemoveEdge(usize::arbitrary(g) % edge_count),
                    _ => {
                        let v1 = usize::arbitrary(g) % vertex_count;
                        let v2 = usize::arbitrary(g) % vertex_count;
                        Op::RemoveEdgesBetween(v1, v2)
                    }
                }
            })
            .collect();
        Self { ops }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let l = self.ops.len();
        let me = self.clone();
        let it = std::iter::successors(Some(l / 2), move |n| {
            let nxt = (n + l) / 2 + 1;
            if nxt >= l {
                None
            } else {
                Some(nxt)
            }
        })
        .map(move |n| Ops {
            ops: me.ops[0..n].to_vec(),
        });
        Box::new(it)
    }
}
