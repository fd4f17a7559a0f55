use super::weights::*;
use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use log::{debug, trace};
use std::cmp::{Ordering, Reverse};
use std::collections::{HashMap, HashSet};

/// A* search for a minimum-weight path.
///
/// Both methods run the same search. They differ in where weights come from:
/// [shortest_path](Self::shortest_path) takes accessors from the caller, while
/// [shortest_path_by_labels](Self::shortest_path_by_labels) reads and writes
/// weights embedded in the labels themselves.
///
/// The heuristic `h` is assumed, not checked, to be admissible and consistent.
/// With [ZeroDistancer], the search is Dijkstra's algorithm.
pub trait ShortestPath<V, E> {
    /// Returns edges of a minimum-weight path from `from` to `to`,
    /// or `None` if there is no such path or either end is not in the graph.
    ///
    /// Where several edges connect two adjacent vertices of the path,
    /// the lightest one is taken, the earliest added on ties.
    ///
    /// As a side effect, `vweighter` learns the best known `g + h` of every vertex
    /// the search reaches. Vertices the search closed are guaranteed finite weights.
    /// Weights of other vertices are left untouched.
    fn shortest_path<H, W, EW>(
        &self,
        from: VertexId,
        to: VertexId,
        h: &H,
        vweighter: &mut W,
        eweighter: &EW,
    ) -> Option<Vec<Edge>>
    where
        H: Distancer<V> + ?Sized,
        W: Weighter<V> + ?Sized,
        EW: Weighting<E> + ?Sized;

    /// Like [shortest_path](Self::shortest_path), with edge weights from
    /// [Weighted] edge labels, and vertex weights recorded into
    /// [Weightable] vertex labels.
    fn shortest_path_by_labels<H>(&mut self, from: VertexId, to: VertexId, h: &H) -> Option<Vec<Edge>>
    where
        H: Distancer<V> + ?Sized,
        V: Weightable,
        E: Weighted;
}

impl<V, E, D> ShortestPath<V, E> for Graph<V, E, D>
where
    D: DirectedOrNot,
{
    fn shortest_path<H, W, EW>(
        &self,
        from: VertexId,
        to: VertexId,
        h: &H,
        vweighter: &mut W,
        eweighter: &EW,
    ) -> Option<Vec<Edge>>
    where
        H: Distancer<V> + ?Sized,
        W: Weighter<V> + ?Sized,
        EW: Weighting<E> + ?Sized,
    {
        self.astar(
            from,
            to,
            h,
            |label| eweighter.weight(label),
            |v, weight| {
                if let Some(label) = self.vertex_label(v) {
                    vweighter.set_weight(label, weight);
                }
            },
        )
    }

    fn shortest_path_by_labels<H>(&mut self, from: VertexId, to: VertexId, h: &H) -> Option<Vec<Edge>>
    where
        H: Distancer<V> + ?Sized,
        V: Weightable,
        E: Weighted,
    {
        let mut recorded = vec![];
        let path = self.astar(from, to, h, Weighted::weight, |v, weight| {
            recorded.push((v, weight))
        });
        for (v, weight) in recorded {
            if let Some(label) = self.vertex_label_mut(v) {
                label.set_weight(weight);
            }
        }
        path
    }
}

/// An f-score, totally ordered.
#[derive(Debug, Clone, Copy)]
struct Score(f64);

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl<V, E, D> Graph<V, E, D>
where
    D: DirectedOrNot,
{
    /// The search behind [ShortestPath].
    /// `record` is told every vertex weight as soon as it improves.
    fn astar<H, EW, R>(
        &self,
        from: VertexId,
        to: VertexId,
        h: &H,
        eweight: EW,
        mut record: R,
    ) -> Option<Vec<Edge>>
    where
        H: Distancer<V> + ?Sized,
        EW: Fn(&E) -> f64,
        R: FnMut(VertexId, f64),
    {
        let (source, target) = match (self.vertex_label(from), self.vertex_label(to)) {
            (Some(source), Some(target)) => (source, target),
            _ => {
                debug!("no path between {from:?} and {to:?}, not both in the graph");
                return None;
            }
        };
        let hasher = RandomState::new();
        let mut open =
            KeyedPriorityQueue::with_capacity_and_hasher(self.vertex_size(), hasher.clone());
        let mut closed = HashSet::with_hasher(hasher.clone());
        let mut g_scores = HashMap::with_hasher(hasher.clone());
        let mut f_scores = HashMap::with_hasher(hasher.clone());
        let mut came_from = HashMap::with_hasher(hasher);

        let f = h.dist(source, target);
        record(from, f);
        g_scores.insert(from, 0.0);
        f_scores.insert(from, f);
        open.push(from, Reverse(Score(f)));

        while let Some((current, _)) = open.pop() {
            if current == to {
                let path = self.lightest_path(&came_from, to, &eweight);
                debug!(
                    "path from {from:?} to {to:?} found, {} edges, {} vertices closed",
                    path.len(),
                    closed.len()
                );
                return Some(path);
            }
            closed.insert(current);
            let g_current = g_scores.get(&current).copied().unwrap_or(f64::INFINITY);
            for edge in self.out_edges(current) {
                let next = edge.sink;
                let next_label = match self.vertex_label(next) {
                    Some(label) => label,
                    None => continue,
                };
                let g = g_current + self.edge_label(edge.id).map_or(f64::INFINITY, &eweight);
                let f = g + h.dist(next_label, target);
                let recorded = f_scores.get(&next).copied().unwrap_or(f64::INFINITY);
                if closed.contains(&next) && f >= recorded {
                    continue;
                }
                if open.get_priority(&next).is_none() || f < recorded {
                    trace!("{next:?} reached through {:?}, g = {g}, f = {f}", edge.id);
                    came_from.insert(next, current);
                    g_scores.insert(next, g);
                    f_scores.insert(next, f);
                    record(next, f);
                    open.push(next, Reverse(Score(f)));
                }
            }
        }
        debug!(
            "no path from {from:?} to {to:?}, {} vertices closed",
            closed.len()
        );
        None
    }

    /// Reconstructs the path to `to`, taking the lightest edge of each hop.
    fn lightest_path<EW>(
        &self,
        came_from: &HashMap<VertexId, VertexId, RandomState>,
        to: VertexId,
        eweight: &EW,
    ) -> Vec<Edge>
    where
        EW: Fn(&E) -> f64,
    {
        self.reconstruct_path(came_from, to)
            .into_iter()
            .filter_map(|candidates| {
                candidates
                    .into_iter()
                    .map(|e| (e, self.edge_label(e.id).map_or(f64::INFINITY, eweight)))
                    .fold(None, |lightest: Option<(Edge, f64)>, (e, w)| match lightest {
                        Some((_, lw)) if lw <= w => lightest,
                        _ => Some((e, w)),
                    })
                    .map(|(e, _)| e)
            })
            .collect()
    }
}
