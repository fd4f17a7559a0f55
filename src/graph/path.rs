use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;

impl<V, E, D> Graph<V, E, D>
where
    D: DirectedOrNot,
{
    /// Walks `predecessors` back from `destination` and returns the vertices
    /// from the first one without a predecessor up to `destination`.
    ///
    /// The walk also stops before any vertex it has already passed,
    /// so a cyclic map still yields a finite chain.
    pub fn predecessor_chain<S>(
        &self,
        predecessors: &HashMap<VertexId, VertexId, S>,
        destination: VertexId,
    ) -> Vec<VertexId>
    where
        S: BuildHasher,
    {
        let mut chain = vec![destination];
        let mut passed = HashSet::with_hasher(RandomState::new());
        passed.insert(destination);
        let mut current = destination;
        while let Some(prev) = predecessors.get(&current) {
            if !passed.insert(*prev) {
                break;
            }
            chain.push(*prev);
            current = *prev;
        }
        chain.reverse();
        chain
    }

    /// Reconstructs the path ending at `destination` that `predecessors` describes.
    ///
    /// Returns, for each hop of the path, all edges of this graph making that hop.
    /// There may be more than one in a multigraph, and it is up to the caller
    /// to pick one. In undirected graphs, each logical edge appears once per hop,
    /// as the record oriented along the path.
    pub fn reconstruct_path<S>(
        &self,
        predecessors: &HashMap<VertexId, VertexId, S>,
        destination: VertexId,
    ) -> Vec<Vec<Edge>>
    where
        S: BuildHasher,
    {
        self.predecessor_chain(predecessors, destination)
            .windows(2)
            .map(|hop| self.edges_connecting(hop[0], hop[1]).collect())
            .collect()
    }
}
