use std::{iter::Copied, slice::Iter};

use smallvec::SmallVec;

use super::*;

/// Outgoing edges of a single vertex as `(neighbor, weight)` pairs in insertion order.
///
/// Most vertices have few neighbors, so the first few pairs are stored inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedNeighborhood {
    nbs: SmallVec<[(Node, Weight); 4]>,
}

impl WeightedNeighborhood {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    /// Returns an iterator over all `(neighbor, weight)` pairs
    pub fn neighbors(&self) -> Copied<Iter<'_, (Node, Weight)>> {
        self.nbs.iter().copied()
    }

    /// Returns the weight of the edge to `v`, if present
    pub fn weight_to(&self, v: Node) -> Option<Weight> {
        self.nbs.iter().find(|&&(u, _)| u == v).map(|&(_, w)| w)
    }

    /// Returns *true* if `v` is in the Neighborhood
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.weight_to(v).is_some()
    }

    /// Inserts the edge to `v` or overwrites its weight (last write wins).
    /// Returns the previous weight if the edge existed before.
    pub fn insert(&mut self, v: Node, w: Weight) -> Option<Weight> {
        match self.nbs.iter_mut().find(|(u, _)| *u == v) {
            Some((_, old)) => Some(std::mem::replace(old, w)),
            None => {
                self.nbs.push((v, w));
                None
            }
        }
    }

    /// Removes all neighbors in the Neighborhood
    pub fn clear(&mut self) {
        self.nbs.clear();
    }
}
