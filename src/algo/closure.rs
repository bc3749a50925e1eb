/*!
# Transitive Closure

Reachability between all vertex pairs, stored as one [`NodeBitSet`] row per vertex and
computed with Warshall's algorithm: for every pivot `k`, each row containing `k` absorbs
row `k`. The closure is reflexive (every vertex reaches itself) and idempotent.
*/

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Returns the reflexive transitive closure of adjacency rows.
///
/// # Examples
/// ```
/// use wgraphs::{Node, NodeBitSet, algo::closure_of};
///
/// let links = vec![
///     NodeBitSet::new_with_bits_set(3, vec![1 as Node]),
///     NodeBitSet::new_with_bits_set(3, vec![2 as Node]),
///     NodeBitSet::new(3),
/// ];
/// let reach = closure_of(&links);
///
/// assert!(reach[0].get_bit(2) && reach[1].get_bit(1));
/// assert!(!reach[2].get_bit(0));
/// ```
pub fn closure_of(links: &[NodeBitSet]) -> Vec<NodeBitSet> {
    let mut reach = links.to_vec();
    for (u, row) in reach.iter_mut().enumerate() {
        row.set_bit(u as Node);
    }

    for k in 0..reach.len() {
        // row `k` is a fixed point of its own round
        let pivot = reach[k].clone();
        for row in reach.iter_mut() {
            if row.get_bit(k as Node) {
                row.set_bits(pivot.iter_set_bits());
            }
        }
    }

    reach
}

/// Reachability rows of a graph.
#[derive(Clone)]
pub struct TransitiveClosure {
    reach: Vec<NodeBitSet>,
}

impl TransitiveClosure {
    /// Computes the closure of the edge relation of `graph`
    pub fn new<G: WeightedAdjacency>(graph: &G) -> Self {
        let n = graph.number_of_nodes();
        let links = graph
            .vertices()
            .map(|u| NodeBitSet::new_with_bits_set(n, graph.neighbors_of(u)))
            .collect_vec();
        let reach = closure_of(&links);

        debug!(
            n = graph.len(),
            pairs = reach.iter().map(|row| row.iter_set_bits().count()).sum::<usize>(),
            "transitive closure finished"
        );
        Self { reach }
    }

    /// Returns *true* if there is a (possibly empty) path `i ~> j`
    pub fn reachable(&self, i: Node, j: Node) -> bool {
        self.reach[i as usize].get_bit(j)
    }

    /// Returns all vertices reachable from `u`, including `u` itself
    pub fn reachable_from(&self, u: Node) -> &NodeBitSet {
        &self.reach[u as usize]
    }

    pub fn rows(&self) -> &[NodeBitSet] {
        &self.reach
    }

    pub fn into_rows(self) -> Vec<NodeBitSet> {
        self.reach
    }
}

/// Reachability as a method on every graph
pub trait Reachability: WeightedAdjacency {
    fn transitive_closure(&self) -> TransitiveClosure {
        TransitiveClosure::new(self)
    }
}

impl<G> Reachability for G where G: WeightedAdjacency {}
