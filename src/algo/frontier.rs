/*!
# Priority Frontiers

Dijkstra and Prim repeatedly extract the undecided vertex with the smallest key. The
strategy is a type parameter of both algorithms:

- [`ScanFrontier`] keeps an unordered member list and scans it on every extraction,
  `O(n)` per step, no decrease-key bookkeeping.
- [`HeapFrontier`] keeps a binary heap and handles decrease-key lazily by pushing a
  fresh entry and discarding outdated ones on extraction, `O(log n)` per step.

Both break ties by the smaller vertex id, so either choice yields the same trees.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// Set of undecided vertices ordered by their current key in a [`SearchState`].
pub trait Frontier {
    /// Creates a frontier containing every vertex covered by `state`
    fn from_state(state: &SearchState) -> Self;

    /// Returns *true* if `u` has not been extracted yet
    fn contains(&self, u: Node) -> bool;

    /// Returns *true* if every vertex has been extracted
    fn is_empty(&self) -> bool;

    /// Removes and returns the vertex with the smallest `(key, id)`
    fn pop_min(&mut self, state: &SearchState) -> Option<Node>;

    /// Must be called whenever the key of a vertex in the frontier was lowered
    fn decrease_key(&mut self, u: Node, key: Weight);
}

/// Frontier rebuilt by a linear scan on every extraction.
#[derive(Debug, Clone)]
pub struct ScanFrontier {
    members: Vec<Node>,
    in_frontier: Vec<bool>,
}

impl Frontier for ScanFrontier {
    fn from_state(state: &SearchState) -> Self {
        let n = state.len();
        Self {
            members: (0..n as Node).collect(),
            in_frontier: vec![true; n],
        }
    }

    fn contains(&self, u: Node) -> bool {
        self.in_frontier[u as usize]
    }

    fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn pop_min(&mut self, state: &SearchState) -> Option<Node> {
        let (pos, _) = self
            .members
            .iter()
            .enumerate()
            .min_by_key(|&(_, &u)| (state.key(u), u))?;

        let u = self.members.swap_remove(pos);
        self.in_frontier[u as usize] = false;
        Some(u)
    }

    fn decrease_key(&mut self, _u: Node, _key: Weight) {}
}

/// Binary-heap frontier with lazy decrease-key.
#[derive(Debug, Clone)]
pub struct HeapFrontier {
    heap: BinaryHeap<Reverse<(Weight, Node)>>,
    in_frontier: Vec<bool>,
    remaining: usize,
}

impl Frontier for HeapFrontier {
    fn from_state(state: &SearchState) -> Self {
        let n = state.len();
        Self {
            heap: (0..n as Node).map(|u| Reverse((state.key(u), u))).collect(),
            in_frontier: vec![true; n],
            remaining: n,
        }
    }

    fn contains(&self, u: Node) -> bool {
        self.in_frontier[u as usize]
    }

    fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    fn pop_min(&mut self, state: &SearchState) -> Option<Node> {
        while let Some(Reverse((key, u))) = self.heap.pop() {
            // outdated entries carry a key that has been lowered since
            if self.in_frontier[u as usize] && key == state.key(u) {
                self.in_frontier[u as usize] = false;
                self.remaining -= 1;
                return Some(u);
            }
        }
        None
    }

    fn decrease_key(&mut self, u: Node, key: Weight) {
        if self.in_frontier[u as usize] {
            self.heap.push(Reverse((key, u)));
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn drain<F: Frontier>(state: &mut SearchState, rng: &mut Pcg64Mcg) -> Vec<Node> {
        let mut frontier = F::from_state(state);
        let mut order = Vec::new();

        while let Some(u) = frontier.pop_min(state) {
            assert!(!frontier.contains(u));
            order.push(u);

            // lower some keys of vertices that are still waiting
            for v in 0..state.len() as Node {
                if frontier.contains(v) && rng.random_bool(0.2) {
                    let key = state.key(v).min(rng.random_range(-50..50));
                    state.set_key(v, key);
                    frontier.decrease_key(v, key);
                }
            }
        }

        assert!(frontier.is_empty());
        order
    }

    #[test]
    fn scan_and_heap_extract_identically() {
        for seed in 0..20 {
            let mut keys = Pcg64Mcg::seed_from_u64(seed);
            let mut state = SearchState::new(40);
            for u in 0..40 {
                if keys.random_bool(0.5) {
                    state.set_key(u, keys.random_range(-100..100));
                }
            }

            let mut scan_state = state.clone();
            let scan = drain::<ScanFrontier>(&mut scan_state, &mut Pcg64Mcg::seed_from_u64(seed));
            let heap = drain::<HeapFrontier>(&mut state, &mut Pcg64Mcg::seed_from_u64(seed));

            assert_eq!(scan.len(), 40);
            assert_eq!(scan, heap);
            assert_eq!(scan_state, state);
        }
    }

    #[test]
    fn ties_prefer_smaller_ids() {
        let state = SearchState::new(3);
        let mut frontier = HeapFrontier::from_state(&state);
        assert_eq!(frontier.pop_min(&state), Some(0));

        let mut frontier = ScanFrontier::from_state(&state);
        assert_eq!(frontier.pop_min(&state), Some(0));
        assert_eq!(frontier.pop_min(&state), Some(1));
        assert_eq!(frontier.pop_min(&state), Some(2));
        assert_eq!(frontier.pop_min(&state), None);
    }
}
