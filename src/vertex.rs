/*!
# Vertices and per-run algorithm state

A [`Vertex`] is an immutable id plus the payload the caller attached to it. It carries
no algorithm state: every algorithm run allocates a fresh [`SearchState`], one
[`VertexState`] scratch record per vertex id, and returns it (wrapped in a typed result)
to the caller. Two runs on the same graph therefore never observe each other's colors,
keys or parents, and parents are stored as ids so the resulting trees are plain index
graphs.
*/

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use itertools::Itertools;

use crate::prelude::*;

/// A vertex as stored by a graph: its id and a reference to (or copy of) its payload.
///
/// Two vertices are equal iff their ids are equal.
#[derive(Debug, Clone, Copy)]
pub struct Vertex<T> {
    pub id: Node,
    pub value: T,
}

impl<T> Vertex<T> {
    pub fn new(id: Node, value: T) -> Self {
        Self { id, value }
    }
}

impl<T> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Vertex<T> {}

impl<T> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: Display> Display for Vertex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Traversal state machine of a vertex: `White -> Gray -> Black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum VertexColor {
    /// Undiscovered
    #[default]
    White,
    /// Discovered, still on the frontier
    Gray,
    /// Finished
    Black,
}

/// Timestamps of a depth-first search start at `1`; `0` means "never set".
pub type Timestamp = u32;

/// Scratch record of a single vertex during one algorithm run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexState {
    pub(crate) color: VertexColor,
    pub(crate) distance: NumNodes,
    pub(crate) discovery: Timestamp,
    pub(crate) finish: Timestamp,
    pub(crate) key: Weight,
    pub(crate) parent: Option<OptionalNode>,
}

impl Default for VertexState {
    fn default() -> Self {
        Self {
            color: VertexColor::White,
            distance: INVALID_NODE,
            discovery: 0,
            finish: 0,
            key: INFINITE_WEIGHT,
            parent: None,
        }
    }
}

impl VertexState {
    pub fn color(&self) -> VertexColor {
        self.color
    }

    /// Hop count from the BFS source, `None` if the vertex was not reached
    pub fn distance(&self) -> Option<NumNodes> {
        (self.distance != INVALID_NODE).then_some(self.distance)
    }

    pub fn discovery(&self) -> Timestamp {
        self.discovery
    }

    pub fn finish(&self) -> Timestamp {
        self.finish
    }

    /// Tentative weight; [`INFINITE_WEIGHT`] if never improved
    pub fn key(&self) -> Weight {
        self.key
    }

    pub fn parent(&self) -> Option<Node> {
        self.parent.map(|p| p.get())
    }
}

/// Per-run algorithm context: one [`VertexState`] per vertex id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    states: Vec<VertexState>,
}

impl SearchState {
    /// Creates pristine state for `n` vertices (all white, keys at the sentinel, no parents)
    pub fn new(n: NumNodes) -> Self {
        Self {
            states: vec![VertexState::default(); n as usize],
        }
    }

    /// Returns the number of vertices covered
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns *true* if no vertex is covered
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Resets every record to its pristine state
    pub fn reset(&mut self) {
        self.states.fill(VertexState::default());
    }

    /// Returns the scratch record of `u`.
    /// ** Panics if `u >= n` **
    pub fn state(&self, u: Node) -> &VertexState {
        &self.states[u as usize]
    }

    pub fn color(&self, u: Node) -> VertexColor {
        self.states[u as usize].color
    }

    pub fn set_color(&mut self, u: Node, color: VertexColor) {
        self.states[u as usize].color = color;
    }

    pub fn distance(&self, u: Node) -> Option<NumNodes> {
        self.states[u as usize].distance()
    }

    pub fn set_distance(&mut self, u: Node, distance: NumNodes) {
        self.states[u as usize].distance = distance;
    }

    pub fn discovery(&self, u: Node) -> Timestamp {
        self.states[u as usize].discovery
    }

    pub fn set_discovery(&mut self, u: Node, time: Timestamp) {
        self.states[u as usize].discovery = time;
    }

    pub fn finish(&self, u: Node) -> Timestamp {
        self.states[u as usize].finish
    }

    pub fn set_finish(&mut self, u: Node, time: Timestamp) {
        self.states[u as usize].finish = time;
    }

    pub fn key(&self, u: Node) -> Weight {
        self.states[u as usize].key
    }

    pub fn set_key(&mut self, u: Node, key: Weight) {
        self.states[u as usize].key = key;
    }

    pub fn parent(&self, u: Node) -> Option<Node> {
        self.states[u as usize].parent()
    }

    pub fn set_parent(&mut self, u: Node, parent: Option<Node>) {
        self.states[u as usize].parent = parent.and_then(OptionalNode::new);
    }

    /// Returns an iterator over all keys, indexed by vertex id
    pub fn keys(&self) -> impl Iterator<Item = Weight> + '_ {
        self.states.iter().map(|s| s.key)
    }

    /// Relaxes edge `(u, v)` of weight `w`: if `key(v) > key(u) + w`, lowers `key(v)`
    /// and makes `u` the parent of `v`. Returns *true* if `v` was improved.
    ///
    /// Since the sentinel is absorbing, an unreached `u` never improves anything.
    pub fn relax(&mut self, u: Node, v: Node, w: Weight) -> bool {
        let candidate = weight_add(self.key(u), w);
        if self.key(v) > candidate {
            self.set_key(v, candidate);
            self.set_parent(v, Some(u));
            true
        } else {
            false
        }
    }

    /// Returns *true* if relaxing `(u, v)` of weight `w` would improve `v`
    pub fn can_relax(&self, u: Node, v: Node, w: Weight) -> bool {
        self.key(v) > weight_add(self.key(u), w)
    }

    /// Walks parents from `target` back to a parentless root and returns the path in
    /// root-to-target order. Returns `None` if the parent chain never reaches a root,
    /// which can only happen after relaxing around a negative cycle.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let mut state = SearchState::new(3);
    /// state.set_parent(2, Some(0));
    /// state.set_parent(0, Some(1));
    /// assert_eq!(state.path_to(2), Some(vec![1, 0, 2]));
    /// assert_eq!(state.path_to(1), Some(vec![1]));
    /// ```
    pub fn path_to(&self, target: Node) -> Option<Vec<Node>> {
        let mut path = vec![target];
        let mut node = target;
        while let Some(p) = self.parent(node) {
            if path.len() >= self.len() {
                return None;
            }
            path.push(p);
            node = p;
        }
        path.reverse();
        Some(path)
    }

    /// Renders the path to `target` as `[a]-->[b]-->[c]` using `label` for every vertex
    pub fn render_path<L, F>(&self, target: Node, label: F) -> Option<String>
    where
        L: Display,
        F: Fn(Node) -> L,
    {
        self.path_to(target)
            .map(|path| path.into_iter().map(|u| format!("[{}]", label(u))).join("-->"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pristine_state() {
        let state = SearchState::new(4);
        assert_eq!(state.len(), 4);
        for u in 0..4 {
            assert_eq!(state.color(u), VertexColor::White);
            assert_eq!(state.key(u), INFINITE_WEIGHT);
            assert_eq!(state.parent(u), None);
            assert_eq!(state.distance(u), None);
        }
    }

    #[test]
    fn relax() {
        let mut state = SearchState::new(3);
        assert!(!state.relax(0, 1, 5));

        state.set_key(0, 0);
        assert!(state.relax(0, 1, 5));
        assert_eq!(state.key(1), 5);
        assert_eq!(state.parent(1), Some(0));

        assert!(!state.relax(0, 1, 5));
        assert!(state.relax(1, 2, -7));
        assert_eq!(state.key(2), -2);
        assert!(!state.can_relax(0, 2, 1));
    }

    #[test]
    fn path_with_cycle_is_rejected() {
        let mut state = SearchState::new(3);
        state.set_parent(0, Some(1));
        state.set_parent(1, Some(0));
        assert_eq!(state.path_to(0), None);
        assert_eq!(state.path_to(2), Some(vec![2]));
    }

    #[test]
    fn render() {
        let mut state = SearchState::new(3);
        state.set_parent(1, Some(0));
        state.set_parent(2, Some(1));
        let labels = ["s", "t", "x"];
        assert_eq!(
            state.render_path(2, |u| labels[u as usize]),
            Some("[s]-->[t]-->[x]".to_string())
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = SearchState::new(2);
        state.set_color(0, VertexColor::Black);
        state.set_key(1, 3);
        state.set_parent(1, Some(0));
        state.reset();
        assert_eq!(state, SearchState::new(2));
    }

    #[test]
    fn vertex_identity() {
        let a = Vertex::new(3, "a");
        let b = Vertex::new(3, "b");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "a");
    }
}
