/*!
Breadth-first and depth-first traversals.

- [`BreadthFirstSearch`] builds a [`BfsTree`]: hop distances and parents of every
  vertex reachable from a source.
- [`DepthFirstSearch`] builds a [`DfsForest`]: discovery/finish timestamps, parents,
  the depth-first trees, the finish order (and thus a topological order) and all
  back edges.
- [`Traversal`] exposes both directly as methods on every graph.

Each run owns a fresh [`SearchState`], so results of different runs never interfere.
*/

use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// Hop distances and parents from a single source.
#[derive(Debug, Clone)]
pub struct BfsTree {
    source: Node,
    state: SearchState,
    order: Vec<Node>,
}

impl BfsTree {
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the number of edges on a shortest path `source ~> u`, `None` if `u` is
    /// unreachable
    pub fn distance(&self, u: Node) -> Option<NumNodes> {
        self.state.distance(u)
    }

    /// Returns the vertex that discovered `u`; `None` for the source and unreached vertices
    pub fn parent(&self, u: Node) -> Option<Node> {
        self.state.parent(u)
    }

    /// Returns *true* if `u` is reachable from the source
    pub fn is_reached(&self, u: Node) -> bool {
        self.state.color(u) != VertexColor::White
    }

    /// Returns all reached vertices in the order they were discovered
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Returns a path `source ~> u` with the fewest edges, `None` if `u` is unreachable
    pub fn path_to(&self, u: Node) -> Option<Vec<Node>> {
        if self.is_reached(u) {
            self.state.path_to(u)
        } else {
            None
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn into_state(self) -> SearchState {
        self.state
    }
}

/// Level-order traversal with a FIFO frontier.
///
/// The resulting tree is a shortest-path tree *by edge count*; weights are ignored.
pub struct BreadthFirstSearch<'a, G> {
    graph: &'a G,
}

impl<'a, G> BreadthFirstSearch<'a, G>
where
    G: WeightedAdjacency,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Traverses everything reachable from `source`.
    /// ** Panics if `source >= n` **
    pub fn compute(&self, source: Node) -> BfsTree {
        let mut state = SearchState::new(self.graph.number_of_nodes());
        let mut order = vec![source];
        let mut queue = VecDeque::from([source]);

        state.set_color(source, VertexColor::Gray);
        state.set_distance(source, 0);

        while let Some(u) = queue.pop_front() {
            let next_distance = state.state(u).distance + 1;
            for v in self.graph.neighbors_of(u) {
                if state.color(v) == VertexColor::White {
                    state.set_color(v, VertexColor::Gray);
                    state.set_distance(v, next_distance);
                    state.set_parent(v, Some(u));
                    order.push(v);
                    queue.push_back(v);
                }
            }
            state.set_color(u, VertexColor::Black);
        }

        debug!(source, reached = order.len(), "bfs finished");

        BfsTree {
            source,
            state,
            order,
        }
    }
}

/// Timestamps, trees and edge classification of a depth-first search.
///
/// Timestamps start at `1` and a single counter is advanced on every discovery and every
/// finish, so `discovery(u) < discovery(v) < finish(v) < finish(u)` iff `v` is a
/// descendant of `u`.
#[derive(Debug, Clone)]
pub struct DfsForest {
    state: SearchState,
    discovery_order: Vec<Node>,
    finish_order: Vec<Node>,
    tree_starts: Vec<usize>,
    back_edges: Vec<(Node, Node)>,
}

impl DfsForest {
    pub fn discovery(&self, u: Node) -> Timestamp {
        self.state.discovery(u)
    }

    pub fn finish(&self, u: Node) -> Timestamp {
        self.state.finish(u)
    }

    /// Returns the parent of `u` in its depth-first tree; `None` for roots and unvisited vertices
    pub fn parent(&self, u: Node) -> Option<Node> {
        self.state.parent(u)
    }

    /// Returns *true* if `u` was visited
    pub fn is_visited(&self, u: Node) -> bool {
        self.state.color(u) == VertexColor::Black
    }

    /// Returns the visited vertices in the order they were discovered
    pub fn discovery_order(&self) -> &[Node] {
        &self.discovery_order
    }

    /// Returns the visited vertices in the order they were finished
    pub fn finish_order(&self) -> &[Node] {
        &self.finish_order
    }

    /// Returns the visited vertices by decreasing finish time.
    ///
    /// This is a topological order iff the graph is acyclic; on cyclic graphs it is
    /// still a valid permutation but some edges point backwards.
    pub fn topological_order(&self) -> Vec<Node> {
        self.finish_order.iter().rev().copied().collect()
    }

    /// Like [`DfsForest::topological_order`] but fails with [`GraphError::NotAcyclic`]
    /// if a back edge was found
    pub fn checked_topological_order(&self) -> Result<Vec<Node>> {
        if self.is_acyclic() {
            Ok(self.topological_order())
        } else {
            Err(GraphError::NotAcyclic)
        }
    }

    /// Returns an iterator over the depth-first trees; each tree lists its vertices in
    /// discovery order, starting with its root
    pub fn trees(&self) -> impl Iterator<Item = &[Node]> + '_ {
        self.tree_starts
            .iter()
            .copied()
            .zip(
                self.tree_starts
                    .iter()
                    .copied()
                    .skip(1)
                    .chain(std::iter::once(self.discovery_order.len())),
            )
            .map(|(beg, end)| &self.discovery_order[beg..end])
    }

    pub fn number_of_trees(&self) -> usize {
        self.tree_starts.len()
    }

    /// Returns every edge `(u, v)` that closes a cycle, i.e. leads to an ancestor of `u`.
    /// In undirected graphs the edge back to the parent does not count.
    pub fn back_edges(&self) -> &[(Node, Node)] {
        &self.back_edges
    }

    /// Returns *true* if no back edge was found, i.e. the visited part of the graph has no cycle
    pub fn is_acyclic(&self) -> bool {
        self.back_edges.is_empty()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn into_state(self) -> SearchState {
        self.state
    }
}

/// Depth-first search over a set of roots with an explicit call stack.
///
/// Every root that is still undiscovered when its turn comes starts a new tree.
pub struct DepthFirstSearch<'a, G> {
    graph: &'a G,
}

impl<'a, G> DepthFirstSearch<'a, G>
where
    G: WeightedAdjacency,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Visits every vertex, trying roots in increasing id order
    pub fn compute(&self) -> DfsForest {
        self.compute_from(self.graph.vertices_range())
    }

    /// Visits every vertex reachable from `roots`, trying roots in the given order.
    /// ** Panics if a root is `>= n` **
    pub fn compute_from<I>(&self, roots: I) -> DfsForest
    where
        I: IntoIterator<Item = Node>,
    {
        let mut run = DfsRun::new(self.graph);
        for root in roots {
            if run.state.color(root) == VertexColor::White {
                run.visit(root);
            }
        }

        debug!(
            visited = run.finish_order.len(),
            trees = run.tree_starts.len(),
            back_edges = run.back_edges.len(),
            "dfs finished"
        );

        DfsForest {
            state: run.state,
            discovery_order: run.discovery_order,
            finish_order: run.finish_order,
            tree_starts: run.tree_starts,
            back_edges: run.back_edges,
        }
    }
}

struct StackFrame<'a, G>
where
    G: WeightedAdjacency + 'a,
{
    node: Node,
    neighbors: G::NeighborIter<'a>,
}

struct DfsRun<'a, G>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    time: Timestamp,
    state: SearchState,
    call_stack: Vec<StackFrame<'a, G>>,
    discovery_order: Vec<Node>,
    finish_order: Vec<Node>,
    tree_starts: Vec<usize>,
    back_edges: Vec<(Node, Node)>,
}

impl<'a, G> DfsRun<'a, G>
where
    G: WeightedAdjacency,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            time: 1,
            state: SearchState::new(graph.number_of_nodes()),
            call_stack: Vec::with_capacity(32),
            discovery_order: Vec::with_capacity(graph.len()),
            finish_order: Vec::with_capacity(graph.len()),
            tree_starts: Vec::new(),
            back_edges: Vec::new(),
        }
    }

    /// First half of a recursive call: stamp `u` and put its frame on the stack
    fn discover(&mut self, u: Node) {
        self.state.set_color(u, VertexColor::Gray);
        self.state.set_discovery(u, self.time);
        self.time += 1;
        self.discovery_order.push(u);
        self.call_stack.push(StackFrame {
            node: u,
            neighbors: self.graph.weighted_neighbors_of(u),
        });
    }

    fn finish(&mut self, u: Node) {
        self.state.set_color(u, VertexColor::Black);
        self.state.set_finish(u, self.time);
        self.time += 1;
        self.finish_order.push(u);
    }

    fn visit(&mut self, root: Node) {
        let directed = self.graph.is_directed();
        self.tree_starts.push(self.discovery_order.len());
        self.discover(root);

        // Each frame keeps its partially consumed neighbor iterator, so a suspended
        // vertex resumes exactly where the recursive version would return to.
        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let u = frame.node;

            for (v, _) in frame.neighbors.by_ref() {
                match self.state.color(v) {
                    VertexColor::White => {
                        self.state.set_parent(v, Some(u));
                        self.discover(v);
                        continue 'recurse;
                    }
                    VertexColor::Gray => {
                        if directed || u == v || self.state.parent(u) != Some(v) {
                            self.back_edges.push((u, v));
                        }
                    }
                    VertexColor::Black => {}
                }
            }

            self.call_stack.pop();
            self.finish(u);
        }
    }
}

/// Traversals as methods on every graph.
pub trait Traversal: WeightedAdjacency {
    /// Breadth-first search from `source`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let graph = AdjacencyListGraph::from_edges(false, [('a', 'b', 9), ('b', 'c', 9)]);
    /// let bfs = graph.bfs(0);
    /// assert_eq!(bfs.distance(2), Some(2));
    /// assert_eq!(bfs.path_to(2), Some(vec![0, 1, 2]));
    /// ```
    fn bfs(&self, source: Node) -> BfsTree {
        BreadthFirstSearch::new(self).compute(source)
    }

    /// Depth-first search over all vertices
    fn dfs(&self) -> DfsForest {
        DepthFirstSearch::new(self).compute()
    }

    /// Depth-first search over the vertices reachable from `roots`
    fn dfs_from<I>(&self, roots: I) -> DfsForest
    where
        I: IntoIterator<Item = Node>,
    {
        DepthFirstSearch::new(self).compute_from(roots)
    }

    /// Returns all vertices by decreasing DFS finish time; only a true topological order
    /// if the graph is acyclic (see [`Traversal::checked_topological_order`]).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let graph = AdjacencyListGraph::from_edges(true, [(2, 1, 0), (1, 0, 0)]);
    /// assert_eq!(graph.topological_order(), vec![0, 1, 2]);
    /// ```
    fn topological_order(&self) -> Vec<Node> {
        self.dfs().topological_order()
    }

    /// Returns a topological order or [`GraphError::NotAcyclic`]
    fn checked_topological_order(&self) -> Result<Vec<Node>> {
        self.dfs().checked_topological_order()
    }

    /// Returns *true* if the graph has no cycle (self-loops included)
    fn is_acyclic(&self) -> bool {
        self.dfs().is_acyclic()
    }
}

impl<G> Traversal for G where G: WeightedAdjacency {}
