/*!
# Single-Source Shortest Paths

Three algorithms sharing the [`SearchState::relax`] primitive and producing a
[`ShortestPathTree`] (tentative weight `key` and `parent` per vertex):

- [`Dijkstra`]: non-negative weights only. The frontier strategy is a type parameter,
  see [`ScanFrontier`] and [`HeapFrontier`].
- [`BellmanFord`]: arbitrary weights; reports whether a negative cycle is reachable from
  the source in its [`BellmanFordOutcome`].
- [`DagShortestPath`]: arbitrary weights on acyclic graphs, relaxing in topological order.

Unmet preconditions (negative weights for Dijkstra, cycles for DAG relaxation) are not
checked unless [`Preconditions::Checked`] is configured; by default they silently yield
meaningless keys.
*/

use std::marker::PhantomData;

use tracing::{debug, trace};

use super::*;

/// Whether algorithms verify their input requirements before running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Preconditions {
    /// Requirements are the caller's responsibility; violations yield garbage, not errors
    #[default]
    Assumed,
    /// Requirements are verified upfront; violations are reported as [`GraphError`]s
    Checked,
}

/// Keys and parents computed from a single source.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: Node,
    state: SearchState,
}

impl ShortestPathTree {
    fn new(source: Node, n: NumNodes) -> Self {
        let mut state = SearchState::new(n);
        state.set_key(source, 0);
        Self { source, state }
    }

    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the cost of a shortest path `source ~> u`, `None` if `u` is unreachable
    pub fn distance(&self, u: Node) -> Option<Weight> {
        finite_weight(self.state.key(u))
    }

    /// Returns the raw key of `u`; [`INFINITE_WEIGHT`] if unreachable
    pub fn key(&self, u: Node) -> Weight {
        self.state.key(u)
    }

    /// Returns the predecessor of `u` on its shortest path
    pub fn parent(&self, u: Node) -> Option<Node> {
        self.state.parent(u)
    }

    /// Returns the distances of all vertices, indexed by id
    pub fn distances(&self) -> Vec<Option<Weight>> {
        self.state.keys().map(finite_weight).collect()
    }

    /// Returns a shortest path `source ~> u`; `None` if `u` is unreachable or the parents
    /// form a cycle (which only happens around negative cycles)
    pub fn path_to(&self, u: Node) -> Option<Vec<Node>> {
        self.distance(u)?;
        self.state
            .path_to(u)
            .filter(|path| path.first() == Some(&self.source))
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn into_state(self) -> SearchState {
        self.state
    }
}

/// Dijkstra's algorithm with a configurable [`Frontier`].
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut graph = AdjacencyListGraph::directed();
/// graph.add_edge("s", "a", 4).add_edge("s", "b", 1).add_edge("b", "a", 2);
///
/// let tree = DijkstraHeap::new(&graph).compute(0)?;
/// assert_eq!(tree.distance(1), Some(3));
/// assert_eq!(tree.path_to(1), Some(vec![0, 2, 1]));
/// # Ok::<(), wgraphs::GraphError>(())
/// ```
pub struct Dijkstra<'a, G, F = ScanFrontier> {
    graph: &'a G,
    preconditions: Preconditions,
    _frontier: PhantomData<F>,
}

/// [`Dijkstra`] with a binary-heap frontier
pub type DijkstraHeap<'a, G> = Dijkstra<'a, G, HeapFrontier>;

impl<'a, G, F> Dijkstra<'a, G, F>
where
    G: WeightedAdjacency,
    F: Frontier,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            preconditions: Preconditions::default(),
            _frontier: PhantomData,
        }
    }

    pub fn set_preconditions(&mut self, preconditions: Preconditions) {
        self.preconditions = preconditions;
    }

    pub fn preconditions(mut self, preconditions: Preconditions) -> Self {
        self.set_preconditions(preconditions);
        self
    }

    /// Computes shortest paths from `source`.
    ///
    /// Fails with [`GraphError::NegativeWeight`] only if preconditions are checked.
    /// ** Panics if `source >= n` **
    pub fn compute(&self, source: Node) -> Result<ShortestPathTree> {
        if self.preconditions == Preconditions::Checked
            && let Some(e) = self.graph.negative_arc()
        {
            return Err(GraphError::NegativeWeight {
                from: e.source,
                to: e.target,
                weight: e.weight,
            });
        }

        Ok(self.search(source))
    }

    fn search(&self, source: Node) -> ShortestPathTree {
        let mut tree = ShortestPathTree::new(source, self.graph.number_of_nodes());
        let state = &mut tree.state;
        let mut frontier = F::from_state(state);

        while let Some(u) = frontier.pop_min(state) {
            trace!(u, key = state.key(u), "extract");
            state.set_color(u, VertexColor::Black);

            for (v, w) in self.graph.weighted_neighbors_of(u) {
                if state.relax(u, v, w) {
                    frontier.decrease_key(v, state.key(v));
                }
            }
        }

        debug!(
            source,
            reached = state.keys().filter(|&k| !is_infinite(k)).count(),
            "dijkstra finished"
        );
        tree
    }
}

/// Result of a Bellman-Ford run
#[derive(Debug, Clone)]
pub struct BellmanFordOutcome {
    tree: ShortestPathTree,
    negative_cycle: bool,
}

impl BellmanFordOutcome {
    /// Returns *true* if a negative cycle is reachable from the source; keys are then
    /// meaningless
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Returns *true* if the keys are the true shortest-path costs
    pub fn is_consistent(&self) -> bool {
        !self.negative_cycle
    }

    /// Returns the computed tree regardless of negative cycles
    pub fn tree(&self) -> &ShortestPathTree {
        &self.tree
    }

    /// Returns the tree, `None` if a negative cycle was detected
    pub fn into_tree(self) -> Option<ShortestPathTree> {
        (!self.negative_cycle).then_some(self.tree)
    }
}

/// Bellman-Ford: `n - 1` rounds relaxing every arc, then one detection pass.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = AdjacencyListGraph::from_edges(true, [(0, 1, 3), (1, 2, -2), (2, 1, 3)]);
/// let outcome = BellmanFord::new(&graph).compute(0);
/// assert!(outcome.is_consistent());
/// assert_eq!(outcome.tree().distance(2), Some(1));
///
/// // re-adding an edge overwrites its weight, closing a cycle of weight -1
/// let graph = AdjacencyListGraph::from_edges(true, [(0, 1, 3), (1, 2, -2), (2, 1, 3), (2, 1, 1)]);
/// assert!(graph.bellman_ford(0).has_negative_cycle());
/// ```
pub struct BellmanFord<'a, G> {
    graph: &'a G,
}

impl<'a, G> BellmanFord<'a, G>
where
    G: WeightedAdjacency,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// ** Panics if `source >= n` **
    pub fn compute(&self, source: Node) -> BellmanFordOutcome {
        let n = self.graph.number_of_nodes();
        let mut tree = ShortestPathTree::new(source, n);
        let state = &mut tree.state;

        for round in 1..n {
            let mut changed = false;
            for e in self.graph.arcs() {
                if state.relax(e.source, e.target, e.weight) {
                    trace!(
                        round,
                        from = e.source,
                        to = e.target,
                        key = state.key(e.target),
                        "relax"
                    );
                    changed = true;
                }
            }
            // once a round changes nothing, later rounds cannot either
            if !changed {
                break;
            }
        }

        let negative_cycle = self
            .graph
            .arcs()
            .any(|e| state.can_relax(e.source, e.target, e.weight));

        debug!(source, negative_cycle, "bellman-ford finished");
        BellmanFordOutcome {
            tree,
            negative_cycle,
        }
    }
}

/// Shortest paths in a DAG by relaxing every vertex once in topological order.
pub struct DagShortestPath<'a, G> {
    graph: &'a G,
    preconditions: Preconditions,
}

impl<'a, G> DagShortestPath<'a, G>
where
    G: WeightedAdjacency,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            preconditions: Preconditions::default(),
        }
    }

    pub fn set_preconditions(&mut self, preconditions: Preconditions) {
        self.preconditions = preconditions;
    }

    pub fn preconditions(mut self, preconditions: Preconditions) -> Self {
        self.set_preconditions(preconditions);
        self
    }

    /// Computes shortest paths from `source`.
    ///
    /// Fails with [`GraphError::NotAcyclic`] only if preconditions are checked.
    /// ** Panics if `source >= n` **
    pub fn compute(&self, source: Node) -> Result<ShortestPathTree> {
        let forest = DepthFirstSearch::new(self.graph).compute();
        if self.preconditions == Preconditions::Checked && !forest.is_acyclic() {
            return Err(GraphError::NotAcyclic);
        }

        Ok(self.relax_in_order(source, &forest.topological_order()))
    }

    fn relax_in_order(&self, source: Node, order: &[Node]) -> ShortestPathTree {
        // fresh state: the parents of the DFS run do not leak into the result
        let mut tree = ShortestPathTree::new(source, self.graph.number_of_nodes());
        let state = &mut tree.state;

        for &u in order {
            if is_infinite(state.key(u)) {
                continue;
            }
            for (v, w) in self.graph.weighted_neighbors_of(u) {
                state.relax(u, v, w);
            }
        }

        debug!(source, "dag relaxation finished");
        tree
    }
}

/// Shortest-path algorithms with default configuration as methods on every graph.
pub trait ShortestPaths: WeightedAdjacency {
    /// Dijkstra with a binary-heap frontier; negative weights are not checked
    fn dijkstra(&self, source: Node) -> ShortestPathTree {
        DijkstraHeap::new(self).search(source)
    }

    fn bellman_ford(&self, source: Node) -> BellmanFordOutcome {
        BellmanFord::new(self).compute(source)
    }

    /// DAG relaxation; acyclicity is not checked
    fn dag_shortest_paths(&self, source: Node) -> ShortestPathTree {
        DagShortestPath::new(self).relax_in_order(source, &self.topological_order())
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacency {}
