/*!
# All-Pairs Shortest Paths

Both algorithms start from the weight matrix `D0` of a graph: `D0[i][j] = w(i, j)` for
every edge and [`INFINITE_WEIGHT`] otherwise, except that the diagonal is capped at `0`.
A negative self-loop therefore stays on the diagonal and is reported as a negative cycle.

- [`FloydWarshall`] relaxes `D0` in place through every pivot `k` and tracks a
  predecessor matrix alongside, so that every shortest path can be reconstructed.
- [`MinPlus`] computes the same costs by exponentiating `D0` in the min-plus semiring,
  either by `n - 2` multiplications or by repeated squaring.

All arithmetic is sentinel-absorbing (see [`weight_add`]), so unreachable pairs stay at
the sentinel and nothing overflows.
*/

use tracing::debug;

use super::*;

/// Builds `D0` from the arcs of `graph`
fn initial_costs<G: WeightedAdjacency>(graph: &G) -> SquareMatrix<Weight> {
    let mut costs = SquareMatrix::filled(graph.len(), INFINITE_WEIGHT);
    for e in graph.arcs() {
        costs[(e.source, e.target)] = e.weight;
    }
    cap_diagonal(&mut costs);
    costs
}

/// `D0[u][u] = min(0, w(u, u))`
fn cap_diagonal(costs: &mut SquareMatrix<Weight>) {
    for u in 0..costs.size() as Node {
        costs[(u, u)] = costs[(u, u)].min(0);
    }
}

/// Cost and predecessor matrices of all shortest paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairsShortestPaths {
    costs: SquareMatrix<Weight>,
    predecessors: SquareMatrix<Option<OptionalNode>>,
}

impl AllPairsShortestPaths {
    /// Returns the cost matrix; unreachable pairs hold [`INFINITE_WEIGHT`]
    pub fn costs(&self) -> &SquareMatrix<Weight> {
        &self.costs
    }

    /// Returns the cost of a shortest path `i ~> j`, `None` if `j` is unreachable from `i`
    pub fn cost(&self, i: Node, j: Node) -> Option<Weight> {
        finite_weight(self.costs[(i, j)])
    }

    /// Returns the predecessor of `j` on a shortest path `i ~> j`.
    /// `None` for `i == j` and for unreachable pairs.
    pub fn predecessor(&self, i: Node, j: Node) -> Option<Node> {
        self.predecessors[(i, j)].map(|p| p.get())
    }

    /// Returns the predecessor matrix with plain `Option<Node>` cells
    pub fn predecessor_matrix(&self) -> SquareMatrix<Option<Node>> {
        self.predecessors.map(|p| p.map(|p| p.get()))
    }

    /// Returns *true* if some vertex lies on a negative cycle
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.costs.size() as Node).any(|u| self.costs[(u, u)] < 0)
    }

    /// Reconstructs a shortest path `i ~> j` by following predecessors backwards from `j`.
    /// Returns `None` if `j` is unreachable or the predecessors run into a negative cycle.
    pub fn path(&self, i: Node, j: Node) -> Option<Vec<Node>> {
        self.cost(i, j)?;

        let mut path = vec![j];
        let mut node = j;
        while node != i {
            if path.len() > self.costs.size() {
                return None;
            }
            node = self.predecessor(i, node)?;
            path.push(node);
        }

        path.reverse();
        Some(path)
    }
}

/// Floyd-Warshall: triple loop over pivot, row and column.
///
/// Predecessors start as `i` wherever the edge `(i, j)` exists and change only on strict
/// improvement, so ties keep the earlier predecessor.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = AdjacencyListGraph::from_edges(true, [(0, 1, 3), (1, 2, -1), (0, 2, 4)]);
/// let apsp = FloydWarshall::new(&graph).compute();
///
/// assert_eq!(apsp.cost(0, 2), Some(2));
/// assert_eq!(apsp.cost(2, 0), None);
/// assert_eq!(apsp.path(0, 2), Some(vec![0, 1, 2]));
/// ```
pub struct FloydWarshall<'a, G> {
    graph: &'a G,
}

impl<'a, G> FloydWarshall<'a, G>
where
    G: WeightedAdjacency,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    pub fn compute(&self) -> AllPairsShortestPaths {
        let mut costs = initial_costs(self.graph);
        let mut predecessors = SquareMatrix::from_fn(self.graph.len(), |i, j| {
            if i != j && self.graph.has_edge(i, j) {
                OptionalNode::new(i)
            } else {
                None
            }
        });

        for k in self.graph.vertices() {
            for i in self.graph.vertices() {
                let to_pivot = costs[(i, k)];
                if is_infinite(to_pivot) {
                    continue;
                }

                for j in self.graph.vertices() {
                    let candidate = weight_add(to_pivot, costs[(k, j)]);
                    if candidate < costs[(i, j)] {
                        costs[(i, j)] = candidate;
                        predecessors[(i, j)] = predecessors[(k, j)];
                    }
                }
            }
        }

        let result = AllPairsShortestPaths {
            costs,
            predecessors,
        };
        debug!(
            n = self.graph.len(),
            negative_cycle = result.has_negative_cycle(),
            "floyd-warshall finished"
        );
        result
    }
}

/// All-pairs costs as powers of `D0` in the min-plus semiring.
///
/// `extend(A, B)[i][j] = min(A[i][j], min over l != i, j of A[i][l] + B[l][j])`; the
/// `(n-1)`-th power of `D0` holds the cost of every shortest path with at most `n - 1`
/// edges, which are all shortest paths if there is no negative cycle.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = AdjacencyListGraph::from_edges(true, [(0, 1, 2), (1, 2, 2), (2, 3, 2)]);
/// let min_plus = MinPlus::new(&graph);
///
/// assert_eq!(min_plus.compute()[(0, 3)], 6);
/// assert_eq!(min_plus.fast_compute(), min_plus.compute());
/// ```
#[derive(Debug, Clone)]
pub struct MinPlus {
    weights: SquareMatrix<Weight>,
}

impl MinPlus {
    /// Starts from the weight matrix of `graph`
    pub fn new<G: WeightedAdjacency>(graph: &G) -> Self {
        Self {
            weights: initial_costs(graph),
        }
    }

    /// Starts from an explicit weight matrix, e.g. [`AdjacencyMatrixGraph::weight_matrix`];
    /// diagonal cells above `0` are lowered to `0`
    pub fn from_weights(mut weights: SquareMatrix<Weight>) -> Self {
        cap_diagonal(&mut weights);
        Self { weights }
    }

    /// Returns `D0`
    pub fn weights(&self) -> &SquareMatrix<Weight> {
        &self.weights
    }

    /// One min-plus product step
    pub fn extend(a: &SquareMatrix<Weight>, b: &SquareMatrix<Weight>) -> SquareMatrix<Weight> {
        let n = a.size() as Node;
        SquareMatrix::from_fn(a.size(), |i, j| {
            (0..n)
                .filter(|&l| l != i && l != j)
                .map(|l| weight_add(a[(i, l)], b[(l, j)]))
                .fold(a[(i, j)], Weight::min)
        })
    }

    /// Computes `D0^(n-1)` by `n - 2` successive multiplications with `D0`
    pub fn compute(&self) -> SquareMatrix<Weight> {
        let mut costs = self.weights.clone();
        for _ in 2..self.weights.size() {
            costs = Self::extend(&costs, &self.weights);
        }
        debug!(n = self.weights.size(), "min-plus products finished");
        costs
    }

    /// Computes `D0^m` for the smallest power of two `m >= n - 1` by repeated squaring
    pub fn fast_compute(&self) -> SquareMatrix<Weight> {
        let target = self.weights.size().saturating_sub(1);
        let mut costs = self.weights.clone();
        let mut power = 1;
        while power < target {
            costs = Self::extend(&costs, &costs);
            power *= 2;
        }
        debug!(n = self.weights.size(), power, "min-plus squaring finished");
        costs
    }
}

/// All-pairs algorithms as methods on every graph.
pub trait AllPairs: WeightedAdjacency {
    fn floyd_warshall(&self) -> AllPairsShortestPaths {
        FloydWarshall::new(self).compute()
    }

    /// All-pairs costs by repeated min-plus squaring
    fn min_plus_costs(&self) -> SquareMatrix<Weight> {
        MinPlus::new(self).fast_compute()
    }
}

impl<G> AllPairs for G where G: WeightedAdjacency {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{
        FromWeightedEdges, ListGraph, MatrixGraph, random_dag_edges, random_weighted_edges,
    };

    fn check_against_single_source<G: WeightedAdjacency>(graph: &G, apsp: &AllPairsShortestPaths) {
        for s in graph.vertices() {
            let outcome = graph.bellman_ford(s);
            assert!(outcome.is_consistent());

            let row = outcome.tree().distances();
            for t in graph.vertices() {
                assert_eq!(apsp.cost(s, t), row[t as usize]);

                if let Some(path) = apsp.path(s, t) {
                    assert_eq!((path[0], *path.last().unwrap()), (s, t));
                    let cost = path
                        .iter()
                        .tuple_windows()
                        .map(|(&a, &b)| graph.edge_weight(a, b).unwrap())
                        .sum::<Weight>();
                    assert_eq!(Some(cost), row[t as usize]);
                } else {
                    assert_eq!(row[t as usize], None);
                }
            }
        }
    }

    #[test]
    fn clrs_example() {
        let graph = MatrixGraph::from_weighted_edges(
            5,
            true,
            &[
                (0, 1, 3),
                (0, 2, 8),
                (0, 4, -4),
                (1, 3, 1),
                (1, 4, 7),
                (2, 1, 4),
                (3, 0, 2),
                (3, 2, -5),
                (4, 3, 6),
            ],
        );

        let expected = SquareMatrix::from_rows(&[
            [0, 1, -3, 2, -4],
            [3, 0, -4, 1, -1],
            [7, 4, 0, 5, 3],
            [2, -1, -5, 0, -2],
            [8, 5, 1, 6, 0],
        ]);

        let apsp = graph.floyd_warshall();
        assert_eq!(apsp.costs(), &expected);
        assert!(!apsp.has_negative_cycle());
        assert_eq!(apsp.path(0, 1), Some(vec![0, 4, 3, 2, 1]));
        assert_eq!(apsp.predecessor(0, 0), None);

        let min_plus = MinPlus::from_weights(graph.weight_matrix());
        assert_eq!(min_plus.compute(), expected);
        assert_eq!(min_plus.fast_compute(), expected);
    }

    #[test]
    fn initial_predecessors() {
        let graph = ListGraph::from_weighted_edges(3, true, &[(0, 1, 1), (1, 1, 5)]);
        let apsp = graph.floyd_warshall();

        assert_eq!(apsp.predecessor(0, 1), Some(0));
        assert_eq!(apsp.predecessor(1, 1), None);
        assert_eq!(apsp.predecessor(1, 0), None);
        assert_eq!(apsp.cost(1, 1), Some(0));
        assert_eq!(apsp.path(1, 1), Some(vec![1]));
        assert_eq!(apsp.path(1, 0), None);
    }

    #[test]
    fn ties_keep_the_earlier_predecessor() {
        // 0 -> 2 directly and via 1, both of cost 2
        let graph = ListGraph::from_weighted_edges(3, true, &[(0, 1, 1), (1, 2, 1), (0, 2, 2)]);
        assert_eq!(graph.floyd_warshall().predecessor(0, 2), Some(0));
    }

    #[test]
    fn rows_match_single_source() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [1 as NumNodes, 5, 20] {
            for m_ub in [n, n * 4] {
                for directed in [false, true] {
                    let edges = random_weighted_edges(rng, n, m_ub, 0..25, directed);
                    let graph = ListGraph::from_weighted_edges(n, directed, &edges);
                    let apsp = graph.floyd_warshall();
                    check_against_single_source(&graph, &apsp);

                    for s in graph.vertices() {
                        let row = graph.dijkstra(s).distances();
                        assert!(graph.vertices().all(|t| apsp.cost(s, t) == row[t as usize]));
                    }
                }

                let edges = random_dag_edges(rng, n, m_ub, -25..25);
                let graph = MatrixGraph::from_weighted_edges(n, true, &edges);
                check_against_single_source(&graph, &graph.floyd_warshall());
            }
        }
    }

    #[test]
    fn min_plus_agrees_with_floyd_warshall() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);

        for n in [1 as NumNodes, 2, 3, 9, 17] {
            for m_ub in [n, n * 3] {
                let edges = random_dag_edges(rng, n, m_ub, -10..30);
                let graph = ListGraph::from_weighted_edges(n, true, &edges);
                let expected = graph.floyd_warshall();

                let min_plus = MinPlus::new(&graph);
                assert_eq!(&min_plus.compute(), expected.costs());
                assert_eq!(&min_plus.fast_compute(), expected.costs());

                let edges = random_weighted_edges(rng, n, m_ub, 0..30, false);
                let graph = MatrixGraph::from_weighted_edges(n, false, &edges);
                assert_eq!(&graph.min_plus_costs(), graph.floyd_warshall().costs());
            }
        }
    }

    #[test]
    fn negative_cycle_shows_on_diagonal() {
        let graph = ListGraph::from_weighted_edges(3, true, &[(0, 1, 1), (1, 2, -3), (2, 1, 1)]);
        let apsp = graph.floyd_warshall();
        assert!(apsp.has_negative_cycle());
        assert!(apsp.costs()[(1, 1)] < 0);
        assert!(!apsp.costs()[(0, 0)].is_negative());
    }

    #[test]
    fn negative_self_loop_is_a_negative_cycle() {
        let graph = ListGraph::from_weighted_edges(2, true, &[(0, 0, -1), (0, 1, 1)]);
        assert!(graph.bellman_ford(0).has_negative_cycle());

        let apsp = graph.floyd_warshall();
        assert!(apsp.has_negative_cycle());
        assert!(apsp.costs()[(0, 0)] < 0);
        assert_eq!(apsp.cost(1, 1), Some(0));

        let min_plus = MinPlus::new(&graph);
        assert_eq!(min_plus.weights()[(0, 0)], -1);
        assert!(min_plus.compute()[(0, 0)] < 0);

        let mut matrix = AdjacencyMatrixGraph::new(2, true);
        matrix
            .add_edge(0, 0, -1)
            .and_then(|g| g.add_edge(0, 1, 1))
            .and_then(|g| g.add_edge(1, 1, 4))
            .unwrap();
        let min_plus = MinPlus::from_weights(matrix.weight_matrix());
        assert_eq!(min_plus.weights()[(0, 0)], -1);
        assert_eq!(min_plus.weights()[(1, 1)], 0);
        assert!(min_plus.fast_compute()[(0, 0)] < 0);
    }

    #[test]
    fn predecessor_matrix_unwraps_cells() {
        let graph = ListGraph::from_weighted_edges(3, true, &[(0, 1, 1), (1, 2, 1)]);
        let apsp = graph.floyd_warshall();

        let expected = SquareMatrix::from_rows(&[
            [None, Some(0), Some(1)],
            [None, None, Some(1)],
            [None, None, None],
        ]);
        assert_eq!(apsp.predecessor_matrix(), expected);
    }
}
