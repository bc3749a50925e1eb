//! Seeded random weighted graphs and shared checks for both representations.

use std::ops::Range;

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

pub(crate) type ListGraph = AdjacencyListGraph<Node>;
pub(crate) type MatrixGraph = AdjacencyMatrixGraph<Node>;

/// Both representations can be built from a list of `(u, v, w)` triples over `0..n`,
/// labelling every vertex with its own id.
pub(crate) trait FromWeightedEdges: Sized {
    fn from_weighted_edges(n: NumNodes, directed: bool, edges: &[(Node, Node, Weight)]) -> Self;
}

impl FromWeightedEdges for AdjacencyListGraph<Node> {
    fn from_weighted_edges(n: NumNodes, directed: bool, edges: &[(Node, Node, Weight)]) -> Self {
        let mut graph = Self::new(directed);
        for u in 0..n {
            graph.add_vertex(u);
        }
        for &(u, v, w) in edges {
            graph.add_edge_between(u, v, w);
        }
        graph
    }
}

impl FromWeightedEdges for AdjacencyMatrixGraph<Node> {
    fn from_weighted_edges(n: NumNodes, directed: bool, edges: &[(Node, Node, Weight)]) -> Self {
        let mut graph = Self::new(n, directed);
        for u in 0..n {
            graph.add_vertex(u, u).unwrap();
        }
        for &(u, v, w) in edges {
            graph.add_edge_between(u, v, w).unwrap();
        }
        graph
    }
}

/// Creates at most `m_ub` random edges for nodes `0..n` with weights drawn from `weights`.
/// Every vertex pair occurs at most once; undirected edges are normalized.
pub(crate) fn random_weighted_edges<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m_ub: NumEdges,
    weights: Range<Weight>,
    directed: bool,
) -> Vec<(Node, Node, Weight)> {
    let mut edges = (0..m_ub)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            let w = rng.random_range(weights.clone());
            if directed {
                (u, v, w)
            } else {
                (u.min(v), u.max(v), w)
            }
        })
        .collect_vec();

    edges.sort_unstable_by_key(|&(u, v, _)| (u, v));
    edges.dedup_by_key(|&mut (u, v, _)| (u, v));
    edges
}

/// Like [`random_weighted_edges`] but every edge points from a smaller to a larger id,
/// so the resulting directed graph is acyclic.
pub(crate) fn random_dag_edges<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m_ub: NumEdges,
    weights: Range<Weight>,
) -> Vec<(Node, Node, Weight)> {
    random_weighted_edges(rng, n, m_ub, weights, false)
        .into_iter()
        .filter(|&(u, v, _)| u != v)
        .collect()
}

/// Appends a path `0 - 1 - ... - (n-1)` so that an undirected graph becomes connected
pub(crate) fn with_spanning_path<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    weights: Range<Weight>,
    mut edges: Vec<(Node, Node, Weight)>,
) -> Vec<(Node, Node, Weight)> {
    for u in 1..n {
        if !edges.iter().any(|&(a, b, _)| (a, b) == (u - 1, u)) {
            edges.push((u - 1, u, rng.random_range(weights.clone())));
        }
    }
    edges
}

/// Brute-force reachability: `reach[u].get_bit(v)` iff there is a (possibly empty) path `u ~> v`
pub(crate) fn brute_force_reachability<G: WeightedAdjacency>(graph: &G) -> Vec<NodeBitSet> {
    graph
        .vertices()
        .map(|s| {
            let mut seen = NodeBitSet::new(graph.number_of_nodes());
            let mut stack = vec![s];
            seen.set_bit(s);
            while let Some(u) = stack.pop() {
                for v in graph.neighbors_of(u) {
                    if !seen.set_bit(v) {
                        stack.push(v);
                    }
                }
            }
            seen
        })
        .collect()
}

/// Every weighted representation must agree with the edge list it was built from
macro_rules! test_weighted_graph_ops {
    ($env:ident, $graph:ty) => {
        #[cfg(test)]
        mod $env {
            use itertools::Itertools;
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            use crate::{
                prelude::*,
                testing::{FromWeightedEdges, random_weighted_edges},
            };

            #[test]
            fn adjacency_matches_edge_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for directed in [false, true] {
                    for n in [5 as NumNodes, 10, 30] {
                        for m_ub in [n, n * 3, n * 8] {
                            let edges = random_weighted_edges(rng, n, m_ub, -20..50, directed);
                            let graph = <$graph>::from_weighted_edges(n, directed, &edges);

                            assert_eq!(graph.number_of_nodes(), n);
                            assert_eq!(graph.number_of_edges() as usize, edges.len());
                            assert_eq!(graph.is_directed(), directed);

                            let mut dense = vec![vec![None; n as usize]; n as usize];
                            for &(u, v, w) in &edges {
                                dense[u as usize][v as usize] = Some(w);
                                if !directed {
                                    dense[v as usize][u as usize] = Some(w);
                                }
                            }

                            for u in graph.vertices() {
                                for v in graph.vertices() {
                                    let expected = dense[u as usize][v as usize];
                                    assert_eq!(graph.has_edge(u, v), expected.is_some());
                                    assert_eq!(graph.edge_weight(u, v).ok(), expected);
                                }
                                let degree = dense[u as usize].iter().flatten().count();
                                assert_eq!(graph.degree_of(u) as usize, degree);
                            }

                            let listed = graph
                                .edges()
                                .map(|e| (e.source, e.target, e.weight))
                                .sorted()
                                .collect_vec();
                            assert_eq!(listed, edges);

                            let negative = edges.iter().any(|&(_, _, w)| w < 0);
                            assert_eq!(graph.has_negative_weights(), negative);
                            assert!(graph.negative_arc().is_none_or(|e| e.weight < 0));
                        }
                    }
                }
            }

            #[test]
            fn transpose_reverses_every_arc() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for directed in [false, true] {
                    for n in [5 as NumNodes, 20] {
                        let edges = random_weighted_edges(rng, n, n * 4, -5..5, directed);
                        let graph = <$graph>::from_weighted_edges(n, directed, &edges);
                        let transposed = graph.transpose();

                        assert_eq!(transposed.number_of_edges(), graph.number_of_edges());
                        for e in graph.arcs() {
                            assert_eq!(transposed.edge_weight(e.target, e.source), Ok(e.weight));
                        }
                        for u in graph.vertices() {
                            assert_eq!(transposed.label_of(u), graph.label_of(u));
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_weighted_graph_ops;
