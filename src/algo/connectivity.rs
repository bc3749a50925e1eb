/*!
# Strongly Connected Components

Kosaraju's two-pass algorithm: a first depth-first search over the whole graph yields
the finish order; a second search on the transposed graph, trying roots by decreasing
finish time, discovers exactly one component per depth-first tree.

On undirected graphs the components are the connected components.
*/

use tracing::debug;

use super::*;

/// Kosaraju's algorithm.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = AdjacencyListGraph::from_edges(true, [(0, 1, 1), (1, 0, 1), (1, 2, 1)]);
/// let components = StronglyConnectedComponents::new(&graph).compute();
///
/// assert_eq!(components.number_of_classes(), 2);
/// assert!(components.same_class(0, 1));
/// assert!(!components.same_class(1, 2));
/// ```
pub struct StronglyConnectedComponents<'a, G> {
    graph: &'a G,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: WeightedAdjacency + GraphTranspose,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Returns the partition of all vertices into components.
    ///
    /// Components are numbered in topological order of the condensation: every edge
    /// between two components points from a smaller to a larger class id.
    pub fn compute(&self) -> Partition {
        let first = DepthFirstSearch::new(self.graph).compute();

        let transposed = self.graph.transpose();
        let second = DepthFirstSearch::new(&transposed)
            .compute_from(first.finish_order().iter().rev().copied());

        let mut partition = Partition::new(self.graph.number_of_nodes());
        for tree in second.trees() {
            partition.add_class(tree.iter().copied());
        }

        debug!(
            n = self.graph.len(),
            components = partition.number_of_classes(),
            "strongly connected components finished"
        );
        partition
    }
}

/// Component queries as methods on every graph that can be transposed.
pub trait Connectivity: WeightedAdjacency + GraphTranspose {
    /// Returns the strongly connected components as a [`Partition`]
    fn partition_into_strongly_connected_components(&self) -> Partition {
        StronglyConnectedComponents::new(self).compute()
    }

    /// Returns the strongly connected components, each sorted increasingly and ordered
    /// by their smallest vertex
    fn strongly_connected_components(&self) -> Vec<Vec<Node>> {
        self.partition_into_strongly_connected_components()
            .sorted_classes()
    }
}

impl<G> Connectivity for G where G: WeightedAdjacency + GraphTranspose {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{
        FromWeightedEdges, ListGraph, MatrixGraph, brute_force_reachability, random_weighted_edges,
    };

    fn assert_matches_reachability<G>(graph: &G)
    where
        G: WeightedAdjacency + GraphTranspose,
    {
        let reach = brute_force_reachability(graph);
        let components = graph.partition_into_strongly_connected_components();

        assert_eq!(components.number_of_unassigned(), 0);
        for u in graph.vertices() {
            for v in graph.vertices() {
                let mutual = reach[u as usize].get_bit(v) && reach[v as usize].get_bit(u);
                assert_eq!(components.same_class(u, v), mutual);
            }
        }

        for e in graph.arcs() {
            let (cu, cv) = (
                components.class_of_node(e.source).unwrap(),
                components.class_of_node(e.target).unwrap(),
            );
            assert!(!graph.is_directed() || cu <= cv);
        }
    }

    #[test]
    fn eight_vertex_example() {
        let graph = AdjacencyListGraph::from_edges(
            true,
            [
                ('a', 'b', 1),
                ('b', 'e', 1),
                ('e', 'a', 1),
                ('b', 'f', 1),
                ('e', 'f', 1),
                ('b', 'c', 1),
                ('c', 'g', 1),
                ('f', 'g', 1),
                ('g', 'f', 1),
                ('c', 'd', 1),
                ('d', 'c', 1),
                ('g', 'h', 1),
                ('d', 'h', 1),
                ('h', 'h', 1),
            ],
        );

        let labelled = graph
            .strongly_connected_components()
            .into_iter()
            .map(|class| {
                let mut labels = class
                    .iter()
                    .map(|&u| *graph.label_of(u).unwrap())
                    .collect::<Vec<_>>();
                labels.sort_unstable();
                labels.into_iter().collect::<String>()
            })
            .collect::<Vec<_>>();

        assert_eq!(labelled, vec!["abe", "fg", "cd", "h"]);
        assert_matches_reachability(&graph);
    }

    #[test]
    fn singletons_and_loops() {
        let graph = MatrixGraph::from_weighted_edges(
            6,
            true,
            &[(0, 1, 0), (1, 0, 0), (2, 2, 0), (4, 5, 0), (5, 4, 0)],
        );
        assert_eq!(
            graph.strongly_connected_components(),
            vec![vec![0, 1], vec![2], vec![3], vec![4, 5]]
        );
    }

    #[test]
    fn long_cycle() {
        let n = 5_000;
        let edges = (0..n).map(|u| (u, (u + 1) % n, 1)).collect::<Vec<_>>();
        let graph = ListGraph::from_weighted_edges(n, true, &edges);
        let components = graph.partition_into_strongly_connected_components();

        assert_eq!(components.number_of_classes(), 1);
        assert_eq!(components.number_in_class(0), n);
    }

    #[test]
    fn random_graphs_match_reachability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for directed in [true, false] {
            for n in [1 as NumNodes, 8, 25] {
                for m_ub in [n, n * 2, n * 4] {
                    let edges = random_weighted_edges(rng, n, m_ub, 0..1, directed);
                    let list = ListGraph::from_weighted_edges(n, directed, &edges);
                    let matrix = MatrixGraph::from_weighted_edges(n, directed, &edges);
                    assert_matches_reachability(&list);
                    assert_matches_reachability(&matrix);
                }
            }
        }
    }
}
