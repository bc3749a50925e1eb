/*!
# Minimum Spanning Trees

Two strategies, both producing a minimum spanning *forest* (one tree per connected
component) of an undirected graph:

- [`Kruskal`] scans the edges by increasing weight and keeps an edge iff it joins two
  different components. Component bookkeeping is a type parameter: [`MergedSets`]
  rebuilds the merged vertex set on every union, [`UnionFind`] uses union by rank with
  path compression.
- [`Prim`] grows one tree at a time from a root, always attaching the frontier vertex
  with the lightest connecting edge. The frontier is a type parameter as for Dijkstra.

All variants return a [`SpanningTree`] of equal total weight; the chosen edges may
differ between Kruskal and Prim when weights tie.
*/

use std::marker::PhantomData;

use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Edges of a spanning forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<WeightedEdge>,
    number_of_nodes: NumNodes,
}

impl SpanningTree {
    /// Returns the tree edges, normalized, in the order they were chosen
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<WeightedEdge> {
        self.edges
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns the number of trees of the forest, i.e. the number of connected components
    pub fn number_of_trees(&self) -> NumNodes {
        self.number_of_nodes - self.edges.len() as NumNodes
    }

    /// Returns the sum of all edge weights
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Returns *true* if `{u, v}` is a tree edge
    pub fn contains(&self, u: Node, v: Node) -> bool {
        let (u, v) = (u.min(v), u.max(v));
        self.edges.iter().any(|e| e.endpoints() == (u, v))
    }
}

/// Tracks which vertices are already connected while Kruskal adds edges
pub trait ComponentTracker {
    /// Starts with every vertex in its own component
    fn new(n: NumNodes) -> Self;

    /// Returns *true* if `u` and `v` are in the same component
    fn same_component(&mut self, u: Node, v: Node) -> bool;

    /// Merges the components of `u` and `v`
    fn merge(&mut self, u: Node, v: Node);
}

/// Each vertex points to the explicit member list of its component; a merge moves the
/// smaller list into the larger one and repoints every moved member.
#[derive(Debug, Clone)]
pub struct MergedSets {
    set_of: Vec<NumNodes>,
    sets: Vec<Vec<Node>>,
}

impl ComponentTracker for MergedSets {
    fn new(n: NumNodes) -> Self {
        Self {
            set_of: (0..n).collect(),
            sets: (0..n).map(|u| vec![u]).collect(),
        }
    }

    fn same_component(&mut self, u: Node, v: Node) -> bool {
        self.set_of[u as usize] == self.set_of[v as usize]
    }

    fn merge(&mut self, u: Node, v: Node) {
        let (mut keep, mut take) = (self.set_of[u as usize], self.set_of[v as usize]);
        if keep == take {
            return;
        }
        if self.sets[keep as usize].len() < self.sets[take as usize].len() {
            std::mem::swap(&mut keep, &mut take);
        }

        let moved = std::mem::take(&mut self.sets[take as usize]);
        for &x in &moved {
            self.set_of[x as usize] = keep;
        }
        self.sets[keep as usize].extend(moved);
    }
}

/// Disjoint-set forest with union by rank and path compression.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Returns the representative of the set containing `u`
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = u;
        while node != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }
}

impl ComponentTracker for UnionFind {
    fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
        }
    }

    fn same_component(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    fn merge(&mut self, u: Node, v: Node) {
        let (ru, rv) = (self.find(u), self.find(v));
        if ru == rv {
            return;
        }

        match self.rank[ru as usize].cmp(&self.rank[rv as usize]) {
            std::cmp::Ordering::Less => self.parent[ru as usize] = rv,
            std::cmp::Ordering::Greater => self.parent[rv as usize] = ru,
            std::cmp::Ordering::Equal => {
                self.parent[rv as usize] = ru;
                self.rank[ru as usize] += 1;
            }
        }
    }
}

/// Kruskal's algorithm.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = AdjacencyListGraph::from_edges(false, [(0, 1, 4), (1, 2, 1), (0, 2, 2), (3, 4, 7)]);
/// let forest = Kruskal::<_, UnionFind>::new(&graph).compute();
///
/// assert_eq!(forest.total_weight(), 10);
/// assert_eq!(forest.number_of_trees(), 2);
/// assert!(!forest.contains(0, 1));
/// ```
pub struct Kruskal<'a, G, C = MergedSets> {
    graph: &'a G,
    _components: PhantomData<C>,
}

impl<'a, G, C> Kruskal<'a, G, C>
where
    G: WeightedAdjacency,
    C: ComponentTracker,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            _components: PhantomData,
        }
    }

    pub fn compute(&self) -> SpanningTree {
        let n = self.graph.number_of_nodes();
        let mut components = C::new(n);
        let mut edges = Vec::with_capacity(self.graph.len().saturating_sub(1));

        for e in self.graph.edges().map(|e| e.normalized()).sorted() {
            if !components.same_component(e.source, e.target) {
                trace!(%e, "tree edge");
                components.merge(e.source, e.target);
                edges.push(WeightedEdge::undirected(e.source, e.target, e.weight));
            }
        }

        let tree = SpanningTree {
            edges,
            number_of_nodes: n,
        };
        debug!(
            edges = tree.edges.len(),
            weight = tree.total_weight(),
            "kruskal finished"
        );
        tree
    }
}

/// Prim's algorithm with a configurable [`Frontier`].
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph =
///     AdjacencyListGraph::from_edges(false, [('a', 'b', 4), ('b', 'c', 1), ('a', 'c', 2)]);
/// let tree = Prim::<_, HeapFrontier>::new(&graph).compute(0);
///
/// assert_eq!(tree.total_weight(), 3);
/// assert!(tree.contains(2, 0));
/// ```
pub struct Prim<'a, G, F = ScanFrontier> {
    graph: &'a G,
    _frontier: PhantomData<F>,
}

impl<'a, G, F> Prim<'a, G, F>
where
    G: WeightedAdjacency,
    F: Frontier,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            _frontier: PhantomData,
        }
    }

    /// Grows the first tree from `root`; every further component is rooted at its
    /// smallest vertex.
    /// ** Panics if `root >= n` **
    pub fn compute(&self, root: Node) -> SpanningTree {
        let n = self.graph.number_of_nodes();
        let mut state = SearchState::new(n);
        state.set_key(root, 0);
        let mut frontier = F::from_state(&state);

        while let Some(u) = frontier.pop_min(&state) {
            trace!(u, key = state.key(u), "attach");
            state.set_color(u, VertexColor::Black);

            for (v, w) in self.graph.weighted_neighbors_of(u) {
                if frontier.contains(v) && w < state.key(v) {
                    state.set_key(v, w);
                    state.set_parent(v, Some(u));
                    frontier.decrease_key(v, w);
                }
            }
        }

        let edges = self
            .graph
            .vertices()
            .filter_map(|v| {
                state
                    .parent(v)
                    .map(|u| WeightedEdge::undirected(u, v, state.key(v)).normalized())
            })
            .collect_vec();

        let tree = SpanningTree {
            edges,
            number_of_nodes: n,
        };
        debug!(
            root,
            edges = tree.edges.len(),
            weight = tree.total_weight(),
            "prim finished"
        );
        tree
    }
}

/// Spanning forests with default configuration as methods on every graph.
pub trait SpanningForest: WeightedAdjacency {
    fn kruskal(&self) -> SpanningTree {
        Kruskal::<_, UnionFind>::new(self).compute()
    }

    /// Prim rooted at vertex `0`; the empty forest for the empty graph
    fn prim(&self) -> SpanningTree {
        if self.is_empty() {
            return SpanningTree {
                edges: Vec::new(),
                number_of_nodes: 0,
            };
        }
        Prim::<_, HeapFrontier>::new(self).compute(0)
    }
}

impl<G> SpanningForest for G where G: WeightedAdjacency {}
