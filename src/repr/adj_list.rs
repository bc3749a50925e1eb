use std::hash::Hash;

use fxhash::FxHashMap;

use super::*;

/// Adjacency-list representation: vertex -> (neighbor -> weight).
///
/// Vertices are identified by their payload ("label"); each new label is assigned the
/// next free [`Node`] id. Adding the same edge twice overwrites its weight, and in an
/// undirected graph every edge `(u, v, w)` is stored together with its mirror `(v, u, w)`.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph = AdjacencyListGraph::undirected();
/// graph.add_edge("a", "b", 4).add_edge("b", "c", 1);
///
/// let (a, b) = (graph.node_of(&"a").unwrap(), graph.node_of(&"b").unwrap());
/// assert_eq!(graph.edge_weight(b, a), Ok(4));
/// assert_eq!(graph.number_of_nodes(), 3);
/// assert_eq!(graph.number_of_edges(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<T> {
    labels: Vec<T>,
    index: FxHashMap<T, Node>,
    nbs: Vec<WeightedNeighborhood>,
    directed: bool,
    num_edges: NumEdges,
}

impl<T> AdjacencyListGraph<T>
where
    T: Clone + Eq + Hash,
{
    /// Creates an empty graph; directedness is fixed from here on
    pub fn new(directed: bool) -> Self {
        Self {
            labels: Vec::new(),
            index: FxHashMap::default(),
            nbs: Vec::new(),
            directed,
            num_edges: 0,
        }
    }

    /// Creates an empty directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (T, T, Weight)>,
    {
        let mut graph = Self::new(directed);
        for (u, v, w) in edges {
            graph.add_edge(u, v, w);
        }
        graph
    }

    /// Returns the id of `label`, registering it as an isolated vertex if it is new
    pub fn insert_vertex(&mut self, label: T) -> Node {
        if let Some(&u) = self.index.get(&label) {
            return u;
        }

        let u = self.labels.len() as Node;
        self.index.insert(label.clone(), u);
        self.labels.push(label);
        self.nbs.push(WeightedNeighborhood::new());
        u
    }

    /// Registers `label` as a vertex (a no-op if it is known already)
    pub fn add_vertex(&mut self, label: T) -> &mut Self {
        self.insert_vertex(label);
        self
    }

    /// Adds the edge `u -> v` (and `v -> u` if undirected) with weight `w`.
    /// Unknown endpoints are registered on the fly.
    pub fn add_edge(&mut self, u: T, v: T, w: Weight) -> &mut Self {
        let u = self.insert_vertex(u);
        let v = self.insert_vertex(v);
        self.add_edge_between(u, v, w)
    }

    /// Adds the edge `u -> v` between already registered vertices.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge_between(&mut self, u: Node, v: Node, w: Weight) -> &mut Self {
        assert!((v as usize) < self.nbs.len());

        let previous = self.nbs[u as usize].insert(v, w);
        if !self.directed && u != v {
            self.nbs[v as usize].insert(u, w);
        }
        if previous.is_none() {
            self.num_edges += 1;
        }
        self
    }
}

impl<T> GraphNodeOrder for AdjacencyListGraph<T> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<T> GraphType for AdjacencyListGraph<T> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<T> WeightedAdjacency for AdjacencyListGraph<T> {
    type NeighborIter<'a>
        = std::iter::Copied<std::slice::Iter<'a, (Node, Weight)>>
    where
        Self: 'a;

    fn weighted_neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs
            .get(u as usize)
            .is_some_and(|nbs| nbs.has_neighbor(v))
    }

    fn edge_weight(&self, u: Node, v: Node) -> Result<Weight> {
        self.nbs
            .get(u as usize)
            .and_then(|nbs| nbs.weight_to(v))
            .ok_or(GraphError::MissingEdge { from: u, to: v })
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<T> LabelledGraph for AdjacencyListGraph<T>
where
    T: Eq + Hash,
{
    type Label = T;

    fn label_of(&self, u: Node) -> Option<&T> {
        self.labels.get(u as usize)
    }

    fn node_of(&self, label: &T) -> Option<Node> {
        self.index.get(label).copied()
    }
}

impl<T> GraphTranspose for AdjacencyListGraph<T>
where
    T: Clone + Eq + Hash,
{
    fn transpose(&self) -> Self {
        if !self.directed {
            return self.clone();
        }

        let mut nbs = vec![WeightedNeighborhood::new(); self.nbs.len()];
        for e in self.arcs() {
            nbs[e.target as usize].insert(e.source, e.weight);
        }

        Self {
            labels: self.labels.clone(),
            index: self.index.clone(),
            nbs,
            directed: true,
            num_edges: self.num_edges,
        }
    }
}


#[cfg(test)]
crate::testing::test_weighted_graph_ops!(test_adjacency_list_ops, AdjacencyListGraph<Node>);
