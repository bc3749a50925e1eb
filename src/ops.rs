/*!
# Graph Operations

Traits shared by both graph representations. Algorithms are written against these
traits only, so every traversal / shortest-path / spanning-tree routine works on the
adjacency list and the adjacency matrix alike.
*/

use std::ops::Range;

use crate::prelude::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range `0..n` of all vertex ids.
    /// In contrast to borrowing iterators, the range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V
    fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }
}

/// Directedness is fixed when a graph is constructed
pub trait GraphType {
    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if every edge `(u, v)` implies `(v, u)` with the same weight
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Traits pertaining getters for weighted neighborhoods & edges
pub trait WeightedAdjacency: GraphNodeOrder + GraphType + Sized {
    type NeighborIter<'a>: Iterator<Item = (Node, Weight)> + 'a
    where
        Self: 'a;

    /// Returns an iterator over `(neighbor, weight)` pairs of the outgoing edges of `u`.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns an iterator over the (open, outgoing) neighborhood of `u`.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the number of (outgoing) neighbors of `u`.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.weighted_neighbors_of(u).count() as NumNodes
    }

    /// Returns *true* if the edge `(u, v)` exists
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns the weight of edge `(u, v)` or [`GraphError::MissingEdge`] if it is absent
    fn edge_weight(&self, u: Node, v: Node) -> Result<Weight>;

    /// Returns the number of edges; undirected edges are counted once
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over all arcs, i.e. both orientations of undirected edges
    fn arcs(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        let directed = self.is_directed();
        self.vertices_range().flat_map(move |u| {
            self.weighted_neighbors_of(u).map(move |(v, w)| WeightedEdge {
                source: u,
                target: v,
                weight: w,
                directed,
            })
        })
    }

    /// Returns an iterator over all edges.
    /// Undirected edges are reported once, normalized such that `source <= target`.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        let directed = self.is_directed();
        self.arcs().filter(move |e| directed || e.is_normalized())
    }

    /// Returns the first arc with a negative weight, if any
    fn negative_arc(&self) -> Option<WeightedEdge> {
        self.arcs().find(|e| e.weight < 0)
    }

    /// Returns *true* if some edge carries a negative weight
    fn has_negative_weights(&self) -> bool {
        self.negative_arc().is_some()
    }
}

/// Access to the payloads ("labels") callers attached to vertices
pub trait LabelledGraph: GraphNodeOrder {
    type Label;

    /// Returns the payload of `u`, `None` if `u` is out of range or unbound
    fn label_of(&self, u: Node) -> Option<&Self::Label>;

    /// Returns the id of the vertex carrying `label`
    fn node_of(&self, label: &Self::Label) -> Option<Node>;

    /// Returns the id of the vertex carrying `label` or [`GraphError::UnknownVertex`]
    fn try_node_of(&self, label: &Self::Label) -> Result<Node> {
        self.node_of(label).ok_or(GraphError::UnknownVertex)
    }

    /// Returns `u` together with its payload
    fn vertex(&self, u: Node) -> Option<Vertex<&Self::Label>> {
        self.label_of(u).map(|value| Vertex::new(u, value))
    }

    /// Returns an iterator over all labelled vertices
    fn labelled_vertices(&self) -> impl Iterator<Item = Vertex<&Self::Label>> + '_ {
        self.vertices_range().filter_map(|u| self.vertex(u))
    }
}

/// Label-based convenience queries
pub trait LabelledAdjacency: LabelledGraph + WeightedAdjacency {
    /// Returns *true* if an edge between the vertices carrying `a` and `b` exists.
    /// Unknown vertices have no edges.
    fn has_edge_between(&self, a: &Self::Label, b: &Self::Label) -> bool {
        match (self.node_of(a), self.node_of(b)) {
            (Some(u), Some(v)) => self.has_edge(u, v),
            _ => false,
        }
    }

    /// Returns the weight of the edge between the vertices carrying `a` and `b`
    fn weight_between(&self, a: &Self::Label, b: &Self::Label) -> Result<Weight> {
        let u = self.try_node_of(a)?;
        let v = self.try_node_of(b)?;
        self.edge_weight(u, v)
    }

    /// Returns the ids of the neighbors of the vertex carrying `label`.
    /// An unknown vertex has no neighbors, this is never an error.
    fn neighbors_of_label(&self, label: &Self::Label) -> Vec<Node> {
        self.node_of(label)
            .map(|u| self.neighbors_of(u).collect())
            .unwrap_or_default()
    }
}

impl<G> LabelledAdjacency for G where G: LabelledGraph + WeightedAdjacency {}

/// Graphs that can build their transpose (every arc reversed)
pub trait GraphTranspose: Sized {
    /// Returns a new graph with every directed edge reversed; vertex ids and payloads
    /// are kept. Undirected graphs are their own transpose.
    fn transpose(&self) -> Self;
}
