use std::{
    hash::Hash,
    iter::{Enumerate, FilterMap},
    slice::Iter,
};

use fxhash::FxHashMap;

use super::*;

/// A single cell of the adjacency matrix.
///
/// Unlinked cells carry [`INFINITE_WEIGHT`] so that the raw weights can be fed into
/// relaxation arithmetic directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixCell {
    pub weight: Weight,
    pub linked: bool,
}

impl Default for MatrixCell {
    fn default() -> Self {
        Self {
            weight: INFINITE_WEIGHT,
            linked: false,
        }
    }
}

impl MatrixCell {
    fn linked(weight: Weight) -> Self {
        Self {
            weight,
            linked: true,
        }
    }
}

/// Adjacency-matrix representation with a fixed capacity of `size` vertices.
///
/// Every vertex is bound to a matrix index, either explicitly via
/// [`AdjacencyMatrixGraph::add_vertex`] or implicitly (lowest free index) when an edge
/// mentions a new vertex. Indices beyond the capacity are rejected with
/// [`GraphError::CapacityExceeded`]. Vertex ids *are* matrix indices; unbound indices
/// behave like isolated vertices without a label.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph = AdjacencyMatrixGraph::new(3, true);
/// graph.add_vertex('a', 0)?.add_vertex('b', 2)?;
/// graph.add_edge('a', 'b', -4)?;
///
/// assert!(graph.has_edge(0, 2));
/// assert_eq!(graph.cell_weight(2, 0), INFINITE_WEIGHT);
/// assert!(graph.add_vertex('c', 3).is_err());
/// # Ok::<(), wgraphs::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph<T> {
    cells: SquareMatrix<MatrixCell>,
    labels: Vec<Option<T>>,
    index: FxHashMap<T, Node>,
    directed: bool,
    num_edges: NumEdges,
}

impl<T> AdjacencyMatrixGraph<T>
where
    T: Clone + Eq + Hash,
{
    /// Creates a graph without edges and with room for `size` vertices
    pub fn new(size: NumNodes, directed: bool) -> Self {
        Self {
            cells: SquareMatrix::filled(size as usize, MatrixCell::default()),
            labels: vec![None; size as usize],
            index: FxHashMap::default(),
            directed,
            num_edges: 0,
        }
    }

    /// Returns the fixed number of vertex slots
    pub fn capacity(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Returns the number of slots bound to a vertex
    pub fn number_of_bound_vertices(&self) -> NumNodes {
        self.index.len() as NumNodes
    }

    fn check_index(&self, index: Node) -> Result<()> {
        if (index as usize) < self.labels.len() {
            Ok(())
        } else {
            Err(GraphError::CapacityExceeded {
                index: index as usize,
                capacity: self.labels.len(),
            })
        }
    }

    /// Binds `label` to matrix slot `index`.
    ///
    /// Fails with [`GraphError::CapacityExceeded`] if `index >= capacity`, with
    /// [`GraphError::IndexOccupied`] if the slot holds another vertex and with
    /// [`GraphError::VertexAlreadyBound`] if `label` already sits in another slot.
    /// Rebinding a vertex to its own slot is a no-op.
    pub fn add_vertex(&mut self, label: T, index: Node) -> Result<&mut Self> {
        self.check_index(index)?;

        if let Some(&bound) = self.index.get(&label) {
            return if bound == index {
                Ok(self)
            } else {
                Err(GraphError::VertexAlreadyBound { index: bound })
            };
        }

        let slot = &mut self.labels[index as usize];
        if slot.is_some() {
            return Err(GraphError::IndexOccupied { index });
        }

        *slot = Some(label.clone());
        self.index.insert(label, index);
        Ok(self)
    }

    /// Returns the slot of `label`, binding it to the lowest free slot if it is new
    pub fn insert_vertex(&mut self, label: T) -> Result<Node> {
        if let Some(&u) = self.index.get(&label) {
            return Ok(u);
        }

        let free = self
            .labels
            .iter()
            .position(Option::is_none)
            .ok_or(GraphError::CapacityExceeded {
                index: self.labels.len(),
                capacity: self.labels.len(),
            })? as Node;

        self.add_vertex(label, free)?;
        Ok(free)
    }

    /// Links `u -> v` (and `v -> u` if undirected) with weight `w`.
    /// Vertices not bound yet are bound to the lowest free slots.
    pub fn add_edge(&mut self, u: T, v: T, w: Weight) -> Result<&mut Self> {
        let u = self.insert_vertex(u)?;
        let v = self.insert_vertex(v)?;
        self.add_edge_between(u, v, w)
    }

    /// Links the slots `u -> v` (and `v -> u` if undirected) with weight `w`
    pub fn add_edge_between(&mut self, u: Node, v: Node, w: Weight) -> Result<&mut Self> {
        self.check_index(u)?;
        self.check_index(v)?;

        if !self.cells[(u, v)].linked {
            self.num_edges += 1;
        }
        self.cells[(u, v)] = MatrixCell::linked(w);
        if !self.directed {
            self.cells[(v, u)] = MatrixCell::linked(w);
        }
        Ok(self)
    }

    /// Returns the cell `(u, v)`, `None` if out of range
    pub fn cell(&self, u: Node, v: Node) -> Option<MatrixCell> {
        self.cells.get(u, v).copied()
    }

    /// Returns the raw weight of cell `(u, v)`: the edge weight if linked, the
    /// sentinel otherwise.
    /// ** Panics if `u >= n || v >= n` **
    pub fn cell_weight(&self, u: Node, v: Node) -> Weight {
        self.cells[(u, v)].weight
    }

    /// Returns a dense copy of all weights; unlinked cells read as [`INFINITE_WEIGHT`]
    pub fn weight_matrix(&self) -> SquareMatrix<Weight> {
        self.cells.map(|cell| cell.weight)
    }

    /// Returns the link structure as one bitset row per vertex
    pub fn link_matrix(&self) -> Vec<NodeBitSet> {
        let n = self.number_of_nodes();
        (0..n)
            .map(|u| NodeBitSet::new_with_bits_set(n, self.neighbors_of(u)))
            .collect()
    }
}

impl<T> GraphNodeOrder for AdjacencyMatrixGraph<T> {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl<T> GraphType for AdjacencyMatrixGraph<T> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

type LinkedCells<'a> =
    FilterMap<Enumerate<Iter<'a, MatrixCell>>, fn((usize, &MatrixCell)) -> Option<(Node, Weight)>>;

fn linked_cell((v, cell): (usize, &MatrixCell)) -> Option<(Node, Weight)> {
    cell.linked.then_some((v as Node, cell.weight))
}

impl<T> WeightedAdjacency for AdjacencyMatrixGraph<T> {
    type NeighborIter<'a>
        = LinkedCells<'a>
    where
        Self: 'a;

    fn weighted_neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.cells
            .row(u)
            .iter()
            .enumerate()
            .filter_map(linked_cell as fn((usize, &MatrixCell)) -> Option<(Node, Weight)>)
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.cells.get(u, v).is_some_and(|cell| cell.linked)
    }

    fn edge_weight(&self, u: Node, v: Node) -> Result<Weight> {
        self.cells
            .get(u, v)
            .filter(|cell| cell.linked)
            .map(|cell| cell.weight)
            .ok_or(GraphError::MissingEdge { from: u, to: v })
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<T> LabelledGraph for AdjacencyMatrixGraph<T>
where
    T: Eq + Hash,
{
    type Label = T;

    fn label_of(&self, u: Node) -> Option<&T> {
        self.labels.get(u as usize).and_then(Option::as_ref)
    }

    fn node_of(&self, label: &T) -> Option<Node> {
        self.index.get(label).copied()
    }
}

impl<T> GraphTranspose for AdjacencyMatrixGraph<T>
where
    T: Clone,
{
    fn transpose(&self) -> Self {
        Self {
            cells: if self.directed {
                self.cells.transposed()
            } else {
                self.cells.clone()
            },
            labels: self.labels.clone(),
            index: self.index.clone(),
            directed: self.directed,
            num_edges: self.num_edges,
        }
    }
}


#[cfg(test)]
crate::testing::test_weighted_graph_ops!(test_adjacency_matrix_ops, AdjacencyMatrixGraph<Node>);
