//! Error types for graph construction, lookups and checked algorithm preconditions.
//!
//! Negative-weight cycles are *not* an error: Bellman-Ford reports them as part of its
//! outcome. Unmet preconditions (negative weights for Dijkstra, cycles for DAG
//! relaxation) only surface here when [`Preconditions::Checked`](crate::algo::Preconditions)
//! is selected.

use thiserror::Error;

use crate::{Node, Weight};

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph representations and checked algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A matrix graph has a fixed number of slots; `index` lies beyond them.
    #[error("index {index} exceeds the graph capacity of {capacity} vertices")]
    CapacityExceeded { index: usize, capacity: usize },

    /// The requested matrix slot already holds a different vertex.
    #[error("index {index} is already bound to another vertex")]
    IndexOccupied { index: Node },

    /// The vertex is already bound to a different matrix slot.
    #[error("vertex is already bound to index {index}")]
    VertexAlreadyBound { index: Node },

    /// No edge `from -> to` exists.
    #[error("no edge from {from} to {to}")]
    MissingEdge { from: Node, to: Node },

    /// A label-based lookup named a vertex the graph does not contain.
    #[error("vertex is not part of the graph")]
    UnknownVertex,

    /// Dijkstra was asked to verify non-negativity and found a negative edge.
    #[error("edge from {from} to {to} has negative weight {weight}")]
    NegativeWeight { from: Node, to: Node, weight: Weight },

    /// An algorithm requiring a DAG was asked to verify acyclicity and found a cycle.
    #[error("graph contains a cycle")]
    NotAcyclic,
}
