use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use crate::{Node, Weight};

/// A weighted edge between two vertices.
///
/// Edges are ordered by weight first; ties are broken by the endpoints so that
/// sorting a list of edges is deterministic.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    pub source: Node,
    pub target: Node,
    pub weight: Weight,
    pub directed: bool,
}

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl WeightedEdge {
    /// Creates a directed edge `source -> target`
    pub fn directed(source: Node, target: Node, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
            directed: true,
        }
    }

    /// Creates an undirected edge `{source, target}`
    pub fn undirected(source: Node, target: Node, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
            directed: false,
        }
    }

    /// Returns the endpoints as a pair
    pub fn endpoints(&self) -> (Node, Node) {
        (self.source, self.target)
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first.
    /// Directed edges are returned unchanged.
    pub fn normalized(&self) -> Self {
        if self.directed || self.is_normalized() {
            *self
        } else {
            self.reverse()
        }
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.source <= self.target
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            ..*self
        }
    }
}

impl Ord for WeightedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.directed.cmp(&other.directed))
    }
}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = if self.directed { "->" } else { "-" };
        write!(f, "({}{}{},{})", self.source, arrow, self.target, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_by_weight() {
        let mut edges = vec![
            WeightedEdge::undirected(0, 1, 7),
            WeightedEdge::undirected(2, 1, -3),
            WeightedEdge::undirected(1, 0, 7),
            WeightedEdge::undirected(4, 2, 0),
        ];
        edges.sort();
        assert_eq!(
            edges.iter().map(|e| e.weight).collect::<Vec<_>>(),
            vec![-3, 0, 7, 7]
        );
        assert_eq!(edges[2].endpoints(), (0, 1));
    }

    #[test]
    fn normalize() {
        assert_eq!(
            WeightedEdge::undirected(3, 1, 2).normalized().endpoints(),
            (1, 3)
        );
        assert_eq!(
            WeightedEdge::directed(3, 1, 2).normalized().endpoints(),
            (3, 1)
        );
        assert!(WeightedEdge::directed(2, 2, 0).is_loop());
    }

    #[test]
    fn display() {
        assert_eq!(WeightedEdge::directed(0, 4, -2).to_string(), "(0->4,-2)");
        assert_eq!(WeightedEdge::undirected(1, 2, 5).to_string(), "(1-2,5)");
    }
}
