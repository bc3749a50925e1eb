/*!
# Node Representation

Every vertex of a graph is addressed by a dense id `Node = u32` in the range `0..n`.
Ids are assigned once, when a vertex enters a graph, and never change afterwards;
all algorithm bookkeeping (colors, keys, parents, matrices) is indexed by them.
The payload a caller attached to a vertex is only consulted at the API boundary.
*/

use std::num::NonZero;

use stream_bitset::bitset::BitSetImpl;

/// Vertex ids are unsigned integers from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// A set of vertices stored as one bit per id
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we store one parent per vertex. This instead uses the
/// `NonZero`-Wrapper to assign a constant value as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// `INVALID_NODE` is never a valid vertex id and thus safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node_is_compact() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }

    #[test]
    fn optional_node_roundtrip() {
        for u in [0, 1, 17, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(u).map(|x| x.get()), Some(u));
        }
        assert!(OptionalNode::new(INVALID_NODE).is_none());
    }
}
