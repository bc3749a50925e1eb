/*!
# Utilities

Provides the dense [`SquareMatrix`] that backs the adjacency matrix representation and the
all-pairs algorithms. You probably do not need to interact with this module directly.
*/

mod matrix;

pub use matrix::*;
