/*!
# Graph Representations

Two storage backends share the traits of [`crate::ops`]:

- [`AdjacencyListGraph`]: vertex -> (neighbor -> weight); grows as vertices and edges
  are added, `O(n + m)` memory.
- [`AdjacencyMatrixGraph`]: fixed-capacity `n x n` matrix of `(weight, linked)` cells
  with an explicit vertex <-> index binding; `O(1)` edge lookups, `O(n^2)` memory.

Both store payloads ("labels") for their vertices and address them by dense ids
internally. Directedness is fixed at construction.
*/

use crate::{prelude::*, utils::SquareMatrix};

mod adj_list;
mod adj_matrix;
mod neighborhood;

pub use adj_list::*;
pub use adj_matrix::*;
pub use neighborhood::*;
