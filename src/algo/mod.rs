/*!
# Graph Algorithms

This module provides the algorithms built on top of the representations in [`crate::repr`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversals, shortest paths, spanning forests, closures and components.

Every algorithm is a configurable struct (`Dijkstra::new(&graph).preconditions(..)`),
while the most commonly used entry points are also implemented as extension traits on the
graph itself (`graph.dijkstra(source)`).
*/

mod all_pairs;
mod closure;
mod connectivity;
mod frontier;
mod mst;
mod partition;
mod shortest_path;
mod traversal;

use crate::{prelude::*, utils::SquareMatrix};

pub use all_pairs::*;
pub use closure::*;
pub use connectivity::*;
pub use frontier::*;
pub use mst::*;
pub use partition::*;
pub use shortest_path::*;
pub use traversal::*;
