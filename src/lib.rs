/*!
`wgraphs` is a graph data structure & algorithms library for graphs that are
- **w**eighted : every edge carries a signed integer weight
- **labelled** : every vertex carries a caller-supplied payload, addressed internally by a dense id
- directed or undirected : fixed when the graph is constructed

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of vertices in the
graph.
The payload ("label") a caller attaches to a vertex is only consulted at the API boundary;
all algorithms work on the dense ids.
**Edges** are [`WeightedEdge`](crate::edge::WeightedEdge) values with a source, a target and a
[`Weight`] (`i64`). The sentinel [`INFINITE_WEIGHT`] stands for "no path"/"no edge" and absorbs
additions (see [`weight_add`]).

### Directed vs Undirected

- In an **undirected** graph, the edge `{u, v}` is stored in both neighborhoods with the same
  weight.
- In a **directed** graph, `(u, v)` and `(v, u)` are distinct edges.

### Available Representations

See the [`repr`] module:

- [`AdjacencyListGraph`](crate::repr::AdjacencyListGraph): growable, one weighted
  neighborhood per vertex
- [`AdjacencyMatrixGraph`](crate::repr::AdjacencyMatrixGraph): fixed capacity, one cell per
  vertex pair

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before running them on a graph. The commonly used functionality is
also implemented via traits on the graph itself, making it usable without configuring anything.

Per-run bookkeeping (colors, distances, timestamps, keys, parents) lives in a
[`SearchState`](crate::vertex::SearchState) owned by the run, never in the graph. Running an
algorithm therefore never alters the graph and two runs never observe each other.

# Usage

- [`prelude`] includes nodes, weights, edges, errors, basic graph operations and both
  representations,
- [`algo`] includes BFS/DFS, topological sorting, Dijkstra, Bellman-Ford, DAG shortest paths,
  Floyd-Warshall, min-plus products, transitive closure, Kruskal, Prim and strongly connected
  components.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```rust
use wgraphs::{prelude::*, algo::*};

let graph = AdjacencyListGraph::from_edges(true, [("s", "a", 4), ("s", "b", 1), ("b", "a", 2)]);
let s = graph.node_of(&"s").unwrap();
let a = graph.node_of(&"a").unwrap();

let tree = graph.dijkstra(s);
assert_eq!(tree.distance(a), Some(3));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;
pub mod vertex;
pub mod weight;

pub use error::{GraphError, Result};
pub use node::*;
pub use weight::*;

/// `wgraphs::prelude` includes definitions for nodes, weights, edges and errors, all basic graph
/// operation traits as well as both representations.
pub mod prelude {
    pub use super::{
        edge::*, error::*, node::*, ops::*, repr::*, utils::SquareMatrix, vertex::*, weight::*,
    };
}
