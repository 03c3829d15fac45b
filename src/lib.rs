/*!
`girth` computes the **girth** of an undirected graph: the length of a
shortest cycle contained in the graph, or "no cycle" if the graph is a
forest. Graphs may carry per-edge weights, in which case the girth is the
minimum total weight over all cycles; unweighted graphs use weight `1`
per edge and the girth is the minimum edge count.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number
of nodes in the graph. **Edges** are referenced by their insertion index
([`EdgeId`](crate::edge::EdgeId)); parallel edges and self-loops are kept as
distinct edges, since a parallel pair is a cycle of two and a loop a cycle
of one. The single provided storage backend is
[`AdjArrayUndir`](crate::repr::AdjArrayUndir), an adjacency-array
undirected multigraph; algorithms only touch it through the traits in
[`ops`], so they stay decoupled from the storage layout.

# Algorithm

The computation runs in three steps, each usable on its own:

1. A spanning forest is built by scanning edges in id order and keeping
   every edge that does not close a cycle
   ([`SpanningForest`](crate::algo::SpanningForest), union-find based).
2. The complement of the forest is the set of **back edges**; each back
   edge closes exactly one cycle against the forest paths. No back edges
   means the graph is acyclic.
3. A single Floyd-Warshall pass
   ([`AllPairsShortestPaths`](crate::algo::AllPairsShortestPaths)) with
   every back edge masked to an infinite weight yields the forest-path
   distance between the endpoints of each back edge. The girth is the
   minimum over all back edges of that distance plus the edge's own
   weight ([`Girth`](crate::algo::Girth)).

# Usage

```rust
use girth::{prelude::*, algo::*};

// a 5-cycle with one chord
let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2)]);

let cycle = graph.girth().unwrap();
assert_eq!(cycle.total_weight(), 3.0);
assert_eq!(cycle.number_of_edges(), 3);

// weighted edges: the girth sums weights instead of counting edges
let weighted = AdjArrayUndir::from_edges(3, [(0, 1, 2.0), (1, 2, 2.0), (2, 0, 1.5)]);
assert_eq!(weighted.girth_length(), 5.5);

// forests have no cycle
let tree = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
assert!(tree.girth().is_none());
```

# When to use

The all-pairs pass costs `O(n^3)` time and `O(n^2)` space, which is
perfectly fine for the interactive use this crate targets but unsuitable
beyond a few thousand nodes. The input graph is never modified; masking
happens in the weight function, not in the structure.
*/

pub mod algo;
pub mod edge;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `girth::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the provided representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
