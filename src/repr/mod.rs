/*!
# Graph Representation

This module contains the concrete graph data structures one can use.

### Representations

- [`AdjArrayUndir`]
  Stores adjacency lists in a `Vec<Vec<Node>>`.
  - Good general-purpose default for sparse graphs.
  - Fast iteration over neighbors.

- [`SparseAdjArrayUndir`]
  Like `AdjArrayUndir`, but uses `Vec<SmallVec<Node>>` for adjacency lists.
  - Optimized for graphs where most nodes have very few neighbors.
  - Reduces heap allocations by storing small lists inline.

Both share the same API via [`UndirectedGraph`] and differ only in memory
usage and performance characteristics.
*/

use crate::{edge::*, node::*, ops::*};

pub mod neighborhood;
pub mod undirected;

use neighborhood::*;

pub use undirected::{AdjArrayUndir, SparseAdjArrayUndir, UndirectedGraph};
