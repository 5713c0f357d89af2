/*!
`umatch` computes **maximum-cardinality matchings** in graphs that are
- **u**nlabelled & **u**nsigned : Nodes are numbered `0` to `n - 1`
- **u**nweighted : Neither nodes nor edges have a weight attached to them
- **u**ndirected

# Algorithm

The core is Edmonds' blossom algorithm: starting from any valid matching
(empty, a greedy one, or a user-supplied hint), it repeatedly searches for
augmenting paths, contracting odd cycles (*blossoms*) into pseudonodes on the
fly, until the matching is maximum. Pseudonodes are represented implicitly by
a label per vertex with weighted-union merging, searches reuse one set of
scratch arrays, and frustrated search trees are pruned for the rest of the
run; the total running time is `O(n * m * alpha(n))`.

# Representation

**Nodes** are `u32` in the range `0..n`; **edges** are the tuple-struct
`Edge(Node, Node)` with `Edge(u, v)` equivalent to `Edge(v, u)`. See the
[`repr`] module for the available adjacency backends.

# Usage

```
use umatch::prelude::*;

// C9 plus a chord
let mut graph = AdjArrayUndir::new(9);
graph.connect_cycle(0..9);
graph.add_edge(2, 7);

let matching = graph.maximum_matching();
assert_eq!(matching.cardinality(), 4);
assert!(matching.is_valid_for(&graph));
```

Graphs and matchings can be exchanged in a DIMACS-like edge format via the
[`io`] module; the `umatch` binary wraps this into a command-line tool.
*/

pub mod algo;
pub mod bitset;
pub mod edge;
pub mod gens;
pub mod io;
pub mod matching;
pub mod node;
pub mod ops;
pub mod repr;

#[cfg(test)]
pub(crate) mod testing;

/// `umatch::prelude` includes the node/edge definitions, the matching type,
/// all graph operation traits, the algorithms, and all implemented
/// representations.
pub mod prelude {
    pub use super::{algo::*, edge::*, gens::*, matching::*, node::*, ops::*, repr::*};
}
