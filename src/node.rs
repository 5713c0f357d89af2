/*!
# Node Representation

Nodes are plain `u32` values in the range `0..n` where `n` is the number of
nodes in the graph. "No node" is expressed as `Option<Node>` rather than a
sentinel value; the matching state in [`crate::matching`] relies on this.
*/

use crate::bitset::BitSetImpl;

/// Nodes are numbered `0..n`.
///
/// As most common graphs do not exceed `2^32` nodes, `u32` suffices and
/// halves the memory footprint compared to `usize` on 64-bit targets.
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph.
pub type NumNodes = Node;

/// BitSet over nodes.
pub type NodeBitSet = BitSetImpl<Node>;
