/*!
# Graph Operations

Core graph traits.

This module defines the **fundamental traits** that all graph representations
in `umatch` implement:
- **Node and edge counts** ([`GraphNodeOrder`], [`GraphEdgeOrder`]).
- **Neighborhood access** ([`AdjacencyList`], [`IndexedAdjacencyList`]).
- **Edge testing** ([`AdjacencyTest`]).
- **Construction** ([`GraphNew`], [`GraphEdgeEditing`], [`GraphFromScratch`]).

These traits form the backbone for the matching algorithms to work across
multiple graph representations. Graphs are never mutated during a matching
run; the editing traits exist for construction only.

# Examples
```
use umatch::prelude::*;

// Build a simple undirected triangle graph
let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);

assert_eq!(g.number_of_nodes(), 3);
assert_eq!(g.number_of_edges(), 3);
assert!(g.has_edge(0, 1));
assert!(g.has_edge(1, 0)); // undirected
```
*/

use std::ops::Range;

use crate::{edge::*, node::*};

/// Provides accessors related to the number of nodes.
///
/// Implemented by all graph representations.
pub trait GraphNodeOrder {
    /// Iterator over all nodes in the graph.
    ///
    /// Returned by [`GraphNodeOrder::vertices`].
    type VertexIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns the number of nodes in the graph.
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of nodes as a `usize`.
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns `true` if the graph has no nodes (and therefore no edges).
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all nodes in the graph.
    fn vertices(&self) -> Self::VertexIter<'_>;

    /// Returns a range of all nodes.
    ///
    /// Unlike `vertices()`, this does not borrow `self` and can be used
    /// where additional mutable references are needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an empty bitset with one entry per node.
    ///
    /// Useful for marking or filtering nodes.
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }
}

/// Provides accessors related to the number of edges.
pub trait GraphEdgeOrder {
    /// Returns the number of edges in the graph.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns `true` if the graph has no edges.
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Trait providing access to neighborhoods and edges.
///
/// Many algorithms rely on this trait for traversals.
///
/// # Examples
/// ```
/// use umatch::prelude::*;
///
/// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
///
/// assert_eq!(g.degree_of(1), 2);
/// assert_eq!(g.neighbors_of(1).collect::<Vec<_>>(), vec![0, 2]);
/// assert_eq!(g.edges().count(), 2);
/// ```
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Iterator over all neighbors in the open neighborhood of a vertex.
    ///
    /// Returned by [`AdjacencyList::neighbors_of`].
    type NeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    ///
    /// The order is arbitrary but stable as long as the graph is not edited.
    ///
    /// **Panics if `u >= n`.**
    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns the number of neighbors (degree) of a vertex.
    ///
    /// **Panics if `u >= n`.**
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over all normalized edges of the graph, i.e.
    /// every edge `{u, v}` is reported exactly once as `Edge(u, v)` with
    /// `u <= v`.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .filter(move |&v| u <= v)
                .map(move |v| Edge(u, v))
        })
    }

    /// Returns the maximum degree among all vertices.
    ///
    /// Returns `0` if the graph has no vertices.
    fn max_degree(&self) -> NumNodes {
        self.vertices()
            .map(|u| self.degree_of(u))
            .max()
            .unwrap_or(0)
    }
}

/// Provides indexed access to neighbors.
///
/// The blossom search engine scans each neighborhood with a resumable cursor
/// and therefore requires deterministic, random-access neighbor order.
///
/// # Examples
/// ```
/// use umatch::prelude::*;
///
/// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
/// assert_eq!(g.ith_neighbor(1, 0), 0);
/// assert_eq!(g.ith_neighbor(1, 1), 2);
/// ```
pub trait IndexedAdjacencyList: AdjacencyList {
    /// Returns the `i`-th neighbor (0-indexed) of vertex `u`.
    ///
    /// **Panics if `u >= n` or `i >= degree_of(u)`.**
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node;
}

/// Trait for testing the existence of edges.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns `true` if the edge `{u, v}` exists in the graph.
    ///
    /// **Panics if `u >= n || v >= n`.**
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Trait for creating an empty graph with a given number of nodes.
pub trait GraphNew: Sized {
    /// Creates an empty graph with `n` nodes and no edges.
    fn new(n: NumNodes) -> Self;
}

/// Trait for adding edges to a graph.
///
/// Only used during construction; graphs are read-only for the matching
/// algorithms.
pub trait GraphEdgeEditing {
    /// Adds the edge `{u, v}` to the graph **without checking for duplicates**.
    ///
    /// **Panics if `u >= n || v >= n`.**
    fn add_edge(&mut self, u: Node, v: Node);

    /// Adds the edge `{u, v}` unless it is already present.
    ///
    /// Returns `true` if the edge was already present.
    ///
    /// **Panics if `u >= n || v >= n`.**
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;
}

/// Trait for creating graphs from a list of edges.
///
/// # Examples
/// ```
/// use umatch::prelude::*;
///
/// let g = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
/// assert_eq!(g.number_of_edges(), 2);
/// ```
pub trait GraphFromScratch: GraphNew + GraphEdgeEditing + GraphNodeOrder {
    /// Creates a graph with `n` nodes containing the given edges.
    fn from_edges<E, I>(n: NumNodes, edges: I) -> Self
    where
        E: Into<Edge>,
        I: IntoIterator<Item = E>,
    {
        let mut graph = Self::new(n);
        for edge in edges {
            let Edge(u, v) = edge.into();
            graph.add_edge(u, v);
        }
        graph
    }
}

impl<G: GraphNew + GraphEdgeEditing + GraphNodeOrder> GraphFromScratch for G {}
