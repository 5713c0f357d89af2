/*!
# Neighborhood Abstractions

This module defines the abstraction of a **neighborhood** of a vertex.
Neighborhoods are the fundamental building blocks for adjacency
representations: by implementing the [`Neighborhood`] trait, one can define
how adjacency is stored without changing higher-level algorithms.

## Provided Representations

- [`ArrNeighborhood`] — adjacency stored as `Vec<Node>`.
- [`SparseNeighborhood`] — adjacency stored as `SmallVec<[Node; N]>`, good
  for sparse graphs.

Neighbor order is insertion order; it stays stable as long as the graph is
not edited, which the indexed scans of the search engine rely on.
*/

use std::{iter::Copied, slice::Iter};

use smallvec::{Array, SmallVec};

use super::*;

/// Core trait for representing the **neighborhood of a single vertex**.
pub trait Neighborhood: Clone {
    /// Constructs a new, empty neighborhood for a graph with `n` nodes.
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors.
    fn num_of_neighbors(&self) -> NumNodes;

    /// Iterator over neighbors.
    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors, in insertion order.
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns a read-only slice of the neighborhood, in insertion order.
    fn as_slice(&self) -> &[Node];

    /// Checks whether `v` is a neighbor.
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Adds a neighbor **without checking for duplicates**.
    fn add_neighbor(&mut self, u: Node);

    /// Tries to add a neighbor.
    ///
    /// Returns `true` if the neighbor was already present.
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }
}

/// Neighborhood backed by a `Vec<Node>`.
///
/// - Flexible, general-purpose representation.
/// - Higher memory overhead than inline representations for tiny degrees.
#[derive(Default, Clone)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn as_slice(&self) -> &[Node] {
        &self.0
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }
}

/// Neighborhood backed by a `SmallVec<[Node; N]>`.
///
/// - Optimized for sparse graphs where most neighborhoods are small.
/// - Reduces cache misses by storing small lists inline.
#[derive(Default, Clone)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn as_slice(&self) -> &[Node] {
        &self.0
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }
}
