/*!
# Substructure Generators

Utility methods to generate common **substructures** inside an already
existing graph:

- **Paths**
- **Cycles**
- **Cliques**
- **Bicliques** (complete bipartite subgraphs)

These methods are useful when enriching a graph with specific structures for
testing algorithms or generating benchmark instances.

# Example

```
use umatch::prelude::*;

let mut g = AdjArrayUndir::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert!(g.has_edge(0, 1));
assert!(g.has_edge(4, 2));
```
*/

use itertools::Itertools;

use crate::{node::*, ops::*};

/// Trait for creating additional **substructures** inside an already
/// existing graph.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// Consecutive nodes are connected by edges and the last node is
    /// connected back to the first (unless that edge already exists).
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph)
    /// without self-loops. Edges that already exist are not duplicated.
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects every node of `left` with every node of `right`.
    ///
    /// The two sides must be disjoint.
    fn connect_biclique<A, B>(&mut self, left: A, right: B)
    where
        A: IntoIterator<Item = Node>,
        B: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // avoids needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur);
                prev = cur;
            }

            if prev != first {
                self.try_add_edge(prev, first);
            }
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (u, v) in nodes.into_iter().tuple_combinations() {
            if u != v {
                self.try_add_edge(u, v);
            }
        }
    }

    fn connect_biclique<A, B>(&mut self, left: A, right: B)
    where
        A: IntoIterator<Item = Node>,
        B: IntoIterator<Item = Node>,
    {
        let right = right.into_iter().collect_vec();
        for u in left {
            for &v in &right {
                self.add_edge(u, v);
            }
        }
    }
}

/// Trait for constructing new graphs that consist of a single common
/// structure: paths, cycles, cliques, and bicliques.
///
/// This is complementary to [`GeneratorSubstructures`], which modifies an
/// *existing* graph, whereas `NewStructuredGraph` creates a fresh one.
pub trait NewStructuredGraph: Sized {
    /// Creates a graph with `n` nodes arranged in a **path**
    /// `0 - 1 - ... - (n-1)`.
    fn path(n: NumNodes) -> Self;

    /// Creates a graph with `n >= 3` nodes arranged in a **cycle**.
    fn cycle(n: NumNodes) -> Self;

    /// Creates a **complete graph** on `n` nodes (no self-loops).
    fn clique(n: NumNodes) -> Self;

    /// Creates a **complete bipartite graph** with sides `0..a` and
    /// `a..a + b`.
    fn biclique(a: NumNodes, b: NumNodes) -> Self;
}

impl<G> NewStructuredGraph for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn path(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.connect_path(0..n);
        graph
    }

    fn cycle(n: NumNodes) -> Self {
        assert!(n >= 3);
        let mut graph = Self::new(n);
        graph.connect_cycle(0..n);
        graph
    }

    fn clique(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.connect_clique(0..n);
        graph
    }

    fn biclique(a: NumNodes, b: NumNodes) -> Self {
        let mut graph = Self::new(a + b);
        graph.connect_biclique(0..a, a..a + b);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{edge::Edge, prelude::*};
    use itertools::Itertools;

    #[test]
    fn connect_path() {
        let mut graph = AdjArrayUndir::new(6);
        graph.connect_path([]);
        assert_eq!(graph.number_of_edges(), 0);

        graph.connect_path([0, 3, 1, 4]);
        assert_eq!(
            graph.edges().sorted().collect_vec(),
            vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]
        );
    }

    #[test]
    fn connect_cycle() {
        let mut graph = AdjArrayUndir::new(4);
        graph.connect_cycle(0..4);
        assert_eq!(graph.number_of_edges(), 4);
        assert!(graph.has_edge(3, 0));
    }

    #[test]
    fn structured_graphs() {
        let path = AdjArrayUndir::path(5);
        assert_eq!(path.number_of_edges(), 4);

        let cycle = AdjArrayUndir::cycle(5);
        assert_eq!(cycle.number_of_edges(), 5);
        assert!(cycle.vertices().all(|u| cycle.degree_of(u) == 2));

        let clique = AdjArrayUndir::clique(5);
        assert_eq!(clique.number_of_edges(), 10);

        let biclique = AdjArrayUndir::biclique(2, 3);
        assert_eq!(biclique.number_of_edges(), 6);
        assert!(!biclique.has_edge(0, 1));
        assert!(biclique.has_edge(0, 2));
    }
}
