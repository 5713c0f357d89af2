/*!
# Undirected Graph Representations

An undirected graph is represented by parameterizing [`UndirectedGraph`] with
a [`Neighborhood`] implementation, which controls how adjacency information
is stored.

## Provided Representations

- [`AdjArrayUndir`] — adjacency lists stored in `Vec<Node>`.
- [`SparseAdjArrayUndir`] — adjacency lists stored in `SmallVec<[Node; N]>`,
  optimized for sparse graphs.

All representations share the same API and differ only in memory usage and
performance characteristics.
*/

use std::ops::Range;

use super::*;

/// Generic undirected graph representation parameterized by a
/// [`Neighborhood`] type.
///
/// - Adjacency is stored in a `Vec<Nbs>`, where each entry corresponds to
///   the neighborhood of a vertex.
/// - Edges are always undirected, i.e., adding `{u, v}` registers `u` as a
///   neighbor of `v` and vice versa (self-loops are registered once).
#[derive(Clone)]
pub struct UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Undirected graph using adjacency arrays (`Vec<Node>`).
///
/// - Flexible, simple representation.
/// - Best for sparse to moderately dense graphs.
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Undirected graph using sparse adjacency arrays (`SmallVec<[Node; N]>`).
///
/// - Optimized for sparse graphs where most nodes have few neighbors.
/// - Reduces cache misses by storing small neighborhoods inline.
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl<Nbs> GraphNodeOrder for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    type VertexIter<'a>
        = Range<Node>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VertexIter<'_> {
        self.vertices_range()
    }

    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs> GraphEdgeOrder for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs> AdjacencyList for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    type NeighborIter<'a>
        = <Nbs as Neighborhood>::NeighborhoodIter<'a>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs> IndexedAdjacencyList for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.nbs[u as usize].as_slice()[i as usize]
    }
}

impl<Nbs> AdjacencyTest for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs> GraphNew for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs> GraphEdgeEditing for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    fn add_edge(&mut self, u: Node, v: Node) {
        self.nbs[u as usize].add_neighbor(v);
        if u != v {
            self.nbs[v as usize].add_neighbor(u);
        }
        self.num_edges += 1;
    }

    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            true
        } else {
            self.add_edge(u, v);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_edges;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn graph_new<G: GraphFromScratch + GraphEdgeOrder>() {
        for n in 1..50 {
            let graph = G::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);

            assert_eq!(graph.vertices_range().len(), n as usize);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
        }
    }

    fn adjacency_list<G>()
    where
        G: GraphFromScratch + GraphEdgeOrder + IndexedAdjacencyList + AdjacencyTest,
    {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 20, 50] {
            for m_ub in [n * 2, n * 5] {
                let edges = random_edges(rng, n, m_ub as NumEdges);

                let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                for &Edge(u, v) in &edges {
                    adj_matrix[u as usize].set_bit(v);
                    adj_matrix[v as usize].set_bit(u);
                }

                let graph = G::from_edges(n, edges.iter());

                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                assert_eq!(
                    graph.edges().map(|e| e.normalized()).sorted().collect_vec(),
                    edges
                );

                for u in graph.vertices() {
                    assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                    for i in 0..graph.degree_of(u) {
                        assert!(adj_matrix[u as usize].get_bit(graph.ith_neighbor(u, i)));
                    }
                    for v in graph.vertices() {
                        assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize].get_bit(v));
                    }
                }
            }
        }
    }

    #[test]
    fn adj_array_undir() {
        graph_new::<AdjArrayUndir>();
        adjacency_list::<AdjArrayUndir>();
    }

    #[test]
    fn sparse_adj_array_undir() {
        graph_new::<SparseAdjArrayUndir>();
        adjacency_list::<SparseAdjArrayUndir>();
    }

    #[test]
    fn try_add_edge() {
        let mut graph = AdjArrayUndir::new(3);
        assert!(!graph.try_add_edge(0, 1));
        assert!(graph.try_add_edge(1, 0));
        assert_eq!(graph.number_of_edges(), 1);
    }
}
