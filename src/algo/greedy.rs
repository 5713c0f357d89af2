/*!
# Greedy Maximal Matching

A **maximal** matching cannot be extended by another edge but may be smaller
than a **maximum** matching. Computing one is a linear scan and a common warm
start for [`MaximumMatching`](super::MaximumMatching): every edge matched
here is one augmenting search the blossom engine does not have to run.
*/

use crate::{matching::Matching, ops::*};

/// A trait providing a greedy maximal matching on undirected graphs.
pub trait GreedyMatching: AdjacencyList {
    /// Computes a **maximal matching** by scanning vertices in order and
    /// matching each exposed vertex to its first exposed neighbor.
    ///
    /// Runs in `O(n + m)`. The result is maximal but not necessarily
    /// maximum; it covers at least half as many edges as a maximum matching.
    ///
    /// # Examples
    /// ```
    /// use umatch::prelude::*;
    ///
    /// // 0 - 1 - 2 - 3
    /// let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    /// let matching = graph.greedy_matching();
    /// assert_eq!(matching.cardinality(), 2);
    /// ```
    fn greedy_matching(&self) -> Matching;
}

impl<G> GreedyMatching for G
where
    G: AdjacencyList,
{
    fn greedy_matching(&self) -> Matching {
        let mut matching = Matching::new(self.number_of_nodes());

        for u in self.vertices() {
            if matching.is_covered(u) {
                continue;
            }

            if let Some(v) = self
                .neighbors_of(u)
                .find(|&v| v != u && !matching.is_covered(v))
            {
                matching.match_edge(u, v);
            }
        }

        matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{edge::Edge, prelude::*, testing::random_edges};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn path() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let matching = graph.greedy_matching();
        assert_eq!(matching.cardinality(), 2);
        assert!(matching.is_valid_for(&graph));
    }

    #[test]
    fn triangle() {
        let graph = AdjArrayUndir::clique(3);
        let matching = graph.greedy_matching();
        assert_eq!(matching.cardinality(), 1);
        assert!(matching.is_valid_for(&graph));
    }

    #[test]
    fn is_maximal_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [10, 20, 50] {
            for _ in 0..10 {
                let graph = AdjArrayUndir::from_edges(n, random_edges(rng, n, 4 * n));
                let matching = graph.greedy_matching();

                assert!(matching.is_valid_for(&graph));
                // maximal: no edge with both endpoints exposed remains
                assert!(
                    graph
                        .edges()
                        .all(|Edge(u, v)| matching.is_covered(u) || matching.is_covered(v))
                );
            }
        }
    }
}
