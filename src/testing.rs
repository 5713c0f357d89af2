//! Shared helpers for the in-module test suites: seeded random instances
//! and an exhaustive-search oracle to verify matching numbers against.

use rand::{Rng, seq::SliceRandom};

use crate::{edge::*, matching::Matching, node::*, ops::*};

/// Creates a sorted list of at most `m_ub` distinct random edges (no
/// self-loops) for nodes `0..n`.
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (0..m_ub)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
        .filter(|e| !e.is_loop())
        .collect();
    edges.sort_unstable();
    edges.dedup();

    edges
}

/// Builds a random valid matching of `graph` by trying a random subset of
/// its edges in random order.
pub(crate) fn random_matching<R, G>(rng: &mut R, graph: &G) -> Matching
where
    R: Rng,
    G: AdjacencyList,
{
    let mut edges: Vec<Edge> = graph.edges().collect();
    edges.shuffle(rng);

    let mut matching = Matching::new(graph.number_of_nodes());
    for Edge(u, v) in edges {
        if rng.random_bool(0.5) {
            matching.try_match_edge(u, v);
        }
    }

    matching
}

/// Computes the matching number by exhaustive search. Only feasible for
/// small graphs; panics beyond 20 nodes.
pub(crate) fn matching_number_exhaustive<G: AdjacencyList>(graph: &G) -> NumNodes {
    assert!(graph.number_of_nodes() <= 20);

    // Processes vertices in ascending order; every vertex is either left
    // exposed for good or matched to a not-yet-decided neighbor.
    fn recurse<G: AdjacencyList>(graph: &G, from: Node, covered: u64) -> NumNodes {
        let n = graph.number_of_nodes();

        let mut v = from;
        while v < n && covered & (1 << v) != 0 {
            v += 1;
        }
        if v == n {
            return 0;
        }

        let covered = covered | (1 << v);
        let mut best = recurse(graph, v + 1, covered);
        for w in graph.neighbors_of(v) {
            if w != v && covered & (1 << w) == 0 {
                best = best.max(1 + recurse(graph, v + 1, covered | (1 << w)));
            }
        }

        best
    }

    recurse(graph, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn exhaustive_oracle_on_known_graphs() {
        assert_eq!(matching_number_exhaustive(&AdjArrayUndir::path(7)), 3);
        assert_eq!(matching_number_exhaustive(&AdjArrayUndir::cycle(7)), 3);
        assert_eq!(matching_number_exhaustive(&AdjArrayUndir::clique(6)), 3);
        assert_eq!(matching_number_exhaustive(&AdjArrayUndir::biclique(2, 4)), 2);
        assert_eq!(matching_number_exhaustive(&AdjArrayUndir::new(5)), 0);
    }
}
