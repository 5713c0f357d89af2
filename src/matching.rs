/*!
# Matching State

A [`Matching`] maps every node to its partner, or to `None` for exposed
nodes. It maintains the symmetry invariant `partner[u] = Some(v)` iff
`partner[v] = Some(u)` and keeps track of its cardinality.

The matching does not know the graph it belongs to; use
[`Matching::is_valid_for`] to check that every matched pair is an actual
edge.
*/

use crate::{edge::Edge, node::*, ops::*};

/// A matching over the node set `0..n`.
///
/// # Examples
/// ```
/// use umatch::prelude::*;
///
/// let mut matching = Matching::new(4);
/// matching.match_edge(0, 2);
/// assert_eq!(matching.cardinality(), 1);
/// assert_eq!(matching.partner_of(2), Some(0));
/// assert!(!matching.is_covered(1));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Matching {
    partner: Vec<Option<Node>>,
    num_edges: NumNodes,
}

impl Matching {
    /// Creates an empty matching over `n` nodes.
    pub fn new(n: NumNodes) -> Self {
        Self {
            partner: vec![None; n as usize],
            num_edges: 0,
        }
    }

    /// Returns the number of nodes the matching is defined over.
    pub fn number_of_nodes(&self) -> NumNodes {
        self.partner.len() as NumNodes
    }

    /// Returns the number of matching edges.
    pub fn cardinality(&self) -> NumNodes {
        self.num_edges
    }

    /// Returns the partner of `u`, or `None` if `u` is exposed.
    ///
    /// **Panics if `u >= n`.**
    #[inline]
    pub fn partner_of(&self, u: Node) -> Option<Node> {
        self.partner[u as usize]
    }

    /// Returns `true` if `u` is covered by a matching edge.
    ///
    /// **Panics if `u >= n`.**
    #[inline]
    pub fn is_covered(&self, u: Node) -> bool {
        self.partner[u as usize].is_some()
    }

    /// Adds the edge `{u, v}` to the matching.
    ///
    /// Both endpoints must be exposed and distinct; this is only checked via
    /// debug assertions. Use [`Matching::try_match_edge`] for untrusted
    /// input.
    ///
    /// **Panics if `u >= n || v >= n`.**
    pub fn match_edge(&mut self, u: Node, v: Node) {
        debug_assert_ne!(u, v);
        debug_assert!(!self.is_covered(u) && !self.is_covered(v));

        self.partner[u as usize] = Some(v);
        self.partner[v as usize] = Some(u);
        self.num_edges += 1;
    }

    /// Adds the edge `{u, v}` if both endpoints exist, are distinct, and are
    /// exposed. Returns `true` on success.
    pub fn try_match_edge(&mut self, u: Node, v: Node) -> bool {
        if u == v
            || u >= self.number_of_nodes()
            || v >= self.number_of_nodes()
            || self.is_covered(u)
            || self.is_covered(v)
        {
            return false;
        }

        self.match_edge(u, v);
        true
    }

    /// Removes the matching edge covering `u` and returns the former partner
    /// of `u`, or `None` if `u` was exposed.
    ///
    /// **Panics if `u >= n`.**
    pub fn unmatch(&mut self, u: Node) -> Option<Node> {
        let v = self.partner[u as usize].take()?;
        self.partner[v as usize] = None;
        self.num_edges -= 1;
        Some(v)
    }

    /// Returns an iterator over all matching edges, normalized (`u < v`) and
    /// in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.partner.iter().enumerate().filter_map(|(u, p)| {
            let v = (*p)?;
            ((u as Node) < v).then_some(Edge(u as Node, v))
        })
    }

    /// Returns `true` if the matching is a valid matching of `graph`, i.e.
    /// it is defined over the same node set and every matched pair is an
    /// edge of `graph`.
    ///
    /// Symmetry holds by construction and is only debug-asserted here.
    pub fn is_valid_for<G>(&self, graph: &G) -> bool
    where
        G: AdjacencyTest,
    {
        debug_assert!(
            self.edges()
                .all(|Edge(u, v)| self.partner_of(v) == Some(u)),
        );

        self.number_of_nodes() == graph.number_of_nodes()
            && self.edges().all(|Edge(u, v)| graph.has_edge(u, v))
    }
}

impl std::fmt::Debug for Matching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.edges()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::AdjArrayUndir;
    use itertools::Itertools;

    #[test]
    fn match_and_unmatch() {
        let mut matching = Matching::new(5);
        matching.match_edge(3, 1);
        matching.match_edge(0, 4);

        assert_eq!(matching.cardinality(), 2);
        assert_eq!(matching.partner_of(1), Some(3));
        assert_eq!(matching.partner_of(2), None);
        assert_eq!(matching.edges().collect_vec(), vec![Edge(0, 4), Edge(1, 3)]);

        assert_eq!(matching.unmatch(1), Some(3));
        assert_eq!(matching.unmatch(1), None);
        assert_eq!(matching.cardinality(), 1);
        assert!(!matching.is_covered(3));
    }

    #[test]
    fn try_match_edge() {
        let mut matching = Matching::new(3);
        assert!(!matching.try_match_edge(1, 1));
        assert!(!matching.try_match_edge(0, 3));
        assert!(matching.try_match_edge(0, 1));
        assert!(!matching.try_match_edge(1, 2));
        assert_eq!(matching.cardinality(), 1);
    }

    #[test]
    fn is_valid_for() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);

        let mut matching = Matching::new(4);
        matching.match_edge(0, 1);
        matching.match_edge(2, 3);
        assert!(matching.is_valid_for(&graph));

        let mut non_edge = Matching::new(4);
        non_edge.match_edge(0, 3);
        assert!(!non_edge.is_valid_for(&graph));

        assert!(!Matching::new(3).is_valid_for(&graph));
    }
}
