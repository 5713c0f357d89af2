/*!
# Maximum-Cardinality Matching (Edmonds' Blossom Algorithm)

Computes a maximum matching in an undirected graph by repeatedly searching
for **augmenting paths**: alternating paths between two exposed vertices.
Flipping such a path enlarges the matching by one edge; once no augmenting
path remains, the matching is maximum (Berge).

The search builds an alternating tree from an exposed root. Odd-length
cycles (**blossoms**) discovered on the way are contracted into
**pseudonodes** so the search can continue on the shrunken graph. Instead of
maintaining an explicit pseudonode forest, [`Edmonds`] keeps a flat label per
vertex plus a per-label vertex list; contracting merges labels with a
weighted-union rule, which keeps the total relabeling cost near-linear per
run.

Three ingredients make the searches cheap in aggregate:
- scratch arrays are allocated once and only the entries touched by a search
  are reset afterwards,
- every neighborhood is scanned through a resumable cursor, so each edge is
  looked at a constant number of times per search,
- a search that fails to augment proves that no augmenting path will ever
  pass through its tree again, so all its vertices are excluded from future
  searches.

The total running time is `O(n * m * alpha(n))`.
*/

use num::Integer;

use super::greedy::GreedyMatching;
use crate::{matching::Matching, node::*, ops::*};

/// Pseudonode labels index into [`Edmonds::label_data`].
type Lbl = NumNodes;

/// Registry entry for one pseudonode label.
struct LabelData {
    /// The even vertex through which the tree entered the pseudonode. Its
    /// matched partner lies outside the pseudonode, one level closer to the
    /// search root. Stable across merges.
    root: Node,
    /// All vertices currently bearing this label. Emptied when the label is
    /// merged away.
    labeled_vertices: Vec<Node>,
}

/// Solver state for Edmonds' blossom algorithm.
///
/// One instance owns the matching and all scratch memory for a full run over
/// the graph; [`Edmonds::solve`] consumes it and returns the maximum
/// matching. For the common cases see the [`MaximumMatching`] trait.
///
/// # Examples
/// ```
/// use umatch::prelude::*;
///
/// let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
/// let matching = Edmonds::new(&graph, Matching::new(4)).solve();
/// assert_eq!(matching.cardinality(), 2);
/// ```
pub struct Edmonds<'a, G> {
    graph: &'a G,
    matching: Matching,

    /// Vertices of frustrated search trees; permanently skipped.
    deleted: NodeBitSet,

    // Per-search scratch. Only entries of labeled vertices are meaningful;
    // `clean` restores exactly those, so no O(n) reset happens per search.
    label: Vec<Option<Lbl>>,
    prev: Vec<Node>,
    rep: Vec<Node>,
    depth: Vec<NumNodes>,
    next_edge_idx: Vec<NumNodes>,

    even_vertices: Vec<Node>,
    label_data: Vec<LabelData>,

    // Reused buffers for `contract` and `augment`.
    labels_found: Vec<Lbl>,
    rematch_queue: Vec<(Node, Node)>,
}

impl<'a, G> Edmonds<'a, G>
where
    G: IndexedAdjacencyList,
{
    /// Creates a solver over `graph` starting from the given matching.
    ///
    /// The matching must be a valid matching of `graph`; this is the
    /// caller's responsibility (front-ends validate untrusted input with
    /// [`Matching::is_valid_for`]).
    ///
    /// # Panics
    /// Panics if `matching` is defined over a different node count.
    pub fn new(graph: &'a G, matching: Matching) -> Self {
        assert_eq!(graph.number_of_nodes(), matching.number_of_nodes());

        let n = graph.len();
        Self {
            graph,
            matching,
            deleted: graph.vertex_bitset_unset(),
            label: vec![None; n],
            prev: vec![0; n],
            rep: vec![0; n],
            depth: vec![0; n],
            next_edge_idx: vec![0; n],
            even_vertices: Vec::new(),
            label_data: Vec::new(),
            labels_found: Vec::new(),
            rematch_queue: Vec::new(),
        }
    }

    /// Runs one augmenting search per exposed, non-deleted vertex and
    /// returns the resulting maximum matching.
    pub fn solve(mut self) -> Matching {
        for root in self.graph.vertices_range() {
            if !self.matching.is_covered(root) && !self.deleted.get_bit(root) {
                self.try_augment(root);
            }
        }

        self.matching
    }

    /// Grows an alternating tree from the exposed vertex `root`. Either an
    /// augmenting path is found and applied (returning `true` with the
    /// matching enlarged by one edge), or the tree is frustrated and all its
    /// vertices are deleted.
    fn try_augment(&mut self, root: Node) -> bool {
        debug_assert!(self.label_data.is_empty());

        self.even_vertices.clear();
        self.even_vertices.push(root);
        self.new_label(root);
        self.depth[root as usize] = 0;

        let mut next_vertex_idx = 0;
        while next_vertex_idx < self.even_vertices.len() {
            let x = self.even_vertices[next_vertex_idx];
            if self.next_edge_idx[x as usize] == self.graph.degree_of(x) {
                next_vertex_idx += 1;
                continue;
            }

            let y = self.graph.ith_neighbor(x, self.next_edge_idx[x as usize]);
            self.next_edge_idx[x as usize] += 1;

            // same label: the edge lies inside one pseudonode
            if self.deleted.get_bit(y) || self.label[x as usize] == self.label[y as usize] {
                continue;
            }

            if self.label[y as usize].is_none() {
                if self.matching.is_covered(y) {
                    self.grow(x, y);
                } else {
                    self.augment(x, y);
                    self.clean(true);
                    return true;
                }
            } else if self.depth[y as usize].is_even() {
                self.contract(x, y);
            }
            // Odd pseudonodes are entered through their matching edge only;
            // a further even-to-odd edge closes an even cycle and yields no
            // new alternating structure.
        }

        self.clean(false);
        false
    }

    /// Assigns a fresh singleton label to `v`.
    fn new_label(&mut self, v: Node) {
        self.label[v as usize] = Some(self.label_data.len() as Lbl);
        self.label_data.push(LabelData {
            root: v,
            labeled_vertices: vec![v],
        });
    }

    /// Root vertex of the pseudonode containing the in-tree vertex `v`.
    fn pseudonode_root(&self, v: Node) -> Node {
        self.label_data[self.label[v as usize].unwrap() as usize].root
    }

    /// Extends the tree across the unmatched edge `(x, y)`: `y` becomes odd
    /// and its matched partner becomes even.
    ///
    /// Precondition: `x` even and in the tree, `y` outside but covered.
    fn grow(&mut self, x: Node, y: Node) {
        self.prev[y as usize] = x;
        self.rep[y as usize] = y;
        self.new_label(y);
        self.depth[y as usize] = self.depth[x as usize] + 1;

        let z = self.matching.partner_of(y).unwrap();
        self.even_vertices.push(z);
        self.new_label(z);
        self.depth[z as usize] = self.depth[y as usize] + 1;
    }

    /// The edge `(x, y)` between two distinct even pseudonodes closes an
    /// odd cycle. Walks both branches rootwards, the deeper one first, until
    /// they meet in the lowest common ancestor pseudonode, then merges every
    /// pseudonode on the cycle into one.
    ///
    /// Along the way each absorbed pseudonode root records the edge through
    /// which the cycle reaches it (`prev`/`rep`); `augment` reads these to
    /// splice a path through the blossom without ever materializing it.
    fn contract(&mut self, x: Node, y: Node) {
        debug_assert!(self.labels_found.is_empty());
        debug_assert_ne!(self.label[x as usize], self.label[y as usize]);

        // (entry vertex, predecessor across the connecting edge, pseudonode root)
        let mut deep = (x, y, self.pseudonode_root(x));
        let mut shallow = (y, x, self.pseudonode_root(y));

        while self.label[deep.0 as usize] != self.label[shallow.0 as usize] {
            if self.depth[deep.2 as usize] < self.depth[shallow.2 as usize] {
                std::mem::swap(&mut deep, &mut shallow);
            }
            let (x, pred, root) = deep;

            self.prev[root as usize] = pred;
            self.rep[root as usize] = x;

            // the matched partner of the pseudonode root is the odd vertex
            // one level up; it becomes even in the merged blossom
            let z = self.matching.partner_of(root).unwrap();
            self.labels_found.push(self.label[x as usize].unwrap());
            self.labels_found.push(self.label[z as usize].unwrap());

            self.depth[z as usize] = self.depth[x as usize];
            self.even_vertices.push(z);

            let up = self.prev[z as usize];
            deep = (up, z, self.pseudonode_root(up));
        }

        let lca_lbl = self.label[deep.0 as usize].unwrap();
        self.merge_labels(lca_lbl);
    }

    /// Merges the LCA label and all of `labels_found` into the one with the
    /// most vertices (weighted union). The merged pseudonode keeps the LCA's
    /// root, so `prev`/`rep` recorded at roots stay readable after merges.
    fn merge_labels(&mut self, lca_lbl: Lbl) {
        let mut new_lbl = lca_lbl;
        for lbl in self.labels_found.iter_mut() {
            if self.label_data[*lbl as usize].labeled_vertices.len()
                > self.label_data[new_lbl as usize].labeled_vertices.len()
            {
                std::mem::swap(&mut new_lbl, lbl);
            }
        }

        let root = self.label_data[lca_lbl as usize].root;
        self.label_data[new_lbl as usize].root = root;

        while let Some(lbl) = self.labels_found.pop() {
            let absorbed = std::mem::take(&mut self.label_data[lbl as usize].labeled_vertices);
            for &v in &absorbed {
                self.label[v as usize] = Some(new_lbl);
            }
            self.label_data[new_lbl as usize]
                .labeled_vertices
                .extend(absorbed);
        }
    }

    /// Flips the augmenting path that ends in the unmatched edge `(x, y)`,
    /// where `y` is exposed.
    ///
    /// The path is reconstructed lazily: matching `(a, b)` exposes the old
    /// partner `w` of an endpoint, and `w` is re-matched along the back-edge
    /// `(prev[w], rep[w])` stored when `w`'s tree position resp. blossom was
    /// created. The cascade unrolls all nested blossoms on the path without
    /// recursion.
    fn augment(&mut self, x: Node, y: Node) {
        debug_assert!(self.rematch_queue.is_empty());
        self.rematch_queue.push((x, y));

        while let Some((a, b)) = self.rematch_queue.pop() {
            for v in [a, b] {
                if let Some(w) = self.matching.unmatch(v) {
                    self.rematch_queue
                        .push((self.prev[w as usize], self.rep[w as usize]));
                }
            }
            self.matching.match_edge(a, b);
        }
    }

    /// Restores the scratch state for the next search, touching exactly the
    /// vertices labeled in this one.
    ///
    /// After an augmentation, labels and edge cursors are reset (`prev`,
    /// `rep` and `depth` are stale but every read of them is guarded by a
    /// label check within a single search). Without one, the tree is
    /// frustrated and its vertices are deleted for the rest of the run.
    fn clean(&mut self, augmented: bool) {
        for data in self.label_data.drain(..) {
            for v in data.labeled_vertices {
                if augmented {
                    self.label[v as usize] = None;
                    self.next_edge_idx[v as usize] = 0;
                } else {
                    self.deleted.set_bit(v);
                }
            }
        }
    }
}

/// A trait providing maximum-cardinality matching on undirected graphs.
pub trait MaximumMatching: IndexedAdjacencyList {
    /// Computes a maximum-cardinality matching.
    ///
    /// Warm-starts with [`GreedyMatching::greedy_matching`] and augments it
    /// to maximum with [`Edmonds`].
    ///
    /// # Examples
    /// ```
    /// use umatch::prelude::*;
    ///
    /// let graph = AdjArrayUndir::clique(5);
    /// assert_eq!(graph.maximum_matching().cardinality(), 2);
    /// ```
    fn maximum_matching(&self) -> Matching;

    /// Augments the given matching until it is maximum and returns it.
    ///
    /// The input must be a valid matching of `self` (see
    /// [`Matching::is_valid_for`]); the output cardinality is never smaller
    /// than the input's.
    fn maximum_matching_from(&self, matching: Matching) -> Matching;
}

impl<G> MaximumMatching for G
where
    G: IndexedAdjacencyList,
{
    fn maximum_matching(&self) -> Matching {
        self.maximum_matching_from(self.greedy_matching())
    }

    fn maximum_matching_from(&self, matching: Matching) -> Matching {
        Edmonds::new(self, matching).solve()
    }
}
