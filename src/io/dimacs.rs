/*!
# DIMACS Edge Format

Line-oriented, whitespace-separated:

- `p <problem> <n> <m>` declares a graph with `n` nodes and `m` edges. The
  problem identifier is not interpreted. Exactly one problem line must
  appear, before any edge line.
- `e <v> <w>` declares an edge between the 1-indexed nodes `v` and `w`.
- Every other line is ignored.

Matchings use the same format: a `p edge <n> <k>` header followed by one
`e`-line per matching edge. All nodes are 0-indexed in memory; the
translation happens here.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use super::*;
use crate::{edge::*, matching::Matching, node::*, ops::*};

/// Parses the tail of an `e`-line: two 1-indexed endpoints in `1..=n`.
/// Returns the 0-indexed edge.
fn parse_edge_line<'a, I>(parts: &mut I, n: NumNodes) -> Result<Edge>
where
    I: Iterator<Item = &'a str>,
{
    let u: Node = parse_next_value!(parts, "Edge>First endpoint");
    let v: Node = parse_next_value!(parts, "Edge>Second endpoint");

    raise_error_unless!(
        (1..=n).contains(&u) && (1..=n).contains(&v),
        ErrorKind::InvalidData,
        format!("Edge ({u}, {v}) out of range for {n} nodes")
    );

    Ok(Edge(u - 1, v - 1))
}

/// Parses the tail of a `p`-line: a problem identifier (ignored) followed by
/// two numbers.
fn parse_problem_line<'a, I>(parts: &mut I) -> Result<(NumNodes, NumEdges)>
where
    I: Iterator<Item = &'a str>,
{
    raise_error_unless!(
        parts.next().is_some(),
        ErrorKind::InvalidData,
        "Problem line without problem identifier"
    );

    let n = parse_next_value!(parts, "Header>Number of nodes");
    let m = parse_next_value!(parts, "Header>Number of edges");

    Ok((n, m))
}

/// A [`GraphReader`] for the DIMACS edge format.
#[derive(Debug, Clone, Default)]
pub struct DimacsReader;

impl DimacsReader {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphReader<G> for DimacsReader
where
    G: GraphFromScratch,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut graph: Option<G> = None;

        for line in reader.lines() {
            let line = line?;
            let mut parts = line.split(' ').filter(|t| !t.is_empty());

            match parts.next() {
                Some("p") => {
                    raise_error_unless!(
                        graph.is_none(),
                        ErrorKind::InvalidData,
                        "Second problem line found"
                    );
                    let (n, _m) = parse_problem_line(&mut parts)?;
                    graph = Some(G::new(n));
                }
                Some("e") => {
                    let graph = graph.as_mut().ok_or_else(|| {
                        io_error!(ErrorKind::InvalidData, "Edge line before problem line")
                    })?;
                    let Edge(u, v) = parse_edge_line(&mut parts, graph.number_of_nodes())?;
                    graph.add_edge(u, v);
                }
                // every other line is ignored
                _ => {}
            }
        }

        graph.ok_or_else(|| io_error!(ErrorKind::NotFound, "Problem line not found"))
    }
}

/// Trait for creating graphs from DIMACS input with default reader settings.
pub trait DimacsRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_dimacs<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_dimacs_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_dimacs(BufReader::new(File::open(path)?))
    }
}

impl<G> DimacsRead for G
where
    G: GraphFromScratch,
{
    fn try_read_dimacs<R: BufRead>(reader: R) -> Result<Self> {
        DimacsReader::new().try_read_graph(reader)
    }
}

/// A [`GraphWriter`] for the DIMACS edge format.
#[derive(Debug, Clone, Default)]
pub struct DimacsWriter;

impl DimacsWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphWriter<G> for DimacsWriter
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "p edge {} {}",
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for Edge(u, v) in graph.edges() {
            writeln!(writer, "e {} {}", u + 1, v + 1)?;
        }

        Ok(())
    }
}

/// Trait for writing a graph in the DIMACS edge format with default writer
/// settings.
pub trait DimacsWrite {
    /// Tries to write the graph to a writer
    fn try_write_dimacs<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_dimacs_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_dimacs(BufWriter::new(File::create(path)?))
    }
}

impl<G> DimacsWrite for G
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_dimacs<W: Write>(&self, writer: W) -> Result<()> {
        DimacsWriter::new().try_write_graph(self, writer)
    }
}

impl Matching {
    /// Reads a matching over `n` nodes from DIMACS input.
    ///
    /// # Errors
    /// Next to format errors, this rejects inputs whose header declares a
    /// node count other than `n` and edge lists in which a node occurs
    /// twice. Whether the edges actually exist in a graph is not known here;
    /// check with [`Matching::is_valid_for`].
    pub fn try_read_dimacs<R: BufRead>(reader: R, n: NumNodes) -> Result<Matching> {
        let mut matching: Option<Matching> = None;

        for line in reader.lines() {
            let line = line?;
            let mut parts = line.split(' ').filter(|t| !t.is_empty());

            match parts.next() {
                Some("p") => {
                    raise_error_unless!(
                        matching.is_none(),
                        ErrorKind::InvalidData,
                        "Second problem line found"
                    );
                    let (nodes, _k) = parse_problem_line(&mut parts)?;
                    raise_error_unless!(
                        nodes == n,
                        ErrorKind::InvalidData,
                        format!("Matching is defined over {nodes} nodes, expected {n}")
                    );
                    matching = Some(Matching::new(n));
                }
                Some("e") => {
                    let matching = matching.as_mut().ok_or_else(|| {
                        io_error!(ErrorKind::InvalidData, "Edge line before problem line")
                    })?;
                    let Edge(u, v) = parse_edge_line(&mut parts, n)?;
                    raise_error_unless!(
                        matching.try_match_edge(u, v),
                        ErrorKind::InvalidData,
                        format!("Edge lines do not form a matching: ({}, {})", u + 1, v + 1)
                    );
                }
                _ => {}
            }
        }

        matching.ok_or_else(|| io_error!(ErrorKind::NotFound, "Problem line not found"))
    }

    /// Reads a matching over `n` nodes from a DIMACS file.
    pub fn try_read_dimacs_file<P: AsRef<Path>>(path: P, n: NumNodes) -> Result<Matching> {
        Self::try_read_dimacs(BufReader::new(File::open(path)?), n)
    }

    /// Writes the matching in the DIMACS edge format: a `p edge <n> <k>`
    /// header followed by one 1-indexed `e`-line per matching edge, smaller
    /// endpoint first, in ascending order.
    pub fn try_write_dimacs<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "p edge {} {}",
            self.number_of_nodes(),
            self.cardinality()
        )?;

        for Edge(u, v) in self.edges() {
            writeln!(writer, "e {} {}", u + 1, v + 1)?;
        }

        Ok(())
    }

    /// Writes the matching to a DIMACS file.
    pub fn try_write_dimacs_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_dimacs(BufWriter::new(File::create(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use itertools::Itertools;

    const TRIANGLE_WITH_NOISE: &str = "c a comment line\n\
        n some other line that is ignored\n\
        p edge 3 3\n\
        e 1 2\n\
        e 2 3\n\
        e  3   1\n\
        x trailing noise\n";

    #[test]
    fn read_graph() {
        let graph = AdjArrayUndir::try_read_dimacs(TRIANGLE_WITH_NOISE.as_bytes()).unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(
            graph.edges().sorted().collect_vec(),
            vec![Edge(0, 1), Edge(0, 2), Edge(1, 2)]
        );
    }

    #[test]
    fn read_graph_rejects_malformed_input() {
        for input in [
            "",                           // no problem line
            "e 1 2\np edge 3 3\n",        // edge before header
            "p edge 3 3\np edge 3 3\n",   // duplicate header
            "p edge\n",                   // truncated header
            "p edge 3 3\ne 1 4\n",        // endpoint out of range
            "p edge 3 3\ne 0 2\n",        // endpoints are 1-indexed
            "p edge 3 3\ne 1 x\n",        // unparsable endpoint
            "p edge x 3\n",               // unparsable node count
        ] {
            assert!(
                AdjArrayUndir::try_read_dimacs(input.as_bytes()).is_err(),
                "accepted: {input:?}"
            );
        }
    }

    #[test]
    fn write_graph() {
        let graph = AdjArrayUndir::path(3);

        let mut buffer = Vec::new();
        graph.try_write_dimacs(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "p edge 3 2\ne 1 2\ne 2 3\n"
        );
    }

    #[test]
    fn graph_roundtrip() {
        let graph = AdjArrayUndir::biclique(3, 4);

        let mut buffer = Vec::new();
        graph.try_write_dimacs(&mut buffer).unwrap();
        let read = AdjArrayUndir::try_read_dimacs(buffer.as_slice()).unwrap();

        assert_eq!(read.number_of_nodes(), graph.number_of_nodes());
        assert_eq!(
            read.edges().sorted().collect_vec(),
            graph.edges().sorted().collect_vec()
        );
    }

    #[test]
    fn matching_roundtrip() {
        let mut matching = Matching::new(6);
        matching.match_edge(4, 1);
        matching.match_edge(2, 5);

        let mut buffer = Vec::new();
        matching.try_write_dimacs(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer.clone()).unwrap(),
            "p edge 6 2\ne 2 5\ne 3 6\n"
        );

        let read = Matching::try_read_dimacs(buffer.as_slice(), 6).unwrap();
        assert_eq!(read, matching);
    }

    #[test]
    fn read_matching_rejects_malformed_input() {
        for input in [
            "p edge 4 2\ne 1 2\ne 2 3\n", // node 2 matched twice
            "p edge 4 1\ne 2 2\n",        // self-loop
            "p edge 5 0\n",               // node count mismatch
            "e 1 2\n",                    // no header
        ] {
            assert!(
                Matching::try_read_dimacs(input.as_bytes(), 4).is_err(),
                "accepted: {input:?}"
            );
        }
    }
}
