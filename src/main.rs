//! Command-line front-end: reads a graph (and optionally an initial
//! matching) in the DIMACS edge format, computes a maximum-cardinality
//! matching, and prints it in the same format.

use std::{io::ErrorKind, path::PathBuf, process::ExitCode};

use clap::Parser;

use umatch::{
    io::DimacsRead,
    matching::Matching,
    ops::GraphNodeOrder,
    prelude::{AdjArrayUndir, MaximumMatching},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Graph in DIMACS edge format
    #[arg(long)]
    graph: PathBuf,

    /// Initial matching of the graph, in the same format
    #[arg(long)]
    hint: Option<PathBuf>,
}

fn run(args: &Args) -> std::io::Result<()> {
    let graph = AdjArrayUndir::try_read_dimacs_file(&args.graph)?;

    let matching = match &args.hint {
        Some(path) => {
            let hint = Matching::try_read_dimacs_file(path, graph.number_of_nodes())?;
            if !hint.is_valid_for(&graph) {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    "Hint contains an edge that is not in the graph",
                ));
            }
            graph.maximum_matching_from(hint)
        }
        None => graph.maximum_matching(),
    };

    matching.try_write_dimacs(std::io::stdout().lock())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = run(&args) {
        eprintln!("umatch: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
