//! `fhirrdf-compare` — Compares two RDF graphs subject by subject, after
//! skolemizing their anonymous nodes.
//!
//! **Usage:**
//! ```
//! fhirrdf-compare <expected> <actual> [--ignore-owl-version] [--ignore-type-arcs] [--decimals]
//! ```
//!
//! Files ending in `.nt` are read as N-Triples, anything else as Turtle.
//! Exits non-zero if the graphs differ.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use fhirrdf_clients::{format_for, init_logging};
use fhirrdf_compare::{decimal_filter, rdf_compare, CompareFilter, CompareOptions};
use fhirrdf_graph::parser::{parse_ntriples, parse_turtle};
use fhirrdf_graph::serializer::Format;
use fhirrdf_graph::Graph;

/// Compare two RDF graphs.
#[derive(Parser)]
#[command(
    name = "fhirrdf-compare",
    version,
    about = "Compare two RDF graphs, ignoring blank node labels"
)]
struct Args {
    /// Expected graph (Turtle or N-Triples).
    expected: PathBuf,

    /// Actual graph (Turtle or N-Triples).
    actual: PathBuf,

    /// Ignore owl:versionIRI differences.
    #[arg(long)]
    ignore_owl_version: bool,

    /// Ignore rdf:type arcs on anonymous nodes.
    #[arg(long)]
    ignore_type_arcs: bool,

    /// Treat numerically equal xsd:decimal values as equal.
    #[arg(long)]
    decimals: bool,

    /// Print each side's unmatched statements instead of the per-subject report.
    #[arg(long)]
    split: bool,

    /// Debug logging (honours RUST_LOG).
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// No logging at all.
    #[arg(short, long)]
    quiet: bool,
}

fn load(path: &Path) -> Result<Graph> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let graph = match format_for(path) {
        Format::NTriples => parse_ntriples(&text),
        Format::Turtle => parse_turtle(&text),
    }
    .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(graph)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let expected = load(&args.expected)?;
    let actual = load(&args.actual)?;
    let options = CompareOptions {
        ignore_owl_version: args.ignore_owl_version,
        ignore_type_arcs: args.ignore_type_arcs,
    };
    let filter: Option<CompareFilter<'_>> = if args.decimals {
        Some(&decimal_filter)
    } else {
        None
    };

    let report = rdf_compare(&expected, &actual, options, filter);
    if report.is_empty() {
        println!("Graphs match.");
        return Ok(());
    }

    if args.split {
        let (only_expected, only_actual) = report.split();
        println!("Only in {}:\n{only_expected}\n", args.expected.display());
        println!("Only in {}:\n{only_actual}", args.actual.display());
    } else {
        println!("{report}");
    }
    eprintln!("{} subject(s) differ.", report.subject_count());
    process::exit(1);
}
