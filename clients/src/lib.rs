//! Shared plumbing for the `fhirtordf` and `fhirrdf-compare` binaries:
//! logging setup and input discovery.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod inputs;

use fhirrdf_graph::serializer::Format;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `quiet` silences everything; `verbose` honours `RUST_LOG` and defaults to
/// `debug`; otherwise only warnings are shown.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Serialization format for a file name: `.nt` is N-Triples, anything else
/// Turtle.
#[must_use]
pub fn format_for(path: &std::path::Path) -> Format {
    match path.extension().and_then(|e| e.to_str()) {
        Some("nt") => Format::NTriples,
        _ => Format::Turtle,
    }
}
