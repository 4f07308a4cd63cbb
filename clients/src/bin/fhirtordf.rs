//! `fhirtordf` — Converts FHIR JSON resources, collections and paginated
//! search results into RDF.
//!
//! **Usage:**
//! ```
//! fhirtordf -i <file-or-url>... [-o <outfile>] [--format turtle|nt]
//! fhirtordf -d <indir> -t <outdir>
//! ```
//!
//! Without `--outdir`, every input is gathered into one graph written to
//! `--outfile` or stdout. With `--outdir`, each input gets its own output
//! file, mirroring its path under `--indir`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fhirrdf_clients::init_logging;
use fhirrdf_clients::inputs::{discover, Input, InputFilter};
use fhirrdf_graph::serializer::Format;
use fhirrdf_graph::Graph;
use fhirrdf_loader::{load_into, DefaultSource, MapOptions};
use fhirrdf_vocab::{ImageCache, NoCache, SchemaFormat, Vocabulary, VocabularyOptions};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Turtle,
    Nt,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Turtle => Format::Turtle,
            OutputFormat::Nt => Format::NTriples,
        }
    }
}

/// Convert FHIR JSON into RDF.
#[derive(Parser)]
#[command(name = "fhirtordf", version, about = "Convert FHIR JSON into RDF")]
struct Args {
    /// Input file(s) or URL(s).
    #[arg(short = 'i', long, num_args = 1.., required_unless_present = "indir")]
    infile: Vec<String>,

    /// Input directory, searched recursively for `.json` files.
    #[arg(short = 'd', long)]
    indir: Option<PathBuf>,

    /// Single output file collecting every input (default: stdout).
    #[arg(short = 'o', long, conflicts_with = "outdir")]
    outfile: Option<PathBuf>,

    /// Output directory, one output file per input.
    #[arg(short = 't', long)]
    outdir: Option<PathBuf>,

    /// Base URI for RDF identifiers.
    #[arg(short = 'u', long, default_value = "http://hl7.org/fhir/")]
    uribase: String,

    /// FHIR metadata vocabulary (file or URL).
    #[arg(long, default_value = "fhir.ttl")]
    metadatavoc: String,

    /// Omit the owl:Ontology header.
    #[arg(long)]
    noontology: bool,

    /// Replace long narrative text with a placeholder.
    #[arg(long)]
    nonarrative: bool,

    /// Don't follow `next` links of paginated results.
    #[arg(long)]
    nocontinuation: bool,

    /// Do not use the metadata vocabulary cache.
    #[arg(long)]
    nocache: bool,

    /// Metadata vocabulary cache directory (default: ~/.cache/fhirrdf).
    #[arg(long)]
    fmvcache: Option<PathBuf>,

    /// Largest input file converted from --indir, in KB. 0 disables the check.
    #[arg(long, default_value_t = 800)]
    maxsize: u64,

    /// Skip directories whose path contains any of these fragments.
    #[arg(long, num_args = 1..)]
    skipdirs: Vec<String>,

    /// Skip files whose name contains any of these fragments.
    #[arg(long, num_args = 1..)]
    skipfns: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Turtle)]
    format: OutputFormat,

    /// Debug logging (honours RUST_LOG).
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// No logging at all.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn map_options(&self) -> MapOptions {
        MapOptions {
            add_ontology_header: !self.noontology,
            replace_narrative_text: self.nonarrative,
            do_continuations: !self.nocontinuation,
        }
    }

    fn inputs(&self) -> Result<Vec<Input>> {
        let mut inputs: Vec<Input> = self.infile.iter().map(|f| Input::explicit(f)).collect();
        if let Some(indir) = &self.indir {
            let filter = InputFilter {
                skipdirs: self.skipdirs.clone(),
                skipfns: self.skipfns.clone(),
                maxsize_kb: self.maxsize,
            };
            inputs.extend(discover(indir, &filter)?);
        }
        Ok(inputs)
    }
}

fn load_vocabulary(args: &Args) -> Result<Vocabulary> {
    let location = &args.metadatavoc;
    let format = SchemaFormat::from_location(location);
    let options = VocabularyOptions::default();
    let vocab = if args.nocache {
        Vocabulary::load(location, format, &mut NoCache, options)
    } else {
        let dir = args
            .fmvcache
            .clone()
            .or_else(ImageCache::default_dir)
            .context("No cache directory known; pass --fmvcache or --nocache")?;
        let mut cache = ImageCache::open(&dir)
            .with_context(|| format!("Failed to open vocabulary cache {}", dir.display()))?;
        Vocabulary::load(location, format, &mut cache, options)
    }
    .with_context(|| format!("Failed to load metadata vocabulary {location}"))?;
    info!(
        location = %location,
        from_cache = vocab.from_cache(),
        "metadata vocabulary ready"
    );
    Ok(vocab)
}

fn write_graph(graph: &Graph, format: Format, outfile: Option<&PathBuf>) -> Result<()> {
    let text = format.serialize(graph);
    match outfile {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => std::io::stdout()
            .write_all(text.as_bytes())
            .context("Failed to write to stdout"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let inputs = args.inputs()?;
    if inputs.is_empty() {
        eprintln!("No input files to convert.");
        process::exit(1);
    }
    let vocab = load_vocabulary(&args)?;
    let options = args.map_options();
    let format = Format::from(args.format);

    let mut combined = Graph::new();
    let mut converted = 0usize;
    for input in &inputs {
        let mut single = Graph::new();
        let target = if args.outdir.is_some() {
            &mut single
        } else {
            &mut combined
        };
        match load_into(&vocab, &DefaultSource, &input.location, &args.uribase, target, options) {
            Ok(true) => converted += 1,
            Ok(false) => {
                eprintln!("{} : Not a FHIR collection or resource", input.location);
                continue;
            }
            Err(e) => {
                eprintln!("{} : {e}", input.location);
                continue;
            }
        }
        if let Some(outdir) = &args.outdir {
            let path = input.output_path(outdir, format.extension());
            write_graph(&single, format, Some(&path))?;
            debug!(input = %input.location, output = %path.display(), "written");
        }
    }

    if args.outdir.is_none() {
        write_graph(&combined, format, args.outfile.as_ref())?;
    }
    if args.outfile.is_some() || args.outdir.is_some() {
        eprintln!("{converted} of {} input(s) converted.", inputs.len());
    }
    if converted == 0 {
        process::exit(1);
    }
    Ok(())
}
