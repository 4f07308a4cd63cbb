//! In-memory RDF graph used by the FHIR JSON to RDF mapper.
//!
//! The `fhirrdf-graph` crate provides the small triple model shared by the
//! rest of the workspace: [`Term`] and [`Triple`] values, an ordered
//! [`Graph`] with the subject lookups the mapper and the comparer need, the
//! FHIR [`Namespaces`] table, and Turtle / N-Triples parsers and serializers.
//!
//! # Entry Point
//!
//! ```
//! use fhirrdf_graph::{iris, Graph, Term};
//!
//! let mut graph = Graph::new();
//! let patient = Term::iri("http://hl7.org/fhir/Patient/p1");
//! graph.insert(patient.clone(), iris::RDF_TYPE, Term::iri(iris::fhir("Patient")));
//! assert_eq!(graph.len(), 1);
//! ```
//!
//! # Serialization
//!
//! ```
//! let graph = fhirrdf_graph::parser::parse_turtle(
//!     "<http://example.org/a> <http://example.org/b> \"c\" .",
//! )
//! .unwrap_or_default();
//! let nt = fhirrdf_graph::serializer::ntriples::to_ntriples(&graph);
//! let ttl = fhirrdf_graph::serializer::turtle::to_turtle(&graph);
//! assert!(!nt.is_empty() && !ttl.is_empty());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod graph;
pub mod model;
pub mod namespaces;
pub mod parser;
pub mod serializer;

pub use graph::Graph;
pub use model::{Literal, Term, Triple};
pub use namespaces::{iris, Namespaces};
pub use parser::ParseError;
