//! FHIR JSON to RDF conversion driven by the FHIR metadata vocabulary.
//!
//! A [`ResourceMapper`] walks one JSON resource and emits its triples into
//! a [`Graph`](fhirrdf_graph::Graph). [`map_collection`] and
//! [`fhir_json_to_rdf`] drive it over collections and paginated search
//! results. The [`resolver`] module classifies references and coding
//! systems, and [`graphutils`] reads values back out of a mapped graph.
//!
//! # Entry Point
//!
//! ```
//! use fhirrdf_graph::Graph;
//! use fhirrdf_loader::{MapOptions, ResourceMapper};
//! use fhirrdf_vocab::{Vocabulary, VocabularyOptions};
//!
//! let ttl = r#"
//! @prefix fhir: <http://hl7.org/fhir/> .
//! @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//! fhir:Resource a rdfs:Class .
//! fhir:Patient rdfs:subClassOf fhir:Resource .
//! "#;
//! let vocab = Vocabulary::from_turtle(ttl, VocabularyOptions::default())?;
//! let doc = serde_json::json!({"resourceType": "Patient", "id": "p1"});
//!
//! let mut graph = Graph::new();
//! let mapper = ResourceMapper::new(&vocab, "http://hl7.org/fhir/", MapOptions::default());
//! let mapped = mapper.map(&doc, &mut graph)?;
//! assert_eq!(mapped.uri, "http://hl7.org/fhir/Patient/p1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod collection;
pub mod error;
pub mod graphutils;
pub mod resolver;
pub mod resource;
pub mod source;

pub use collection::{continuation, fhir_json_to_rdf, load_into, map_collection};
pub use error::{MapError, QueryError, SourceError};
pub use resolver::{classify_code, classify_reference, uri_to_id_and_source};
pub use resource::{MapOptions, MappedResource, ResourceMapper};
pub use source::{DefaultSource, DocumentSource};
