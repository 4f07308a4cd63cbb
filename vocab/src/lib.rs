//! Accessor for the FHIR metadata vocabulary (`fhir.ttl`).
//!
//! The mapper never hard-codes FHIR structure. Field names, inheritance,
//! ranges and primitive datatypes all come from a [`Vocabulary`], which is
//! loaded from a file or URL and optionally served from an on-disk
//! [`ImageCache`] of previously parsed graphs.
//!
//! # Entry Point
//!
//! ```
//! use fhirrdf_vocab::{Vocabulary, VocabularyOptions};
//!
//! let ttl = r#"
//! @prefix fhir: <http://hl7.org/fhir/> .
//! @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//! fhir:Resource a rdfs:Class .
//! fhir:Resource.id rdfs:domain fhir:Resource ; rdfs:range fhir:id .
//! fhir:Patient rdfs:subClassOf fhir:Resource .
//! "#;
//! let vocab = Vocabulary::from_turtle(ttl, VocabularyOptions::default())?;
//! let fields = vocab.fields_of("http://hl7.org/fhir/Patient")?;
//! assert_eq!(fields["id"], "http://hl7.org/fhir/Resource.id");
//! # Ok::<(), fhirrdf_vocab::VocabError>(())
//! ```
//!
//! # Loading with a cache
//!
//! ```no_run
//! use fhirrdf_vocab::{ImageCache, SchemaFormat, Vocabulary, VocabularyOptions};
//!
//! let mut cache = ImageCache::open("/tmp/fhirrdf-cache")?;
//! let vocab = Vocabulary::load(
//!     "http://build.fhir.org/fhir.ttl",
//!     SchemaFormat::Turtle,
//!     &mut cache,
//!     VocabularyOptions::default(),
//! )?;
//! println!("{} triples, cached: {}", vocab.graph().len(), vocab.from_cache());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod cache;
pub mod error;
pub mod location;
pub mod metavoc;
pub mod signature;

pub use cache::{ImageCache, NoCache, VocabularyCache};
pub use error::{CacheError, LocationError, VocabError};
pub use metavoc::{tag_of, SchemaFormat, Vocabulary, VocabularyOptions};
pub use signature::Signature;
