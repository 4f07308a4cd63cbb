//! Error types for document mapping, document retrieval and graph queries.

use fhirrdf_vocab::{LocationError, VocabError};

/// Errors raised while mapping a FHIR document to RDF.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The document has no `resourceType` (or is not a JSON object).
    #[error("{0} is not a FHIR resource")]
    NotAResource(String),
    /// A vocabulary query failed for a type or field the document uses.
    #[error(transparent)]
    Vocabulary(#[from] VocabError),
    /// An extension side-channel was attached to something other than an
    /// anonymous value node.
    #[error("extension attached to {0}, which is not an anonymous value node")]
    ExtensionTarget(String),
    /// A page of a document stream could not be retrieved.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Errors raised by a [`crate::DocumentSource`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The location could not be read.
    #[error(transparent)]
    Location(#[from] LocationError),
    /// The text is not JSON.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    /// No document is known under this location.
    #[error("no document at {0}")]
    NotFound(String),
}

/// Errors raised by the [`crate::graphutils`] lookups.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A lookup expected one value and found several.
    #[error("non-unique values for {subject} {predicate}: [{}]", values.join(", "))]
    NotUnique {
        /// Subject of the lookup, N-Triples rendering.
        subject: String,
        /// Predicate IRI.
        predicate: String,
        /// The competing values, N-Triples rendering.
        values: Vec<String>,
    },
}
