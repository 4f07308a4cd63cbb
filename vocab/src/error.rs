//! Error types for vocabulary access, location reading and the image cache.

use fhirrdf_graph::ParseError;

/// Errors raised while loading or querying the metadata vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    /// The queried type is not declared in the vocabulary.
    #[error("Unrecognized FHIR type: {0}")]
    UnrecognizedType(String),
    /// The queried field is not declared and is not a synthetic `.value` field.
    #[error("Unrecognized FHIR predicate: {0}")]
    UnrecognizedPredicate(String),
    /// The vocabulary text is not valid RDF.
    #[error("invalid metadata vocabulary: {0}")]
    Parse(#[from] ParseError),
    /// The vocabulary could not be read.
    #[error(transparent)]
    Location(#[from] LocationError),
}

/// Errors raised while reading a file or URL.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// Local file read failure.
    #[error("cannot read {location}: {source}")]
    Io {
        /// File name as given.
        location: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// HTTP retrieval failure, including non-success status codes.
    #[error("cannot fetch {location}: {source}")]
    Http {
        /// URL as given.
        location: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },
}

/// Errors raised by [`crate::ImageCache`].
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Cache directory or image file I/O failure.
    #[error("cache I/O: {0}")]
    Io(#[from] std::io::Error),
    /// The cache index is not valid JSON.
    #[error("cache index: {0}")]
    Index(#[from] serde_json::Error),
}
