//! Where FHIR JSON documents come from.

use serde_json::Value;

use crate::error::SourceError;

/// Supplies parsed JSON documents by location.
///
/// Pagination asks the same source for every `next` page, so tests can
/// substitute an in-memory source for files and HTTP.
pub trait DocumentSource {
    /// Fetches and parses the document at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the document cannot be read or parsed.
    fn fetch(&self, location: &str) -> Result<Value, SourceError>;
}

/// Reads local files, or performs a blocking HTTP GET for locations that
/// contain `://`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSource;

impl DocumentSource for DefaultSource {
    fn fetch(&self, location: &str) -> Result<Value, SourceError> {
        let text = fhirrdf_vocab::location::read_text(location)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn fetch(&self, location: &str) -> Result<Value, SourceError> {
        (**self).fetch(location)
    }
}
