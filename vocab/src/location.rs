//! Reading text from a file name or an `http(s)` URL.

use crate::error::LocationError;

/// True when `location` names a remote resource.
#[must_use]
pub fn is_url(location: &str) -> bool {
    location.contains("://")
}

/// Reads the whole text behind `location`.
///
/// # Errors
///
/// [`LocationError::Io`] for unreadable files, [`LocationError::Http`] for
/// failed or non-2xx HTTP requests.
pub fn read_text(location: &str) -> Result<String, LocationError> {
    if is_url(location) {
        reqwest::blocking::get(location)
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|source| LocationError::Http {
                location: location.to_owned(),
                source,
            })
    } else {
        std::fs::read_to_string(location).map_err(|source| LocationError::Io {
            location: location.to_owned(),
            source,
        })
    }
}
