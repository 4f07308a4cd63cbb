//! Change signatures for vocabulary sources.
//!
//! A cached vocabulary image is reused only while the signature of its
//! source is unchanged.

use std::path::Path;
use std::time::UNIX_EPOCH;

use serde::{Deserialize, Serialize};

use crate::location::is_url;

/// Identity of a source's current content, as cheaply observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signature {
    /// Local file: file type, size and modification time.
    File {
        /// `file`, `dir`, `symlink` or `other`.
        file_type: String,
        /// Size in bytes.
        size: u64,
        /// Whole seconds since the Unix epoch.
        modified_secs: u64,
        /// Sub-second part of the modification time.
        modified_nanos: u32,
    },
    /// Remote resource: the caching headers of a `HEAD` response.
    Url {
        /// `Last-Modified`
        last_modified: Option<String>,
        /// `Content-Length`
        content_length: Option<String>,
        /// `ETag`
        etag: Option<String>,
    },
}

/// Signature of a file name or URL; `None` when it cannot be determined.
#[must_use]
pub fn signature(location: &str) -> Option<Signature> {
    if is_url(location) {
        url_signature(location)
    } else {
        file_signature(Path::new(location))
    }
}

/// Signature of a local file; `None` if it cannot be stat'ed.
#[must_use]
pub fn file_signature(path: &Path) -> Option<Signature> {
    let meta = std::fs::metadata(path).ok()?;
    let file_type = if meta.is_file() {
        "file"
    } else if meta.is_dir() {
        "dir"
    } else if meta.file_type().is_symlink() {
        "symlink"
    } else {
        "other"
    };
    let modified = meta.modified().ok()?.duration_since(UNIX_EPOCH).ok()?;
    Some(Signature::File {
        file_type: file_type.to_owned(),
        size: meta.len(),
        modified_secs: modified.as_secs(),
        modified_nanos: modified.subsec_nanos(),
    })
}

/// Signature of a URL from a `HEAD` request; `None` if the request fails.
#[must_use]
pub fn url_signature(url: &str) -> Option<Signature> {
    let response = reqwest::blocking::Client::new()
        .head(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|e| tracing::debug!(url, error = %e, "HEAD request failed"))
        .ok()?;
    let header = |name: reqwest::header::HeaderName| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    Some(Signature::Url {
        last_modified: header(reqwest::header::LAST_MODIFIED),
        content_length: header(reqwest::header::CONTENT_LENGTH),
        etag: header(reqwest::header::ETAG),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_signature_tracks_size() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let before = file_signature(file.path()).expect("signature");
        file.write_all(b"@prefix fhir: <http://hl7.org/fhir/> .\n")
            .expect("write");
        file.flush().expect("flush");
        let after = file_signature(file.path()).expect("signature");
        assert_ne!(before, after);
        match after {
            Signature::File { file_type, size, .. } => {
                assert_eq!(file_type, "file");
                assert_eq!(size, 39);
            }
            other => panic!("unexpected signature {other:?}"),
        }
    }

    #[test]
    fn missing_file_has_no_signature() {
        assert_eq!(signature("/nonexistent/fhir.ttl"), None);
    }

    #[test]
    fn signatures_serialize_as_tagged_json() {
        let sig = Signature::Url {
            last_modified: None,
            content_length: Some("42".into()),
            etag: None,
        };
        let text = serde_json::to_string(&sig).expect("serialize");
        assert!(text.contains("\"kind\":\"url\""));
        let back: Signature = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, sig);
    }
}
