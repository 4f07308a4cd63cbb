//! Test-only helpers for the fhirrdf workspace.
//!
//! Holds the shared [`fixtures`] plus a few constructors that panic on bad
//! fixture data, which is acceptable in tests and keeps call sites short.

#![allow(clippy::expect_used, clippy::panic)]
#![deny(missing_docs)]

pub mod fixtures;

use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use fhirrdf_graph::Graph;
use fhirrdf_vocab::{Vocabulary, VocabularyOptions};
use tracing_subscriber::fmt::MakeWriter;

/// The compact FHIR vocabulary, parsed once per test binary.
#[must_use]
pub fn vocabulary() -> &'static Vocabulary {
    static VOCAB: OnceLock<Vocabulary> = OnceLock::new();
    VOCAB.get_or_init(|| {
        Vocabulary::from_turtle(fixtures::MINI_FHIR_TTL, VocabularyOptions::default())
            .expect("fixture vocabulary parses")
    })
}

/// Parses a JSON fixture.
#[must_use]
pub fn json(text: &str) -> serde_json::Value {
    serde_json::from_str(text).expect("fixture JSON parses")
}

/// Parses a Turtle fixture.
#[must_use]
pub fn turtle(text: &str) -> Graph {
    fhirrdf_graph::parser::parse_turtle(text).expect("fixture Turtle parses")
}

/// Log sink shared between a test and the subscriber it installs.
#[derive(Debug, Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local subscriber and returns its result together
/// with every warning logged meanwhile, one per line.
pub fn with_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(buffer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().expect("log buffer").clone();
    (result, String::from_utf8_lossy(&bytes).into_owned())
}
