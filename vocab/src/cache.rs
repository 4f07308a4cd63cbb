//! Vocabulary image cache.
//!
//! Parsing a full `fhir.ttl` is slow, so the parsed graph can be stored as
//! an N-Triples image keyed by source location and reused while the
//! source's [`Signature`] is unchanged.
//!
//! On-disk layout of an [`ImageCache`] directory:
//!
//! ```text
//! <dir>/index.json      location -> { signature, file }
//! <dir>/<uuid>.nt       one image per location
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fhirrdf_graph::parser::parse_ntriples;
use fhirrdf_graph::serializer::ntriples::to_ntriples;
use fhirrdf_graph::Graph;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CacheError;
use crate::signature::Signature;

const INDEX_FILE: &str = "index.json";

/// Storage for parsed vocabulary graphs.
pub trait VocabularyCache {
    /// Returns the cached graph for `key` if its stored signature equals
    /// `signature`. A stale entry is evicted.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the cache itself cannot be updated.
    fn get(&mut self, key: &str, signature: &Signature) -> Result<Option<Graph>, CacheError>;

    /// Stores `graph` under `key`, replacing any previous image.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the image or the index cannot be written.
    fn put(&mut self, key: &str, signature: &Signature, graph: &Graph) -> Result<(), CacheError>;
}

/// A cache that never holds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl VocabularyCache for NoCache {
    fn get(&mut self, _key: &str, _signature: &Signature) -> Result<Option<Graph>, CacheError> {
        Ok(None)
    }

    fn put(&mut self, _key: &str, _signature: &Signature, _graph: &Graph) -> Result<(), CacheError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    signature: Signature,
    file: String,
}

/// Directory-backed image cache.
#[derive(Debug)]
pub struct ImageCache {
    dir: PathBuf,
    index: BTreeMap<String, CacheEntry>,
}

impl ImageCache {
    /// Opens (creating if needed) a cache rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the directory cannot be created or an
    /// existing index cannot be read.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let index_path = dir.join(INDEX_FILE);
        let index = if index_path.exists() {
            serde_json::from_str(&fs::read_to_string(&index_path)?)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { dir, index })
    }

    /// `$HOME/.cache/fhirrdf`, if a home directory is known.
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| Path::new(&home).join(".cache").join("fhirrdf"))
    }

    /// The cache directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of cached images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Removes every image and empties the index.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the index cannot be rewritten.
    pub fn clear(&mut self) -> Result<(), CacheError> {
        let keys: Vec<String> = self.index.keys().cloned().collect();
        for key in keys {
            self.evict(&key);
        }
        self.save_index()
    }

    fn evict(&mut self, key: &str) {
        if let Some(entry) = self.index.remove(key) {
            if let Err(e) = fs::remove_file(self.dir.join(&entry.file)) {
                debug!(file = %entry.file, error = %e, "cache image already gone");
            }
        }
    }

    fn save_index(&self) -> Result<(), CacheError> {
        let text = serde_json::to_string_pretty(&self.index)?;
        fs::write(self.dir.join(INDEX_FILE), text)?;
        Ok(())
    }
}

impl VocabularyCache for ImageCache {
    fn get(&mut self, key: &str, signature: &Signature) -> Result<Option<Graph>, CacheError> {
        let Some(entry) = self.index.get(key) else {
            debug!(key, "vocabulary cache miss");
            return Ok(None);
        };
        if &entry.signature != signature {
            debug!(key, "vocabulary source changed, evicting cached image");
            self.evict(key);
            self.save_index()?;
            return Ok(None);
        }
        let path = self.dir.join(&entry.file);
        let image = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| parse_ntriples(&text).map_err(|e| e.to_string()));
        match image {
            Ok(graph) => {
                debug!(key, triples = graph.len(), "vocabulary cache hit");
                Ok(Some(graph))
            }
            Err(e) => {
                warn!(key, error = %e, "unreadable cache image, evicting");
                self.evict(key);
                self.save_index()?;
                Ok(None)
            }
        }
    }

    fn put(&mut self, key: &str, signature: &Signature, graph: &Graph) -> Result<(), CacheError> {
        self.evict(key);
        let file = format!("{}.nt", uuid::Uuid::new_v4());
        fs::write(self.dir.join(&file), to_ntriples(graph))?;
        self.index.insert(
            key.to_owned(),
            CacheEntry {
                signature: signature.clone(),
                file,
            },
        );
        self.save_index()
    }
}
