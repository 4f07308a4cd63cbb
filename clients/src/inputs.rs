//! Input discovery for directory conversion.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

/// Rules deciding which files under an input directory are converted.
#[derive(Debug, Clone, Default)]
pub struct InputFilter {
    /// Directory path fragments to skip.
    pub skipdirs: Vec<String>,
    /// File name fragments to skip.
    pub skipfns: Vec<String>,
    /// Largest file converted, in KB. 0 disables the check.
    pub maxsize_kb: u64,
}

impl InputFilter {
    /// False for directories with a path element starting with `_` or
    /// containing a skip fragment. `relative` is relative to the input root.
    #[must_use]
    pub fn accepts_dir(&self, relative: &Path) -> bool {
        let hidden = relative.components().any(|c| match c {
            Component::Normal(name) => name.to_string_lossy().starts_with('_'),
            _ => false,
        });
        let text = relative.to_string_lossy();
        !hidden && !self.skipdirs.iter().any(|d| text.contains(d.as_str()))
    }

    /// True for `.json` files that match no skip fragment and are within
    /// the size limit.
    #[must_use]
    pub fn accepts_file(&self, name: &str, size: u64) -> bool {
        name.ends_with(".json")
            && !self.skipfns.iter().any(|f| name.contains(f.as_str()))
            && (self.maxsize_kb == 0 || size <= self.maxsize_kb * 1000)
    }
}

/// One document to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// File path or URL handed to the loader.
    pub location: String,
    /// Where per-input output goes, relative to the output directory.
    pub relative: PathBuf,
}

impl Input {
    /// An input named on the command line. URLs and files are taken as is.
    #[must_use]
    pub fn explicit(location: &str) -> Self {
        let name = Path::new(location)
            .file_name()
            .unwrap_or_else(|| OsStr::new("document"));
        Self {
            location: location.to_owned(),
            relative: PathBuf::from(name),
        }
    }

    /// Output path for this input under `outdir`, with extension `ext`.
    #[must_use]
    pub fn output_path(&self, outdir: &Path, ext: &str) -> PathBuf {
        outdir.join(&self.relative).with_extension(ext)
    }
}

/// Walks `indir` in file name order and returns the files `filter` accepts.
///
/// # Errors
///
/// Returns an error if the directory cannot be traversed.
pub fn discover(indir: &Path, filter: &InputFilter) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();
    let walker = WalkDir::new(indir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            !e.file_type().is_dir()
                || e.depth() == 0
                || filter.accepts_dir(e.path().strip_prefix(indir).unwrap_or(e.path()))
        });
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to traverse {}", indir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(indir).unwrap_or(path).to_path_buf();
        let size = entry
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();
        let name = entry.file_name().to_string_lossy();
        if filter.accepts_file(&name, size) {
            inputs.push(Input {
                location: path.to_string_lossy().into_owned(),
                relative,
            });
        } else {
            debug!(path = %relative.display(), size, "input skipped");
        }
    }
    Ok(inputs)
}
