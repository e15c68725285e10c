//! Import input files

use crate::error::{ImportError, Result};
use std::path::{Path, PathBuf};

/// Extensions accepted when none are configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["txt"];

/// A loaded import file, one name path per line
#[derive(Debug)]
pub struct ImportSource {
    path: PathBuf,
    content: String,
}

impl ImportSource {
    /// Validate the extension and read the file
    ///
    /// Extension matching ignores case. An empty `allowed` list accepts any
    /// file.
    pub fn open<S: AsRef<str>>(path: &Path, allowed: &[S]) -> Result<Self> {
        if !allowed.is_empty() {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default();
            if !allowed.iter().any(|a| a.as_ref().eq_ignore_ascii_case(ext)) {
                return Err(ImportError::UnsupportedExtension {
                    path: path.to_path_buf(),
                    allowed: allowed
                        .iter()
                        .map(|a| a.as_ref())
                        .collect::<Vec<_>>()
                        .join(","),
                });
            }
        }

        let content = std::fs::read_to_string(path).map_err(|source| ImportError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Loaded import file");

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Wrap in-memory content (no extension check)
    pub fn from_string(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines the import will process
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.content.lines()
    }
}
