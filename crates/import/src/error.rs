//! Import errors
//!
//! Every variant is fatal for the run it comes from. Nothing is retried and
//! categories created before the failure stay in the catalog.

use catree_core::{CatalogError, CategoryId};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImportError>;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Store code does not resolve to a store view
    #[error("ID for store code {code} not found")]
    UnknownStore { code: String },

    /// Store view points at a root category that does not exist
    #[error("Root category {root} of store {code} not found")]
    MissingRoot { code: String, root: CategoryId },

    /// Input file cannot be opened or read
    #[error("Can't read {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file extension is not accepted
    #[error("Invalid file extension for {path}. Valid extensions are: {allowed}")]
    UnsupportedExtension { path: PathBuf, allowed: String },

    /// Fetched tree references an ancestor it does not contain
    #[error("Category {category} references ancestor {ancestor} outside the fetched tree")]
    Consistency {
        category: CategoryId,
        ancestor: CategoryId,
    },

    /// Creating a category failed; earlier creations are kept
    #[error("Failed to create category '{segment}' (path '{name_path}'): {source}")]
    Persistence {
        segment: String,
        name_path: String,
        #[source]
        source: CatalogError,
    },

    /// Catalog read failure
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
