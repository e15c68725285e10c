//! Category tree import
//!
//! This crate provides:
//! - Name path parsing and normalization
//! - PathCache (name path -> existing category) built from the store tree
//! - TreeResolver, which creates missing prefixes through a `CatalogStore`
//! - Import runs over a text file, one name path per line

pub mod error;
pub mod importer;
pub mod name_path;
pub mod path_cache;
pub mod resolver;
pub mod source;

// Re-exports
pub use error::{ImportError, Result};
pub use importer::{ImportReport, Importer};
pub use name_path::NamePath;
pub use path_cache::PathCache;
pub use resolver::{LineOutcome, ResolverStats, TreeResolver};
pub use source::{ImportSource, DEFAULT_EXTENSIONS};
