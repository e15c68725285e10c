//! Catalog store errors

use crate::category::CategoryId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Embedded database failure
    #[error("Database error: {0}")]
    Db(#[from] sled::Error),

    /// Record encoding/decoding failure
    #[error("Encoding error: {0}")]
    Codec(#[from] bincode::Error),

    /// Parent id path does not name an existing category
    #[error("Parent category {0} does not exist")]
    MissingParent(String),

    /// Store code registered twice
    #[error("Store code already registered: {0}")]
    DuplicateStore(String),

    /// Malformed textual id path
    #[error("Invalid id path: '{0}'")]
    InvalidIdPath(String),

    /// Record referenced by id is missing
    #[error("Category {0} not found")]
    NotFound(CategoryId),

    /// Catalog was never seeded
    #[error("Catalog not initialized at {0}")]
    NotInitialized(String),

    /// Stored bytes do not have the expected shape
    #[error("Corrupt catalog record: {0}")]
    Corrupt(String),
}
