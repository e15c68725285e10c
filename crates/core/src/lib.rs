//! Catree Core - category tree model and catalog storage
//!
//! This crate provides:
//! - Category ids, id paths and attributes
//! - Store views (name scopes)
//! - The `CatalogStore` interface the importer persists through
//! - A sled-backed catalog and an in-memory catalog

pub mod catalog;
pub mod category;
pub mod error;
pub mod memory;
pub mod scope;
pub mod store;

// Re-export main types for convenience
pub use catalog::{CatalogStore, DEFAULT_CATEGORY_ID, GLOBAL_ROOT_ID};
pub use category::{CategoryAttributes, CategoryId, CategoryNode, DisplayMode, IdPath, NewCategory};
pub use error::{CatalogError, Result};
pub use memory::MemoryCatalog;
pub use scope::{StoreId, StoreView};
pub use store::SledCatalog;
