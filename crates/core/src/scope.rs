//! Store views: the scopes under which category names resolve

use crate::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a store view
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoreId(pub u32);

impl StoreId {
    /// Admin scope; holds the default value of every scoped attribute
    pub const ADMIN: StoreId = StoreId(0);

    pub fn to_key(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A store view registered in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreView {
    pub id: StoreId,
    /// Lookup code, e.g. `default`
    pub code: String,
    /// Category whose subtree this store shows
    pub root_category_id: CategoryId,
}

impl StoreView {
    pub fn new(id: StoreId, code: impl Into<String>, root_category_id: CategoryId) -> Self {
        Self {
            id,
            code: code.into(),
            root_category_id,
        }
    }
}
