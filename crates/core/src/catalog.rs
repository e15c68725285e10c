//! Catalog store interface and the seed every fresh catalog starts from

use crate::category::{CategoryAttributes, CategoryId, CategoryNode, DisplayMode, IdPath, NewCategory};
use crate::error::Result;
use crate::scope::{StoreId, StoreView};
use serde::{Deserialize, Serialize};

/// Global root shared by all store roots
pub const GLOBAL_ROOT_ID: CategoryId = CategoryId(1);

/// Root category of the seeded `default` store
pub const DEFAULT_CATEGORY_ID: CategoryId = CategoryId(2);

/// Persistence collaborator used by the importer
///
/// Implementations own id assignment and tree storage. Names are stored per
/// store; lookups for a store without its own value fall back to
/// [`StoreId::ADMIN`].
pub trait CatalogStore {
    /// Resolve a store view by its code
    fn store_view(&self, code: &str) -> Result<Option<StoreView>>;

    /// Fetch one category with its name resolved for `store`
    fn category(&self, id: CategoryId, store: StoreId) -> Result<Option<CategoryNode>>;

    /// All categories strictly below `root`, ordered by id
    ///
    /// Returns an empty list when `root` does not exist.
    fn descendants(&self, root: CategoryId, store: StoreId) -> Result<Vec<CategoryNode>>;

    /// Persist a new category and return its assigned id
    fn create(&mut self, category: NewCategory) -> Result<CategoryId>;

    /// Make all writes so far durable
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

/// Stored form of a category (scope independent part)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CategoryRecord {
    pub id_path: IdPath,
    pub attributes: CategoryAttributes,
    pub created_at_ms: u64,
}

/// Scoped labels of a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Labels {
    pub name: String,
    pub meta_title: Option<String>,
}

/// A category written when a catalog is initialized or reset
pub(crate) struct SeedCategory {
    pub id_path: IdPath,
    pub name: &'static str,
    pub attributes: CategoryAttributes,
}

pub(crate) fn seed_categories() -> Vec<SeedCategory> {
    vec![
        SeedCategory {
            id_path: IdPath::root(GLOBAL_ROOT_ID),
            name: "Root Catalog",
            attributes: CategoryAttributes::default(),
        },
        SeedCategory {
            id_path: IdPath::root(GLOBAL_ROOT_ID).child(DEFAULT_CATEGORY_ID),
            name: "Default Category",
            attributes: CategoryAttributes {
                display_mode: DisplayMode::Products,
                ..CategoryAttributes::default()
            },
        },
    ]
}

pub(crate) fn seed_stores() -> Vec<StoreView> {
    vec![
        StoreView::new(StoreId::ADMIN, "admin", CategoryId(0)),
        StoreView::new(StoreId(1), "default", DEFAULT_CATEGORY_ID),
    ]
}

/// Highest id used by the seed; new categories are numbered after it
pub(crate) const SEED_LAST_ID: u64 = DEFAULT_CATEGORY_ID.get();

pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
