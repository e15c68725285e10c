//! sled-backed catalog store

use crate::catalog::{
    now_ms, seed_categories, seed_stores, CatalogStore, CategoryRecord, Labels, SEED_LAST_ID,
};
use crate::category::{CategoryId, CategoryNode, NewCategory};
use crate::error::{CatalogError, Result};
use crate::scope::{StoreId, StoreView};
use sled::transaction::TransactionResult;
use sled::{Db, Transactional, Tree};
use std::path::Path;

const LAST_ID_KEY: &[u8] = b"last_id";

/// Persistent catalog
///
/// Layout inside the database directory:
/// ```text
/// categories   id (u64 BE)               -> CategoryRecord
/// names        id (u64 BE) ++ store (u32 BE) -> Labels
/// stores       code                      -> StoreView
/// meta         "last_id"                 -> u64 BE
/// ```
pub struct SledCatalog {
    db: Db,
    categories: Tree,
    names: Tree,
    stores: Tree,
    meta: Tree,
}

impl SledCatalog {
    /// Open a catalog, seeding it if the database is empty
    pub fn init(path: &Path) -> Result<Self> {
        let catalog = Self::open_trees(path)?;
        if !catalog.is_seeded()? {
            tracing::info!(path = %path.display(), "Seeding new catalog");
            catalog.seed()?;
        }
        Ok(catalog)
    }

    /// Open an existing, already seeded catalog
    pub fn open(path: &Path) -> Result<Self> {
        let catalog = Self::open_trees(path)?;
        if !catalog.is_seeded()? {
            return Err(CatalogError::NotInitialized(path.display().to_string()));
        }
        Ok(catalog)
    }

    fn open_trees(path: &Path) -> Result<Self> {
        let db = sled::open(path)?;
        Ok(Self {
            categories: db.open_tree("categories")?,
            names: db.open_tree("names")?,
            stores: db.open_tree("stores")?,
            meta: db.open_tree("meta")?,
            db,
        })
    }

    fn is_seeded(&self) -> Result<bool> {
        Ok(self.meta.contains_key(LAST_ID_KEY)?)
    }

    /// Drop every category and store, then write the seed again
    pub fn reset(&self) -> Result<()> {
        self.categories.clear()?;
        self.names.clear()?;
        self.stores.clear()?;
        self.meta.clear()?;
        self.seed()?;
        tracing::info!("Catalog reset to seed");
        Ok(())
    }

    fn seed(&self) -> Result<()> {
        let created_at_ms = now_ms();
        for seed in seed_categories() {
            let id = seed
                .id_path
                .id()
                .ok_or_else(|| CatalogError::Corrupt("empty seed path".to_string()))?;
            let record = CategoryRecord {
                id_path: seed.id_path,
                attributes: seed.attributes,
                created_at_ms,
            };
            self.categories.insert(id.to_key(), bincode::serialize(&record)?)?;

            let labels = Labels {
                name: seed.name.to_string(),
                meta_title: None,
            };
            let encoded = bincode::serialize(&labels)?;
            for store in seed_stores() {
                self.names.insert(name_key(id, store.id), encoded.as_slice())?;
            }
        }

        for store in seed_stores() {
            self.stores
                .insert(store.code.as_bytes(), bincode::serialize(&store)?)?;
        }
        self.meta.insert(LAST_ID_KEY, SEED_LAST_ID.to_be_bytes().to_vec())?;
        self.db.flush()?;
        Ok(())
    }

    /// Register an additional store view rooted at `root`
    pub fn add_store(&self, code: &str, root: CategoryId) -> Result<StoreView> {
        if self.stores.contains_key(code.as_bytes())? {
            return Err(CatalogError::DuplicateStore(code.to_string()));
        }
        if !self.categories.contains_key(root.to_key())? {
            return Err(CatalogError::NotFound(root));
        }

        let next = self.stores()?.iter().map(|s| s.id.0 + 1).max().unwrap_or(0);
        let view = StoreView::new(StoreId(next), code, root);
        self.stores
            .insert(code.as_bytes(), bincode::serialize(&view)?)?;
        Ok(view)
    }

    /// All store views, ordered by id
    pub fn stores(&self) -> Result<Vec<StoreView>> {
        let mut views = Vec::new();
        for item in self.stores.iter() {
            let (_, value) = item?;
            views.push(bincode::deserialize::<StoreView>(&value)?);
        }
        views.sort_by_key(|v| v.id);
        Ok(views)
    }

    /// Set the name of a category for one store
    pub fn set_name(&self, id: CategoryId, store: StoreId, name: &str) -> Result<()> {
        if !self.categories.contains_key(id.to_key())? {
            return Err(CatalogError::NotFound(id));
        }
        let labels = Labels {
            name: name.to_string(),
            meta_title: None,
        };
        self.names
            .insert(name_key(id, store), bincode::serialize(&labels)?)?;
        Ok(())
    }

    /// Number of stored categories, seed included
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    fn record(&self, id: CategoryId) -> Result<Option<CategoryRecord>> {
        match self.categories.get(id.to_key())? {
            Some(bytes) => Ok(Some(bincode::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    fn name(&self, id: CategoryId, store: StoreId) -> Result<String> {
        let bytes = match self.names.get(name_key(id, store))? {
            Some(bytes) => Some(bytes),
            None if store != StoreId::ADMIN => self.names.get(name_key(id, StoreId::ADMIN))?,
            None => None,
        };

        match bytes {
            Some(bytes) => Ok(bincode::deserialize::<Labels>(&bytes)?.name),
            None => {
                tracing::debug!(%id, %store, "Category has no name in scope");
                Ok(String::new())
            }
        }
    }

    fn next_id(&self) -> Result<CategoryId> {
        let updated = self.meta.update_and_fetch(LAST_ID_KEY, |old| {
            let last = old
                .and_then(|bytes| <[u8; 8]>::try_from(bytes).ok())
                .map(u64::from_be_bytes)
                .unwrap_or(SEED_LAST_ID);
            Some((last + 1).to_be_bytes().to_vec())
        })?;

        updated
            .as_deref()
            .and_then(CategoryId::from_key)
            .ok_or_else(|| CatalogError::Corrupt("id counter".to_string()))
    }
}

impl CatalogStore for SledCatalog {
    fn store_view(&self, code: &str) -> Result<Option<StoreView>> {
        match self.stores.get(code.as_bytes())? {
            Some(bytes) => Ok(Some(bincode::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    fn category(&self, id: CategoryId, store: StoreId) -> Result<Option<CategoryNode>> {
        let record = match self.record(id)? {
            Some(record) => record,
            None => return Ok(None),
        };

        Ok(Some(CategoryNode {
            id,
            id_path: record.id_path,
            name: self.name(id, store)?,
        }))
    }

    fn descendants(&self, root: CategoryId, store: StoreId) -> Result<Vec<CategoryNode>> {
        let root_path = match self.record(root)? {
            Some(record) => record.id_path,
            None => return Ok(Vec::new()),
        };

        let mut nodes = Vec::new();
        for item in self.categories.iter() {
            let (key, value) = item?;
            let record: CategoryRecord = bincode::deserialize(&value)?;
            if !record.id_path.is_descendant_of(&root_path) {
                continue;
            }

            let id = CategoryId::from_key(&key)
                .ok_or_else(|| CatalogError::Corrupt(format!("category key {:?}", key)))?;
            nodes.push(CategoryNode {
                id,
                id_path: record.id_path,
                name: self.name(id, store)?,
            });
        }

        Ok(nodes)
    }

    fn create(&mut self, category: NewCategory) -> Result<CategoryId> {
        let parent_id = category
            .parent
            .id()
            .ok_or_else(|| CatalogError::MissingParent(category.parent.to_string()))?;
        match self.record(parent_id)? {
            Some(parent) if parent.id_path == category.parent => {}
            _ => return Err(CatalogError::MissingParent(category.parent.to_string())),
        }

        let id = self.next_id()?;
        let record = CategoryRecord {
            id_path: category.parent.child(id),
            attributes: category.attributes.clone(),
            created_at_ms: now_ms(),
        };
        let labels = Labels {
            name: category.name.clone(),
            meta_title: category.attributes.meta_title.clone(),
        };
        let record_bytes = bincode::serialize(&record)?;
        let label_bytes = bincode::serialize(&labels)?;

        let mut name_keys = vec![name_key(id, StoreId::ADMIN)];
        if category.store != StoreId::ADMIN {
            name_keys.push(name_key(id, category.store));
        }
        let key = id.to_key();

        // Entity and labels land together or not at all
        let result: TransactionResult<()> = (&self.categories, &self.names).transaction(
            |(categories, names)| {
                categories.insert(&key[..], record_bytes.as_slice())?;
                for name_key in &name_keys {
                    names.insert(&name_key[..], label_bytes.as_slice())?;
                }
                Ok(())
            },
        );
        result.map_err(|e| match e {
            sled::transaction::TransactionError::Storage(e) => CatalogError::Db(e),
            sled::transaction::TransactionError::Abort(()) => {
                CatalogError::Corrupt("create transaction aborted".to_string())
            }
        })?;

        tracing::debug!(%id, name = %category.name, path = %record.id_path, "Created category");
        Ok(id)
    }

    fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

fn name_key(id: CategoryId, store: StoreId) -> [u8; 12] {
    let mut key = [0u8; 12];
    key[..8].copy_from_slice(&id.to_key());
    key[8..].copy_from_slice(&store.to_key());
    key
}
