//! In-memory catalog with the same seed and rules as [`SledCatalog`]
//!
//! Used by tests and benchmarks where a database directory is noise.
//!
//! [`SledCatalog`]: crate::SledCatalog

use crate::catalog::{
    now_ms, seed_categories, seed_stores, CatalogStore, CategoryRecord, Labels, SEED_LAST_ID,
};
use crate::category::{CategoryAttributes, CategoryId, CategoryNode, IdPath, NewCategory};
use crate::error::{CatalogError, Result};
use crate::scope::{StoreId, StoreView};
use ahash::AHashMap;
use std::collections::BTreeMap;

pub struct MemoryCatalog {
    categories: BTreeMap<CategoryId, CategoryRecord>,
    names: AHashMap<(CategoryId, StoreId), Labels>,
    stores: BTreeMap<String, StoreView>,
    last_id: u64,
    creates: usize,
}

impl MemoryCatalog {
    /// A freshly seeded catalog
    pub fn new() -> Self {
        let mut catalog = Self {
            categories: BTreeMap::new(),
            names: AHashMap::new(),
            stores: BTreeMap::new(),
            last_id: SEED_LAST_ID,
            creates: 0,
        };

        let created_at_ms = now_ms();
        for seed in seed_categories() {
            if let Some(id) = seed.id_path.id() {
                for store in seed_stores() {
                    catalog.names.insert(
                        (id, store.id),
                        Labels {
                            name: seed.name.to_string(),
                            meta_title: None,
                        },
                    );
                }
                catalog.categories.insert(
                    id,
                    CategoryRecord {
                        id_path: seed.id_path,
                        attributes: seed.attributes,
                        created_at_ms,
                    },
                );
            }
        }
        for store in seed_stores() {
            catalog.stores.insert(store.code.clone(), store);
        }

        catalog
    }

    /// Write a category verbatim, bypassing parent validation
    ///
    /// Lets fixtures describe broken trees. The id is the last element of
    /// `id_path`.
    pub fn insert_raw(&mut self, id_path: IdPath, name: &str) {
        let Some(id) = id_path.id() else { return };
        self.last_id = self.last_id.max(id.get());
        self.names.insert(
            (id, StoreId::ADMIN),
            Labels {
                name: name.to_string(),
                meta_title: None,
            },
        );
        self.categories.insert(
            id,
            CategoryRecord {
                id_path,
                attributes: CategoryAttributes::default(),
                created_at_ms: now_ms(),
            },
        );
    }

    /// Set the name of a category for one store
    pub fn set_name(&mut self, id: CategoryId, store: StoreId, name: &str) -> Result<()> {
        if !self.categories.contains_key(&id) {
            return Err(CatalogError::NotFound(id));
        }
        self.names.insert(
            (id, store),
            Labels {
                name: name.to_string(),
                meta_title: None,
            },
        );
        Ok(())
    }

    /// Attributes stored for a category
    pub fn attributes(&self, id: CategoryId) -> Option<&CategoryAttributes> {
        self.categories.get(&id).map(|record| &record.attributes)
    }

    /// Number of successful `create` calls
    pub fn create_count(&self) -> usize {
        self.creates
    }

    /// Number of stored categories, seed included
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    fn name(&self, id: CategoryId, store: StoreId) -> String {
        self.names
            .get(&(id, store))
            .or_else(|| self.names.get(&(id, StoreId::ADMIN)))
            .map(|labels| labels.name.clone())
            .unwrap_or_default()
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for MemoryCatalog {
    fn store_view(&self, code: &str) -> Result<Option<StoreView>> {
        Ok(self.stores.get(code).cloned())
    }

    fn category(&self, id: CategoryId, store: StoreId) -> Result<Option<CategoryNode>> {
        Ok(self.categories.get(&id).map(|record| CategoryNode {
            id,
            id_path: record.id_path.clone(),
            name: self.name(id, store),
        }))
    }

    fn descendants(&self, root: CategoryId, store: StoreId) -> Result<Vec<CategoryNode>> {
        let Some(root_record) = self.categories.get(&root) else {
            return Ok(Vec::new());
        };

        Ok(self
            .categories
            .iter()
            .filter(|(_, record)| record.id_path.is_descendant_of(&root_record.id_path))
            .map(|(&id, record)| CategoryNode {
                id,
                id_path: record.id_path.clone(),
                name: self.name(id, store),
            })
            .collect())
    }

    fn create(&mut self, category: NewCategory) -> Result<CategoryId> {
        let parent_ok = category
            .parent
            .id()
            .and_then(|id| self.categories.get(&id))
            .is_some_and(|parent| parent.id_path == category.parent);
        if !parent_ok {
            return Err(CatalogError::MissingParent(category.parent.to_string()));
        }

        self.last_id += 1;
        let id = CategoryId(self.last_id);
        let labels = Labels {
            name: category.name,
            meta_title: category.attributes.meta_title.clone(),
        };
        if category.store != StoreId::ADMIN {
            self.names.insert((id, category.store), labels.clone());
        }
        self.names.insert((id, StoreId::ADMIN), labels);
        self.categories.insert(
            id,
            CategoryRecord {
                id_path: category.parent.child(id),
                attributes: category.attributes,
                created_at_ms: now_ms(),
            },
        );
        self.creates += 1;
        Ok(id)
    }
}
