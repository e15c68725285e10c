//! PathCache: name path -> category lookup for one store tree

use crate::error::{ImportError, Result};
use crate::name_path::SEPARATOR;
use ahash::AHashMap;
use catree_core::{CatalogStore, CategoryId, CategoryNode, StoreId};

/// Cached mapping of normalized name paths to existing categories
///
/// Built once per run from the store tree, then grown by the resolver as it
/// creates categories. Keys never include the store root or the global root.
#[derive(Debug, Default)]
pub struct PathCache {
    entries: AHashMap<String, CategoryNode>,
}

impl PathCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk every category below `root` and index it by name path
    ///
    /// Ancestor names are resolved through an id map built from the fetched
    /// set, so fetch order does not matter. Fails when a category's id path
    /// leaves `root` or references an id that was not fetched.
    pub fn build<S: CatalogStore>(store: &S, root: &CategoryNode, scope: StoreId) -> Result<Self> {
        let nodes = store.descendants(root.id, scope)?;
        let by_id: AHashMap<CategoryId, &CategoryNode> =
            nodes.iter().map(|node| (node.id, node)).collect();

        let mut cache = Self {
            entries: AHashMap::with_capacity(nodes.len()),
        };

        for node in &nodes {
            let below_root = node.id_path.strip_prefix(&root.id_path).ok_or_else(|| {
                ImportError::Consistency {
                    category: node.id,
                    ancestor: root.id,
                }
            })?;

            let mut key = String::new();
            for (i, ancestor) in below_root.iter().enumerate() {
                let ancestor_node = by_id.get(ancestor).ok_or(ImportError::Consistency {
                    category: node.id,
                    ancestor: *ancestor,
                })?;
                if i > 0 {
                    key.push(SEPARATOR);
                }
                key.push_str(ancestor_node.name.trim());
            }

            cache.insert(key, node.clone());
        }

        tracing::info!(
            root = %root.id,
            store = %scope,
            categories = nodes.len(),
            paths = cache.len(),
            "Built category path cache"
        );
        Ok(cache)
    }

    /// Look up a normalized name path
    pub fn get(&self, key: &str) -> Option<&CategoryNode> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Add a mapping
    ///
    /// A key is expected at most once. If it is already present (duplicate
    /// sibling names in the stored tree), the new node wins, the displaced one
    /// is returned and a warning is logged.
    pub fn insert(&mut self, key: String, node: CategoryNode) -> Option<CategoryNode> {
        let previous = self.entries.insert(key, node);
        if let Some(prev) = &previous {
            tracing::warn!(
                id = %prev.id,
                path = %prev.id_path,
                name = %prev.name,
                "Duplicate category name path; keeping the later category"
            );
        }
        previous
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries sorted by name path
    pub fn entries(&self) -> Vec<(&str, &CategoryNode)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(key, node)| (key.as_str(), node))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
