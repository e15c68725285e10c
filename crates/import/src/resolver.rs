//! TreeResolver: turns name paths into persisted categories

use crate::error::{ImportError, Result};
use crate::name_path::NamePath;
use crate::path_cache::PathCache;
use catree_core::{CatalogStore, CategoryNode, IdPath, NewCategory, StoreView};

/// Result of resolving one name path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// Prefixes that were already in the tree
    pub existing: usize,
    /// Categories created for this line
    pub created: usize,
    /// Id path of the deepest category of the line
    pub id_path: IdPath,
}

/// Running totals across all resolved lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverStats {
    pub lines: usize,
    pub existing: usize,
    pub created: usize,
}

/// Resolves name paths against one store tree, creating what is missing
///
/// Owns the [`PathCache`] for the run. Every created category goes into the
/// cache before the next segment is looked at, so later prefixes and later
/// lines see it as existing.
pub struct TreeResolver<'a, S: CatalogStore> {
    store: &'a mut S,
    view: StoreView,
    root_path: IdPath,
    cache: PathCache,
    stats: ResolverStats,
}

impl<'a, S: CatalogStore> TreeResolver<'a, S> {
    /// Create a resolver for the tree under `root`, seeded with a built cache
    pub fn new(store: &'a mut S, view: StoreView, root: &CategoryNode, cache: PathCache) -> Self {
        Self {
            store,
            view,
            root_path: root.id_path.clone(),
            cache,
            stats: ResolverStats::default(),
        }
    }

    /// Ensure every prefix of `path` exists, left to right
    ///
    /// A failed create aborts immediately. Categories created earlier in the
    /// line (or by earlier lines) are not removed.
    pub fn resolve(&mut self, path: &NamePath) -> Result<LineOutcome> {
        let mut outcome = LineOutcome {
            existing: 0,
            created: 0,
            id_path: self.root_path.clone(),
        };

        for (key, segment) in path.prefixes() {
            // Continue from the hit's stored path; duplicate sibling names can
            // leave a prefix key on a different node than its child's parent
            if let Some(node) = self.cache.get(&key) {
                outcome.existing += 1;
                outcome.id_path = node.id_path.clone();
                continue;
            }

            let request = NewCategory::imported(segment, outcome.id_path.clone(), self.view.id);
            let id = self
                .store
                .create(request)
                .map_err(|source| ImportError::Persistence {
                    segment: segment.to_string(),
                    name_path: key.clone(),
                    source,
                })?;

            let node = CategoryNode {
                id,
                id_path: outcome.id_path.child(id),
                name: segment.to_string(),
            };
            tracing::debug!(%id, path = %key, "Created category");
            self.cache.insert(key, node);

            outcome.created += 1;
            outcome.id_path.push(id);
        }

        self.stats.lines += 1;
        self.stats.existing += outcome.existing;
        self.stats.created += outcome.created;
        Ok(outcome)
    }

    /// Flush the underlying store
    pub fn flush(&self) -> Result<()> {
        self.store.flush()?;
        Ok(())
    }

    pub fn stats(&self) -> ResolverStats {
        self.stats
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    pub fn view(&self) -> &StoreView {
        &self.view
    }

    /// Give the cache back, e.g. to inspect the tree after a run
    pub fn into_cache(self) -> PathCache {
        self.cache
    }
}
