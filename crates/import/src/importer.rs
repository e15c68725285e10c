//! Import runs: bootstrap the cache, then resolve every line in order

use crate::error::{ImportError, Result};
use crate::name_path::NamePath;
use crate::path_cache::PathCache;
use crate::resolver::{LineOutcome, TreeResolver};
use catree_core::{CatalogStore, StoreView};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Summary of one import run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Lines processed
    pub lines: usize,
    /// Prefix lookups that hit an existing category (parents counted per line)
    pub existing: usize,
    /// Categories created
    pub created: usize,
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// One import run against one store
pub struct Importer<'a, S: CatalogStore> {
    resolver: TreeResolver<'a, S>,
}

impl<'a, S: CatalogStore> Importer<'a, S> {
    /// Resolve the store, load its root and build the path cache
    ///
    /// Nothing is written to the catalog before this returns.
    pub fn bootstrap(store: &'a mut S, store_code: &str) -> Result<Self> {
        let view: StoreView = store
            .store_view(store_code)?
            .ok_or_else(|| ImportError::UnknownStore {
                code: store_code.to_string(),
            })?;

        let root = store
            .category(view.root_category_id, view.id)?
            .ok_or_else(|| ImportError::MissingRoot {
                code: view.code.clone(),
                root: view.root_category_id,
            })?;

        let cache = PathCache::build(&*store, &root, view.id)?;
        tracing::info!(
            store = %view.code,
            root = %root.id_path,
            cached = cache.len(),
            "Import bootstrapped"
        );

        Ok(Self {
            resolver: TreeResolver::new(store, view, &root, cache),
        })
    }

    /// Resolve every line, calling `on_line` after each one
    ///
    /// Stops at the first error; the failing line number is logged.
    pub fn run<'l, I, F>(&mut self, lines: I, mut on_line: F) -> Result<ImportReport>
    where
        I: IntoIterator<Item = &'l str>,
        F: FnMut(usize, &LineOutcome),
    {
        let start = Instant::now();
        let before = self.resolver.stats();

        for (index, line) in lines.into_iter().enumerate() {
            let line_no = index + 1;
            let path = NamePath::parse(line);
            let outcome = self.resolver.resolve(&path).map_err(|e| {
                tracing::error!(line = line_no, path = %path, error = %e, "Import aborted");
                e
            })?;
            on_line(line_no, &outcome);
        }

        self.resolver.flush()?;

        let after = self.resolver.stats();
        let report = ImportReport {
            lines: after.lines - before.lines,
            existing: after.existing - before.existing,
            created: after.created - before.created,
            elapsed: start.elapsed(),
        };
        tracing::info!(
            lines = report.lines,
            existing = report.existing,
            created = report.created,
            "Import finished"
        );
        Ok(report)
    }

    pub fn resolver(&self) -> &TreeResolver<'a, S> {
        &self.resolver
    }

    pub fn into_cache(self) -> PathCache {
        self.resolver.into_cache()
    }
}
