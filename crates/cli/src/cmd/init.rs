//! Create a catalog in a directory

use crate::config;
use crate::util::CatalogPaths;
use anyhow::{Context, Result};
use catree_core::SledCatalog;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn run(target: &Path) -> Result<()> {
    let paths = CatalogPaths::new(target);

    if paths.db.exists() {
        anyhow::bail!(
            "Catalog already initialized at {}",
            paths.catalog_dir.display()
        );
    }

    println!("Initializing catalog at {}", paths.root.display());

    // 1. Directory layout
    std::fs::create_dir_all(&paths.logs)
        .with_context(|| format!("Failed to create {}", paths.logs.display()))?;

    // 2. Seeded database
    let catalog = SledCatalog::init(&paths.db).context("Failed to create catalog database")?;
    let categories = catalog.category_count();
    let stores = catalog.stores()?.len();

    // 3. Default configuration
    config::init_if_missing(&paths.config)?;

    println!("{}", "Successfully initialized catalog".green());
    println!();
    println!("Created .catree/ directory structure:");
    println!("  - .catree/catalog.db/   ({} categories, {} stores)", categories, stores);
    println!("  - .catree/config.toml   (import settings)");
    println!("  - .catree/logs/         (run logs)");
    println!();
    println!("Next steps:");
    println!("  - Run 'catree import -s default -f <file.txt>' to import categories");
    println!("  - Run 'catree tree' to list the imported tree");
    Ok(())
}
