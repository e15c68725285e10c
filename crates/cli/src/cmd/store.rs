//! Manage store views

use crate::util::CatalogPaths;
use anyhow::{Context, Result};
use catree_core::{CatalogStore, CategoryId, SledCatalog};
use owo_colors::OwoColorize;

pub fn run_list(paths: &CatalogPaths) -> Result<()> {
    let catalog = SledCatalog::open(&paths.db).context("Failed to open catalog")?;
    let stores = catalog.stores()?;

    println!("{:<4} {:<16} {}", "ID".bold(), "CODE".bold(), "ROOT".bold());
    for view in stores {
        println!(
            "{:<4} {:<16} {}",
            view.id,
            view.code.cyan(),
            view.root_category_id
        );
    }
    Ok(())
}

pub fn run_add(paths: &CatalogPaths, code: &str, root: u64) -> Result<()> {
    let catalog = SledCatalog::open(&paths.db).context("Failed to open catalog")?;
    let view = catalog
        .add_store(code, CategoryId(root))
        .with_context(|| format!("Failed to add store '{}'", code))?;
    catalog.flush()?;

    println!(
        "{} store {} (id {}, root category {})",
        "Added".green(),
        view.code.cyan(),
        view.id,
        view.root_category_id
    );
    Ok(())
}

pub fn run_rename(paths: &CatalogPaths, code: &str, id: u64, name: &str) -> Result<()> {
    let catalog = SledCatalog::open(&paths.db).context("Failed to open catalog")?;
    let view = catalog
        .store_view(code)?
        .ok_or_else(|| anyhow::anyhow!("ID for store code {} not found", code))?;
    let id = CategoryId(id);
    catalog
        .set_name(id, view.id, name)
        .with_context(|| format!("Failed to rename category {}", id))?;
    catalog.flush()?;

    println!(
        "{} category {} to {} in store {}",
        "Renamed".green(),
        id,
        name.cyan(),
        view.code
    );
    Ok(())
}
