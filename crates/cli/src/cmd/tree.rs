//! Print the category tree of one store as name paths

use crate::util::CatalogPaths;
use anyhow::{Context, Result};
use catree_core::SledCatalog;
use catree_import::Importer;
use owo_colors::OwoColorize;

pub fn run(paths: &CatalogPaths, store_code: &str) -> Result<()> {
    let mut catalog = SledCatalog::open(&paths.db).context("Failed to open catalog")?;
    let importer = Importer::bootstrap(&mut catalog, store_code)?;
    let resolver = importer.resolver();
    let entries = resolver.cache().entries();

    println!(
        "{} {} ({} categories)",
        "Store".bold(),
        resolver.view().code.cyan(),
        entries.len()
    );
    if entries.is_empty() {
        println!("{}", "No categories below the store root".dimmed());
        return Ok(());
    }

    let width = entries
        .iter()
        .map(|(_, node)| node.id_path.to_string().len())
        .max()
        .unwrap_or(0);
    for (name_path, node) in entries {
        println!(
            "  {:<width$}  {}",
            node.id_path.to_string().dimmed(),
            name_path,
            width = width
        );
    }
    Ok(())
}
