//! Reset the catalog to its seed

use crate::util::{self, CatalogPaths};
use anyhow::{Context, Result};
use catree_core::SledCatalog;
use owo_colors::OwoColorize;

pub fn run(paths: &CatalogPaths, yes: bool) -> Result<()> {
    if !yes {
        let stdin = std::io::stdin();
        let confirmed = util::confirm(
            "Are you sure you want to reset all store categories?",
            &mut stdin.lock(),
        )?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let catalog = SledCatalog::open(&paths.db).context("Failed to open catalog")?;
    let before = catalog.category_count();
    catalog.reset().context("Failed to reset catalog")?;

    println!(
        "{} Removed {} categories, catalog reset to its seed",
        "Done.".green(),
        before.saturating_sub(catalog.category_count())
    );
    Ok(())
}
