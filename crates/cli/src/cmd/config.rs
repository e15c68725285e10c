//! Show the effective configuration

use crate::config;
use crate::util::CatalogPaths;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(paths: &CatalogPaths) -> Result<()> {
    let config = config::load(&paths.config)?;

    println!("{}", "Catalog Configuration".bold());
    let source = if paths.config.exists() {
        paths.config.display().to_string()
    } else {
        format!("{} (missing, using defaults)", paths.config.display())
    };
    println!("{}: {}\n", "Location".dimmed(), source.dimmed());

    println!("{}", "[import]".yellow());
    println!(
        "  {} = [{}]",
        "allowed_extensions".cyan(),
        config
            .import
            .allowed_extensions
            .iter()
            .map(|e| format!("\"{}\"", e))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  {} = {}", "progress".cyan(), config.import.progress);

    println!("\n{}", "[log]".yellow());
    println!(
        "  {} = {} {}",
        "file".cyan(),
        config.log.file,
        format!("({})", paths.logs.join(crate::logging::LOG_FILE).display()).dimmed()
    );
    Ok(())
}
