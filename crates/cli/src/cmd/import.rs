//! Import a category file into one store

use crate::config;
use crate::util::CatalogPaths;
use anyhow::{Context, Result};
use catree_core::SledCatalog;
use catree_import::{ImportReport, ImportSource, Importer};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn run(paths: &CatalogPaths, store_code: &str, file: &Path, json: bool) -> Result<()> {
    // 1. Settings and input, both checked before touching the catalog
    let config = config::load(&paths.config)?;
    let source = ImportSource::open(file, &config.import.allowed_extensions)?;
    let total = source.line_count();

    // 2. Open the catalog and build the path cache
    let mut catalog = SledCatalog::open(&paths.db).context("Failed to open catalog")?;
    let mut importer = Importer::bootstrap(&mut catalog, store_code)?;

    if !json {
        println!("{} categories found to process. Beginning import...", total);
    }

    // 3. Resolve every line
    let bar = if json || !config.import.progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.dim} [{bar:30}] {pos}/{len} {msg}")?
                .progress_chars("=>-"),
        );
        bar
    };

    let result = importer.run(source.lines(), |_, outcome| {
        bar.inc(1);
        if outcome.created > 0 {
            bar.set_message(format!("{} new", outcome.created));
        }
    });
    bar.finish_and_clear();

    let report = result.with_context(|| format!("Import of {} failed", source.path().display()))?;

    // 4. Report
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ImportReport) {
    println!(
        "-- Processed {} records in {:.2} seconds --",
        report.lines,
        report.elapsed.as_secs_f64()
    );
    println!(
        "No. of existing categories: {} (including duplicate parent categories)",
        report.existing.cyan()
    );
    println!(
        "No. of new categories created: {}",
        report.created.green()
    );
}
