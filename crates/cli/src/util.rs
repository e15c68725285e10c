//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Name of the per-project catalog directory
pub const CATALOG_DIR: &str = ".catree";

/// Files and directories inside `.catree/`
///
/// ```text
/// .catree/
///   catalog.db/     sled database
///   config.toml     import and logging settings
///   logs/
///     catree.log
/// ```
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    /// Directory containing `.catree/`
    pub root: PathBuf,
    pub catalog_dir: PathBuf,
    pub db: PathBuf,
    pub config: PathBuf,
    pub logs: PathBuf,
}

impl CatalogPaths {
    pub fn new(root: &Path) -> Self {
        let catalog_dir = root.join(CATALOG_DIR);
        Self {
            root: root.to_path_buf(),
            db: catalog_dir.join("catalog.db"),
            config: catalog_dir.join("config.toml"),
            logs: catalog_dir.join("logs"),
            catalog_dir,
        }
    }

    pub fn exists(&self) -> bool {
        self.catalog_dir.is_dir()
    }
}

/// Find the catalog: `explicit` if given, else walk up from `start`
pub fn find_catalog_root(explicit: Option<&Path>, start: &Path) -> Result<CatalogPaths> {
    if let Some(dir) = explicit {
        let paths = CatalogPaths::new(dir);
        if !paths.exists() {
            anyhow::bail!(
                "No catalog at {} (run 'catree init' there first)",
                paths.catalog_dir.display()
            );
        }
        return Ok(paths);
    }

    let mut current = start.to_path_buf();
    loop {
        let paths = CatalogPaths::new(&current);
        if paths.exists() {
            return Ok(paths);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => anyhow::bail!("Not a catree project (no {} directory found)", CATALOG_DIR),
        }
    }
}

/// Locate the catalog from the current directory
pub fn locate(explicit: Option<&Path>) -> Result<CatalogPaths> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    find_catalog_root(explicit, &cwd)
}

/// Ask a yes/no question on stdout, reading the answer from `input`
///
/// Only an answer starting with `y`/`Y` counts as yes.
pub fn confirm(prompt: &str, input: &mut impl BufRead) -> Result<bool> {
    print!("{} (Y/N) >", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read answer")?;
    Ok(answer
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y')))
}
