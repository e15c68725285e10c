//! Catalog configuration (`.catree/config.toml`)
//!
//! Every key is optional; missing keys take their defaults.

use anyhow::{Context, Result};
use catree_import::DEFAULT_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatreeConfig {
    pub import: ImportConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Accepted input file extensions, without the dot
    pub allowed_extensions: Vec<String>,
    /// Show a progress bar while importing
    pub progress: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            progress: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Also write logs to `.catree/logs/catree.log`
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { file: true }
    }
}

impl CatreeConfig {
    /// Reject values the importer cannot use
    pub fn validate(&self) -> Result<()> {
        for ext in &self.import.allowed_extensions {
            if ext.is_empty() {
                anyhow::bail!("import.allowed_extensions contains an empty entry");
            }
            if ext.starts_with('.') {
                anyhow::bail!(
                    "import.allowed_extensions entry '{}' must not start with '.'",
                    ext
                );
            }
        }
        Ok(())
    }
}

/// Load the configuration, falling back to defaults when the file is absent
pub fn load(path: &Path) -> Result<CatreeConfig> {
    if !path.exists() {
        return Ok(CatreeConfig::default());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: CatreeConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    Ok(config)
}

/// Write the configuration as TOML
pub fn save(path: &Path, config: &CatreeConfig) -> Result<()> {
    let text = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Create the file with defaults unless it exists; returns whether it was created
pub fn init_if_missing(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save(path, &CatreeConfig::default())?;
    Ok(true)
}
