//! Common utilities for integration tests

pub mod cli;

use std::path::{Path, PathBuf};

/// Write an import file into `dir` and return its path
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
