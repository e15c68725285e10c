//! Store views and the config command

use crate::catree;
use crate::common::write_input;
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_seeded_stores_are_listed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;

    let result = catree!(temp_dir.path(), "store", "list").assert_success()?;
    assert!(result.contains_stdout("admin"));
    assert!(result.contains_stdout("default"));
    Ok(())
}

#[test]
fn test_added_store_imports_into_its_root() -> Result<()> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;
    catree!(temp_dir.path(), "store", "add", "outlet").assert_success()?;
    catree!(temp_dir.path(), "store", "add", "outlet").assert_failure()?;

    let input = write_input(temp_dir.path(), "categories.txt", "Sale/Shoes\n");
    let report = catree!(temp_dir.path(), "import", "-s", "outlet", "-f", input.to_str().unwrap(), "--json")
        .assert_success()?
        .json()?;
    assert_eq!(report["created"], 2);

    // Both views share the default root, so the default store sees the import
    let report = catree!(temp_dir.path(), "import", "-s", "default", "-f", input.to_str().unwrap(), "--json")
        .assert_success()?
        .json()?;
    assert_eq!(report["created"], 0);
    assert_eq!(report["existing"], 2);
    Ok(())
}

#[test]
fn test_rename_only_changes_one_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;
    catree!(temp_dir.path(), "store", "add", "fr").assert_success()?;
    let input = write_input(temp_dir.path(), "categories.txt", "Shoes\n");
    catree!(temp_dir.path(), "import", "-s", "default", "-f", input.to_str().unwrap())
        .assert_success()?;

    catree!(temp_dir.path(), "store", "rename", "fr", "3", "Chaussures").assert_success()?;
    catree!(temp_dir.path(), "store", "rename", "nope", "3", "X").assert_failure()?;
    catree!(temp_dir.path(), "store", "rename", "fr", "99", "X").assert_failure()?;

    let fr = catree!(temp_dir.path(), "tree", "-s", "fr").assert_success()?;
    assert!(fr.contains_stdout("Chaussures"));
    let default = catree!(temp_dir.path(), "tree").assert_success()?;
    assert!(default.contains_stdout("Shoes"));
    assert!(!default.contains_stdout("Chaussures"));
    Ok(())
}

#[test]
fn test_config_shows_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;

    let result = catree!(temp_dir.path(), "config").assert_success()?;
    assert!(result.contains_stdout("allowed_extensions"));
    assert!(result.contains_stdout("\"txt\""));
    Ok(())
}

#[test]
fn test_custom_extension_from_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;
    std::fs::write(
        temp_dir.path().join(".catree/config.toml"),
        "[import]\nallowed_extensions = [\"csv\"]\nprogress = false\n",
    )?;

    let input = write_input(temp_dir.path(), "categories.csv", "A\n");
    catree!(temp_dir.path(), "import", "-s", "default", "-f", input.to_str().unwrap())
        .assert_success()?;
    Ok(())
}
