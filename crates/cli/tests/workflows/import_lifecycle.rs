//! Init, import, re-import and inspect the tree

use crate::catree;
use crate::common::write_input;
use anyhow::Result;
use tempfile::TempDir;

const EXAMPLE: &str = "Parent Category\n\
                       Parent Category/Child Category\n\
                       Parent Category/Child Category/Another Child\n";

#[test]
fn test_init_creates_layout() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = catree!(temp_dir.path(), "init").assert_success()?;

    assert!(result.contains_stdout("Successfully initialized catalog"));
    assert!(temp_dir.path().join(".catree/catalog.db").is_dir());
    assert!(temp_dir.path().join(".catree/config.toml").is_file());
    assert!(temp_dir.path().join(".catree/logs").is_dir());

    // A second init is refused
    catree!(temp_dir.path(), "init").assert_failure()?;
    Ok(())
}

#[test]
fn test_import_then_reimport() -> Result<()> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;
    let input = write_input(temp_dir.path(), "categories.txt", EXAMPLE);
    let file = input.to_str().unwrap();

    let first = catree!(temp_dir.path(), "import", "-s", "default", "-f", file, "--json")
        .assert_success()?
        .json()?;
    assert_eq!(first["lines"], 3);
    assert_eq!(first["created"], 3);
    assert_eq!(first["existing"], 3);

    let second = catree!(temp_dir.path(), "import", "-s", "default", "-f", file, "--json")
        .assert_success()?
        .json()?;
    assert_eq!(second["created"], 0);
    assert_eq!(second["existing"], 6);
    Ok(())
}

#[test]
fn test_text_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;
    let input = write_input(temp_dir.path(), "categories.txt", EXAMPLE);

    let result = catree!(
        temp_dir.path(),
        "import",
        "--store",
        "default",
        "--file",
        input.to_str().unwrap()
    )
    .assert_success()?;

    assert!(result.contains_stdout("3 categories found to process. Beginning import..."));
    assert!(result.contains_stdout("-- Processed 3 records in"));
    assert!(result.contains_stdout("No. of existing categories:"));
    assert!(result.contains_stdout("No. of new categories created:"));
    Ok(())
}

#[test]
fn test_tree_lists_imported_paths() -> Result<()> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;
    let input = write_input(temp_dir.path(), "categories.txt", "Men/Shoes\nWomen\n");
    catree!(temp_dir.path(), "import", "-s", "default", "-f", input.to_str().unwrap())
        .assert_success()?;

    let result = catree!(temp_dir.path(), "tree").assert_success()?;
    assert!(result.contains_stdout("(3 categories)"));
    assert!(result.contains_stdout("Men/Shoes"));
    assert!(result.contains_stdout("Women"));
    Ok(())
}

#[test]
fn test_unknown_store_fails_before_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;
    let input = write_input(temp_dir.path(), "categories.txt", EXAMPLE);

    let result = catree!(temp_dir.path(), "import", "-s", "nope", "-f", input.to_str().unwrap())
        .assert_failure()?;
    assert!(result.contains_stderr("ID for store code nope not found"));

    let tree = catree!(temp_dir.path(), "tree").assert_success()?;
    assert!(tree.contains_stdout("(0 categories)"));
    Ok(())
}

#[test]
fn test_bad_extension_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;
    let input = write_input(temp_dir.path(), "categories.csv", EXAMPLE);

    let result = catree!(temp_dir.path(), "import", "-s", "default", "-f", input.to_str().unwrap())
        .assert_failure()?;
    assert!(result.contains_stderr("Valid extensions are: txt"));
    Ok(())
}

#[test]
fn test_catalog_found_from_subdirectory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;
    let nested = temp_dir.path().join("var/import");
    std::fs::create_dir_all(&nested)?;
    let input = write_input(&nested, "categories.txt", "A/B\n");

    let report = catree!(&nested, "import", "-s", "default", "-f", input.to_str().unwrap(), "--json")
        .assert_success()?
        .json()?;
    assert_eq!(report["created"], 2);
    Ok(())
}

#[test]
fn test_missing_catalog_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = catree!(temp_dir.path(), "tree").assert_failure()?;
    assert!(result.contains_stderr("Not a catree project"));
    Ok(())
}
