//! The clear command and its confirmation prompt

use crate::catree;
use crate::common::write_input;
use anyhow::Result;
use tempfile::TempDir;

fn imported_catalog() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    catree!(temp_dir.path(), "init").assert_success()?;
    let input = write_input(temp_dir.path(), "categories.txt", "A/B/C\nD\n");
    catree!(temp_dir.path(), "import", "-s", "default", "-f", input.to_str().unwrap())
        .assert_success()?;
    Ok(temp_dir)
}

#[test]
fn test_clear_declined_keeps_categories() -> Result<()> {
    let temp_dir = imported_catalog()?;

    let result = catree!(temp_dir.path(), "clear").stdin("n\n").assert_success()?;
    assert!(result.contains_stdout("Are you sure you want to reset all store categories? (Y/N) >"));
    assert!(result.contains_stdout("Aborted."));

    let tree = catree!(temp_dir.path(), "tree").assert_success()?;
    assert!(tree.contains_stdout("(4 categories)"));
    Ok(())
}

#[test]
fn test_clear_confirmed_reseeds() -> Result<()> {
    let temp_dir = imported_catalog()?;

    catree!(temp_dir.path(), "clear").stdin("Y\n").assert_success()?;
    let tree = catree!(temp_dir.path(), "tree").assert_success()?;
    assert!(tree.contains_stdout("(0 categories)"));

    // Ids start after the seed again
    let input = write_input(temp_dir.path(), "again.txt", "X\n");
    catree!(temp_dir.path(), "import", "-s", "default", "-f", input.to_str().unwrap())
        .assert_success()?;
    let tree = catree!(temp_dir.path(), "tree").assert_success()?;
    assert!(tree.contains_stdout("1/2/3"));
    Ok(())
}

#[test]
fn test_clear_yes_skips_prompt() -> Result<()> {
    let temp_dir = imported_catalog()?;

    let result = catree!(temp_dir.path(), "clear", "-y").assert_success()?;
    assert!(!result.contains_stdout("(Y/N)"));
    let tree = catree!(temp_dir.path(), "tree").assert_success()?;
    assert!(tree.contains_stdout("(0 categories)"));
    Ok(())
}
