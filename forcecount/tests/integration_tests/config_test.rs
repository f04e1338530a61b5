// tests/integration_tests/config_test.rs
use super::common::{create_config_file, setup_test_directory};
use anyhow::Result;
use forcecount::{Config, load_config};
use std::path::PathBuf;

#[test]
fn test_empty_config_file_keeps_defaults() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = load_config(temp_dir.path(), None)?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_config_file_is_discovered_from_subdirectory() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_config_file(
        temp_dir.path(),
        &[
            "# runs to compare",
            "files = [\"runs/run1.log\", \"test4.log\"]",
            "extension = \"out\"",
        ],
    )?;

    let config = load_config(&temp_dir.path().join("runs"), None)?;
    assert_eq!(
        config.files,
        vec![PathBuf::from("runs/run1.log"), PathBuf::from("test4.log")]
    );
    assert_eq!(config.extension, "out");
    assert!(!config.keep_going);
    Ok(())
}

#[test]
fn test_malformed_config_file_is_reported() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_config_file(temp_dir.path(), &["keep_going = \"yes\""])?;

    let err = load_config(temp_dir.path(), None).expect_err("bad type must fail");
    assert!(err.to_string().contains("forcecount.toml"));
    Ok(())
}
