// tests/integration_tests/targets_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use forcecount::{DEFAULT_MARKER, report_files, resolve_targets};

#[test]
fn test_directory_and_glob_targets() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let targets = vec![
        temp_dir.path().join("runs"),
        temp_dir.path().join("test4*.log"),
    ];

    let files = resolve_targets(&targets, "log")?;
    assert_eq!(
        files,
        vec![
            temp_dir.path().join("runs/run1.log"),
            temp_dir.path().join("runs/run2.log"),
            temp_dir.path().join("test4.log"),
            temp_dir.path().join("test4_orca.log"),
        ]
    );

    let mut out = Vec::new();
    let summary = report_files(&files, DEFAULT_MARKER, false, &mut out)?;
    assert_eq!(summary.files_reported, 4);
    assert_eq!(summary.path_count, 1 + 2 + 2 + 3);
    assert_eq!(summary.force_count, 4 + 12 + 8 + 43);
    Ok(())
}

#[test]
fn test_extension_selects_directory_files() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = resolve_targets(&[temp_dir.path().join("runs")], "out")?;
    assert_eq!(files, vec![temp_dir.path().join("runs/run2.out")]);
    Ok(())
}

#[test]
fn test_named_file_with_brackets_is_reported() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(
        temp_dir.path(),
        "run[1].log",
        "NUMBER OF FORCE CALCULATIONS: 4\n",
    )?;
    let path = temp_dir.path().join("run[1].log");

    let files = resolve_targets(&[path.clone()], "log")?;
    let mut out = Vec::new();
    let summary = report_files(&files, DEFAULT_MARKER, false, &mut out)?;

    assert_eq!(summary.files_reported, 1);
    assert_eq!(
        String::from_utf8(out)?,
        format!("file: {}, path: 1, force: 4\n", path.display())
    );
    Ok(())
}
