// tests/integration_tests/counting_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use forcecount::{DEFAULT_MARKER, ForceTally, ScanError, process_file, report_files};

#[test]
fn test_counting_example_logs() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let test4 = process_file(&temp_dir.path().join("test4.log"), DEFAULT_MARKER)?;
    assert_eq!(
        test4,
        ForceTally {
            path_count: 2,
            force_count: 8
        }
    );

    let orca = process_file(&temp_dir.path().join("test4_orca.log"), DEFAULT_MARKER)?;
    assert_eq!(orca.path_count, 3, "Three marker lines");
    assert_eq!(orca.force_count, 43, "12 + 30 + 1");

    let plain = process_file(&temp_dir.path().join("plain.log"), DEFAULT_MARKER)?;
    assert_eq!(plain, ForceTally::new(), "No marker lines gives (0, 0)");

    Ok(())
}

#[test]
fn test_report_lines_follow_list_order() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = vec![
        temp_dir.path().join("plain.log"),
        temp_dir.path().join("test4.log"),
    ];

    let mut first = Vec::new();
    report_files(&files, DEFAULT_MARKER, false, &mut first)?;
    let mut second = Vec::new();
    report_files(&files, DEFAULT_MARKER, false, &mut second)?;

    let text = String::from_utf8(first.clone())?;
    let expected = format!(
        "file: {}, path: 0, force: 0\nfile: {}, path: 2, force: 8\n",
        files[0].display(),
        files[1].display()
    );
    assert_eq!(text, expected);
    assert_eq!(first, second, "Same files give the same output");

    Ok(())
}

#[test]
fn test_parse_failure_aborts_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(
        temp_dir.path(),
        "bad.log",
        "NUMBER OF FORCE CALCULATIONS: abc\n",
    )?;

    let err = process_file(&temp_dir.path().join("bad.log"), DEFAULT_MARKER)
        .expect_err("non-integer value must fail");
    assert!(err.is_parse_error());
    assert!(matches!(err, ScanError::Parse { line: 1, ref value, .. } if value == "abc"));

    Ok(())
}

#[test]
fn test_missing_file_is_not_found() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let err = process_file(&temp_dir.path().join("test5.log"), DEFAULT_MARKER)
        .expect_err("missing file must fail");
    assert!(err.is_not_found());
    Ok(())
}
