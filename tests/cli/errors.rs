use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_missing_root_argument() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("<ROOT>"));
    assert!(!test.root().join("all_keys.json").exists());

    Ok(())
}

#[test]
fn test_nonexistent_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("does-not-exist").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));
    assert_eq!(stdout(&output), "");
    assert!(!test.root().join("all_keys.json").exists());
    assert!(!test.root().join("unused_keys.json").exists());

    Ok(())
}

#[test]
fn test_root_is_a_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("file.ts", "")?;

    let output = test.command().arg("file.ts").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("is not a directory"));

    Ok(())
}

#[test]
fn test_strict_fails_on_unused_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_definitions("app", r#"{"hello": ""}"#)?;

    let output = test.scan_command().arg("--strict").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Total keys: 1, unused keys: 1\n");
    assert!(test.root().join("unused_keys.json").is_file());

    Ok(())
}

#[test]
fn test_strict_passes_when_everything_is_used() -> Result<()> {
    let test = CliTest::new()?;
    test.write_definitions("app", r#"{"hello": ""}"#)?;
    test.write_file("app/index.ts", "hello")?;

    let output = test.scan_command().arg("--strict").output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_invalid_jobs_value() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().args(["--jobs", "many"]).output()?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unwritable_report_does_not_block_the_other() -> Result<()> {
    let test = CliTest::new()?;
    test.write_definitions("app", r#"{"hello": ""}"#)?;
    // A non-empty directory in place of all_keys.json cannot be replaced.
    test.write_file("all_keys.json/keep", "")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("all_keys.json was not written"));
    assert!(test.root().join("unused_keys.json").is_file());
    assert_eq!(stdout(&output), "Total keys: 1, unused keys: 1\n");

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unlistable_subdirectory_is_fatal() -> Result<()> {
    use std::{fs, os::unix::fs::PermissionsExt};

    let test = CliTest::new()?;
    test.write_definitions("app", r#"{"hello": ""}"#)?;
    test.write_file("locked/inner.ts", "hello")?;
    let locked = test.root().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Root ignores permission bits; nothing to assert in that case.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let output = test.scan_command().output();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
    let output = output?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(!test.root().join("all_keys.json").exists());
    assert!(!test.root().join("unused_keys.json").exists());

    Ok(())
}
