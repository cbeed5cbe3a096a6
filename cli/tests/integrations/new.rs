use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_new_appends_extension() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("new").arg(temp_dir.path().join("pendulum"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let written = fs::read_to_string(temp_dir.path().join("pendulum.lab")).unwrap();
    assert_eq!(written, labbook::EXAMPLE_DOCUMENT);
}

#[test]
fn test_cli_new_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let notebook = temp_dir.path().join("kept.lab");
    fs::write(&notebook, "k = 1.0 +/- 0.1\n").unwrap();

    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("new").arg(&notebook);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&notebook).unwrap(), "k = 1.0 +/- 0.1\n");

    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("new").arg(&notebook).arg("--force");
    cmd.assert().success();
    assert_eq!(
        fs::read_to_string(&notebook).unwrap(),
        labbook::EXAMPLE_DOCUMENT
    );
}

#[test]
fn test_cli_new_notebook_runs() {
    let temp_dir = TempDir::new().unwrap();
    let notebook = temp_dir.path().join("starter.lab");

    Command::cargo_bin("labbook")
        .unwrap()
        .arg("new")
        .arg(&notebook)
        .assert()
        .success();

    Command::cargo_bin("labbook")
        .unwrap()
        .arg("run")
        .arg(&notebook)
        .arg("--raw")
        .assert()
        .success()
        .stdout("m = 10.0 ± 0.5\nL = 100.0 ± 1.0\nx = 1000 ± 50\n");
}
