use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_list_finds_notebooks_recursively() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("week2")).unwrap();
    fs::write(temp_dir.path().join("pendulum.lab"), labbook::EXAMPLE_DOCUMENT).unwrap();
    fs::write(
        temp_dir.path().join("week2").join("spring.lab"),
        "k = 4.0 +/- 0.2\nbad line\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "k = 1 +/- 1\n").unwrap();

    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Workspace contains 2 notebook(s)"))
        .stdout(predicate::str::contains("pendulum.lab"))
        .stdout(predicate::str::contains("spring.lab"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_cli_list_empty_directory() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Workspace contains 0 notebook(s)"));
}
