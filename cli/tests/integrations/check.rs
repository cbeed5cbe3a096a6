use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_check_clean_notebook() {
    let temp_dir = TempDir::new().unwrap();
    let notebook = temp_dir.path().join("clean.lab");
    fs::write(&notebook, "m = 2.0 +/- 0.1\nn = m * m\n").unwrap();

    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("check").arg(&notebook);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 bound, 0 dropped, 0 warning(s)"));
}

#[test]
fn test_cli_check_reports_dropped_lines() {
    let temp_dir = TempDir::new().unwrap();
    let notebook = temp_dir.path().join("broken.lab");
    fs::write(&notebook, "m = 2.0 +/- 0.1\nx = m * q\nq = 1.0 +/- 0.1\n").unwrap();

    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("check").arg(&notebook);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("line 2: unknown token 'q'"))
        .stdout(predicate::str::contains("'x' is not bound"))
        .stdout(predicate::str::contains("2 bound, 1 dropped"));
}

#[test]
fn test_cli_check_warns_on_numeric_fallback() {
    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.args(["check", "-"]).write_stdin("m = 1.2.3 +/- 0.1\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("'1.2.3' in the definition of 'm'"))
        .stdout(predicate::str::contains("1 warning(s)"));
}

#[test]
fn test_cli_check_depth_limit() {
    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.args(["check", "-", "--max-depth", "1"])
        .write_stdin("a = 1.0 +/- 0.1\nb = a + a + a\n");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("nests deeper than 1"));
}
