use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PENDULUM: &str = "\
# Pendulum
m = 10.0 +/- 0.5
L = 100.0 +/- 1.0
x = m * L
";

#[test]
fn test_cli_run_raw_output() {
    let temp_dir = TempDir::new().unwrap();
    let notebook = temp_dir.path().join("pendulum.lab");
    fs::write(&notebook, PENDULUM).unwrap();

    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("run").arg(&notebook).arg("--raw");

    cmd.assert()
        .success()
        .stdout("m = 10.0 ± 0.5\nL = 100.0 ± 1.0\nx = 1000 ± 50\n");
}

#[test]
fn test_cli_run_table_output() {
    let temp_dir = TempDir::new().unwrap();
    let notebook = temp_dir.path().join("pendulum.lab");
    fs::write(&notebook, PENDULUM).unwrap();

    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("run").arg(&notebook);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("1000 ± 50"));
}

#[test]
fn test_cli_run_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let notebook = temp_dir.path().join("pendulum.lab");
    fs::write(&notebook, PENDULUM).unwrap();

    let output = Command::cargo_bin("labbook")
        .unwrap()
        .arg("run")
        .arg(&notebook)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[2]["name"], "x");
    assert_eq!(parsed[2]["value"], 1000.0);
    assert_eq!(parsed[2]["display"], "1000 ± 50");

    // The raw uncertainty keeps every digit
    let uncertainty = parsed[2]["uncertainty"].as_f64().unwrap();
    assert!((uncertainty - 50.990195).abs() < 1e-5);
}

#[test]
fn test_cli_run_from_stdin() {
    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("run")
        .arg("-")
        .arg("--raw")
        .write_stdin("g = 9.81 +/- 0.02\nh = g * 2\n");

    cmd.assert()
        .success()
        .stdout("g = 9.81 ± 0.02\nh = 19.62 ± 0.04\n");
}

#[test]
fn test_cli_run_grammar_flag_changes_results() {
    let notebook = "a = 2.0 +/- 0.1\nb = 1 + a * 3\n";

    Command::cargo_bin("labbook")
        .unwrap()
        .args(["run", "-", "--raw"])
        .write_stdin(notebook)
        .assert()
        .success()
        .stdout(predicate::str::contains("b = 9.0 ± 0.3"));

    Command::cargo_bin("labbook")
        .unwrap()
        .args(["run", "-", "--raw", "--grammar", "standard"])
        .write_stdin(notebook)
        .assert()
        .success()
        .stdout(predicate::str::contains("b = 7.0 ± 0.3"));
}

#[test]
fn test_cli_run_skips_bad_lines() {
    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.args(["run", "-", "--raw"])
        .write_stdin("a = 1.0 +/- 0.1\nb = a * nope\nthis is prose\nc = a + a\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a = 1.0 ± 0.1"))
        .stdout(predicate::str::contains("c = 2.0"))
        .stdout(predicate::str::contains("b =").not());
}

#[test]
fn test_cli_run_nonexistent_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("run").arg(temp_dir.path().join("missing.lab"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_cli_run_rejects_unknown_grammar() {
    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.args(["run", "-", "--grammar", "pratt"]).write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown grammar 'pratt'"));
}
