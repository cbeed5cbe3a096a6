use assert_cmd::Command;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("run"))
        .stdout(predicates::str::contains("check"))
        .stdout(predicates::str::contains("repl"))
        .stdout(predicates::str::contains("server"));
}

#[test]
fn test_run_requires_file() {
    let mut cmd = Command::cargo_bin("labbook").unwrap();
    cmd.arg("run");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("<FILE>"));
}
