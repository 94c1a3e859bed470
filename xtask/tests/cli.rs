use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn no_arguments_prints_help() {
    let mut cmd = Command::cargo_bin("xtask").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Developer toolkit for the THeMIS workspace"));
}

#[test]
fn release_check_is_listed() {
    let mut cmd = Command::cargo_bin("xtask").unwrap();
    cmd.arg("--help").assert().success().stdout(predicate::str::contains("release-check"));
}

#[cfg(feature = "test-build")]
#[test]
fn release_check_rejects_test_build() {
    let mut cmd = Command::cargo_bin("xtask").unwrap();
    cmd.arg("release-check")
        .arg("--allow-dirty")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Compiled: Version: 1.2.0-test"))
        .stdout(predicate::str::contains("compiled as a test build"));
}

#[cfg(not(feature = "test-build"))]
#[test]
fn release_check_reports_release_build() {
    let mut cmd = Command::cargo_bin("xtask").unwrap();
    cmd.arg("release-check")
        .assert()
        .stdout(predicate::str::contains("Compiled: Version: 1.2.0\n"))
        .stdout(predicate::str::contains("compiled as a test build").not());
}
