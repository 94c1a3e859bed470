use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_version_line_first() {
    let mut cmd = Command::cargo_bin("themis-diag").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Version: 1.2.0"))
        .stdout(predicate::str::contains("UDP buffer size: 2014 bytes"))
        .stdout(predicate::str::contains("Fan count: 5"));
}

#[test]
fn json_report_carries_configured_values() {
    let mut cmd = Command::cargo_bin("themis-diag").unwrap();
    let output = cmd.args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["version"]["major"], 1);
    assert_eq!(value["version"]["minor"], 2);
    assert_eq!(value["version"]["patch"], 0);
    assert_eq!(value["udp"]["buffer_size"], 2014);
    assert_eq!(value["fan"]["count"], 5);
}

#[test]
fn logs_identity_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");

    let mut cmd = Command::cargo_bin("themis-diag").unwrap();
    cmd.arg("-v").arg("--log-dir").arg(&log_dir).assert().success();

    let logged = std::fs::read_dir(&log_dir)
        .unwrap()
        .flatten()
        .map(|entry| std::fs::read_to_string(entry.path()).unwrap())
        .collect::<String>();
    assert!(logged.contains("Version: 1.2.0"), "identity missing from {logged}");
}

#[test]
fn rejects_unknown_format() {
    let mut cmd = Command::cargo_bin("themis-diag").unwrap();
    cmd.args(["--format", "yaml"]).assert().failure();
}

#[test]
fn verbose_help_mentions_rust_log() {
    let mut cmd = Command::cargo_bin("themis-diag").unwrap();
    cmd.arg("--help").assert().success().stdout(predicate::str::contains("RUST_LOG"));
}
