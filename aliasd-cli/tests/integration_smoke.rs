//! Smoke tests for the aliasd binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_flags() {
    let mut cmd = Command::cargo_bin("aliasd").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--postgres-url"))
        .stdout(predicate::str::contains("8080"));
}

#[test]
fn test_rejects_non_numeric_port() {
    let mut cmd = Command::cargo_bin("aliasd").unwrap();
    cmd.args(["--port", "http"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_unparseable_database_url_is_fatal() {
    let mut cmd = Command::cargo_bin("aliasd").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env("RUST_LOG", "error")
        .args(["--port", "0", "--postgres-url", "not a connection string"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("failed to connect to database"));
}
