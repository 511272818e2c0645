use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("folio")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("type"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_type_help_shows_flags() {
    cargo_bin_cmd!("folio")
        .args(["type", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--cycles"))
        .stdout(predicate::str::contains("--simulate"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("folio")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_view_without_terminal_points_to_type() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .arg("view")
        .assert()
        .failure()
        .stderr(predicate::str::contains("folio type"));
}
