use assert_cmd::Command;
use predicates::prelude::*;

fn vicecrm(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vicecrm").unwrap();
    cmd.env("VICECRM_DIR", dir.path());
    cmd.env_remove("VICECRM_DB_PATH");
    cmd
}

#[test]
fn get_returns_defaults_on_fresh_database() {
    let dir = tempfile::tempdir().unwrap();

    vicecrm(&dir)
        .args(["get", "branding.companyName"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vice"));
}

#[test]
fn set_then_get_round_trips() {
    let dir = tempfile::tempdir().unwrap();

    vicecrm(&dir)
        .args(["set", "branding.primaryColor", "#123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    vicecrm(&dir)
        .args(["get", "branding.primaryColor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#123456"));
}

#[test]
fn invalid_color_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    vicecrm(&dir)
        .args(["set", "branding.primaryColor", "#gggggg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hex color"));

    vicecrm(&dir)
        .args(["get", "branding.primaryColor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#667eea"));
}

#[test]
fn unknown_field_path_suggests_show() {
    let dir = tempfile::tempdir().unwrap();

    vicecrm(&dir)
        .args(["get", "branding.shadowColor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown settings field"))
        .stderr(predicate::str::contains("vicecrm show"));
}

#[test]
fn reset_restores_defaults() {
    let dir = tempfile::tempdir().unwrap();

    vicecrm(&dir)
        .args(["set", "general.systemName", "Other CRM"])
        .assert()
        .success();

    vicecrm(&dir).args(["reset", "--yes"]).assert().success();

    vicecrm(&dir)
        .args(["get", "general.systemName"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profit CRM"));
}

#[test]
fn show_json_prints_all_sections() {
    let dir = tempfile::tempdir().unwrap();

    vicecrm(&dir)
        .args(["--format", "json", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"general\""))
        .stdout(predicate::str::contains("\"branding\""))
        .stdout(predicate::str::contains("\"security\""))
        .stdout(predicate::str::contains("\"backup\""));
}

#[test]
fn backup_create_and_restore_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let backup_path = dir.path().join("backup.json");

    vicecrm(&dir)
        .args(["set", "branding.companyName", "Acme"])
        .assert()
        .success();

    vicecrm(&dir)
        .args(["backup", "create", "--output"])
        .arg(&backup_path)
        .assert()
        .success();

    vicecrm(&dir).args(["reset", "--yes"]).assert().success();

    vicecrm(&dir)
        .args(["backup", "restore", "--yes"])
        .arg(&backup_path)
        .assert()
        .success();

    vicecrm(&dir)
        .args(["get", "branding.companyName"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"));
}

#[test]
fn oversized_logo_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let logo_path = dir.path().join("logo.png");
    std::fs::write(&logo_path, vec![0u8; 2 * 1024 * 1024 + 1]).unwrap();

    vicecrm(&dir)
        .args(["logo", "set"])
        .arg(&logo_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));

    vicecrm(&dir)
        .args(["get", "branding.logoUrl"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\n$").unwrap());
}
