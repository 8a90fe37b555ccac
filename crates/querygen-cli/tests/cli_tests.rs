//! CLI integration tests for querygen.
//!
//! These tests verify command-line argument parsing, help output,
//! and exit codes for various error conditions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

/// Get a command for the querygen binary.
fn cmd() -> Command {
    Command::cargo_bin("querygen").unwrap()
}

/// Path to the shared users request fixture.
fn users_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("querygen")
        .join("tests")
        .join("fixtures")
        .join("users.json")
}

/// Write `content` to a temp file with the given suffix.
fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_shows_all_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_generate_subcommand_help() {
    cmd()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--request"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("querygen"));
}

#[test]
fn test_global_flags_and_defaults() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--engine"))
        .stdout(predicate::str::contains("--output-json"))
        .stdout(predicate::str::contains("[default: text]"))
        .stdout(predicate::str::contains("[default: info]"));
}

#[test]
fn test_no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Successful Runs
// =============================================================================

#[test]
fn test_generate_json_output() {
    let fixture = users_fixture();
    cmd()
        .args(["--output-json", "generate", "--request"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"UserStatus\""))
        .stdout(predicate::str::contains("\"UserEmailsRow\""))
        .stdout(predicate::str::contains("\"listUsersStmt\""));
}

#[test]
fn test_generate_summary_output() {
    let fixture = users_fixture();
    cmd()
        .args(["generate", "--request"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("// Code generated by querygen. DO NOT EDIT."))
        .stdout(predicate::str::contains("querygen v1.20.0"))
        .stdout(predicate::str::contains("Queries: 3 (1 new row structs)"))
        .stdout(predicate::str::contains(":many listUsers -> User"))
        .stdout(predicate::str::contains("Fingerprint: "));
}

#[test]
fn test_check_json_output() {
    let fixture = users_fixture();
    cmd()
        .args(["--output-json", "check", "--request"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""))
        .stdout(predicate::str::contains("\"queries\": 3"));
}

#[test]
fn test_engine_override_disables_rewrite() {
    let fixture = users_fixture();
    cmd()
        .args(["--engine", "mysql", "--output-json", "generate", "--request"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("status = $1 OR status = $1"));
}

#[test]
fn test_settings_file_replaces_request_settings() {
    let settings = temp_file(".yaml", "engine: postgresql\nkotlin:\n  emit_exact_table_names: true\n");
    let fixture = users_fixture();
    cmd()
        .arg("--config")
        .arg(settings.path())
        .args(["--output-json", "generate", "--request"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Users\""));
}

// =============================================================================
// Exit Code Tests
// =============================================================================

#[test]
fn test_missing_request_exits_with_code_7() {
    cmd()
        .args(["check", "--request", "nonexistent_request.json"])
        .assert()
        .code(7);
}

#[test]
fn test_invalid_json_exits_with_code_3() {
    let request = temp_file(".json", "{ \"catalog\": [");
    cmd()
        .args(["check", "--request"])
        .arg(request.path())
        .assert()
        .code(3);
}

#[test]
fn test_missing_default_schema_exits_with_code_1() {
    let request = temp_file(".json", "{ \"catalog\": { \"default_schema\": \"\" } }");
    cmd()
        .args(["check", "--request"])
        .arg(request.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("default_schema"));
}

#[test]
fn test_invalid_settings_exits_with_code_1() {
    let settings = temp_file(".yaml", "rename:\n  users: \"\"\n");
    let fixture = users_fixture();
    cmd()
        .arg("--config")
        .arg(settings.path())
        .args(["check", "--request"])
        .arg(&fixture)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("rename.users"));
}

#[test]
fn test_copyfrom_exits_with_code_2() {
    let request = temp_file(
        ".yaml",
        r#"
catalog:
  default_schema: public
  schemas:
    - name: public
queries:
  - name: LoadUsers
    cmd: ":copyfrom"
    text: COPY users FROM STDIN
"#,
    );
    cmd()
        .args(["check", "--request"])
        .arg(request.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("LoadUsers"));
}
