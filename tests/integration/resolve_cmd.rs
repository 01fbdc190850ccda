//! Integration tests for the `resolve` command.

use crate::common::{extload, workspace_with_extensions};
use predicates::prelude::*;
use serial_test::serial;

#[test]
fn test_no_repo_root_prints_nothing_and_succeeds() {
    extload().args(["resolve"]).assert().success().stdout("");
}

#[test]
fn test_missing_config_prints_nothing_and_succeeds() {
    let dir = tempfile::TempDir::new().unwrap();
    extload()
        .args(["resolve", "--repo-root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_malformed_config_prints_nothing_and_succeeds() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join(".workspace.yml"), "vscode: [broken").unwrap();

    extload()
        .args(["resolve", "--repo-root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_identifier_and_local_archive_resolve_in_order() {
    let dir = workspace_with_extensions(&["Foo.Bar-Extension", "./local.vsix"]);
    std::fs::write(dir.path().join("local.vsix"), b"archive").unwrap();

    let expected = format!(
        "foo.bar-extension\n{}\n",
        dir.path().join("./local.vsix").display()
    );
    extload()
        .args(["resolve", "--repo-root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_missing_archive_degrades_to_identifier() {
    let dir = workspace_with_extensions(&["Missing.vsix"]);

    extload()
        .args(["resolve", "--repo-root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("missing.vsix\n");
}

#[test]
fn test_duplicate_entries_collapse_first_seen() {
    let dir = workspace_with_extensions(&["foo.bar", "Foo.Bar", "baz.qux", "foo.bar"]);

    extload()
        .args(["resolve", "--repo-root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("foo.bar\nbaz.qux\n");
}

#[test]
fn test_github_context_extension_is_listed_first_and_once() {
    let dir = workspace_with_extensions(&["foo.bar", "github.vscode-pull-request-github"]);

    extload()
        .args(["resolve", "--repo-root"])
        .arg(dir.path())
        .args(["--context-url", "https://github.com/org/project"])
        .assert()
        .success()
        .stdout("github.vscode-pull-request-github\nfoo.bar\n");
}

#[test]
fn test_non_github_context_adds_nothing() {
    let dir = workspace_with_extensions(&["foo.bar"]);

    extload()
        .args(["resolve", "--repo-root"])
        .arg(dir.path())
        .args(["--context-url", "https://gitlab.com/org/project"])
        .assert()
        .success()
        .stdout("foo.bar\n");
}

#[test]
fn test_json_format_emits_an_array() {
    let dir = workspace_with_extensions(&["foo.bar", "baz.qux"]);

    let output = extload()
        .args(["resolve", "--format", "json", "--repo-root"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Vec<String> = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed, ["foo.bar", "baz.qux"]);
}

#[test]
fn test_unknown_format_fails_with_message() {
    extload()
        .args(["resolve", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format"));
}

#[test]
#[serial]
fn test_repo_root_falls_back_to_environment() {
    let dir = workspace_with_extensions(&["foo.bar"]);

    extload()
        .env("EXTLOAD_REPO_ROOT", dir.path())
        .args(["resolve"])
        .assert()
        .success()
        .stdout("foo.bar\n");
}
