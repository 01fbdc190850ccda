//! Shared helpers for the integration test suite.

use assert_cmd::Command;
use tempfile::TempDir;

/// Create a temp repository root with a `.workspace.yml` declaring the
/// given extension entries.
pub fn workspace_with_extensions(entries: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("create temp repo root");
    let mut yaml = String::from("vscode:\n  extensions:\n");
    for entry in entries {
        yaml.push_str(&format!("    - \"{entry}\"\n"));
    }
    std::fs::write(dir.path().join(".workspace.yml"), yaml).expect("write workspace config");
    dir
}

/// The extload binary with ambient configuration scrubbed, so tests only
/// see the arguments they pass explicitly.
pub fn extload() -> Command {
    let mut cmd = Command::cargo_bin("extload").expect("binary builds");
    cmd.env_remove("EXTLOAD_REPO_ROOT")
        .env_remove("EXTLOAD_CONTEXT_URL")
        .env_remove("EXTLOAD_DEBUG")
        .env_remove("RUST_LOG");
    cmd
}
