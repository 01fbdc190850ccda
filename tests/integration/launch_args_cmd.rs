//! Integration tests for the `launch-args` command.

use crate::common::{extload, workspace_with_extensions};
use serial_test::serial;

#[test]
fn test_bare_invocation_emits_only_start_server() {
    extload().args(["launch-args"]).assert().success().stdout("--start-server\n");
}

#[test]
fn test_github_context_emits_builtin_extension_token() {
    extload()
        .args(["launch-args", "--context-url", "https://github.com/org/project"])
        .assert()
        .success()
        .stdout("--start-server --install-builtin-extension github.vscode-pull-request-github\n");
}

#[test]
fn test_configured_extensions_become_install_pairs() {
    let dir = workspace_with_extensions(&["Foo.Bar", "baz.qux"]);

    extload()
        .args(["launch-args", "--repo-root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("--start-server --install-extension foo.bar --install-extension baz.qux\n");
}

#[test]
fn test_duplicates_are_suppressed_first_seen() {
    let dir = workspace_with_extensions(&["foo.bar", "Foo.Bar", "baz.qux"]);

    extload()
        .args(["launch-args", "--repo-root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("--start-server --install-extension foo.bar --install-extension baz.qux\n");
}

#[test]
fn test_builtin_token_precedes_configured_extensions() {
    let dir = workspace_with_extensions(&["foo.bar"]);

    extload()
        .args(["launch-args", "--repo-root"])
        .arg(dir.path())
        .args(["--context-url", "https://github.com/org/project"])
        .assert()
        .success()
        .stdout(
            "--start-server --install-builtin-extension github.vscode-pull-request-github \
             --install-extension foo.bar\n",
        );
}

#[test]
fn test_debug_flag_appends_instrumentation_tokens() {
    extload()
        .args(["launch-args", "--debug"])
        .assert()
        .success()
        .stdout("--start-server --inspect --log=trace\n");
}

#[test]
#[serial]
fn test_debug_env_variable_enables_instrumentation() {
    extload()
        .env("EXTLOAD_DEBUG", "true")
        .args(["launch-args"])
        .assert()
        .success()
        .stdout("--start-server --inspect --log=trace\n");
}

#[test]
fn test_passthrough_args_come_last() {
    extload()
        .args(["launch-args", "--debug", "--", "--editor-flag", "value"])
        .assert()
        .success()
        .stdout("--start-server --inspect --log=trace --editor-flag value\n");
}

#[test]
fn test_stdout_carries_tokens_only_under_verbose_logging() {
    // Logging goes to stderr; stdout must stay splice-safe for the launcher.
    let dir = workspace_with_extensions(&["foo.bar"]);

    extload()
        .args(["launch-args", "--verbose", "--repo-root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("--start-server --install-extension foo.bar\n");
}
