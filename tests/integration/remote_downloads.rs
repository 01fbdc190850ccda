//! Integration tests for remote extension downloads.
//!
//! These drive the compiled binary against a local canned-response HTTP
//! server from `extload_cli::test_utils`, so the full pipeline - config,
//! classification, concurrent fetch, serialization - runs without real
//! network access. The binary is invoked on a blocking thread while the
//! server lives on the test runtime.

use crate::common::{extload, workspace_with_extensions};
use extload_cli::test_utils::{CannedResponse, TestHttpServer};
use std::path::{Path, PathBuf};

async fn run_resolve(repo_root: PathBuf) -> String {
    tokio::task::spawn_blocking(move || {
        let assert = extload()
            .args(["resolve", "--repo-root"])
            .arg(&repo_root)
            .assert()
            .success();
        String::from_utf8(assert.get_output().stdout.clone()).unwrap()
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_successful_download_resolves_to_temp_file_with_body() {
    let server = TestHttpServer::start()
        .route("/ext.vsix", CannedResponse::ok(b"archive body".to_vec()))
        .serve()
        .await;
    let dir = workspace_with_extensions(&[&server.url("/ext.vsix")]);

    let stdout = run_resolve(dir.path().to_path_buf()).await;

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let downloaded = Path::new(lines[0]);
    assert!(downloaded.to_string_lossy().ends_with(".vsix"));
    assert_eq!(std::fs::read(downloaded).unwrap(), b"archive body");
    std::fs::remove_file(downloaded).unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_404_download_is_dropped_silently() {
    let server = TestHttpServer::start()
        .route("/gone.vsix", CannedResponse::status(404, "Not Found"))
        .serve()
        .await;
    let dir = workspace_with_extensions(&[&server.url("/gone.vsix")]);

    let stdout = run_resolve(dir.path().to_path_buf()).await;
    assert_eq!(stdout, "");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failed_download_leaves_other_entries_intact() {
    let server = TestHttpServer::start()
        .route("/ok.vsix", CannedResponse::ok(b"good".to_vec()))
        .route("/gone.vsix", CannedResponse::status(404, "Not Found"))
        .serve()
        .await;
    let dir = workspace_with_extensions(&[
        "some.identifier",
        &server.url("/gone.vsix"),
        &server.url("/ok.vsix"),
    ]);

    let stdout = run_resolve(dir.path().to_path_buf()).await;

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.contains(&"some.identifier"));
    let downloaded = lines.iter().find(|l| l.ends_with(".vsix")).unwrap();
    assert_eq!(std::fs::read(downloaded).unwrap(), b"good");
    std::fs::remove_file(downloaded).unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_launch_args_installs_downloaded_archive() {
    let server = TestHttpServer::start()
        .route("/ext.vsix", CannedResponse::ok(b"archive".to_vec()))
        .serve()
        .await;
    let dir = workspace_with_extensions(&["foo.bar", &server.url("/ext.vsix")]);
    let repo_root = dir.path().to_path_buf();

    let stdout = tokio::task::spawn_blocking(move || {
        let assert = extload()
            .args(["launch-args", "--repo-root"])
            .arg(&repo_root)
            .assert()
            .success();
        String::from_utf8(assert.get_output().stdout.clone()).unwrap()
    })
    .await
    .unwrap();

    let tokens: Vec<&str> = stdout.split_whitespace().collect();
    assert_eq!(tokens[0], "--start-server");
    assert_eq!(tokens.iter().filter(|t| **t == "--install-extension").count(), 2);
    assert!(tokens.contains(&"foo.bar"));
    let downloaded = tokens.iter().find(|t| t.ends_with(".vsix")).unwrap();
    assert_eq!(std::fs::read(downloaded).unwrap(), b"archive");
    std::fs::remove_file(downloaded).unwrap();
}
