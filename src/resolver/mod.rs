//! Extension resolution engine.
//!
//! This module is the core of extload: it turns the ordered list of raw
//! extension entries declared in the workspace config into a concrete,
//! launch-ready list of install targets.
//!
//! # Resolution pipeline
//!
//! 1. Every entry is classified (see [`classify`]) in configuration order.
//! 2. Identifiers and existing local archives resolve synchronously and
//!    keep their relative order.
//! 3. Remote URLs fan out into one download task each; successful
//!    downloads append their temp-file path to the shared result under a
//!    lock, in completion order. Failed downloads are logged and dropped.
//! 4. The coordinator joins every download before returning - partial
//!    failure shrinks the result, it never aborts the batch.
//!
//! Callers therefore must not assume a stable position for remote
//! results; only the relative order of synchronous entries is guaranteed.
//!
//! # Output shapes
//!
//! Two serializations share this single resolution pass:
//! - a deduplicated sequence (the `resolve` command), and
//! - a flattened `--install-extension` argument string (the `launch-args`
//!   command), built from [`format_install_args`].

mod classify;
mod fetch;

pub use classify::{EntryKind, classify};
pub use fetch::ExtensionFetcher;

use std::path::Path;
use std::sync::Arc;

use futures::future;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::WorkspaceConfig;
use crate::constants::{GITHUB_CONTEXT_MARKER, GITHUB_PR_EXTENSION, INSTALL_EXTENSION_FLAG};
use crate::core::ExtloadError;

/// Coordinates classification and concurrent downloads for a workspace.
#[derive(Debug, Clone)]
pub struct ExtensionResolver {
    fetcher: ExtensionFetcher,
}

impl ExtensionResolver {
    /// Create a resolver with the default fetcher.
    ///
    /// # Errors
    ///
    /// Returns [`ExtloadError::HttpClientInit`] if the HTTP client cannot
    /// be constructed.
    pub fn new() -> Result<Self, ExtloadError> {
        Ok(Self {
            fetcher: ExtensionFetcher::new()?,
        })
    }

    /// Create a resolver around an existing fetcher (used by tests to
    /// shrink the download timeout).
    #[must_use]
    pub const fn with_fetcher(fetcher: ExtensionFetcher) -> Self {
        Self {
            fetcher,
        }
    }

    /// Resolve an ordered list of raw entries against a repository root.
    ///
    /// Synchronous resolutions (identifiers, local archives) are appended
    /// in configuration order. Every remote URL spawns its own download
    /// task; the tasks share the result vector behind a mutex and append
    /// on completion, so remote paths interleave in completion order. All
    /// downloads are joined before this function returns.
    ///
    /// Individual download failures are logged at `warn` and contribute
    /// nothing - this function itself never fails.
    pub async fn resolve_entries(&self, entries: &[String], repo_root: &Path) -> Vec<String> {
        let resolved = Arc::new(Mutex::new(Vec::with_capacity(entries.len())));
        let mut downloads = Vec::new();

        for entry in entries {
            match classify(entry, repo_root) {
                EntryKind::Identifier(id) => resolved.lock().await.push(id),
                EntryKind::LocalArchive(path) => {
                    resolved.lock().await.push(path.display().to_string());
                }
                EntryKind::RemoteUrl(url) => {
                    let fetcher = self.fetcher.clone();
                    let resolved = Arc::clone(&resolved);
                    downloads.push(tokio::spawn(async move {
                        match fetcher.fetch(&url).await {
                            Ok(path) => {
                                resolved.lock().await.push(path.display().to_string());
                            }
                            Err(err) => warn!("dropping extension {url}: {err}"),
                        }
                    }));
                }
            }
        }

        future::join_all(downloads).await;

        let mut resolved = resolved.lock().await;
        std::mem::take(&mut *resolved)
    }

    /// Resolve the extensions configured under a repository root.
    ///
    /// Reads `<repo_root>/.workspace.yml` and resolves its entry list. An
    /// absent root, a missing config file, or a config that fails to parse
    /// all yield an empty list - by design a broken config must never
    /// block editor startup, so the error is logged at `debug` and
    /// swallowed here.
    pub async fn resolve_configured(&self, repo_root: Option<&Path>) -> Vec<String> {
        let Some(repo_root) = repo_root.filter(|p| !p.as_os_str().is_empty()) else {
            return Vec::new();
        };

        let config = match WorkspaceConfig::load(repo_root) {
            Ok(config) => config,
            Err(err) => {
                debug!("no workspace extensions: {err}");
                return Vec::new();
            }
        };

        self.resolve_entries(config.extensions(), repo_root).await
    }

    /// Resolve the full workspace extension list, context extension
    /// included.
    ///
    /// When the workspace context URL points at GitHub the fixed
    /// [`GITHUB_PR_EXTENSION`] identifier leads the list and participates
    /// in downstream deduplication like any configured entry.
    pub async fn resolve_workspace(
        &self,
        repo_root: Option<&Path>,
        context_url: Option<&str>,
    ) -> Vec<String> {
        let mut resolved = Vec::new();
        if let Some(ext) = context_extension(context_url) {
            resolved.push(ext.to_string());
        }
        resolved.extend(self.resolve_configured(repo_root).await);
        resolved
    }
}

/// The fixed extension implied by the workspace context URL, if any.
#[must_use]
pub fn context_extension(context_url: Option<&str>) -> Option<&'static str> {
    context_url
        .filter(|url| url.contains(GITHUB_CONTEXT_MARKER))
        .map(|_| GITHUB_PR_EXTENSION)
}

/// Drop duplicate resolutions, keeping the first occurrence of each value.
///
/// Duplicates are exact string matches - identifiers are already
/// lower-cased by classification, paths are compared verbatim.
#[must_use]
pub fn dedup_first_seen(extensions: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    extensions.into_iter().filter(|ext| seen.insert(ext.clone())).collect()
}

/// Flatten resolved extensions into `--install-extension <value>` tokens.
///
/// Deduplicates first-seen before flattening, so `[a, a, b]` produces one
/// install pair for `a` followed by one for `b`.
#[must_use]
pub fn format_install_args(extensions: Vec<String>) -> Vec<String> {
    dedup_first_seen(extensions)
        .into_iter()
        .flat_map(|ext| [INSTALL_EXTENSION_FLAG.to_string(), ext])
        .collect()
}
