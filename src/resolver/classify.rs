//! Classification of raw extension entries.
//!
//! Each string from the workspace config is one of three things: a remote
//! URL to download, a local `.vsix` archive under the repository root, or
//! an opaque marketplace identifier. Classification never fails - anything
//! that is not recognizably a URL or an existing archive degrades to an
//! identifier and is left for the editor to reject.

use std::path::{Path, PathBuf};

use crate::constants::VSIX_SUFFIX;

/// The kind of a single extension entry, plus the normalized value to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Opaque extension identifier, lower-cased.
    ///
    /// Marketplace identifiers are case-insensitive, so they are normalized
    /// here once and compared verbatim afterwards.
    Identifier(String),

    /// Existing `.vsix` archive resolved against the repository root.
    LocalArchive(PathBuf),

    /// Remote archive to download before install.
    ///
    /// Carries the original string: URL paths are case-sensitive, so no
    /// normalization is applied. The scheme test is a plain prefix match,
    /// not full URL parsing - a malformed URL with the right prefix still
    /// lands here and fails later at fetch time.
    RemoteUrl(String),
}

/// Classify one raw extension entry.
///
/// The only side effect is an existence probe for candidate local
/// archives; for a fixed filesystem state the function is idempotent.
#[must_use]
pub fn classify(entry: &str, repo_root: &Path) -> EntryKind {
    let lowercase = entry.to_lowercase();
    if lowercase.starts_with("http://") || lowercase.starts_with("https://") {
        return EntryKind::RemoteUrl(entry.to_string());
    }

    if lowercase.ends_with(VSIX_SUFFIX) {
        let path = repo_root.join(entry);
        if path.exists() {
            return EntryKind::LocalArchive(path);
        }
    }

    EntryKind::Identifier(lowercase)
}
