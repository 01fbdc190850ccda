//! extload - Workspace Extension Resolver
//!
//! A small CLI that reads the list of editor extensions declared in a
//! workspace configuration file and resolves it into a concrete,
//! launch-ready set of install targets for an editor process.
//!
//! # Architecture Overview
//!
//! Resolution is a single-pass pipeline with no persistent state:
//!
//! 1. Each raw entry from the workspace config is classified as a bare
//!    extension identifier, a local `.vsix` archive under the repository
//!    root, or a remote URL.
//! 2. Remote URLs are downloaded concurrently (one task per URL, bounded
//!    only by a per-request timeout) into uniquely named temporary files.
//! 3. The collected results are deduplicated and serialized either as a
//!    plain list or as a flattened `--install-extension` argument string
//!    that a launcher splices into the editor command line.
//!
//! Every failure mode degrades to "fewer extensions": a missing or
//! malformed config yields no entries, and a failed download drops that
//! single entry. Nothing in this crate may block or fail the editor
//! launch path.
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface (`resolve` and `launch-args`)
//! - [`config`] - Workspace configuration file parsing (`.workspace.yml`)
//! - [`core`] - Error types and user-facing error reporting
//! - [`resolver`] - Classification, remote fetching, and the resolution
//!   coordinator
//!
//! # Command-Line Usage
//!
//! ```bash
//! # List the resolved extensions, one per line
//! extload resolve --repo-root /workspace/project
//!
//! # Same, as a JSON array
//! extload resolve --repo-root /workspace/project --format json
//!
//! # Emit launcher arguments for the editor process
//! extload launch-args --repo-root /workspace/project \
//!     --context-url https://github.com/org/project
//! ```
//!
//! Both commands also read `EXTLOAD_REPO_ROOT` and `EXTLOAD_CONTEXT_URL`
//! from the environment, so a supervisor process can configure them
//! without building argument lists.

// Core functionality modules
pub mod cli;
pub mod config;
pub mod core;
pub mod resolver;

// Supporting modules
pub mod constants;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
