//! Global constants used throughout the extload codebase.
//!
//! This module contains the workspace config file name, network timeout,
//! archive suffix, and the fixed launcher flag tokens. Defining them
//! centrally improves maintainability and makes magic values more
//! discoverable.

use std::time::Duration;

/// Name of the workspace configuration file, looked up under the
/// repository root.
pub const WORKSPACE_CONFIG_FILE: &str = ".workspace.yml";

/// File suffix identifying a packaged extension archive.
pub const VSIX_SUFFIX: &str = ".vsix";

/// Total timeout for a single extension download (10 seconds).
///
/// Covers the whole request cycle: connect, headers, and body transfer.
/// Large archives that cannot finish within this bound fail the fetch
/// rather than hanging the launch path.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Extension identifier added when the workspace context URL points at
/// a GitHub repository.
pub const GITHUB_PR_EXTENSION: &str = "github.vscode-pull-request-github";

/// Substring of a context URL that triggers [`GITHUB_PR_EXTENSION`].
pub const GITHUB_CONTEXT_MARKER: &str = "github.com";

/// Editor flag preceding each resolved extension in flattened output.
pub const INSTALL_EXTENSION_FLAG: &str = "--install-extension";

/// Editor flag preceding the GitHub builtin extension in flattened output.
pub const INSTALL_BUILTIN_EXTENSION_FLAG: &str = "--install-builtin-extension";

/// Fixed flag emitted first in flattened output so the editor starts its
/// server mode before processing installs.
pub const START_SERVER_FLAG: &str = "--start-server";
