//! Workspace configuration parsing for extload
//!
//! The workspace config is a YAML file named `.workspace.yml` at the
//! repository root. Only the `vscode` section is interesting to this tool;
//! everything else in the document is ignored so the file can carry
//! unrelated workspace settings.
//!
//! ```yaml
//! vscode:
//!   extensions:
//!     - dbaeumer.vscode-eslint
//!     - ./tooling/company-lint.vsix
//!     - https://example.com/preview/ext.vsix
//! ```
//!
//! Loading is strict at this layer - a missing or malformed file is a
//! typed error - but the resolution coordinator deliberately swallows
//! those errors into "no extensions" so a broken config can never block
//! editor startup.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::WORKSPACE_CONFIG_FILE;
use crate::core::ExtloadError;

/// Parsed workspace configuration document.
///
/// Unknown top-level keys are ignored by serde, so this struct only models
/// the editor section.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorkspaceConfig {
    /// Editor settings section; absent when the workspace declares none.
    #[serde(default)]
    pub vscode: Option<VscodeSection>,
}

/// The `vscode` section of the workspace config.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VscodeSection {
    /// Ordered list of raw extension entries: identifiers, local `.vsix`
    /// paths relative to the repository root, or `http(s)` URLs.
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl WorkspaceConfig {
    /// Load the workspace config from `<repo_root>/.workspace.yml`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtloadError::ConfigNotFound`] when the file is missing
    /// or unreadable and [`ExtloadError::ConfigParseError`] when it is not
    /// valid YAML.
    pub fn load(repo_root: &Path) -> Result<Self, ExtloadError> {
        let path = repo_root.join(WORKSPACE_CONFIG_FILE);
        let content = std::fs::read_to_string(&path).map_err(|_| ExtloadError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        Self::parse(&content, &path)
    }

    /// Parse a workspace config document from a string.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ExtloadError> {
        serde_yaml::from_str(content).map_err(|e| ExtloadError::ConfigParseError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// The declared extension entries, in configuration order.
    ///
    /// Empty when the `vscode` section or its `extensions` list is absent.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        self.vscode.as_ref().map_or(&[], |v| v.extensions.as_slice())
    }
}
