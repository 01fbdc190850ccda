//! Resolve and list the workspace extensions.
//!
//! This is the "list what to install" mode: it prints the deduplicated
//! resolved extension list to stdout, either one value per line (default)
//! or as a JSON array for programmatic consumers.
//!
//! # Examples
//!
//! ```bash
//! extload resolve --repo-root /workspace/project
//! extload resolve --repo-root /workspace/project --format json
//! EXTLOAD_REPO_ROOT=/workspace/project extload resolve
//! ```

use anyhow::{Result, bail};
use clap::Args;
use std::path::PathBuf;

use crate::resolver::{ExtensionResolver, dedup_first_seen};

/// Command to resolve and print the workspace extension list.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    /// Repository root containing the workspace config.
    ///
    /// When omitted (and the environment variable is unset) the
    /// configured extension list is empty; only a context-derived
    /// extension can appear in the output.
    #[arg(long, env = "EXTLOAD_REPO_ROOT", value_name = "DIR")]
    repo_root: Option<PathBuf>,

    /// Originating repository URL of the workspace.
    ///
    /// A GitHub context URL adds the pull-request extension to the list.
    #[arg(long, env = "EXTLOAD_CONTEXT_URL", value_name = "URL")]
    context_url: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    format: String,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub async fn execute(self) -> Result<()> {
        let resolver = ExtensionResolver::new()?;
        let resolved = dedup_first_seen(
            resolver
                .resolve_workspace(self.repo_root.as_deref(), self.context_url.as_deref())
                .await,
        );

        match self.format.as_str() {
            "text" => {
                for ext in &resolved {
                    println!("{ext}");
                }
            }
            "json" => println!("{}", serde_json::to_string_pretty(&resolved)?),
            other => bail!("unsupported output format: {other} (expected text or json)"),
        }

        Ok(())
    }
}
