//! Emit launcher arguments for the editor process.
//!
//! Prints a single space-joined argument string to stdout. A supervisor
//! process splices it into the editor command line verbatim, so the
//! output must contain nothing but tokens: `--start-server` first, the
//! GitHub builtin extension flag when the context URL warrants it, one
//! `--install-extension <value>` pair per resolved configured extension
//! (deduplicated first-seen), optional debug instrumentation flags, and
//! finally any passthrough arguments.
//!
//! # Examples
//!
//! ```bash
//! extload launch-args --repo-root /workspace/project
//! extload launch-args --context-url https://github.com/org/project -- --verbose-editor
//! EXTLOAD_DEBUG=true extload launch-args
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::constants::{INSTALL_BUILTIN_EXTENSION_FLAG, START_SERVER_FLAG};
use crate::resolver::{ExtensionResolver, context_extension, format_install_args};

/// Command to print the flattened launcher argument string.
#[derive(Args, Debug)]
pub struct LaunchArgsCommand {
    /// Repository root containing the workspace config.
    #[arg(long, env = "EXTLOAD_REPO_ROOT", value_name = "DIR")]
    repo_root: Option<PathBuf>,

    /// Originating repository URL of the workspace.
    ///
    /// A GitHub context URL emits the builtin pull-request extension flag
    /// ahead of any configured extensions.
    #[arg(long, env = "EXTLOAD_CONTEXT_URL", value_name = "URL")]
    context_url: Option<String>,

    /// Emit editor debug instrumentation flags (`--inspect --log=trace`).
    #[arg(long, env = "EXTLOAD_DEBUG")]
    debug: bool,

    /// Additional arguments appended verbatim after the generated tokens.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    passthrough: Vec<String>,
}

impl LaunchArgsCommand {
    /// Execute the launch-args command.
    pub async fn execute(self) -> Result<()> {
        let resolver = ExtensionResolver::new()?;

        let mut tokens = vec![START_SERVER_FLAG.to_string()];

        if let Some(ext) = context_extension(self.context_url.as_deref()) {
            tokens.push(INSTALL_BUILTIN_EXTENSION_FLAG.to_string());
            tokens.push(ext.to_string());
        }

        let configured = resolver.resolve_configured(self.repo_root.as_deref()).await;
        tokens.extend(format_install_args(configured));

        if self.debug {
            tokens.push("--inspect".to_string());
            tokens.push("--log=trace".to_string());
        }

        tokens.extend(self.passthrough);

        println!("{}", tokens.join(" "));
        Ok(())
    }
}
