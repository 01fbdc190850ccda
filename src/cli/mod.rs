//! Command-line interface for extload.
//!
//! Each command is implemented as a separate module with its own argument
//! structure and execution logic:
//!
//! - `resolve` - Print the resolved extension list, one per line or as JSON
//! - `launch-args` - Print a single flattened argument string for a
//!   launcher to splice into the editor command line
//!
//! Both commands share the resolution engine in [`crate::resolver`]; they
//! differ only in how the resolved list is serialized.
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging
//! - `--quiet` - Suppress all logging
//!
//! Diagnostics always go to stderr: stdout carries nothing but the
//! resolved output, because a supervisor process consumes it verbatim.
//!
//! # Examples
//!
//! ```bash
//! extload resolve --repo-root /workspace/project
//! extload resolve --format json
//! extload launch-args --context-url https://github.com/org/project
//! ```

mod launch;
mod resolve;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Main CLI application structure for extload.
///
/// Handles global flags and delegates to subcommands for the actual
/// resolution work. Uses the `clap` derive API; options marked
/// `global = true` are available to all subcommands.
#[derive(Parser, Debug)]
#[command(
    name = "extload",
    about = "Workspace extension resolver - turns declared editor extensions into launch-ready install arguments",
    version,
    author
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose (debug-level) logging on stderr.
    #[arg(long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logging output.
    #[arg(long, global = true)]
    quiet: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve and list the workspace extensions
    Resolve(resolve::ResolveCommand),
    /// Emit a flattened launcher argument string
    LaunchArgs(launch::LaunchArgsCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Initializes logging first so every subsequent layer can emit
    /// `tracing` events.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        match self.command {
            Commands::Resolve(cmd) => cmd.execute().await,
            Commands::LaunchArgs(cmd) => cmd.execute().await,
        }
    }

    /// Initialize the tracing subscriber once, writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over the verbosity flags when set.
    fn init_logging(&self) {
        let default_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "off"
        } else {
            "warn"
        };

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    }
}
