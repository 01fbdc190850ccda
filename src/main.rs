//! extload CLI entry point
//!
//! This is the main executable for the workspace extension resolver.
//! It handles command-line argument parsing, error display, and command
//! execution.
//!
//! The CLI supports two commands:
//! - `resolve` - Print the resolved extension list
//! - `launch-args` - Print a flattened install-argument string for a launcher

use anyhow::Result;
use clap::Parser;
use extload_cli::cli;
use extload_cli::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
