//! Error handling for extload
//!
//! This module provides the error types and user-friendly error reporting
//! for the workspace extension resolver. The error system is designed
//! around two core principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`ExtloadError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and
//!   suggestions
//!
//! Note that most resolver failures never surface here: the resolution
//! pipeline swallows config and per-download errors so the launch path is
//! never blocked (see [`crate::resolver`]). The variants below exist for
//! the code paths that *can* legitimately fail a command, and for typed
//! propagation inside the crate before a failure is downgraded to a log
//! line.
//!
//! # Examples
//!
//! ```rust,no_run
//! use extload_cli::core::{ExtloadError, user_friendly_error};
//!
//! fn build_client() -> Result<(), ExtloadError> {
//!     Err(ExtloadError::HttpClientInit { reason: "tls backend unavailable".to_string() })
//! }
//!
//! if let Err(e) = build_client() {
//!     let ctx = user_friendly_error(anyhow::Error::from(e));
//!     ctx.display(); // Shows colored error with suggestions
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for extload operations
///
/// Each variant represents a specific failure mode and carries the details
/// needed to render a useful message: file paths, URLs, and underlying
/// reasons.
///
/// # Error Categories
///
/// - **Workspace config**: [`ConfigNotFound`], [`ConfigParseError`] -
///   raised by the config loader, swallowed by the resolution coordinator
/// - **Downloads**: [`FetchFailed`], [`FetchStatus`] - raised per remote
///   entry, dropped (with a log line) by the coordinator
/// - **Startup**: [`HttpClientInit`] - fatal, the command cannot run
///   without an HTTP client
///
/// [`ConfigNotFound`]: ExtloadError::ConfigNotFound
/// [`ConfigParseError`]: ExtloadError::ConfigParseError
/// [`FetchFailed`]: ExtloadError::FetchFailed
/// [`FetchStatus`]: ExtloadError::FetchStatus
/// [`HttpClientInit`]: ExtloadError::HttpClientInit
#[derive(Error, Debug, Clone)]
pub enum ExtloadError {
    /// Workspace configuration file not found under the repository root
    #[error("workspace config not found: {path}")]
    ConfigNotFound {
        /// Path that was probed for the config file
        path: String,
    },

    /// Workspace configuration file exists but is not valid YAML
    #[error("invalid workspace config syntax in {path}")]
    ConfigParseError {
        /// Path to the config file that failed to parse
        path: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// Extension download failed before or during body transfer
    ///
    /// Covers DNS failures, refused connections, the 10-second total
    /// timeout, and write errors while streaming the body to disk.
    #[error("failed to download extension from {url}: {reason}")]
    FetchFailed {
        /// URL of the extension archive
        url: String,
        /// Underlying transport or filesystem reason
        reason: String,
    },

    /// Extension download answered with a non-200 status
    #[error("failed to download extension with status {status}")]
    FetchStatus {
        /// URL of the extension archive
        url: String,
        /// Status line, e.g. "404 Not Found"
        status: String,
    },

    /// The shared HTTP client could not be constructed
    #[error("failed to initialize HTTP client: {reason}")]
    HttpClientInit {
        /// Builder error reported by the HTTP stack
        reason: String,
    },

    /// Generic error wrapper for uncategorized failures
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// Wrapper that pairs an [`ExtloadError`] with user-facing guidance
///
/// The CLI renders this on stderr with color coding: the error in red,
/// optional details in yellow, and an optional suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying extload error
    pub error: ExtloadError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ExtloadError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// Stdout is reserved for resolver output consumed by the launcher,
    /// so all diagnostics go to stderr.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions
///
/// This function is the main entry point for converting arbitrary errors
/// into user-friendly messages for CLI display. Typed [`ExtloadError`]s get
/// tailored suggestions; everything else is rendered with its full cause
/// chain.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(ext_error) = error.downcast_ref::<ExtloadError>() {
        return create_error_context(ext_error.clone());
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(ExtloadError::Other {
        message,
    })
}

/// Map each [`ExtloadError`] variant to tailored suggestions and details.
fn create_error_context(error: ExtloadError) -> ErrorContext {
    match &error {
        ExtloadError::ConfigNotFound {
            path,
        } => {
            let details = format!("extload looked for the workspace config at {path}");
            ErrorContext::new(error.clone())
                .with_suggestion(
                    "Create a .workspace.yml file with a 'vscode.extensions' list at the repository root",
                )
                .with_details(details)
        }
        ExtloadError::ConfigParseError {
            ..
        } => ErrorContext::new(error.clone()).with_suggestion(
            "Check the YAML syntax in .workspace.yml. 'vscode.extensions' must be a list of strings",
        ),
        ExtloadError::FetchFailed {
            ..
        }
        | ExtloadError::FetchStatus {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Check the extension URL and your network connectivity")
            .with_details(
                "Downloads are attempted once with a 10 second total timeout and are never retried",
            ),
        ExtloadError::HttpClientInit {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("This usually indicates a broken TLS installation on the host"),
        ExtloadError::Other {
            ..
        } => ErrorContext::new(error.clone()),
    }
}
