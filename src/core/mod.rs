//! Core types and functionality for extload
//!
//! This module forms the foundation of extload's type system. It provides
//! the strongly-typed error enumeration used across the crate together with
//! the user-friendly error reporting layer the CLI prints on failure.
//!
//! # Error Management
//!
//! extload uses a two-layer error handling system:
//! - **Strongly-typed errors** ([`ExtloadError`]) for precise error handling
//!   in code
//! - **User-friendly contexts** ([`ErrorContext`]) with actionable
//!   suggestions for CLI users
//!
//! Most failure modes in this tool are deliberately non-fatal: a missing
//! workspace config or a failed download degrades to "fewer extensions"
//! inside the resolver and is only logged. The types here cover the cases
//! that *do* reach the user - primarily startup problems like an HTTP
//! client that cannot be constructed.

pub mod error;

pub use error::{ErrorContext, ExtloadError, user_friendly_error};
