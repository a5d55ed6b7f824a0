//! pagepack CLI - page discovery and build configuration for multi-page apps.
//!
//! This crate provides the command-line interface over `pagepack-config`:
//! it loads the project options, discovers pages, composes the build
//! configuration and prints or validates it.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - One module per subcommand
//! - [`config`] - Layered option loading (defaults, file, profile, env, flags)
//! - [`error`] - CLI error type and context helpers
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages and formatting for the terminal
//!
//! # Example
//!
//! ```rust,no_run
//! use pagepack_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};
