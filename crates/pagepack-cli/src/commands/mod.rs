//! Command implementations for the pagepack CLI.
//!
//! - [`pages`] - List discovered pages
//! - [`config`] - Print the composed build configuration
//! - [`check`] - Validate entries and templates on disk
//! - [`schema`] - Print the config file JSON schema
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod check;
pub mod config;
pub mod pages;
pub mod schema;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use config::execute as config_execute;
pub use pages::execute as pages_execute;
pub use schema::execute as schema_execute;
