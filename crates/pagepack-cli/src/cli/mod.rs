//! Command-line interface definition for pagepack.
//!
//! # Command Structure
//!
//! - `pagepack pages` - List the pages discovered under the source root
//! - `pagepack config` - Print the composed build configuration
//! - `pagepack check` - Compose and validate against the filesystem
//! - `pagepack schema` - Print the JSON schema of `pagepack.toml`

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, PagesArgs, ProjectArgs};
pub use enums::*;
pub use validation::parse_profile;

/// pagepack - entry discovery and build configuration for multi-page apps
#[derive(Parser, Debug)]
#[command(
    name = "pagepack",
    version,
    about = "Discover pages and compose build configuration for multi-page apps",
    long_about = "pagepack scans a source root laid out as one directory per page\n\
                  (<root>/<page>/index.js + index.html), and composes the entry table,\n\
                  HTML plugins and loader rules an external bundler consumes."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
