use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::parse_profile;

/// Available pagepack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List discovered pages
    ///
    /// Shows each page's name, entry module and HTML template.
    Pages(PagesArgs),

    /// Print the composed build configuration
    ///
    /// Runs discovery and writes the full configuration (entries, loader
    /// rules, plugins, dev server) to stdout.
    Config(ConfigArgs),

    /// Validate the project
    ///
    /// Composes the configuration, then checks that every entry module and
    /// HTML template exists on disk.
    Check(CheckArgs),

    /// Print the JSON schema of the project config file
    Schema,
}

/// Options shared by every command that loads a project
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project directory (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Config file to load instead of pagepack.toml / package.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Named profile to apply from the config file
    #[arg(short, long, value_name = "NAME", value_parser = parse_profile)]
    pub profile: Option<String>,

    /// Source root holding one directory per page
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Build mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for the pages command
#[derive(Args, Debug)]
pub struct PagesArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the pages as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ConfigFormat,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
