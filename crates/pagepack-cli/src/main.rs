//! pagepack CLI - page discovery and build configuration for multi-page apps.
//!
//! This is the main entry point for the pagepack CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use pagepack_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Pages(pages_args) => commands::pages_execute(pages_args).await,
        cli::Command::Config(config_args) => commands::config_execute(config_args).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args).await,
        cli::Command::Schema => commands::schema_execute().await,
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
