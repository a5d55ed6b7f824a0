//! Config command implementation.
//!
//! Prints the composed build configuration to stdout so it can be piped
//! into the bundler or inspected.

use pagepack_config::{BuildConfig, discover_and_compose};
use tracing::debug;

use crate::cli::{ConfigArgs, ConfigFormat};
use crate::config;
use crate::error::Result;

/// Execute the config command.
///
/// # Errors
///
/// Returns config loading, discovery and serialization errors.
pub async fn execute(args: ConfigArgs) -> Result<()> {
    let project = config::load(&args.project)?;
    let build = discover_and_compose(&project.config, project.root())?;
    debug!(
        entries = build.entry().len(),
        plugins = build.plugins().len(),
        "composed build config"
    );

    print!("{}", render(&build, args.format)?);
    Ok(())
}

/// Serialize the build configuration in the requested format.
pub fn render(build: &BuildConfig, format: ConfigFormat) -> Result<String> {
    Ok(match format {
        ConfigFormat::Json => format!("{}\n", serde_json::to_string_pretty(build)?),
        ConfigFormat::Toml => toml::to_string_pretty(build)?,
    })
}
