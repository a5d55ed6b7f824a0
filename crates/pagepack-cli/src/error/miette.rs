//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    let hint = err.hint().map(str::to_string);
    match (err, hint) {
        (CliError::Config(e), _) => config_error_to_miette(e),
        (err, Some(hint)) => miette::miette!(help = hint, "{}", err),
        (err, None) => miette::miette!("{}", err),
    }
}

/// Convert the library's ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NotFound => miette::miette!(
            help = "Create a pagepack.toml or add a \"pagepack\" field to package.json",
            "No pagepack configuration found"
        ),
        ConfigError::ProfileNotFound(name) => miette::miette!(
            help = "Define it as [profiles.<name>] in pagepack.toml",
            "Profile '{}' is not defined",
            name
        ),
        ConfigError::TemplateNotFound { page, path } => miette::miette!(
            help = "Every page directory needs an index template next to its entry module",
            "HTML template for page '{}' not found: {}",
            page,
            path.display()
        ),
        other => match other.hint() {
            Some(hint) => miette::miette!(help = hint.to_string(), "{}", other),
            None => miette::miette!("{}", other),
        },
    }
}
