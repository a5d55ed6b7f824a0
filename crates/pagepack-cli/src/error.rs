//! Error handling for the pagepack CLI.
//!
//! `CliError` wraps the library's `ConfigError` and adds the failures that
//! only the CLI can hit: layered option extraction and serialization of the
//! composed configuration.
//!
//! # Example
//!
//! ```rust,no_run
//! use pagepack_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_template(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod miette;

use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;
pub use pagepack_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Errors from discovery, config loading and validation
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The layered options could not be extracted into a project config
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Extraction error, including the offending key and source
        message: String,
        /// Helpful hint for fixing the value
        hint: Option<String>,
    },

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Helpful hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config(err) => err.hint(),
            Self::InvalidConfig { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        CliError::InvalidConfig {
            message: err.to_string(),
            hint: Some(
                "Check pagepack.toml and PAGEPACK_* environment variables for mistyped values"
                    .to_string(),
            ),
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into `CliError::FileNotFound` for `path`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use std::path::Path;
    /// # use pagepack_cli::error::{Result, ResultExt};
    /// # fn run() -> Result<()> {
    /// let path = Path::new("pagepack.toml");
    /// std::fs::read_to_string(path).with_path(path)?;
    /// # Ok(())
    /// # }
    /// ```
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}
