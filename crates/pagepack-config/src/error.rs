//! Error types for page discovery, configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failures while scanning a source root for pages.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("source root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("source root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// An enumerated path did not parse as `<root>/<page>/index.<ext>`.
    ///
    /// The walker and the matcher agree on the layout, so hitting this means
    /// the two have drifted apart.
    #[error("path does not follow the page layout: {} ({reason})", .path.display())]
    PatternMismatch { path: PathBuf, reason: String },

    #[error("failed to read {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("entry module not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("html template not found for page '{page}': {}", .path.display())]
    TemplateNotFound { page: String, path: PathBuf },

    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'")]
    InvalidValue { field: String, hint: Option<String> },

    #[error("profile '{0}' is not defined")]
    ProfileNotFound(String),

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    #[error("invalid rule pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Helpful hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { hint, .. } | Self::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            _ => None,
        }
    }
}
