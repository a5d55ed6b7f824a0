//! Pluggable validation strategies for composed build configurations
//!
//! Separates structural checks from filesystem checks.

use std::collections::HashSet;
use std::path::Path;

use crate::compose::BuildConfig;
use crate::error::{ConfigError, Result};

/// Name placeholder that keeps multi-entry output filenames distinct
pub const NAME_PLACEHOLDER: &str = "[name]";

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Structural validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use pagepack_config::{BuildConfig, ConfigValidator, DiscoveredPages, SchemaValidator};
///
/// let config = BuildConfig::builder(DiscoveredPages::default()).build().unwrap();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.entry().len() > 1 && !config.output().filename.contains(NAME_PLACEHOLDER) {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "output filename '{}' would be shared by {} entries",
                    config.output().filename,
                    config.entry().len()
                ),
                hint: Some("Include [name] in output.filename, e.g. \"[name].js\"".to_string()),
            });
        }

        let mut outputs = HashSet::new();
        for directive in config.html_directives() {
            for chunk in &directive.included_chunks {
                if !config.entry().contains(chunk) {
                    return Err(ConfigError::SchemaValidation {
                        message: format!(
                            "html output '{}' includes unknown chunk '{chunk}'",
                            directive.output_filename
                        ),
                        hint: None,
                    });
                }
            }

            if !outputs.insert(directive.output_filename.as_str()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!(
                        "html output '{}' is emitted more than once",
                        directive.output_filename
                    ),
                    hint: Some("Page names must be unique".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs the structural checks, then verifies that every entry module and
/// every HTML template exists on disk. Relative paths resolve against `root`.
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for (_, entry) in config.entry() {
            let path = self.root.join(entry);
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        for directive in config.html_directives() {
            let path = self.root.join(&directive.template_path);
            if !path.is_file() {
                return Err(ConfigError::TemplateNotFound {
                    page: directive.page_name.clone(),
                    path,
                });
            }
        }

        Ok(())
    }
}

/// Convenience function for structural validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
