//! Layered project configuration for the CLI.
//!
//! Sources, lowest priority first:
//!
//! 1. built-in defaults
//! 2. `pagepack.toml` or the `pagepack` field of `package.json`
//! 3. the profile selected with `--profile`
//! 4. `PAGEPACK_*` environment variables (`__` separates nested keys)
//! 5. command-line flags

mod loading;

use pagepack_config::ProjectConfig;
use std::path::{Path, PathBuf};

pub use loading::{ENV_PREFIX, ENV_SEPARATOR, load};

/// Project options after every layer has been applied.
#[derive(Debug, Clone)]
pub struct LoadedProject {
    /// Absolute project directory; relative paths in the config resolve here
    pub root: PathBuf,
    /// Config file that contributed to the result, if any
    pub source: Option<PathBuf>,
    pub config: ProjectConfig,
}

impl LoadedProject {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute source root scanned for pages
    pub fn pages_root(&self) -> PathBuf {
        self.root.join(&self.config.pages.root)
    }
}
