use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bundle::helpers::{default_asset_name, default_output_dir, default_output_filename};

/// Where and how bundled chunks are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutputOptions {
    /// Output directory, relative to the project root (default: dist)
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Chunk filename pattern (default: `[name].js`)
    #[serde(default = "default_output_filename")]
    pub filename: String,

    /// Filename pattern for images and fonts
    #[serde(default = "default_asset_name")]
    pub asset_name: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            filename: default_output_filename(),
            asset_name: default_asset_name(),
        }
    }
}

impl OutputOptions {
    /// Resolve against the project root into the bundler's output section.
    pub fn resolve(&self, project_root: &Path) -> Output {
        Output {
            filename: self.filename.clone(),
            path: project_root.join(&self.dir),
        }
    }
}

/// Output section of a composed build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    pub filename: String,
    pub path: PathBuf,
}
