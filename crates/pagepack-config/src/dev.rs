//! Development server description passed through to the bundler.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bundle::default_true;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DevServerOptions {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Directory served as static content
    #[serde(default = "default_content_base")]
    pub content_base: PathBuf,

    /// Hot module replacement; also adds the HMR plugin
    #[serde(default = "default_true")]
    pub hot: bool,

    /// Console verbosity preset of the dev server
    #[serde(default = "default_stats")]
    pub stats: String,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: None,
            content_base: default_content_base(),
            hot: true,
            stats: default_stats(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_content_base() -> PathBuf {
    PathBuf::from("./dist")
}

fn default_stats() -> String {
    "errors-only".into()
}
