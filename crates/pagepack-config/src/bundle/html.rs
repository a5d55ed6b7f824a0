use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bundle::helpers::default_true;

/// Where the page's script tags are injected in the generated shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InjectMode {
    /// Before the closing `</body>` tag
    #[default]
    Body,
    /// Inside `<head>`
    Head,
    /// Leave the template untouched
    Disabled,
}

/// HTML minification switches forwarded to the emitting plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MinifyOptions {
    #[serde(default = "default_true")]
    pub html5: bool,

    #[serde(default = "default_true")]
    pub collapse_whitespace: bool,

    #[serde(default)]
    pub preserve_line_breaks: bool,

    #[serde(default = "default_true")]
    pub minify_css: bool,

    #[serde(default = "default_true")]
    pub minify_js: bool,

    #[serde(default)]
    pub remove_comments: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            html5: true,
            collapse_whitespace: true,
            preserve_line_breaks: false,
            minify_css: true,
            minify_js: true,
            remove_comments: false,
        }
    }
}

/// Project-wide defaults applied to every page's HTML directive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HtmlOptions {
    /// Script injection point (default: body)
    #[serde(default)]
    pub inject: InjectMode,

    /// Minification of the emitted HTML
    #[serde(default)]
    pub minify: MinifyOptions,
}

/// Instruction to emit one HTML shell bound to exactly one page's chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlDirective {
    pub page_name: String,
    pub template_path: PathBuf,
    pub output_filename: String,
    pub included_chunks: Vec<String>,
    pub inject: InjectMode,
    pub minify: MinifyOptions,
}

impl HtmlDirective {
    /// Build the directive for `page_name` whose files live in `page_dir`.
    ///
    /// The template is the sibling `index.<template_extension>` and the
    /// output is `<page_name>.html`, wired to the page's own chunk only.
    pub fn for_page(
        page_name: &str,
        page_dir: &Path,
        template_extension: &str,
        options: &HtmlOptions,
    ) -> Self {
        Self {
            page_name: page_name.to_string(),
            template_path: page_dir.join(format!("index.{template_extension}")),
            output_filename: format!("{page_name}.html"),
            included_chunks: vec![page_name.to_string()],
            inject: options.inject,
            minify: options.minify.clone(),
        }
    }
}
