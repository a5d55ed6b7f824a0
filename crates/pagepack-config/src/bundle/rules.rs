use regex::Regex;
use serde::Serialize;
use serde_json::{Value, json};
use std::path::Path;

use crate::bundle::css::CssOptions;
use crate::error::{ConfigError, Result};

/// One loader in a rule's chain, with its optional options object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderSpec {
    pub loader: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl LoaderSpec {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: None,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options: Some(options),
        }
    }
}

/// Files whose path matches `test` go through the loaders in `use`, in order.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleRule {
    #[serde(serialize_with = "serialize_pattern")]
    test: Regex,

    #[serde(rename = "use")]
    loaders: Vec<LoaderSpec>,
}

fn serialize_pattern<S: serde::Serializer>(
    regex: &Regex,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(regex.as_str())
}

impl ModuleRule {
    /// Compile `pattern` into a rule.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if the pattern is not a valid regex.
    pub fn new(pattern: &str, loaders: Vec<LoaderSpec>) -> Result<Self> {
        let test = Regex::new(pattern).map_err(|err| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self { test, loaders })
    }

    pub fn pattern(&self) -> &str {
        self.test.as_str()
    }

    pub fn loaders(&self) -> &[LoaderSpec] {
        &self.loaders
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.test.is_match(&path.to_string_lossy())
    }
}

/// The loader table for scripts, stylesheets, images and fonts.
pub fn default_rules(css: &CssOptions, asset_name: &str) -> Result<Vec<ModuleRule>> {
    let file_loader = || LoaderSpec::with_options("file-loader", json!({ "name": asset_name }));

    Ok(vec![
        ModuleRule::new(r"\.js$", vec![LoaderSpec::new("babel-loader")])?,
        ModuleRule::new(
            r"\.css$",
            vec![LoaderSpec::new("style-loader"), LoaderSpec::new("css-loader")],
        )?,
        ModuleRule::new(
            r"\.less$",
            vec![
                LoaderSpec::new("style-loader"),
                LoaderSpec::new("css-loader"),
                LoaderSpec::new("less-loader"),
                LoaderSpec::with_options(
                    "postcss-loader",
                    json!({
                        "ident": "postcss",
                        "plugins": [{
                            "name": "autoprefixer",
                            "overrideBrowserslist": css.autoprefixer,
                        }],
                    }),
                ),
                LoaderSpec::with_options(
                    "px2rem-loader",
                    json!({
                        "remUnit": css.px2rem.rem_unit,
                        "remPrecision": css.px2rem.rem_precision,
                    }),
                ),
            ],
        )?,
        ModuleRule::new(r"\.(png|jpe?g|gif)$", vec![file_loader()])?,
        ModuleRule::new(r"\.(woff|woff2|eot|ttf|otf)$", vec![file_loader()])?,
    ])
}
