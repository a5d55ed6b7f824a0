//! Project configuration for pagepack.
//!
//! This module provides the `ProjectConfig` struct and profile merging logic.
//! For file discovery, see the `discovery` module.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::{CssOptions, HtmlOptions, Mode, OutputOptions, default_true};
use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::pages::PagesOptions;

/// Devtool value that disables source maps
pub const DEVTOOL_NONE: &str = "none";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectConfig {
    #[serde(default)]
    pub mode: Mode,

    #[serde(default)]
    pub pages: PagesOptions,

    #[serde(default)]
    pub html: HtmlOptions,

    #[serde(default)]
    pub output: OutputOptions,

    #[serde(default)]
    pub css: CssOptions,

    #[serde(default)]
    pub dev: DevServerOptions,

    /// Source map style (`"none"` disables source maps)
    #[serde(default = "default_devtool")]
    pub devtool: String,

    /// Clean the output directory before emitting
    #[serde(default = "default_true")]
    pub clean: bool,

    /// Condensed error reporting
    #[serde(default = "default_true")]
    pub friendly_errors: bool,

    /// Named partial overrides, applied with [`ProjectConfig::materialize_profile`]
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub profiles: HashMap<String, Value>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            pages: PagesOptions::default(),
            html: HtmlOptions::default(),
            output: OutputOptions::default(),
            css: CssOptions::default(),
            dev: DevServerOptions::default(),
            devtool: default_devtool(),
            clean: true,
            friendly_errors: true,
            profiles: HashMap::new(),
        }
    }
}

fn default_devtool() -> String {
    "source-map".to_string()
}

impl ProjectConfig {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use pagepack_config::ProjectConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let value = json!({
    ///     "pages": { "root": "pages", "script_extensions": ["js", "ts"] }
    /// });
    ///
    /// let config = ProjectConfig::from_value(value).unwrap();
    /// assert_eq!(config.pages.root, PathBuf::from("pages"));
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> ConfigResult<Value> {
        let schema = schemars::schema_for!(ProjectConfig);
        serde_json::to_value(schema).map_err(|e| ConfigError::InvalidValue {
            field: "schema".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Source map style, `None` when disabled.
    pub fn devtool(&self) -> Option<&str> {
        let devtool = self.devtool.trim();
        (!devtool.is_empty() && devtool != DEVTOOL_NONE).then_some(devtool)
    }

    /// Check option values that serde cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.pages.script_extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "pages.script_extensions".to_string(),
                hint: Some("List at least one extension, e.g. [\"js\"]".to_string()),
            });
        }

        for ext in &self.pages.script_extensions {
            validate_extension("pages.script_extensions", ext)?;
        }
        validate_extension("pages.template_extension", &self.pages.template_extension)?;

        if self.output.filename.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.filename".to_string(),
                hint: Some("Use a pattern such as \"[name].js\"".to_string()),
            });
        }

        if self.css.px2rem.rem_unit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "css.px2rem.rem_unit".to_string(),
                hint: Some("rem_unit must be greater than zero".to_string()),
            });
        }

        Ok(())
    }
}

fn validate_extension(field: &str, ext: &str) -> ConfigResult<()> {
    if ext.is_empty() || ext.contains('.') || ext.contains('/') {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            hint: Some(format!(
                "'{ext}' is not a bare extension; write \"js\" rather than \".js\""
            )),
        });
    }
    Ok(())
}

impl ProjectConfig {
    /// Overlay the named profile onto the base config.
    ///
    /// Tables merge key by key; arrays and scalars replace.
    ///
    /// # Errors
    ///
    /// `ConfigError::ProfileNotFound` if `profile` is not defined.
    pub fn materialize_profile(self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let overrides = self
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if overrides.is_null() {
            return Ok(self);
        }

        let profiles = self.profiles.clone();
        let mut base = serde_json::to_value(&self).map_err(|err| {
            ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            }
        })?;
        merge_values(&mut base, &overrides);

        let mut merged: ProjectConfig =
            serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merged.profiles = profiles;
        Ok(merged)
    }
}

pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
