use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{
    default_browserslist, default_css_asset_pattern, default_css_processor, default_rem_precision,
    default_rem_unit, default_true,
};

/// Stylesheet handling: the LESS loader chain and CSS asset optimization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CssOptions {
    /// Add the CSS asset optimization plugin
    #[serde(default = "default_true")]
    pub optimize: bool,

    /// Processor used by the optimization plugin
    #[serde(default = "default_css_processor")]
    pub processor: String,

    /// Pattern selecting which emitted assets get optimized
    #[serde(default = "default_css_asset_pattern")]
    pub asset_name_pattern: String,

    /// Browser targets handed to autoprefixer
    #[serde(default = "default_browserslist")]
    pub autoprefixer: Vec<String>,

    /// px to rem conversion for LESS sources
    #[serde(default)]
    pub px2rem: Px2RemOptions,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            optimize: true,
            processor: default_css_processor(),
            asset_name_pattern: default_css_asset_pattern(),
            autoprefixer: default_browserslist(),
            px2rem: Px2RemOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Px2RemOptions {
    /// Pixels per rem
    #[serde(default = "default_rem_unit")]
    pub rem_unit: u32,

    /// Decimal places kept in converted values
    #[serde(default = "default_rem_precision")]
    pub rem_precision: u32,
}

impl Default for Px2RemOptions {
    fn default() -> Self {
        Self {
            rem_unit: default_rem_unit(),
            rem_precision: default_rem_precision(),
        }
    }
}
