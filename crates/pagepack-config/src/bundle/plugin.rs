use serde::Serialize;

use crate::bundle::html::HtmlDirective;

/// A plugin invocation in the composed build configuration.
///
/// Plugins are descriptions only; the consuming bundler instantiates them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginSpec {
    /// Hot module replacement for the dev server
    HotModuleReplacement,

    /// Minify emitted CSS assets
    OptimizeCssAssets {
        asset_name_pattern: String,
        css_processor: String,
    },

    /// Empty the output directory before emitting
    Clean,

    /// Condensed, human-oriented error output
    FriendlyErrors,

    /// Emit one page's HTML shell
    Html(HtmlDirective),
}

impl PluginSpec {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HotModuleReplacement => "hot-module-replacement",
            Self::OptimizeCssAssets { .. } => "optimize-css-assets",
            Self::Clean => "clean",
            Self::FriendlyErrors => "friendly-errors",
            Self::Html(_) => "html",
        }
    }

    pub fn as_html(&self) -> Option<&HtmlDirective> {
        match self {
            Self::Html(directive) => Some(directive),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::html::HtmlOptions;
    use std::path::Path;

    #[test]
    fn plugins_serialize_with_tag() {
        let value = serde_json::to_value(PluginSpec::OptimizeCssAssets {
            asset_name_pattern: r"\.css$".to_string(),
            css_processor: "cssnano".to_string(),
        })
        .unwrap();
        assert_eq!(value["plugin"], "optimize-css-assets");
        assert_eq!(value["css_processor"], "cssnano");

        let value = serde_json::to_value(PluginSpec::Clean).unwrap();
        assert_eq!(value["plugin"], "clean");
    }

    #[test]
    fn html_plugin_flattens_directive() {
        let directive =
            HtmlDirective::for_page("a", Path::new("src/a"), "html", &HtmlOptions::default());
        let plugin = PluginSpec::Html(directive.clone());
        assert_eq!(plugin.as_html(), Some(&directive));

        let value = serde_json::to_value(&plugin).unwrap();
        assert_eq!(value["plugin"], "html");
        assert_eq!(value["page_name"], "a");
    }
}
