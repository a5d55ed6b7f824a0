//! Composition of discovered pages and project options into one build
//! configuration value.
//!
//! A [`BuildConfig`] is assembled once per build invocation and is read-only
//! afterwards. Serialize it to hand it to the bundler.

use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::bundle::{
    CssOptions, HtmlDirective, Mode, ModuleRule, Output, PluginSpec, default_rules,
};
use crate::config::ProjectConfig;
use crate::dev::DevServerOptions;
use crate::error::Result;
use crate::pages::{DiscoveredPages, EntryMapping, PageDiscovery};

/// Loader rules section
#[derive(Debug, Clone, Serialize)]
pub struct ModuleOptions {
    rules: Vec<ModuleRule>,
}

/// Complete configuration for one multi-page build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
    mode: Mode,
    entry: EntryMapping,
    output: Output,
    module: ModuleOptions,
    plugins: Vec<PluginSpec>,
    dev_server: DevServerOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    devtool: Option<String>,
}

impl BuildConfig {
    pub fn builder(pages: DiscoveredPages) -> BuildConfigBuilder {
        BuildConfigBuilder::new(pages)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn entry(&self) -> &EntryMapping {
        &self.entry
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn rules(&self) -> &[ModuleRule] {
        &self.module.rules
    }

    pub fn plugins(&self) -> &[PluginSpec] {
        &self.plugins
    }

    /// HTML directives, in plugin order
    pub fn html_directives(&self) -> impl Iterator<Item = &HtmlDirective> {
        self.plugins.iter().filter_map(PluginSpec::as_html)
    }

    pub fn dev_server(&self) -> &DevServerOptions {
        &self.dev_server
    }

    pub fn devtool(&self) -> Option<&str> {
        self.devtool.as_deref()
    }

    /// First rule whose pattern matches `path`
    pub fn rule_for(&self, path: &Path) -> Option<&ModuleRule> {
        self.module.rules.iter().find(|rule| rule.matches(path))
    }
}

/// Builder for [`BuildConfig`].
///
/// # Example
///
/// ```
/// use pagepack_config::{BuildConfig, DiscoveredPages, Mode};
///
/// let config = BuildConfig::builder(DiscoveredPages::default())
///     .mode(Mode::Production)
///     .devtool(None::<String>)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.mode(), Mode::Production);
/// assert!(config.entry().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BuildConfigBuilder {
    pages: DiscoveredPages,
    mode: Mode,
    output: Output,
    css: CssOptions,
    asset_name: String,
    rules: Option<Vec<ModuleRule>>,
    dev_server: DevServerOptions,
    devtool: Option<String>,
    clean: bool,
    friendly_errors: bool,
    extra_plugins: Vec<PluginSpec>,
}

impl BuildConfigBuilder {
    pub fn new(pages: DiscoveredPages) -> Self {
        let project = ProjectConfig::default();
        let devtool = project.devtool().map(str::to_string);
        Self {
            pages,
            mode: project.mode,
            output: Output {
                filename: project.output.filename,
                path: project.output.dir,
            },
            asset_name: project.output.asset_name,
            css: project.css,
            rules: None,
            dev_server: project.dev,
            devtool,
            clean: project.clean,
            friendly_errors: project.friendly_errors,
            extra_plugins: Vec::new(),
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn css(mut self, css: CssOptions) -> Self {
        self.css = css;
        self
    }

    /// Filename pattern for file-loader assets
    pub fn asset_name(mut self, asset_name: impl Into<String>) -> Self {
        self.asset_name = asset_name.into();
        self
    }

    /// Replace the default loader table
    pub fn rules(mut self, rules: Vec<ModuleRule>) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn dev_server(mut self, dev_server: DevServerOptions) -> Self {
        self.dev_server = dev_server;
        self
    }

    pub fn devtool(mut self, devtool: Option<impl Into<String>>) -> Self {
        self.devtool = devtool.map(Into::into);
        self
    }

    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub fn friendly_errors(mut self, friendly_errors: bool) -> Self {
        self.friendly_errors = friendly_errors;
        self
    }

    /// Additional plugin, placed after the built-in ones and before the
    /// per-page HTML plugins
    pub fn plugin(mut self, plugin: PluginSpec) -> Self {
        self.extra_plugins.push(plugin);
        self
    }

    /// # Errors
    ///
    /// `ConfigError::InvalidPattern` if a default rule pattern fails to compile.
    pub fn build(self) -> Result<BuildConfig> {
        let rules = match self.rules {
            Some(rules) => rules,
            None => default_rules(&self.css, &self.asset_name)?,
        };

        let (entry, html) = self.pages.into_parts();

        let mut plugins = Vec::with_capacity(4 + self.extra_plugins.len() + html.len());
        if self.dev_server.hot {
            plugins.push(PluginSpec::HotModuleReplacement);
        }
        if self.css.optimize {
            plugins.push(PluginSpec::OptimizeCssAssets {
                asset_name_pattern: self.css.asset_name_pattern.clone(),
                css_processor: self.css.processor.clone(),
            });
        }
        if self.clean {
            plugins.push(PluginSpec::Clean);
        }
        if self.friendly_errors {
            plugins.push(PluginSpec::FriendlyErrors);
        }
        plugins.extend(self.extra_plugins);
        plugins.extend(html.into_iter().map(PluginSpec::Html));

        debug!(
            mode = %self.mode,
            entries = entry.len(),
            plugins = plugins.len(),
            "composed build config"
        );

        Ok(BuildConfig {
            mode: self.mode,
            entry,
            output: self.output,
            module: ModuleOptions { rules },
            plugins,
            dev_server: self.dev_server,
            devtool: self.devtool,
        })
    }
}

/// Compose a build configuration from discovered pages and project options.
///
/// Relative output paths are resolved against `project_root`.
pub fn compose(
    pages: DiscoveredPages,
    config: &ProjectConfig,
    project_root: &Path,
) -> Result<BuildConfig> {
    BuildConfig::builder(pages)
        .mode(config.mode)
        .output(config.output.resolve(project_root))
        .asset_name(config.output.asset_name.clone())
        .css(config.css.clone())
        .dev_server(config.dev.clone())
        .devtool(config.devtool())
        .clean(config.clean)
        .friendly_errors(config.friendly_errors)
        .build()
}

/// Discover the project's pages and compose them in one step.
pub fn discover_and_compose(config: &ProjectConfig, project_root: &Path) -> Result<BuildConfig> {
    let pages = PageDiscovery::from_options(project_root, &config.pages, &config.html).discover()?;
    compose(pages, config, project_root)
}
