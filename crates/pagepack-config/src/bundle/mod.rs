//! Typed descriptions of the pieces a bundler consumes: loader rules,
//! plugins, HTML directives and output settings.

mod css;
mod helpers;
mod html;
mod output;
mod plugin;
mod rules;
mod types;

pub use css::{CssOptions, Px2RemOptions};
pub use html::{HtmlDirective, HtmlOptions, InjectMode, MinifyOptions};
pub use output::{Output, OutputOptions};
pub use plugin::PluginSpec;
pub use rules::{LoaderSpec, ModuleRule, default_rules};
pub use types::Mode;

pub(crate) use helpers::default_true;
