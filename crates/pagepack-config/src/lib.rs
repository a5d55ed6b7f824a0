//! Page discovery and build configuration for multi-page applications.
//!
//! The crate scans a source root laid out as one directory per page,
//! produces the bundler's entry table plus one HTML directive per page, and
//! composes both with the project options into an immutable [`BuildConfig`].

pub mod bundle;
pub mod compose;
pub mod config;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod pages;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use compose::*;
pub use config::*;
pub use dev::*;
pub use error::*;

// Re-export discovery and validation
pub use discovery::{CONFIG_FILE, ConfigDiscovery, load_file, read_config_value};
pub use pages::{
    DiscoveredPages, EntryMapping, PageDiscovery, PageMatch, PageMatcher, PagesOptions,
    discover_pages,
};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
