//! Page discovery for multi-page projects.
//!
//! A page is a directory directly under the source root that contains an
//! `index.<script-ext>` entry module and, next to it, an
//! `index.<template-ext>` markup template:
//!
//! ```text
//! src/
//!   home/index.js      → entry "home",  emits home.html
//!   home/index.html
//!   about/index.js     → entry "about", emits about.html
//!   about/index.html
//! ```
//!
//! Discovery yields the entry mapping for the bundler and one
//! [`HtmlDirective`] per page. Both are rebuilt on every call.

mod mapping;
mod matcher;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::bundle::{HtmlDirective, HtmlOptions};
use crate::error::DiscoveryError;

pub use mapping::EntryMapping;
pub use matcher::{INDEX_STEM, PageMatch, PageMatcher};

/// The `[pages]` section of the project config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PagesOptions {
    /// Source root holding one directory per page (default: src)
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Extensions accepted for `index` entry modules (default: ["js"])
    #[serde(default = "default_script_extensions")]
    pub script_extensions: Vec<String>,

    /// Extension of the sibling `index` template (default: html)
    #[serde(default = "default_template_extension")]
    pub template_extension: String,

    /// Fail when the source root is missing instead of finding no pages
    #[serde(default)]
    pub strict: bool,
}

impl Default for PagesOptions {
    fn default() -> Self {
        Self {
            root: default_root(),
            script_extensions: default_script_extensions(),
            template_extension: default_template_extension(),
            strict: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_script_extensions() -> Vec<String> {
    vec!["js".to_string()]
}

fn default_template_extension() -> String {
    "html".to_string()
}

/// Result of one discovery run: entries and their aligned HTML directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredPages {
    entries: EntryMapping,
    html: Vec<HtmlDirective>,
}

impl DiscoveredPages {
    /// Assemble pages found by other means.
    ///
    /// `html` is expected to hold one directive per entry, in entry order.
    pub fn from_parts(entries: EntryMapping, html: Vec<HtmlDirective>) -> Self {
        Self { entries, html }
    }

    pub fn entries(&self) -> &EntryMapping {
        &self.entries
    }

    pub fn html(&self) -> &[HtmlDirective] {
        &self.html
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_parts(self) -> (EntryMapping, Vec<HtmlDirective>) {
        (self.entries, self.html)
    }
}

/// Scanner for the `<root>/<page>/index.<ext>` layout.
///
/// # Example
///
/// ```no_run
/// use pagepack_config::PageDiscovery;
///
/// let pages = PageDiscovery::new("src")
///     .script_extensions(["js", "ts"])
///     .discover()
///     .unwrap();
///
/// for directive in pages.html() {
///     println!("{} -> {}", directive.page_name, directive.output_filename);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PageDiscovery {
    root: PathBuf,
    script_extensions: Vec<String>,
    template_extension: String,
    html: HtmlOptions,
    strict: bool,
}

impl PageDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let defaults = PagesOptions::default();
        Self {
            root: root.as_ref().to_path_buf(),
            script_extensions: defaults.script_extensions,
            template_extension: defaults.template_extension,
            html: HtmlOptions::default(),
            strict: defaults.strict,
        }
    }

    /// Scanner configured from the project's `[pages]` and `[html]` sections.
    ///
    /// A relative `options.root` is resolved against `project_root`.
    pub fn from_options(project_root: &Path, options: &PagesOptions, html: &HtmlOptions) -> Self {
        Self {
            root: project_root.join(&options.root),
            script_extensions: options.script_extensions.clone(),
            template_extension: options.template_extension.clone(),
            html: html.clone(),
            strict: options.strict,
        }
    }

    pub fn script_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn template_extension(mut self, extension: impl Into<String>) -> Self {
        self.template_extension = extension.into();
        self
    }

    pub fn html_options(mut self, html: HtmlOptions) -> Self {
        self.html = html;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the source root and collect every page.
    ///
    /// # Errors
    ///
    /// - `RootNotFound` when the root is missing and `strict` is set
    ///   (otherwise an empty result is returned)
    /// - `NotADirectory` when the root is a file
    /// - `PatternMismatch` when an enumerated path cannot be parsed
    /// - `Walk` on I/O failures during traversal
    pub fn discover(&self) -> Result<DiscoveredPages, DiscoveryError> {
        let root = std::path::absolute(&self.root).map_err(|source| DiscoveryError::Walk {
            path: self.root.clone(),
            source,
        })?;

        match fs::metadata(&root) {
            Ok(meta) if !meta.is_dir() => return Err(DiscoveryError::NotADirectory(root)),
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if self.strict {
                    return Err(DiscoveryError::RootNotFound(root));
                }
                warn!(root = %root.display(), "source root does not exist, no pages discovered");
                return Ok(DiscoveredPages::default());
            }
            Err(source) => return Err(DiscoveryError::Walk { path: root, source }),
        }

        let matcher = PageMatcher::new(&root, &self.script_extensions);
        let mut entries = EntryMapping::new();
        let mut page_dirs = Vec::new();

        // Page directories are yielded at depth 1 so that hidden ones can be
        // pruned before their contents are read.
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .max_depth(2)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() != 1 || !is_hidden(entry.file_name()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if !is_layout_error(&err, &matcher) => {
                    debug!(
                        path = ?err.path(),
                        error = %err,
                        "skipping unreadable path outside the page layout"
                    );
                    continue;
                }
                Err(err) => {
                    return Err(DiscoveryError::Walk {
                        path: err.path().map_or_else(|| root.clone(), Path::to_path_buf),
                        source: err.into(),
                    });
                }
            };

            if entry.depth() != 2 || !entry.file_type().is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if !matcher.is_entry_file(file_name) {
                continue;
            }

            let page = matcher.parse(entry.path())?;
            debug!(page = %page.page_name, entry = %page.entry_path.display(), "discovered page");

            if let Some(previous) = entries.insert(page.page_name.clone(), page.entry_path) {
                debug!(
                    page = %page.page_name,
                    replaced = %previous.display(),
                    "page name discovered twice, keeping the later entry"
                );
            } else {
                page_dirs.push(page.page_dir);
            }
        }

        let html = entries
            .pages()
            .zip(&page_dirs)
            .map(|(name, dir)| {
                HtmlDirective::for_page(name, dir, &self.template_extension, &self.html)
            })
            .collect();

        info!(root = %root.display(), pages = entries.len(), "page discovery finished");
        Ok(DiscoveredPages { entries, html })
    }
}

/// Discover pages under `root` with the default layout (`index.js` + `index.html`).
///
/// # Example
///
/// ```no_run
/// use pagepack_config::discover_pages;
///
/// let pages = discover_pages("src").unwrap();
/// println!("{} pages", pages.len());
/// ```
pub fn discover_pages(root: impl AsRef<Path>) -> Result<DiscoveredPages, DiscoveryError> {
    PageDiscovery::new(root).discover()
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| name.starts_with('.'))
}

/// Whether a walk failure touches something discovery depends on.
///
/// Reading the root always matters. Below it, a broken or looping symlink in
/// place of a page directory is skipped like any other non-directory, and at
/// page level only files named like an entry module count.
fn is_layout_error(err: &walkdir::Error, matcher: &PageMatcher<'_>) -> bool {
    let Some(path) = err.path() else {
        return err.depth() == 0;
    };
    match err.depth() {
        0 => true,
        1 => !fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink()),
        _ => path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|name| matcher.is_entry_file(name)),
    }
}
