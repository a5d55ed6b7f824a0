//! Structured matching of `<root>/<page>/index.<ext>` paths.

use std::path::{Component, Path, PathBuf};

use crate::error::DiscoveryError;

/// File stem every page entry and template shares
pub const INDEX_STEM: &str = "index";

/// A path that follows the page layout, broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMatch {
    pub page_name: String,
    pub page_dir: PathBuf,
    pub entry_path: PathBuf,
    pub extension: String,
}

#[derive(Debug, Clone, Copy)]
pub struct PageMatcher<'a> {
    root: &'a Path,
    script_extensions: &'a [String],
}

impl<'a> PageMatcher<'a> {
    pub fn new(root: &'a Path, script_extensions: &'a [String]) -> Self {
        Self {
            root,
            script_extensions,
        }
    }

    /// Whether `file_name` is `index.<ext>` for a recognized script extension.
    pub fn is_entry_file(&self, file_name: &str) -> bool {
        self.entry_extension(file_name).is_some()
    }

    fn entry_extension<'n>(&self, file_name: &'n str) -> Option<&'n str> {
        let ext = file_name.strip_prefix(INDEX_STEM)?.strip_prefix('.')?;
        self.script_extensions
            .iter()
            .any(|known| known == ext)
            .then_some(ext)
    }

    /// Parse an enumerated path into a [`PageMatch`].
    ///
    /// # Errors
    ///
    /// `DiscoveryError::PatternMismatch` if the path is not exactly one
    /// directory below the root, the directory name is empty or not UTF-8,
    /// or the file is not a recognized `index` script.
    pub fn parse(&self, path: &Path) -> Result<PageMatch, DiscoveryError> {
        let mismatch = |reason: &str| DiscoveryError::PatternMismatch {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let relative = path
            .strip_prefix(self.root)
            .map_err(|_| mismatch("outside the source root"))?;

        let mut components = relative.components();
        let (Some(Component::Normal(dir)), Some(Component::Normal(file)), None) =
            (components.next(), components.next(), components.next())
        else {
            return Err(mismatch("expected <page>/index.<ext>"));
        };

        let page_name = dir
            .to_str()
            .ok_or_else(|| mismatch("page directory name is not valid UTF-8"))?;
        if page_name.is_empty() {
            return Err(mismatch("empty page name"));
        }

        let extension = file
            .to_str()
            .and_then(|name| self.entry_extension(name))
            .ok_or_else(|| mismatch("not a recognized index script"))?;

        Ok(PageMatch {
            page_name: page_name.to_string(),
            page_dir: self.root.join(dir),
            entry_path: path.to_path_buf(),
            extension: extension.to_string(),
        })
    }
}
