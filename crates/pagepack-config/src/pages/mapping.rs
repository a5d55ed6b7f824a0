use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Page name to entry module path, in discovery order.
///
/// Inserting a name that is already present replaces its path and keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntryMapping(IndexMap<String, PathBuf>);

impl EntryMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `page → path`, returning the path it replaced.
    pub fn insert(&mut self, page: impl Into<String>, path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.0.insert(page.into(), path.into())
    }

    pub fn get(&self, page: &str) -> Option<&Path> {
        self.0.get(page).map(PathBuf::as_path)
    }

    pub fn contains(&self, page: &str) -> bool {
        self.0.contains_key(page)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, PathBuf> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a EntryMapping {
    type Item = (&'a String, &'a PathBuf);
    type IntoIter = Iter<'a, String, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<PathBuf>> FromIterator<(K, V)> for EntryMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (page, path) in iter {
            mapping.insert(page, path);
        }
        mapping
    }
}
