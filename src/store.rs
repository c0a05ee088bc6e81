//! Bookmark persistence: the alias → path collection and the store that loads and saves it.
//!
//! Every operation reads the whole collection, mutates it in memory and writes the whole
//! document back. There is no locking: two concurrent writers race and the last one wins.

mod json_file;

pub use json_file::JsonFileStore;

use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// The full set of bookmarks, persisted as one flat JSON object.
///
/// Kept sorted by alias so listings and the file on disk are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkCollection {
    entries: BTreeMap<String, PathBuf>,
}

impl BookmarkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.entries.get(alias).map(PathBuf::as_path)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Insert or replace a mapping, returning the previous path if any.
    pub fn insert(&mut self, alias: impl Into<String>, path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.entries.insert(alias.into(), path.into())
    }

    pub fn remove(&mut self, alias: &str) -> Option<PathBuf> {
        self.entries.remove(alias)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(alias, path)| (alias.as_str(), path.as_path()))
    }
}

/// Persistence backend for the bookmark collection.
pub trait BookmarkStore {
    /// Location of the backing document.
    fn path(&self) -> &Path;

    /// Strict load: a missing document is an empty collection, anything unreadable is an error.
    fn try_load(&self) -> Result<BookmarkCollection, StorageError>;

    /// Overwrite the document with the full collection.
    fn save(&self, collection: &BookmarkCollection) -> Result<(), StorageError>;

    /// Lenient load: read and parse failures are logged and read as an empty collection.
    fn load(&self) -> BookmarkCollection {
        match self.try_load() {
            Ok(collection) => collection,
            Err(e) => {
                warn!(
                    path = %self.path().display(),
                    "Error reading bookmarks file, treating it as empty: {}",
                    e
                );
                BookmarkCollection::new()
            }
        }
    }
}
