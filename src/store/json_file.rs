use super::{BookmarkCollection, BookmarkStore};
use crate::error::StorageError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Bookmark store backed by a single pretty-printed JSON file.
///
/// The file is created on the first successful save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BookmarkStore for JsonFileStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<BookmarkCollection, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Bookmarks file absent");
                return Ok(BookmarkCollection::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let collection: BookmarkCollection =
            serde_json::from_str(&contents).map_err(|e| StorageError::CorruptStore {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        debug!(
            path = %self.path.display(),
            count = collection.len(),
            "Loaded bookmarks"
        );
        Ok(collection)
    }

    fn save(&self, collection: &BookmarkCollection) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let json = serde_json::to_string_pretty(collection)?;
        std::fs::write(&self.path, json).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            path = %self.path.display(),
            count = collection.len(),
            "Saved bookmarks"
        );
        Ok(())
    }
}
