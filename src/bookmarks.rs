//! Bookmark command service: one method per bookmark operation.
//!
//! Each method is a single load → mutate → save transaction over the store. Validation and
//! lookup failures come back as `BookmarkError` values; the CLI decides how to print them.

use crate::error::BookmarkError;
use crate::store::{BookmarkCollection, BookmarkStore};
use crate::validate::{self, PathKind, PathResolver};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateResult {
    pub alias: String,
    pub path: PathBuf,
}

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetResult {
    pub alias: String,
    pub path: PathBuf,
    pub kind: PathKind,
}

/// Result of a successful remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveResult {
    pub alias: String,
    pub path: PathBuf,
}

pub struct BookmarkService<S> {
    store: S,
    resolver: PathResolver,
}

impl<S: BookmarkStore> BookmarkService<S> {
    pub fn new(store: S, resolver: PathResolver) -> Self {
        Self { store, resolver }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Bookmark `input_path` (resolved against the working directory) under `alias`.
    pub fn create(&self, input_path: &str, alias: &str) -> Result<CreateResult, BookmarkError> {
        if !validate::is_valid_alias(alias) {
            return Err(BookmarkError::InvalidAlias(alias.to_string()));
        }

        let resolved = self.resolver.resolve(input_path);
        if !validate::path_exists(&resolved) {
            return Err(BookmarkError::PathNotFound(resolved));
        }

        let mut bookmarks = self.store.load();
        if bookmarks.contains(alias) {
            return Err(BookmarkError::AliasExists(alias.to_string()));
        }

        bookmarks.insert(alias, resolved.clone());
        self.store.save(&bookmarks)?;
        info!(alias, path = %resolved.display(), "Bookmark created");

        Ok(CreateResult {
            alias: alias.to_string(),
            path: resolved,
        })
    }

    pub fn list(&self) -> BookmarkCollection {
        self.store.load()
    }

    /// Look up `alias`. A stale bookmark is reported, not removed.
    pub fn get(&self, alias: &str) -> Result<GetResult, BookmarkError> {
        let bookmarks = self.store.load();
        let path = bookmarks
            .get(alias)
            .map(|p| p.to_path_buf())
            .ok_or_else(|| BookmarkError::AliasNotFound(alias.to_string()))?;

        if !validate::path_exists(&path) {
            debug!(alias, path = %path.display(), "Bookmark is stale");
            return Err(BookmarkError::PathGone {
                alias: alias.to_string(),
                path,
            });
        }

        let kind = validate::path_kind(&path);
        Ok(GetResult {
            alias: alias.to_string(),
            path,
            kind,
        })
    }

    /// Remove `alias`. The deletion is only durable once the save succeeds.
    pub fn remove(&self, alias: &str) -> Result<RemoveResult, BookmarkError> {
        let mut bookmarks = self.store.load();
        let path = bookmarks
            .remove(alias)
            .ok_or_else(|| BookmarkError::AliasNotFound(alias.to_string()))?;

        self.store.save(&bookmarks)?;
        info!(alias, path = %path.display(), "Bookmark removed");

        Ok(RemoveResult {
            alias: alias.to_string(),
            path,
        })
    }

    pub fn count(&self) -> usize {
        self.store.load().len()
    }

    pub fn has_bookmarks(&self) -> bool {
        !self.store.load().is_empty()
    }
}
