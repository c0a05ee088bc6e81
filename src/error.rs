//! Error types for the jump bookmark store.

use std::path::PathBuf;
use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize bookmarks: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Bookmarks file {path} is malformed: {reason}")]
    CorruptStore { path: PathBuf, reason: String },
}

/// Errors returned by bookmark operations and CLI setup
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Invalid alias format. Use only alphanumeric characters, underscores, and hyphens.")]
    InvalidAlias(String),

    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Alias '{0}' already exists. Use 'jump remove {0}' to remove it first.")]
    AliasExists(String),

    #[error("Bookmark '{0}' not found")]
    AliasNotFound(String),

    #[error("Bookmarked path no longer exists: {}", .path.display())]
    PathGone { alias: String, path: PathBuf },

    #[error("Failed to save bookmarks: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for BookmarkError {
    fn from(err: config::ConfigError) -> Self {
        BookmarkError::Config(err.to_string())
    }
}
