//! Alias and path validation.
//!
//! Aliases are restricted to `[A-Za-z0-9_-]+`. Filesystem probes never fail: any I/O error
//! while inspecting a path (permission denied, broken symlink) reads as "does not exist".

use crate::error::BookmarkError;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// What a bookmarked path points at, so callers can pick cd vs open vs print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Directory,
    File,
    Other,
}

/// True iff the alias is non-empty and only uses ASCII letters, digits, `_` and `-`.
pub fn is_valid_alias(alias: &str) -> bool {
    !alias.is_empty()
        && alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

pub fn path_exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

pub fn is_directory(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

pub fn is_file(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file())
        .unwrap_or(false)
}

pub fn path_kind(path: &Path) -> PathKind {
    if is_directory(path) {
        PathKind::Directory
    } else if is_file(path) {
        PathKind::File
    } else {
        PathKind::Other
    }
}

/// Normalize a path without touching the filesystem.
///
/// Drops `.` components, lets `..` pop the previous component (never above the root) and
/// discards trailing separators. Symlinks are left alone.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Turns user-supplied path text into an absolute, normalized path.
///
/// Relative input is joined onto `cwd`. A leading `~` (alone or followed by a separator) is
/// replaced by the home directory; `~user` is taken literally.
#[derive(Debug, Clone)]
pub struct PathResolver {
    cwd: PathBuf,
    home: Option<PathBuf>,
}

impl PathResolver {
    pub fn new(cwd: PathBuf, home: Option<PathBuf>) -> Self {
        Self { cwd, home }
    }

    /// Resolver for the current process: working directory plus the user's home directory.
    pub fn from_env() -> Result<Self, BookmarkError> {
        let cwd = std::env::current_dir().map_err(|e| {
            BookmarkError::Config(format!("Failed to read current directory: {}", e))
        })?;
        let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Ok(Self::new(dunce::simplified(&cwd).to_path_buf(), home))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn resolve(&self, input: &str) -> PathBuf {
        let expanded = self.expand_home(input);
        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            self.cwd.join(expanded)
        };
        normalize_lexically(&absolute)
    }

    fn expand_home(&self, input: &str) -> PathBuf {
        let Some(home) = &self.home else {
            return PathBuf::from(input);
        };
        match input.strip_prefix('~') {
            Some("") => home.clone(),
            Some(rest) if rest.starts_with(is_separator) => {
                home.join(rest.trim_start_matches(is_separator))
            }
            _ => PathBuf::from(input),
        }
    }
}
