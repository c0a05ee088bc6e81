//! Configuration System
//!
//! Layered configuration for the jump CLI. Sources, lowest to highest precedence:
//! built-in defaults, `<config dir>/jump/config.toml` (or the file passed with `--config`),
//! then `JUMP_<SECTION>__<KEY>` environment variables.

use crate::error::BookmarkError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that points the bookmark store at a different file.
pub const BOOKMARKS_PATH_ENV: &str = "JUMP_BOOKMARKS_PATH";

/// Bookmarks file name inside the home directory.
pub const DEFAULT_BOOKMARKS_FILE: &str = ".jump.json";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JumpConfig {
    /// Storage location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Bookmarks file; defaults to `~/.jump.json`
    #[serde(default)]
    pub bookmarks_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the bookmarks file for this process.
    ///
    /// `JUMP_BOOKMARKS_PATH` wins over the configured path, which wins over `~/.jump.json`.
    pub fn resolve_bookmarks_path(&self) -> Result<PathBuf, BookmarkError> {
        let env_override = std::env::var_os(BOOKMARKS_PATH_ENV).map(PathBuf::from);
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        self.resolve_bookmarks_path_with(env_override, home.as_deref())
    }

    pub fn resolve_bookmarks_path_with(
        &self,
        env_override: Option<PathBuf>,
        home: Option<&Path>,
    ) -> Result<PathBuf, BookmarkError> {
        if let Some(path) = env_override.filter(|p| !p.as_os_str().is_empty()) {
            debug!(path = %path.display(), "Bookmarks path from {}", BOOKMARKS_PATH_ENV);
            return Ok(path);
        }
        if let Some(path) = self
            .bookmarks_path
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
        {
            return Ok(path);
        }
        home.map(|h| h.join(DEFAULT_BOOKMARKS_FILE)).ok_or_else(|| {
            BookmarkError::Config(format!(
                "Cannot determine home directory; set {} to choose a bookmarks file",
                BOOKMARKS_PATH_ENV
            ))
        })
    }
}

/// Loads `JumpConfig` from files and environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config file: `$XDG_CONFIG_HOME/jump/config.toml` on Linux, the platform
    /// equivalent elsewhere.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "jump").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the default config file (if present) plus environment overrides.
    pub fn load() -> Result<JumpConfig, BookmarkError> {
        let mut builder = Config::builder();
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                debug!(config_path = %path.display(), "Loading config file");
                builder = builder.add_source(File::from(path).required(false));
            }
        }
        let config = builder
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Load from an explicit config file plus environment overrides. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<JumpConfig, BookmarkError> {
        let config = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    fn environment() -> Environment {
        Environment::with_prefix("JUMP")
            .prefix_separator("_")
            .separator("__")
    }
}
