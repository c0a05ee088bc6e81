//! Jump: bookmark directories and files with short aliases
//!
//! Aliases map to absolute paths in a single JSON document. `jump to <alias>` resolves an alias
//! back to its path for shell navigation, or opens file bookmarks in `$EDITOR`.

pub mod bookmarks;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod tooling;
pub mod validate;
