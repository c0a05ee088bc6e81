//! CLI parse: clap types for jump. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Jump - bookmark directories and files with aliases for quick navigation
#[derive(Debug, Parser)]
#[command(name = "jump", version)]
#[command(about = "Bookmark directories and files with aliases for quick navigation")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Create a new bookmark
    Create {
        /// Directory or file to bookmark (relative paths and ~ are resolved)
        path: String,
        /// Alias: letters, digits, '_' and '-'
        alias: String,
    },
    /// Navigate to a bookmark (prints directories, opens files in $EDITOR)
    To {
        /// Bookmark alias
        alias: String,
    },
    /// List all bookmarks
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Remove a bookmark
    #[command(visible_alias = "rm")]
    Remove {
        /// Bookmark alias
        alias: String,
    },
    /// Show help information
    Help,
}
