//! CLI output: what a command prints, and error mapping to the stable CLI surface.

use crate::error::BookmarkError;
use owo_colors::OwoColorize;

/// What a successful command wants printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Confirmation of a change, printed with a success mark.
    Success(String),
    /// Raw stdout text: a path for the shell wrapper, a table, usage.
    Plain(String),
    /// A warning for stderr plus the stdout text to fall back on.
    Degraded { warning: String, text: String },
    /// Nothing to print (the editor took over).
    Silent,
}

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &BookmarkError) -> String {
    e.to_string()
}

pub fn format_success(message: &str, color: bool) -> String {
    if color {
        format!("{} {}", "✓".green().bold(), message)
    } else {
        format!("✓ {}", message)
    }
}

pub fn format_error(message: &str, color: bool) -> String {
    if color {
        format!("{} {}", "✗".red().bold(), message.red())
    } else {
        format!("✗ {}", message)
    }
}
