//! Editor Integration
//!
//! Opens file bookmarks in the user's `$EDITOR`. The launch is fire-and-forget: the child is
//! spawned with the terminal's stdio and never waited on.

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Environment variable naming the editor command.
pub const EDITOR_ENV: &str = "EDITOR";

/// Editor command line taken from `$EDITOR`, split on whitespace (`code -w` works).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    /// Parse an editor command line; blank input means "no editor".
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Editor configured in the environment, if any. An empty `EDITOR` counts as unset.
    pub fn from_env() -> Option<Self> {
        std::env::var(EDITOR_ENV)
            .ok()
            .and_then(|raw| Self::parse(&raw))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Spawn the editor on `file` without waiting for it to exit.
    pub fn launch(&self, file: &Path) -> std::io::Result<()> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(file)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;
        debug!(
            editor = %self.program,
            pid = child.id(),
            file = %file.display(),
            "Editor launched"
        );
        Ok(())
    }
}
