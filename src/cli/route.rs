//! CLI route: single route table and run context. Dispatches to the bookmark service and
//! presentation.

use crate::bookmarks::BookmarkService;
use crate::cli::output::CommandOutput;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_bookmarks_json, format_bookmarks_table, format_created, format_removed,
};
use crate::cli::{command_name, usage_text};
use crate::config::JumpConfig;
use crate::error::BookmarkError;
use crate::store::JsonFileStore;
use crate::tooling::EditorCommand;
use crate::validate::{PathKind, PathResolver};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

/// Runtime context for CLI execution: the bookmark service and the editor for file bookmarks.
pub struct RunContext {
    service: BookmarkService<JsonFileStore>,
    editor: Option<EditorCommand>,
}

impl RunContext {
    /// Build the context for this process: bookmarks file from config/env, the current
    /// directory for path resolution, and `$EDITOR`.
    pub fn new(config: &JumpConfig) -> Result<Self, BookmarkError> {
        let bookmarks_path = config.storage.resolve_bookmarks_path()?;
        debug!(path = %bookmarks_path.display(), "Using bookmarks file");
        Ok(Self::with_parts(
            JsonFileStore::new(bookmarks_path),
            PathResolver::from_env()?,
            EditorCommand::from_env(),
        ))
    }

    pub fn with_parts(
        store: JsonFileStore,
        resolver: PathResolver,
        editor: Option<EditorCommand>,
    ) -> Self {
        Self {
            service: BookmarkService::new(store, resolver),
            editor,
        }
    }

    pub fn service(&self) -> &BookmarkService<JsonFileStore> {
        &self.service
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, BookmarkError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        debug!(
            command = command_name(command),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<CommandOutput, BookmarkError> {
        match command {
            Commands::Create { path, alias } => {
                let created = self.service.create(path, alias)?;
                Ok(CommandOutput::Success(format_created(&created)))
            }
            Commands::To { alias } => {
                let found = self.service.get(alias)?;
                match found.kind {
                    PathKind::File => Ok(self.open_file(&found.path)),
                    PathKind::Directory | PathKind::Other => {
                        Ok(CommandOutput::Plain(found.path.display().to_string()))
                    }
                }
            }
            Commands::List { format } => {
                let bookmarks = self.service.list();
                if format == "json" {
                    Ok(CommandOutput::Plain(format_bookmarks_json(&bookmarks)?))
                } else {
                    Ok(CommandOutput::Plain(format_bookmarks_table(&bookmarks)))
                }
            }
            Commands::Remove { alias } => {
                let removed = self.service.remove(alias)?;
                Ok(CommandOutput::Success(format_removed(&removed)))
            }
            Commands::Help => Ok(CommandOutput::Plain(usage_text().to_string())),
        }
    }

    /// Hand a file bookmark to the editor; print the path when there is none or it fails.
    fn open_file(&self, path: &Path) -> CommandOutput {
        let text = path.display().to_string();
        let Some(editor) = &self.editor else {
            return CommandOutput::Plain(text);
        };
        match editor.launch(path) {
            Ok(()) => CommandOutput::Silent,
            Err(e) => {
                warn!(editor = editor.program(), "Editor launch failed: {}", e);
                CommandOutput::Degraded {
                    warning: format!("Failed to open file with {}: {}", editor.program(), e),
                    text,
                }
            }
        }
    }
}
