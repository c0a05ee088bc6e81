//! CLI presentation: text and json formatters for bookmark results.

use crate::bookmarks::{CreateResult, RemoveResult};
use crate::error::{BookmarkError, StorageError};
use crate::store::BookmarkCollection;
use comfy_table::{Table, TableComponent};

pub fn format_created(result: &CreateResult) -> String {
    format!(
        "Bookmark '{}' created for '{}'",
        result.alias,
        result.path.display()
    )
}

pub fn format_removed(result: &RemoveResult) -> String {
    format!(
        "Bookmark '{}' removed (was pointing to '{}')",
        result.alias,
        result.path.display()
    )
}

/// `ALIAS | PATH` table, or a note when there is nothing to list.
pub fn format_bookmarks_table(bookmarks: &BookmarkCollection) -> String {
    if bookmarks.is_empty() {
        return "No bookmarks found.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
    table.remove_style(TableComponent::LeftBorder);
    table.remove_style(TableComponent::RightBorder);
    table.set_header(vec!["ALIAS", "PATH"]);
    for (alias, path) in bookmarks.iter() {
        table.add_row(vec![alias.to_string(), path.display().to_string()]);
    }
    table.to_string()
}

pub fn format_bookmarks_json(bookmarks: &BookmarkCollection) -> Result<String, BookmarkError> {
    serde_json::to_string_pretty(bookmarks)
        .map_err(|e| BookmarkError::Storage(StorageError::Serialize(e)))
}
