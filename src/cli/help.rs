//! CLI help text and command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name recorded on log events.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Create { .. } => "create",
        Commands::To { .. } => "to",
        Commands::List { .. } => "list",
        Commands::Remove { .. } => "remove",
        Commands::Help => "help",
    }
}

/// Usage text printed by `jump help` and by `jump` with no command.
pub fn usage_text() -> &'static str {
    r#"Jump - Quick navigation with bookmarks

Usage:
  jump create <path> <alias>    Create a new bookmark
  jump to <alias>               Navigate to a bookmark
  jump list [--format json]     List all bookmarks
  jump remove <alias>           Remove a bookmark (alias: rm)
  jump help                     Show this help

Examples:
  jump create /var/www/project WORK
  jump create ~/documents/notes.txt NOTES
  jump list
  jump to WORK
  jump remove WORK

Shell Integration:
  A process cannot change its parent's directory, so wrap jump in a shell
  function. Add this to your ~/.bashrc or ~/.zshrc:

  function jump() {
      local result
      result=$(command jump "$@") || return $?
      if [[ "$1" == "to" && -d "$result" ]]; then
          cd "$result"
      elif [[ -n "$result" ]]; then
          echo "$result"
      fi
  }

Environment:
  EDITOR                 Editor used by `jump to` for file bookmarks
  JUMP_BOOKMARKS_PATH    Bookmarks file (default: ~/.jump.json)
  JUMP_LOG               Log filter, e.g. `debug` or `jump=trace`"#
}
