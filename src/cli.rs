//! CLI domain: parse, route, help, output, and presentation only.
//! No bookmark rules here; a single route table dispatches to the bookmark service.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, usage_text};
pub use output::{format_error, format_success, map_error, CommandOutput};
pub use parse::{Cli, Commands};
pub use presentation::{
    format_bookmarks_json, format_bookmarks_table, format_created, format_removed,
};
pub use route::RunContext;
