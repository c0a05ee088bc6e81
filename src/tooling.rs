//! Tooling & Integration Layer
//!
//! Integrations with the user's environment outside the bookmark store.

pub mod editor;

pub use editor::EditorCommand;
