//! Integration tests for the jump bookmark CLI

mod bookmark_cli;

pub use test_utils::Sandbox;
