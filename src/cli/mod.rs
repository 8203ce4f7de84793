// src/cli/mod.rs
//! CLI argument types and command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, OutputFormat};
pub use handlers::{handle_render, handle_stats, handle_suggest};
