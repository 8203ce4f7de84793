// src/cli/handlers.rs
use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::engine;
use crate::loader;
use crate::render;

/// Handles the suggest command: load the file, run the recommendation,
/// return the recommended username.
///
/// # Errors
/// Returns error on read failure or any of the engine's named conditions.
pub fn handle_suggest(file: &Path, user: &str) -> Result<String> {
    let graph = loader::load_path(file)?;
    let pick = engine::suggest(&graph, user)?;
    Ok(pick)
}

/// Handles the render command in the requested format.
///
/// # Errors
/// Returns error if the file cannot be read or JSON serialization fails.
pub fn handle_render(file: &Path, format: OutputFormat) -> Result<String> {
    let graph = loader::load_path(file)?;
    match format {
        OutputFormat::Dot => Ok(render::to_dot(&graph)),
        OutputFormat::Json => Ok(render::to_json(&graph)?),
    }
}

/// Handles the stats command: per-user outgoing degree plus totals.
///
/// # Errors
/// Returns error if the file cannot be read.
pub fn handle_stats(file: &Path) -> Result<String> {
    let graph = loader::load_path(file)?;
    let edge_count = graph.to_edge_list().len();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} users, {} follows",
        graph.len().to_string().bold(),
        edge_count.to_string().bold()
    );
    for user in graph.list_users() {
        let degree = graph.get_follows(user)?.len();
        let _ = writeln!(out, "  {user:<20} {}", format!("{degree} following").dimmed());
    }
    Ok(out)
}
