// src/loader.rs
//! Line-oriented network file parsing.
//!
//! Each line is whitespace-separated: the first token is a user, the rest
//! are users they follow. A line with a single token registers a user with
//! no follows. Blank and whitespace-only lines are skipped. Duplicate
//! tokens pass through as duplicate edges; the graph does not dedup.

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::FollowGraph;

/// Loads a follow graph from a network file.
///
/// # Errors
/// Returns `GraphError::Io` (carrying the path) if the file cannot be read.
pub fn load_path(path: &Path) -> Result<FollowGraph> {
    let text = fs::read_to_string(path).map_err(|source| GraphError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(parse(&text))
}

/// Parses network-file text into a graph. Never fails: malformed input
/// degrades to fewer edges, not an error.
#[must_use]
pub fn parse(text: &str) -> FollowGraph {
    let mut graph = FollowGraph::new();
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let Some(user) = tokens.next() else {
            continue;
        };
        graph.add_user(user);
        for followee in tokens {
            graph.add_follow(user, followee);
        }
    }
    graph
}
