// src/render.rs
//! Graph rendering to Graphviz DOT and JSON.

use std::fmt::Write;

use serde::Serialize;

use crate::graph::FollowGraph;

/// One directed edge, for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct Edge<'a> {
    pub follower: &'a str,
    pub followee: &'a str,
}

/// Renders the graph as a Graphviz digraph, one edge statement per follow
/// relation, with neato layout hints.
#[must_use]
pub fn to_dot(graph: &FollowGraph) -> String {
    let mut out = String::from("digraph {\n");
    out.push_str("    layout=neato\n");
    out.push_str("    overlap=scalexy\n");
    for (follower, followee) in graph.to_edge_list() {
        let _ = writeln!(out, "    \"{follower}\" -> \"{followee}\"");
    }
    out.push('}');
    out
}

/// Renders the edge list as a JSON array of `{follower, followee}` objects.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json(graph: &FollowGraph) -> serde_json::Result<String> {
    let edges: Vec<Edge> = graph
        .to_edge_list()
        .into_iter()
        .map(|(follower, followee)| Edge { follower, followee })
        .collect();
    serde_json::to_string_pretty(&edges)
}
