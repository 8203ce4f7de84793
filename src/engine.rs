// src/engine.rs
//! Two-phase connection recommendation.
//!
//! Phase 1 finds the most similar other user by Jaccard overlap of
//! follow-sets. Phase 2 picks, from that user's connections, the
//! highest-outgoing-degree user the requester does not already follow.
//! Both phases break ties by first position in graph iteration order,
//! so the result is deterministic for an unmutated graph.

use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::graph::FollowGraph;

/// Jaccard index of the follow-sets of `a` and `b`.
///
/// Duplicate follows collapse to a set before comparison. When both users
/// follow nobody the union is empty and the index is defined as 0.0.
///
/// # Errors
/// Returns `GraphError::UnknownUser` if either user is not in the graph.
#[allow(clippy::cast_precision_loss)]
pub fn jaccard(graph: &FollowGraph, a: &str, b: &str) -> Result<f64> {
    let set_a: HashSet<&str> = graph.get_follows(a)?.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = graph.get_follows(b)?.iter().map(String::as_str).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return Ok(0.0);
    }

    let intersection = set_a.intersection(&set_b).count();
    Ok(intersection as f64 / union as f64)
}

/// Recommends one new connection for `user`.
///
/// # Errors
/// - `GraphError::UnknownUser` if `user` is not in the graph.
/// - `GraphError::NoSimilarUser` if the graph has no other users.
/// - `GraphError::NoCandidate` if the most similar user offers no
///   connection that `user` does not already follow.
pub fn suggest(graph: &FollowGraph, user: &str) -> Result<String> {
    let similar = most_similar(graph, user)?;
    best_candidate(graph, user, &similar)
}

/// The user (excluding `user`) with the highest Jaccard index against
/// `user`'s follow-set. Ties go to the earliest user in insertion order.
fn most_similar(graph: &FollowGraph, user: &str) -> Result<String> {
    // Validates `user` up front so a lone unknown name reports UnknownUser
    // rather than NoSimilarUser.
    graph.get_follows(user)?;

    let mut best: Option<(&str, f64)> = None;
    for other in graph.list_users() {
        if other == user {
            continue;
        }
        let score = jaccard(graph, user, other)?;
        // Strictly-greater keeps the first-seen user on equal scores.
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((other, score));
        }
    }

    match best {
        Some((name, _)) => Ok(name.to_string()),
        None => Err(GraphError::NoSimilarUser),
    }
}

/// From `similar`'s connections, the eligible candidate with the most
/// outgoing follows. Eligible means not `user` and not already followed by
/// `user`. Ties go to the earliest position in `similar`'s follow-list.
fn best_candidate(graph: &FollowGraph, user: &str, similar: &str) -> Result<String> {
    let already: HashSet<&str> = graph.get_follows(user)?.iter().map(String::as_str).collect();

    let mut best: Option<(&str, usize)> = None;
    for candidate in graph.get_follows(similar)? {
        let candidate = candidate.as_str();
        if candidate == user || already.contains(candidate) {
            continue;
        }
        let degree = graph.get_follows(candidate)?.len();
        // Strictly-greater also keeps a duplicated followee from winning a
        // tie against its own first occurrence.
        if best.map_or(true, |(_, d)| degree > d) {
            best = Some((candidate, degree));
        }
    }

    match best {
        Some((name, _)) => Ok(name.to_string()),
        None => Err(GraphError::NoCandidate {
            similar: similar.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &[&str])]) -> FollowGraph {
        let mut g = FollowGraph::new();
        for (user, follows) in edges {
            g.add_user(user);
            for f in *follows {
                g.add_follow(user, f);
            }
        }
        g
    }

    #[test]
    fn test_jaccard_identical_sets() {
        let g = graph(&[("a", &["x", "y"]), ("b", &["y", "x"])]);
        let j = jaccard(&g, "a", "b").unwrap();
        assert!((j - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jaccard_disjoint_sets() {
        let g = graph(&[("a", &["x"]), ("b", &["y"])]);
        assert_eq!(jaccard(&g, "a", "b").unwrap(), 0.0);
    }

    #[test]
    fn test_jaccard_empty_union_is_zero() {
        let g = graph(&[("a", &[]), ("b", &[])]);
        assert_eq!(jaccard(&g, "a", "b").unwrap(), 0.0);
    }

    #[test]
    fn test_jaccard_collapses_duplicates() {
        let mut g = FollowGraph::new();
        g.add_follow("a", "x");
        g.add_follow("a", "x");
        g.add_follow("b", "x");
        let j = jaccard(&g, "a", "b").unwrap();
        assert!((j - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_suggest_never_self_or_followed() {
        let g = graph(&[
            ("alice", &["bob", "carol"]),
            ("dave", &["bob", "carol", "erin"]),
            ("francis", &["bob"]),
        ]);
        let pick = suggest(&g, "francis").unwrap();
        assert_ne!(pick, "francis");
        assert!(!g.get_follows("francis").unwrap().contains(&pick));
    }

    #[test]
    fn test_phase1_tie_break_first_in_order() {
        // z follows nobody, so every other user scores 0. The most similar
        // must be alice (earliest in insertion order), whose only follow x
        // is eligible.
        let g = graph(&[("alice", &["x"]), ("dave", &["y"]), ("carol", &["z"])]);
        assert_eq!(suggest(&g, "z").unwrap(), "x");
    }

    #[test]
    fn test_single_user_graph() {
        let g = graph(&[("solo", &[])]);
        assert!(matches!(
            suggest(&g, "solo").unwrap_err(),
            GraphError::NoSimilarUser
        ));
    }

    #[test]
    fn test_unknown_user() {
        let g = graph(&[("a", &["b"])]);
        assert!(matches!(
            suggest(&g, "ghost").unwrap_err(),
            GraphError::UnknownUser { .. }
        ));
    }
}
