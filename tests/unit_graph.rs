// tests/unit_graph.rs
//! Tests for the follow-graph container invariants.

use mutuals_core::graph::FollowGraph;
use mutuals_core::GraphError;

#[test]
fn test_graph_closed_under_edges() {
    let mut g = FollowGraph::new();
    g.add_follow("a", "b");
    g.add_follow("b", "c");
    for user in g.list_users() {
        for followee in g.get_follows(user).unwrap() {
            assert!(
                g.contains(followee),
                "followee {followee} missing from graph"
            );
        }
    }
}

#[test]
fn test_add_user_twice_keeps_follows() {
    let mut g = FollowGraph::new();
    g.add_user("a");
    g.add_follow("a", "b");
    g.add_user("a");
    assert_eq!(g.get_follows("a").unwrap(), &["b".to_string()]);
}

#[test]
fn test_add_follow_then_get_follows_contains_edge() {
    let mut g = FollowGraph::new();
    g.add_follow("a", "b");
    assert!(g.get_follows("a").unwrap().contains(&"b".to_string()));
}

#[test]
fn test_edge_list_order_and_duplicates() {
    let mut g = FollowGraph::new();
    g.add_follow("a", "b");
    g.add_follow("c", "a");
    g.add_follow("a", "b");
    assert_eq!(
        g.to_edge_list(),
        vec![("a", "b"), ("a", "b"), ("c", "a")],
        "edges must follow (insertion order, follow-list order)"
    );
}

#[test]
fn test_empty_graph() {
    let g = FollowGraph::new();
    assert!(g.is_empty());
    assert_eq!(g.len(), 0);
    assert!(g.to_edge_list().is_empty());
    assert!(matches!(
        g.get_follows("anyone").unwrap_err(),
        GraphError::UnknownUser { .. }
    ));
}
