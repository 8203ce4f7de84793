// src/graph.rs
//! Directed follow graph with insertion-ordered users.

use std::collections::HashMap;

use crate::error::{GraphError, Result};

/// A directed social graph mapping each user to the list of users they follow.
///
/// Users are kept in insertion order so that every iteration over the graph is
/// deterministic; the `HashMap` is only a lookup index, never iterated.
/// Follow-lists keep duplicates: adding the same edge twice records it twice.
#[derive(Debug, Clone, Default)]
pub struct FollowGraph {
    follows: HashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl FollowGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All known users, in the order they were first added.
    #[must_use]
    pub fn list_users(&self) -> &[String] {
        &self.order
    }

    /// Ensures `user` is present, with an empty follow-list if new.
    ///
    /// Idempotent: a user that already exists keeps its follow-list.
    pub fn add_user(&mut self, user: &str) {
        if !self.follows.contains_key(user) {
            self.follows.insert(user.to_string(), Vec::new());
            self.order.push(user.to_string());
        }
    }

    /// Records that `user` follows `followee`.
    ///
    /// Both users are added to the graph if absent, so the graph stays closed
    /// under its own edges. The edge is appended without deduplication.
    pub fn add_follow(&mut self, user: &str, followee: &str) {
        self.add_user(user);
        self.add_user(followee);
        if let Some(list) = self.follows.get_mut(user) {
            list.push(followee.to_string());
        }
    }

    /// The follow-list of `user`, in the order edges were added.
    ///
    /// # Errors
    /// Returns `GraphError::UnknownUser` if `user` is not in the graph.
    pub fn get_follows(&self, user: &str) -> Result<&[String]> {
        self.follows
            .get(user)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownUser {
                name: user.to_string(),
            })
    }

    /// All (follower, followee) pairs, in (user insertion order, follow-list
    /// order). Duplicate edges appear once per time they were added.
    #[must_use]
    pub fn to_edge_list(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::new();
        for user in &self.order {
            if let Some(list) = self.follows.get(user) {
                for followee in list {
                    edges.push((user.as_str(), followee.as_str()));
                }
            }
        }
        edges
    }

    /// Returns true if `user` is in the graph.
    #[must_use]
    pub fn contains(&self, user: &str) -> bool {
        self.follows.contains_key(user)
    }

    /// Number of users in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the graph has no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
