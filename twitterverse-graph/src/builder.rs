//! Graph builder for constructing the social graph from user records.
//!
//! The builder takes `User` records and resolves their following lists
//! into actual graph edges.

use crate::edge::Follow;
use crate::graph::{NodeId, Twitterverse};
use tracing::debug;
use twitterverse_core::User;

/// Builds a `Twitterverse` from user records.
///
/// The builder handles the two-pass process:
/// 1. Add all users to the graph
/// 2. Resolve following lists into edges
///
/// Following entries that name no known user stay in the user's record
/// but never become edges, so traversals skip them.
#[derive(Default)]
pub struct GraphBuilder {
    graph: Twitterverse,
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds users to the graph.
    ///
    /// Call this for each batch of records, then call `build` when all
    /// users are added.
    pub fn add_users(&mut self, users: impl IntoIterator<Item = User>) {
        for user in users {
            self.graph.add_user(user);
        }
    }

    /// Resolves following lists into graph edges.
    ///
    /// Returns the number of dangling entries.
    pub fn resolve_edges(&mut self) -> usize {
        // Collect first; the graph can't be borrowed while adding edges.
        let mut edges_to_add: Vec<(NodeId, NodeId, Follow)> = Vec::new();
        let mut dangling = 0;

        for from in self.graph.graph.node_indices() {
            let user = &self.graph.graph[from];
            for (position, followed) in user.following.iter().enumerate() {
                match self.graph.get_index(followed) {
                    Some(to) => edges_to_add.push((from, to, Follow::new(position))),
                    None => {
                        debug!("{} follows unknown user {}", user.username, followed);
                        dangling += 1;
                    }
                }
            }
        }

        for (from, to, follow) in edges_to_add {
            self.graph.add_follow(from, to, follow);
        }

        dangling
    }

    /// Finishes building and returns the graph.
    pub fn build(mut self) -> Twitterverse {
        let dangling = self.resolve_edges();
        debug!(
            "Built graph: {} users, {} follows, {} dangling",
            self.graph.user_count(),
            self.graph.follow_count(),
            dangling
        );
        self.graph
    }
}

impl FromIterator<User> for Twitterverse {
    fn from_iter<I: IntoIterator<Item = User>>(users: I) -> Self {
        let mut builder = GraphBuilder::new();
        builder.add_users(users);
        builder.build()
    }
}
