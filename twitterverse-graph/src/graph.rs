//! Core graph data structure.
//!
//! `Twitterverse` wraps petgraph and adds a username index for lookups.
//! It is built once and then only read; every query stage borrows it.

use crate::edge::{Follow, GraphEdge};
use crate::error::{GraphError, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;
use twitterverse_core::User;

/// Unique identifier for a user node in the graph.
pub type NodeId = NodeIndex;

/// The social graph.
///
/// Nodes are users in insertion order. An edge `A -> B` exists for every
/// entry B in A's following list that names a user with a record.
#[derive(Debug, Default)]
pub struct Twitterverse {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<User, Follow>,

    /// Maps usernames to graph node indexes.
    username_index: HashMap<String, NodeId>,
}

impl Twitterverse {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user to the graph.
    ///
    /// A user with the same username replaces the existing record and
    /// drops its outgoing follows. Edges are resolved by
    /// [`GraphBuilder`](crate::GraphBuilder).
    pub fn add_user(&mut self, user: User) -> NodeId {
        if let Some(&index) = self.username_index.get(&user.username) {
            warn!("Duplicate user {}, replacing earlier record", user.username);
            let mut outgoing: Vec<_> = self
                .graph
                .edges_directed(index, Direction::Outgoing)
                .map(|edge| edge.id())
                .collect();
            // Removal swaps the last edge into the hole, so go highest first.
            outgoing.sort_unstable_by(|a, b| b.cmp(a));
            for edge in outgoing {
                self.graph.remove_edge(edge);
            }
            self.graph[index] = user;
            return index;
        }

        let username = user.username.clone();
        let index = self.graph.add_node(user);
        self.username_index.insert(username, index);
        index
    }

    /// Records that `from` follows `to`. Repeated follows keep the first
    /// position.
    pub fn add_follow(&mut self, from: NodeId, to: NodeId, follow: Follow) {
        if self.graph.find_edge(from, to).is_none() {
            self.graph.add_edge(from, to, follow);
        }
    }

    /// Gets a user by username.
    pub fn get(&self, username: &str) -> Result<&User> {
        self.get_index(username)
            .and_then(|index| self.graph.node_weight(index))
            .ok_or_else(|| GraphError::not_found(username))
    }

    /// Gets a user by graph index.
    pub fn user(&self, index: NodeId) -> Option<&User> {
        self.graph.node_weight(index)
    }

    /// Gets the node index for a username.
    pub fn get_index(&self, username: &str) -> Option<NodeId> {
        self.username_index.get(username).copied()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.username_index.contains_key(username)
    }

    /// Iterates over all users in insertion order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.graph.node_weights()
    }

    /// Iterates over all usernames in insertion order.
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users().map(|user| user.username.as_str())
    }

    /// Returns the number of users.
    pub fn user_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of resolved follow edges.
    pub fn follow_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Users that `index` follows, in following-list order.
    pub(crate) fn following_ids(&self, index: NodeId) -> Vec<NodeId> {
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(index, Direction::Outgoing)
            .map(|edge| (edge.weight().position, edge.target()))
            .collect();
        edges.sort_unstable();
        edges.into_iter().map(|(_, target)| target).collect()
    }

    /// Users that follow `index`, in insertion order.
    pub(crate) fn follower_ids(&self, index: NodeId) -> Vec<NodeId> {
        let mut followers: Vec<_> = self
            .graph
            .neighbors_directed(index, Direction::Incoming)
            .collect();
        followers.sort_unstable();
        followers
    }

    /// Usernames that `username` follows and that have a record.
    ///
    /// Unknown usernames have no follows.
    pub fn following_of(&self, username: &str) -> Vec<&str> {
        self.get_index(username)
            .map(|index| self.names(self.following_ids(index)))
            .unwrap_or_default()
    }

    /// Usernames of everyone following `username`.
    ///
    /// Unknown usernames have no followers.
    pub fn followers_of(&self, username: &str) -> Vec<&str> {
        self.get_index(username)
            .map(|index| self.names(self.follower_ids(index)))
            .unwrap_or_default()
    }

    /// Number of users whose following list contains `username`.
    pub fn follower_count(&self, username: &str) -> usize {
        self.get_index(username)
            .map(|index| {
                self.graph
                    .neighbors_directed(index, Direction::Incoming)
                    .count()
            })
            .unwrap_or(0)
    }

    pub(crate) fn names(&self, ids: impl IntoIterator<Item = NodeId>) -> Vec<&str> {
        ids.into_iter()
            .filter_map(|index| self.user(index))
            .map(|user| user.username.as_str())
            .collect()
    }

    /// Returns all follow edges as username pairs for export.
    pub fn export_edges(&self) -> Vec<GraphEdge> {
        self.graph
            .edge_references()
            .filter_map(|edge| {
                let follower = self.user(edge.source())?;
                let followed = self.user(edge.target())?;
                Some(GraphEdge {
                    follower: follower.username.clone(),
                    followed: followed.username.clone(),
                })
            })
            .collect()
    }
}

/// Graph statistics for the stats command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub users: usize,
    pub follows: usize,
    /// Following entries naming users without a record.
    pub dangling: usize,
}

impl Twitterverse {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        let dangling = self
            .users()
            .flat_map(|user| user.following.iter())
            .filter(|username| !self.contains(username))
            .count();

        GraphStats {
            users: self.user_count(),
            follows: self.follow_count(),
            dangling,
        }
    }
}
