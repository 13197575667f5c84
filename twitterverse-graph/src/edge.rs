//! Edge types for the social graph.

use serde::{Deserialize, Serialize};

/// A follow relationship. The edge points from the follower to the
/// followed user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    /// Index of the first occurrence in the follower's following list.
    pub position: usize,
}

impl Follow {
    pub fn new(position: usize) -> Self {
        Self { position }
    }
}

/// A simplified edge for graph export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub follower: String,
    pub followed: String,
}
