//! Error types for graph queries.

use thiserror::Error;
use twitterverse_core::ParseError;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while querying the graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A username has no record in the graph.
    #[error("User not found: {username}")]
    NotFound { username: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl GraphError {
    pub(crate) fn not_found(username: &str) -> Self {
        Self::NotFound {
            username: username.to_string(),
        }
    }
}
