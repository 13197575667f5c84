//! The user record stored in the social graph.

use serde::{Deserialize, Serialize};

/// A single Twitterverse user.
///
/// `following` keeps the usernames exactly as they appeared in the data
/// file, in order. Entries may name users that have no record of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique key for this user.
    pub username: String,

    /// Display name.
    pub name: String,

    pub location: String,

    pub website: String,

    /// Free text, lines joined with `\n`.
    pub bio: String,

    /// Usernames this user follows.
    pub following: Vec<String>,
}

impl User {
    /// Creates a user with empty attributes and no follows.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            name: String::new(),
            location: String::new(),
            website: String::new(),
            bio: String::new(),
            following: Vec::new(),
        }
    }

    /// Builder: set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builder: set the website.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    /// Builder: set the biography.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Builder: set the following list.
    pub fn with_following<I, S>(mut self, following: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.following = following.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `username` appears in this user's following list.
    pub fn follows(&self, username: &str) -> bool {
        self.following.iter().any(|f| f == username)
    }
}
