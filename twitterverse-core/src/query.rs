//! Query types.
//!
//! A query has three parts, run in order: a search that expands outward
//! from a seed user, a filter that narrows the result, and a presentation
//! that sorts and renders it.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One hop of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Users who follow the current user.
    Followers,

    /// Users the current user follows.
    Following,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Followers => "followers",
            Self::Following => "following",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Operation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "followers" => Ok(Self::Followers),
            "following" => Ok(Self::Following),
            other => Err(ParseError::UnknownOperation(other.to_string())),
        }
    }
}

/// Ordering applied before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Username,

    /// Display name, then username.
    Name,

    /// Follower count descending, then username.
    Popularity,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Username => "username",
            Self::Name => "name",
            Self::Popularity => "popularity",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "name" => Ok(Self::Name),
            "popularity" => Ok(Self::Popularity),
            other => Err(ParseError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// A single list of usernames.
    #[default]
    Short,

    /// One delimited block per user with every field.
    Long,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Short => "short",
            Self::Long => "long",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(ParseError::UnknownFormat(other.to_string())),
        }
    }
}

/// Where the search starts and how it expands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpec {
    pub username: String,
    pub operations: Vec<Operation>,
}

/// A single filter condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate<'a> {
    /// Display name contains the text, ignoring case.
    NameIncludes(&'a str),
    /// Location contains the text, ignoring case.
    LocationIncludes(&'a str),
    /// User follows the named user.
    Following(&'a str),
    /// User is followed by the named user.
    Follower(&'a str),
}

impl Predicate<'_> {
    /// The keyword used for this predicate in query files.
    pub fn key(&self) -> &'static str {
        match self {
            Self::NameIncludes(_) => "name-includes",
            Self::LocationIncludes(_) => "location-includes",
            Self::Following(_) => "following",
            Self::Follower(_) => "follower",
        }
    }
}

/// Filter conditions, combined with AND.
///
/// Each key holds at most one value; setting it again replaces the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_includes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_includes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follower: Option<String>,
}

impl FilterSpec {
    /// Sets a predicate by its query-file keyword.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), ParseError> {
        let slot = match key {
            "name-includes" => &mut self.name_includes,
            "location-includes" => &mut self.location_includes,
            "following" => &mut self.following,
            "follower" => &mut self.follower,
            other => return Err(ParseError::UnknownPredicate(other.to_string())),
        };
        *slot = Some(value.into());
        Ok(())
    }

    /// The active predicates.
    pub fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut predicates = Vec::new();
        if let Some(text) = self.name_includes.as_deref() {
            predicates.push(Predicate::NameIncludes(text));
        }
        if let Some(text) = self.location_includes.as_deref() {
            predicates.push(Predicate::LocationIncludes(text));
        }
        if let Some(username) = self.following.as_deref() {
            predicates.push(Predicate::Following(username));
        }
        if let Some(username) = self.follower.as_deref() {
            predicates.push(Predicate::Follower(username));
        }
        predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }
}

/// How to order and render the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentSpec {
    #[serde(rename = "sort-by")]
    pub sort_by: SortKey,
    pub format: Format,
}

/// A complete query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub search: SearchSpec,
    #[serde(default)]
    pub filter: FilterSpec,
    pub present: PresentSpec,
}
