//! Twitterverse Core - User records, queries and the flat-file formats
//!
//! This crate holds the data shapes the rest of Twitterverse works with:
//! the [`User`] record loaded from a data file and the three-part [`Query`]
//! (search, filter, present) loaded from a query file.
//!
//! # Example
//!
//! ```no_run
//! use twitterverse_core::{load_data, load_query};
//!
//! let users = load_data("data.txt").unwrap();
//! let query = load_query("query.txt").unwrap();
//! println!("{} users, seed {}", users.len(), query.search.username);
//! ```

mod error;
mod loader;
mod query;
mod query_parser;
mod user;

pub use error::{ParseError, Result};
pub use loader::{load_data, parse_data, END_BIO, END_USER};
pub use query::{FilterSpec, Format, Operation, PresentSpec, Predicate, Query, SearchSpec, SortKey};
pub use query_parser::{load_query, parse_query};
pub use user::User;
