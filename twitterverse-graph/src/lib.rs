//! Twitterverse Graph - the social graph and its query pipeline
//!
//! This crate stores users and their follow relationships and runs
//! queries against them. A query moves through three stages, each a
//! pure function of the graph and the previous stage's result:
//!
//! 1. [`Twitterverse::traverse`] expands outward from a seed user
//! 2. [`Twitterverse::filter`] keeps users matching every predicate
//! 3. [`Twitterverse::present`] sorts and renders the survivors
//!
//! # Architecture
//!
//! The graph uses petgraph internally. An edge `A -> B` means A follows B,
//! so following lookups walk outgoing edges and follower lookups walk
//! incoming ones. A username index gives direct access by key.
//!
//! # Example
//!
//! ```no_run
//! use twitterverse_core::{load_data, load_query};
//! use twitterverse_graph::{execute_query, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_users(load_data("data.txt").unwrap());
//! let graph = builder.build();
//!
//! let query = load_query("query.txt").unwrap();
//! println!("{}", execute_query(&graph, &query).unwrap());
//! ```

mod builder;
mod edge;
mod error;
mod filter;
mod graph;
mod pipeline;
mod present;
mod traversal;

pub use builder::GraphBuilder;
pub use edge::{Follow, GraphEdge};
pub use error::{GraphError, Result};
pub use graph::{GraphStats, NodeId, Twitterverse};
pub use pipeline::execute_query;
pub use present::{list_text, DELIMITER};
