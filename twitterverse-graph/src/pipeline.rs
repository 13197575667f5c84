//! End-to-end query execution.

use crate::error::Result;
use crate::graph::Twitterverse;
use std::time::Instant;
use tracing::debug;
use twitterverse_core::Query;

/// Runs a query against the graph: search, then filter, then present.
///
/// Fails with `NotFound` when the seed user or a `follower` predicate's
/// user has no record.
pub fn execute_query(graph: &Twitterverse, query: &Query) -> Result<String> {
    let start = Instant::now();

    let found = graph.traverse(&query.search.username, &query.search.operations)?;
    let kept = graph.filter(&found, &query.filter)?;
    let rendered = graph.present(&kept, query.present);

    debug!(
        "Query from {}: {} found, {} kept in {}us",
        query.search.username,
        found.len(),
        kept.len(),
        start.elapsed().as_micros()
    );

    Ok(rendered)
}
