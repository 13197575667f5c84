//! Query file parser.
//!
//! ```text
//! SEARCH
//! tomCruise
//! following
//! followers
//! FILTER
//! name-includes katie
//! PRESENT
//! sort-by popularity
//! format long
//! ```

use crate::error::{ParseError, Result};
use crate::query::{FilterSpec, Operation, PresentSpec, Query, SearchSpec};
use std::fs;
use std::path::Path;
use tracing::debug;

const SEARCH: &str = "SEARCH";
const FILTER: &str = "FILTER";
const PRESENT: &str = "PRESENT";

/// Reads and parses a query file.
pub fn load_query(path: impl AsRef<Path>) -> Result<Query> {
    let text = fs::read_to_string(path)?;
    parse_query(&text)
}

/// Parses query file text.
pub fn parse_query(text: &str) -> Result<Query> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let search_at = section_index(&lines, SEARCH, 0)?;
    let filter_at = section_index(&lines, FILTER, search_at + 1)?;
    let present_at = section_index(&lines, PRESENT, filter_at + 1)?;

    let search = parse_search(&lines[search_at + 1..filter_at])?;
    let filter = parse_filter(&lines[filter_at + 1..present_at])?;
    let present = parse_present(&lines[present_at + 1..])?;

    debug!(
        "Parsed query: seed {} with {} operations",
        search.username,
        search.operations.len()
    );

    Ok(Query {
        search,
        filter,
        present,
    })
}

fn section_index(lines: &[&str], section: &'static str, from: usize) -> Result<usize> {
    lines
        .iter()
        .skip(from)
        .position(|line| *line == section)
        .map(|offset| from + offset)
        .ok_or(ParseError::MissingSection { section })
}

fn parse_search(lines: &[&str]) -> Result<SearchSpec> {
    let (username, ops) = lines.split_first().ok_or(ParseError::MissingSeed)?;
    if ops.is_empty() {
        return Err(ParseError::EmptyOperations);
    }

    let operations = ops
        .iter()
        .map(|op| op.parse::<Operation>())
        .collect::<Result<Vec<_>>>()?;

    Ok(SearchSpec {
        username: username.to_string(),
        operations,
    })
}

fn parse_filter(lines: &[&str]) -> Result<FilterSpec> {
    let mut filter = FilterSpec::default();
    for line in lines {
        let (key, value) = split_keyword(line);
        filter.set(key, value)?;
        if value.is_empty() {
            return Err(ParseError::MissingArgument(key.to_string()));
        }
    }
    Ok(filter)
}

fn parse_present(lines: &[&str]) -> Result<PresentSpec> {
    let mut sort_by = None;
    let mut format = None;

    for line in lines {
        match split_keyword(line) {
            ("sort-by", value) => sort_by = Some(value.parse()?),
            ("format", value) => format = Some(value.parse()?),
            (other, _) => debug!("Ignoring presentation line '{}'", other),
        }
    }

    Ok(PresentSpec {
        sort_by: sort_by.ok_or(ParseError::MissingPresentation("sort-by"))?,
        format: format.ok_or(ParseError::MissingPresentation("format"))?,
    })
}

/// Splits `key rest of line` at the first space.
fn split_keyword(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((key, value)) => (key, value),
        None => (line, ""),
    }
}
