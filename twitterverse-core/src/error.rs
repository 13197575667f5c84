//! Error types for loading data and query files.

use std::io;
use thiserror::Error;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading a data file or a query file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    Io(#[from] io::Error),

    #[error("Unexpected end of input at line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("Missing {section} section")]
    MissingSection { section: &'static str },

    #[error("Query has no seed username")]
    MissingSeed,

    #[error("Query has no search operations")]
    EmptyOperations,

    #[error("Unknown search operation '{0}' (expected followers or following)")]
    UnknownOperation(String),

    #[error("Unknown filter predicate '{0}'")]
    UnknownPredicate(String),

    #[error("Filter predicate '{0}' has no argument")]
    MissingArgument(String),

    #[error("Unknown sort key '{0}' (expected username, name or popularity)")]
    UnknownSortKey(String),

    #[error("Unknown format '{0}' (expected short or long)")]
    UnknownFormat(String),

    #[error("Presentation is missing the {0} line")]
    MissingPresentation(&'static str),
}
