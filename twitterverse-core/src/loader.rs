//! Data file loader.
//!
//! A data file is a sequence of user blocks:
//!
//! ```text
//! username
//! name
//! location
//! website
//! bio lines...
//! ENDBIO
//! followed usernames...
//! END
//! ```

use crate::error::{ParseError, Result};
use crate::user::User;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Terminates the bio section of a user block.
pub const END_BIO: &str = "ENDBIO";

/// Terminates a user block.
pub const END_USER: &str = "END";

/// Reads and parses a data file.
pub fn load_data(path: impl AsRef<Path>) -> Result<Vec<User>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let users = parse_data(&text)?;
    info!("Loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

/// Parses data file text into user records, in file order.
pub fn parse_data(text: &str) -> Result<Vec<User>> {
    let mut lines = Lines::new(text);
    let mut users = Vec::new();

    while lines.skip_blank() {
        let username = lines.next_or("username")?.to_string();
        let name = lines.next_or("name")?.to_string();
        let location = lines.next_or("location")?.to_string();
        let website = lines.next_or("website")?.to_string();

        let bio = lines.until(END_BIO, "ENDBIO")?.join("\n");
        let following: Vec<String> = lines
            .until(END_USER, "END")?
            .into_iter()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        debug!("Parsed user {} following {}", username, following.len());

        users.push(User {
            username,
            name,
            location,
            website,
            bio,
            following,
        });
    }

    Ok(users)
}

/// Right-trimmed line cursor with 1-based line numbers for errors.
struct Lines<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().map(str::trim_end).collect(),
            pos: 0,
        }
    }

    /// Skips blank lines between blocks. Returns false at end of input.
    fn skip_blank(&mut self) -> bool {
        while self.pos < self.lines.len() && self.lines[self.pos].is_empty() {
            self.pos += 1;
        }
        self.pos < self.lines.len()
    }

    fn next_or(&mut self, expected: &'static str) -> Result<&'a str> {
        let line = self
            .lines
            .get(self.pos)
            .copied()
            .ok_or(ParseError::UnexpectedEof {
                line: self.pos + 1,
                expected,
            })?;
        self.pos += 1;
        Ok(line)
    }

    /// Collects lines up to the sentinel, consuming the sentinel.
    fn until(&mut self, sentinel: &str, expected: &'static str) -> Result<Vec<&'a str>> {
        let mut section = Vec::new();
        loop {
            let line = self.next_or(expected)?;
            if line == sentinel {
                return Ok(section);
            }
            section.push(line);
        }
    }
}
