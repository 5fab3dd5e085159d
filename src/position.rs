//! Line/column coordinates inside a scanned buffer.
//!
//! Lines and columns are both 1-based. Columns count bytes, which is the
//! coordinate system the editor uses when it receives `line.column` ranges.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RainbowError;

/// A location in the buffer, ordered by line first and column second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl Position {
    /// First byte of the buffer.
    pub const START: Position = Position { line: 1, column: 1 };

    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the position of the byte that follows `byte`.
    ///
    /// A newline moves to column 1 of the next line; every other byte moves
    /// one column to the right.
    pub fn advance(self, byte: u8) -> Self {
        if byte == b'\n' {
            Self {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.line, self.column)
    }
}

impl FromStr for Position {
    type Err = RainbowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_pair(s) {
            Some((line, column)) if line >= 1 && column >= 1 => Ok(Position { line, column }),
            _ => Err(RainbowError::InvalidPosition(s.to_string())),
        }
    }
}

/// Parses two decimal numbers separated by a single non-digit character,
/// e.g. `12.5` or `40,120`.
pub fn parse_pair(s: &str) -> Option<(usize, usize)> {
    let split = s.find(|c: char| !c.is_ascii_digit())?;
    let (first, rest) = s.split_at(split);
    let mut rest = rest.chars();
    rest.next();
    let second = rest.as_str();

    if first.is_empty() || second.is_empty() || !second.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((first.parse().ok()?, second.parse().ok()?))
}
