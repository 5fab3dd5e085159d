use serde::Serialize;

use crate::error::ScanError;
use crate::position::Position;

/// A delimiter seen at a position, tagged with its nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharPosition {
    pub character: char,
    pub position: Position,
    pub depth: usize,
}

impl CharPosition {
    pub fn new(byte: u8, position: Position, depth: usize) -> Self {
        Self {
            character: char::from(byte),
            position,
            depth,
        }
    }
}

/// A closing delimiter together with the opener it closes.
///
/// Both halves carry the opener's depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchedPair {
    pub close: CharPosition,
    pub open: CharPosition,
}

impl MatchedPair {
    pub fn depth(&self) -> usize {
        self.open.depth
    }
}

/// Matched pairs in the order their closers were encountered.
#[derive(Debug, Default)]
pub struct PairCollector {
    pairs: Vec<MatchedPair>,
}

impl PairCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair. On allocation failure the already collected pairs are
    /// left untouched.
    pub fn push(&mut self, pair: MatchedPair) -> Result<(), ScanError> {
        self.pairs
            .try_reserve(1)
            .map_err(|source| ScanError::CapacityExhausted {
                what: "matched pairs",
                source,
            })?;
        self.pairs.push(pair);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<MatchedPair> {
        self.pairs
    }
}
