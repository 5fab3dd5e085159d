//! Pending opening delimiters and the error-tolerant closer lookup.

use super::delimiter::matching_opener;
use super::pairs::{CharPosition, MatchedPair};

/// LIFO of openers that have not been closed yet, innermost last.
///
/// The nesting counter is the number of pending openers: pushing assigns the
/// current depth and then increments it, and every entry removed by
/// [`DelimiterStack::match_closer`] decrements it once.
#[derive(Debug, Default)]
pub struct DelimiterStack {
    entries: Vec<CharPosition>,
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting counter, i.e. the depth the next opener will receive.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn push(&mut self, entry: CharPosition) {
        self.entries.push(entry);
    }

    /// Removes the innermost opener. Popping an empty stack does nothing.
    pub fn pop(&mut self) -> Option<CharPosition> {
        self.entries.pop()
    }

    pub fn top(&self) -> Option<&CharPosition> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every pending opener, outermost first.
    pub fn drain_all(&mut self) -> Vec<CharPosition> {
        self.entries.drain(..).collect()
    }

    /// Finds the opener closed by `closer`, searching from the innermost
    /// entry outwards.
    ///
    /// Openers above the one found are discarded without producing a pair;
    /// this keeps a half-typed inner construct from breaking the enclosing
    /// ones. A closer with no compatible opener anywhere leaves the stack
    /// untouched and yields `None`.
    ///
    /// The returned closer carries the opener's depth.
    pub fn match_closer(&mut self, closer: CharPosition) -> Option<MatchedPair> {
        let wanted = char::from(matching_opener(u8::try_from(closer.character).ok()?)?);
        let found = self.entries.iter().rposition(|e| e.character == wanted)?;

        #[cfg(debug_assertions)]
        if found + 1 < self.entries.len() {
            log::debug!(
                "Discarding {} unmatched opener(s) before '{}' at {}",
                self.entries.len() - found - 1,
                closer.character,
                closer.position
            );
        }

        self.entries.truncate(found + 1);
        let open = self.entries.pop()?;

        Some(MatchedPair {
            close: CharPosition {
                depth: open.depth,
                ..closer
            },
            open,
        })
    }
}

#[cfg(test)]
#[path = "stack_tests.rs"]
mod stack_tests;
