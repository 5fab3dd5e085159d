//! Decides which `<` and `>` bytes are generic/template delimiters.
//!
//! Telling `Vec<T>` apart from `a < b` needs a real parser, so this pass uses
//! a heuristic instead: every code `<` becomes a candidate, a code `>` is
//! accepted while some candidate opener is still unclosed (and it is not the
//! tail of `->`), and whenever a statement boundary is reached the openers
//! that never closed are dropped again. Whatever survives is handed to the
//! matching pass as an ordered list of positions.

use serde::Serialize;

use super::skip_state::{Lexeme, SkipState};
use crate::error::ScanError;
use crate::grammar::Grammar;
use crate::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Angle {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AngleCandidate {
    pub angle: Angle,
    pub position: Position,
}

/// Collects the angle brackets of `source` that should act as delimiters.
///
/// Returns an empty list for grammars without generics/templates.
pub fn collect_candidates(source: &[u8], grammar: Grammar) -> Result<Vec<AngleCandidate>, ScanError> {
    let mut candidates = Vec::new();
    if !grammar.supports_angle_brackets() {
        return Ok(candidates);
    }

    let boundaries = grammar.statement_boundaries();
    let mut state = SkipState::new(grammar);
    let mut position = Position::START;
    let mut unclosed = 0usize;

    for (index, &byte) in source.iter().enumerate() {
        // Boundaries apply wherever they appear, comments and literals included
        if boundaries.contains(&byte) {
            while trim_unmatched(&mut candidates) {
                unclosed = unclosed.saturating_sub(1);
            }
        }

        if state.classify(source, index) == Lexeme::Code {
            let angle = match byte {
                b'<' => Some(Angle::Open),
                b'>' if unclosed > 0 && !follows_dash(source, index) => Some(Angle::Close),
                _ => None,
            };

            if let Some(angle) = angle {
                candidates
                    .try_reserve(1)
                    .map_err(|source| ScanError::CapacityExhausted {
                        what: "angle bracket candidates",
                        source,
                    })?;
                candidates.push(AngleCandidate { angle, position });
                match angle {
                    Angle::Open => unclosed += 1,
                    Angle::Close => unclosed -= 1,
                }
            }
        }

        position = position.advance(byte);
    }

    #[cfg(debug_assertions)]
    log::debug!(
        "Collected {} angle bracket candidate(s) for {:?}",
        candidates.len(),
        grammar
    );

    Ok(candidates)
}

/// Removes the most recent opener that has no closer after it.
///
/// Walks the list backwards counting closers; the first opener met while no
/// closer is pending is removed. Returns `false` when every opener is
/// matched.
pub fn trim_unmatched(candidates: &mut Vec<AngleCandidate>) -> bool {
    let mut closers = 0usize;

    for index in (0..candidates.len()).rev() {
        match candidates[index].angle {
            Angle::Close => closers += 1,
            Angle::Open if closers == 0 => {
                candidates.remove(index);
                return true;
            }
            Angle::Open => closers -= 1,
        }
    }

    false
}

/// `->` is an arrow, never a closing angle bracket.
fn follows_dash(source: &[u8], index: usize) -> bool {
    index > 0 && source[index - 1] == b'-'
}

#[cfg(test)]
#[path = "angles_tests.rs"]
mod angles_tests;
