use super::angles::AngleCandidate;
use super::delimiter::{is_bracket_closer, is_bracket_opener};
use super::pairs::{CharPosition, MatchedPair, PairCollector};
use super::skip_state::{Lexeme, SkipState};
use super::stack::DelimiterStack;
use crate::error::ScanError;
use crate::grammar::Grammar;
use crate::position::Position;

/// Matches delimiters in `source`, treating `<`/`>` as delimiters only at the
/// positions listed in `candidates`.
///
/// Pairs are returned in the order their closers appear. Openers still
/// pending at the end of the buffer produce nothing.
pub fn match_delimiters(
    source: &[u8],
    grammar: Grammar,
    candidates: &[AngleCandidate],
) -> Result<Vec<MatchedPair>, ScanError> {
    let mut state = SkipState::new(grammar);
    let mut stack = DelimiterStack::new();
    let mut pairs = PairCollector::new();
    let mut pending = candidates.iter().peekable();
    let mut position = Position::START;

    for (index, &byte) in source.iter().enumerate() {
        if state.classify(source, index) == Lexeme::Code {
            // Candidates behind the cursor can never be consumed
            while pending.next_if(|c| c.position < position).is_some() {}

            let is_angle = matches!(byte, b'<' | b'>')
                && pending.next_if(|c| c.position == position).is_some();

            if is_bracket_opener(byte) || (is_angle && byte == b'<') {
                stack.push(CharPosition::new(byte, position, stack.depth()));
            } else if is_bracket_closer(byte) || (is_angle && byte == b'>') {
                let closer = CharPosition::new(byte, position, stack.depth());
                if let Some(pair) = stack.match_closer(closer) {
                    pairs.push(pair)?;
                }
            }
        }

        position = position.advance(byte);
    }

    #[cfg(debug_assertions)]
    if !stack.is_empty() {
        log::debug!(
            "{} opener(s) left unmatched at end of buffer",
            stack.drain_all().len()
        );
    }

    Ok(pairs.into_pairs())
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
