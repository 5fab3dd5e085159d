//! Delimiter matching over raw source text.
//!
//! A scan runs in up to two passes. For grammars with generics/templates the
//! angle bracket pass first decides which `<`/`>` bytes are delimiters; the
//! matching pass then walks the buffer again with the same comment/literal
//! rules and pairs every closer with its opener.

pub mod angles;
pub mod delimiter;
pub mod engine;
pub mod pairs;
pub mod skip_state;
pub mod stack;

pub use angles::{Angle, AngleCandidate, collect_candidates, trim_unmatched};
pub use engine::match_delimiters;
pub use pairs::{CharPosition, MatchedPair, PairCollector};
pub use skip_state::{Lexeme, SkipState};
pub use stack::DelimiterStack;

use crate::error::ScanError;
use crate::grammar::Grammar;

/// Scans `source` and returns its matched delimiter pairs.
///
/// `resolve_angles` enables generic/template detection; it has no effect for
/// grammars that have neither. The result depends only on the arguments.
pub fn scan(
    source: &[u8],
    grammar: Grammar,
    resolve_angles: bool,
) -> Result<Vec<MatchedPair>, ScanError> {
    let candidates = if resolve_angles && grammar.supports_angle_brackets() {
        collect_candidates(source, grammar)?
    } else {
        Vec::new()
    };

    let pairs = match_delimiters(source, grammar, &candidates)?;

    #[cfg(debug_assertions)]
    log::debug!(
        "Scanned {} bytes as {:?}: {} pair(s)",
        source.len(),
        grammar,
        pairs.len()
    );

    Ok(pairs)
}
