//! rainbow library - depth-colored delimiter highlighting
//!
//! The scanning engine lives in [`scan`]; the remaining modules turn its
//! matched pairs into editor highlight commands.

pub mod config;
pub mod error;
pub mod grammar;
pub mod highlight;
pub mod input;
pub mod kakoune;
pub mod position;
pub mod scan;
pub mod viewport;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{RainbowError, ScanError};
pub use grammar::Grammar;
pub use position::Position;
pub use scan::{MatchedPair, scan};
