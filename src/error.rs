use std::collections::TryReserveError;

use thiserror::Error;

/// Failures the scanning engine can report.
///
/// Malformed source text is never an error; only running out of memory while
/// growing the pair or candidate lists aborts a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Out of memory while collecting {what}: {source}")]
    CapacityExhausted {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
}

#[derive(Debug, Error)]
pub enum RainbowError {
    #[error("Invalid position '{0}': expected <line>.<column> with both parts >= 1")]
    InvalidPosition(String),

    #[error("Invalid window size '{0}': expected <lines>.<columns>")]
    InvalidSize(String),

    #[error("Invalid highlight mode '{0}': expected 0, 1 or 2")]
    InvalidMode(String),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
