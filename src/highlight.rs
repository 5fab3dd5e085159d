//! Turns matched pairs into colored ranges for the visible part of a buffer.

use std::str::FromStr;

use serde::Serialize;

use crate::error::RainbowError;
use crate::position::Position;
use crate::scan::MatchedPair;
use crate::viewport::Window;

/// What gets highlighted besides the delimiters themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightMode {
    /// Only the delimiter characters.
    #[default]
    Delimiters,
    /// Also the background of the innermost pair around the cursor.
    Cursor,
    /// Also the background of every visible pair, colored by depth.
    Scopes,
}

impl FromStr for HighlightMode {
    type Err = RainbowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(HighlightMode::Delimiters),
            "1" => Ok(HighlightMode::Cursor),
            "2" => Ok(HighlightMode::Scopes),
            _ => Err(RainbowError::InvalidMode(s.to_string())),
        }
    }
}

/// Argument separating foreground colors from background colors.
pub const PALETTE_SEPARATOR: &str = "!";

/// Colors cycled by nesting depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Vec<String>,
    pub background: Vec<String>,
}

impl Palette {
    pub fn new(foreground: Vec<String>, background: Vec<String>) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Splits `fg... ! bg...` as passed on the command line.
    pub fn from_args(args: &[String]) -> Self {
        match args.iter().position(|arg| arg == PALETTE_SEPARATOR) {
            Some(split) => Self::new(args[..split].to_vec(), args[split + 1..].to_vec()),
            None => Self::new(args.to_vec(), Vec::new()),
        }
    }

    /// Fills empty color lists from `fallback`.
    pub fn or_else(mut self, fallback: &Palette) -> Self {
        if self.foreground.is_empty() {
            self.foreground = fallback.foreground.clone();
        }
        if self.background.is_empty() {
            self.background = fallback.background.clone();
        }
        self
    }

    pub fn foreground_for(&self, depth: usize) -> Option<&str> {
        cycle(&self.foreground, depth)
    }

    pub fn background_for(&self, depth: usize) -> Option<&str> {
        cycle(&self.background, depth)
    }
}

fn cycle(colors: &[String], depth: usize) -> Option<&str> {
    if colors.is_empty() {
        None
    } else {
        Some(colors[depth % colors.len()].as_str())
    }
}

/// A highlighted span, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeSpec {
    pub start: Position,
    pub end: Position,
    pub face: String,
}

impl RangeSpec {
    fn single(position: Position, face: &str) -> Self {
        Self {
            start: position,
            end: position,
            face: face.to_string(),
        }
    }

    fn background(start: Position, end: Position, color: &str) -> Self {
        Self {
            start,
            end,
            face: format!("default,{color}"),
        }
    }
}

/// Everything besides the pairs that decides what gets highlighted.
#[derive(Debug, Clone)]
pub struct HighlightRequest<'a> {
    pub mode: HighlightMode,
    pub cursor: Position,
    pub window: Window,
    pub palette: &'a Palette,
    /// Background color of the pair enclosing the cursor.
    pub cursor_color: &'a str,
}

/// Builds the ranges for `pairs`, visiting them from the last discovered to
/// the first.
pub fn build_ranges(pairs: &[MatchedPair], request: &HighlightRequest<'_>) -> Vec<RangeSpec> {
    let mut ranges = Vec::new();
    let mut cursor_pair: Option<&MatchedPair> = None;
    let window = &request.window;

    for pair in pairs.iter().rev() {
        let open = pair.open.position;
        let close = pair.close.position;

        if let Some(color) = request.palette.foreground_for(pair.depth()) {
            if window.contains(open) {
                ranges.push(RangeSpec::single(open, color));
            }
            if window.contains(close) {
                ranges.push(RangeSpec::single(close, color));
            }
        }

        match request.mode {
            HighlightMode::Delimiters => {}
            HighlightMode::Scopes => {
                if let Some(color) = request.palette.background_for(pair.depth()) {
                    if window.overlaps(open, close) {
                        ranges.push(RangeSpec::background(open, close, color));
                    }
                }
            }
            HighlightMode::Cursor => {
                // Inner pairs close first, so the last hit here is the innermost
                if open <= request.cursor && request.cursor <= close {
                    cursor_pair = Some(pair);
                }
            }
        }
    }

    if let Some(pair) = cursor_pair {
        let (open, close) = (pair.open.position, pair.close.position);
        if window.overlaps(open, close) {
            ranges.push(RangeSpec::background(open, close, request.cursor_color));
        }
    }

    #[cfg(debug_assertions)]
    log::debug!(
        "Built {} range(s) from {} pair(s) in {:?} mode",
        ranges.len(),
        pairs.len(),
        request.mode
    );

    ranges
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
