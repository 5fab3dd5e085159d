//! Serialization of highlight ranges into a Kakoune command.

use std::fmt::Write;

use crate::highlight::RangeSpec;

/// `range-specs` option the editor-side script declares and highlights.
pub const RANGES_OPTION: &str = "rainbow";

/// Renders the command that replaces the contents of the ranges option for
/// `client`. `timestamp` is the buffer timestamp the ranges were computed
/// against; the editor discards them if the buffer changed since.
pub fn render_command(client: &str, timestamp: &str, ranges: &[RangeSpec]) -> String {
    let mut command = format!("eval -client {client} set-option window {RANGES_OPTION} {timestamp}");

    for range in ranges {
        // Writing into a String cannot fail
        let _ = write!(command, " {},{}|{}", range.start, range.end, range.face);
    }

    command
}
