// Configuration type definitions

use std::collections::HashMap;

use serde::Deserialize;

use crate::grammar::Grammar;
use crate::highlight::Palette;

/// Lines highlighted above and below the visible window by default
pub const DEFAULT_MARGIN: usize = 30;

/// Background of the pair enclosing the cursor by default
pub const DEFAULT_CURSOR_COLOR: &str = "rgb:003300";

/// Viewport configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_margin")]
    pub margin: usize,
}

fn default_margin() -> usize {
    DEFAULT_MARGIN
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig {
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Color configuration section
///
/// The lists are only used when the command line does not supply colors.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorsConfig {
    #[serde(default)]
    pub foreground: Vec<String>,
    #[serde(default)]
    pub background: Vec<String>,
    #[serde(default = "default_cursor_color")]
    pub cursor: String,
}

fn default_cursor_color() -> String {
    DEFAULT_CURSOR_COLOR.to_string()
}

impl Default for ColorsConfig {
    fn default() -> Self {
        ColorsConfig {
            foreground: Vec::new(),
            background: Vec::new(),
            cursor: default_cursor_color(),
        }
    }
}

impl ColorsConfig {
    pub fn palette(&self) -> Palette {
        Palette::new(self.foreground.clone(), self.background.clone())
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
    /// Extra filetype names mapped onto a known grammar
    #[serde(default)]
    pub filetypes: HashMap<String, Grammar>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
