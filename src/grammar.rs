//! Lexical grammars the scanner knows how to simulate.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// Plain text: no comments, no literals, no angle brackets.
    #[default]
    Generic,
    C,
    Cpp,
    Rust,
}

impl Grammar {
    /// Maps an editor filetype name to a grammar. Unknown names fall back to
    /// [`Grammar::Generic`] so that every buffer can be scanned.
    pub fn from_filetype(filetype: &str) -> Self {
        match filetype {
            "c" => Grammar::C,
            "cpp" => Grammar::Cpp,
            "rust" => Grammar::Rust,
            _ => Grammar::Generic,
        }
    }

    /// Like [`Grammar::from_filetype`], consulting user aliases first.
    pub fn from_filetype_with_aliases(filetype: &str, aliases: &HashMap<String, Grammar>) -> Self {
        aliases
            .get(filetype)
            .copied()
            .unwrap_or_else(|| Self::from_filetype(filetype))
    }

    /// Whether `<` and `>` may be treated as delimiters at all.
    pub fn supports_angle_brackets(self) -> bool {
        matches!(self, Grammar::Cpp | Grammar::Rust)
    }

    /// Bytes at which an angle bracket still open must have been a comparison
    /// operator rather than a generic/template opener.
    pub fn statement_boundaries(self) -> &'static [u8] {
        match self {
            Grammar::C | Grammar::Cpp => b";{",
            Grammar::Rust => b"{|^!",
            Grammar::Generic => b"",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_filetypes() {
        assert_eq!(Grammar::from_filetype("c"), Grammar::C);
        assert_eq!(Grammar::from_filetype("cpp"), Grammar::Cpp);
        assert_eq!(Grammar::from_filetype("rust"), Grammar::Rust);
    }

    #[test]
    fn test_unknown_filetype_is_generic() {
        assert_eq!(Grammar::from_filetype("python"), Grammar::Generic);
        assert_eq!(Grammar::from_filetype(""), Grammar::Generic);
        assert_eq!(Grammar::from_filetype("Rust"), Grammar::Generic);
    }

    #[test]
    fn test_aliases_take_precedence() {
        let mut aliases = HashMap::new();
        aliases.insert("cuda".to_string(), Grammar::Cpp);
        aliases.insert("c".to_string(), Grammar::Generic);

        assert_eq!(
            Grammar::from_filetype_with_aliases("cuda", &aliases),
            Grammar::Cpp
        );
        assert_eq!(
            Grammar::from_filetype_with_aliases("c", &aliases),
            Grammar::Generic
        );
        assert_eq!(
            Grammar::from_filetype_with_aliases("rust", &aliases),
            Grammar::Rust
        );
    }

    #[test]
    fn test_angle_bracket_support() {
        assert!(Grammar::Cpp.supports_angle_brackets());
        assert!(Grammar::Rust.supports_angle_brackets());
        assert!(!Grammar::C.supports_angle_brackets());
        assert!(!Grammar::Generic.supports_angle_brackets());
    }

    #[test]
    fn test_statement_boundaries() {
        assert_eq!(Grammar::C.statement_boundaries(), b";{");
        assert_eq!(Grammar::Cpp.statement_boundaries(), b";{");
        assert_eq!(Grammar::Rust.statement_boundaries(), b"{|^!");
        assert!(Grammar::Generic.statement_boundaries().is_empty());
    }
}
