//! Comment and literal tracking shared by every scanning pass.
//!
//! The machine is fed one byte at a time and reports whether that byte is
//! code (eligible to be a delimiter) or skipped (inside a comment or a
//! string/character literal). Both the angle-bracket pass and the matching
//! pass drive the same machine so they always agree on what is code.

use crate::grammar::Grammar;

/// Classification of a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    Code,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Literal {
    /// `'...'`; in Rust this may turn out to be a lifetime.
    Char,
    /// `"..."`
    Str,
    /// `\x` escape inside a Rust `'` literal.
    ByteEscape,
}

#[derive(Debug, Clone)]
pub struct SkipState {
    grammar: Grammar,
    line_comment: bool,
    /// Index of the `*` that opened each block comment level, innermost last.
    /// Only Rust ever holds more than one level.
    block_comments: Vec<usize>,
    /// Index of the `/` that closed the most recent block comment.
    last_closed_comment: Option<usize>,
    literal: Option<Literal>,
    literal_len: usize,
    /// Set when the current byte closed a literal; such a byte cannot reopen one.
    just_closed: bool,
}

impl SkipState {
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            line_comment: false,
            block_comments: Vec::new(),
            last_closed_comment: None,
            literal: None,
            literal_len: 0,
            just_closed: false,
        }
    }

    pub fn is_in_comment(&self) -> bool {
        self.line_comment || !self.block_comments.is_empty()
    }

    pub fn is_in_literal(&self) -> bool {
        self.literal.is_some()
    }

    /// Advances over `source[index]` and classifies it.
    ///
    /// Bytes must be fed in order starting at index 0; the machine looks back
    /// at most two bytes.
    pub fn classify(&mut self, source: &[u8], index: usize) -> Lexeme {
        match self.grammar {
            Grammar::Generic => Lexeme::Code,
            Grammar::C | Grammar::Cpp => self.classify_c(source, index),
            Grammar::Rust => self.classify_rust(source, index),
        }
    }

    fn classify_c(&mut self, source: &[u8], index: usize) -> Lexeme {
        let byte = source[index];

        if byte == b'\n' {
            self.line_comment = false;
            return Lexeme::Skipped;
        }
        if self.line_comment {
            return Lexeme::Skipped;
        }
        if let Some(&start) = self.block_comments.last() {
            if closes_block_comment(source, index, start) {
                self.block_comments.pop();
                self.last_closed_comment = Some(index);
            }
            return Lexeme::Skipped;
        }

        let literal = self.literal;
        match literal {
            None if self.opens_block_comment(source, index) => {
                self.block_comments.push(index);
                Lexeme::Skipped
            }
            None if self.opens_line_comment(source, index) => {
                self.line_comment = true;
                Lexeme::Skipped
            }
            None => match byte {
                b'\'' => self.open_literal(Literal::Char),
                b'"' => self.open_literal(Literal::Str),
                _ => Lexeme::Code,
            },
            Some(literal) => {
                let quote = if literal == Literal::Str { b'"' } else { b'\'' };
                if byte == quote && !is_escaped(source, index) {
                    self.literal = None;
                }
                Lexeme::Skipped
            }
        }
    }

    fn classify_rust(&mut self, source: &[u8], index: usize) -> Lexeme {
        let byte = source[index];
        self.just_closed = false;

        if byte == b'\n' {
            self.line_comment = false;
            return Lexeme::Skipped;
        }
        if self.line_comment {
            return Lexeme::Skipped;
        }
        // Rust block comments nest, so an opener is recognised even inside one
        if self.literal.is_none() && self.opens_block_comment(source, index) {
            self.block_comments.push(index);
            return Lexeme::Skipped;
        }
        if let Some(&start) = self.block_comments.last() {
            if closes_block_comment(source, index, start) {
                self.block_comments.pop();
                self.last_closed_comment = Some(index);
            }
            return Lexeme::Skipped;
        }
        if self.literal.is_none() && self.opens_line_comment(source, index) {
            self.line_comment = true;
            return Lexeme::Skipped;
        }

        if let Some(literal) = self.literal {
            self.continue_rust_literal(literal, source, index);
        }

        // The byte that ends a literal is looked at again as code
        let literal = self.literal;
        match literal {
            Some(_) => Lexeme::Skipped,
            None if self.just_closed => Lexeme::Code,
            None => match byte {
                b'\'' => self.open_literal(Literal::Char),
                b'"' => self.open_literal(Literal::Str),
                _ => Lexeme::Code,
            },
        }
    }

    fn continue_rust_literal(&mut self, literal: Literal, source: &[u8], index: usize) {
        let byte = source[index];
        let previous = byte_before(source, index, 1);

        match literal {
            Literal::Char if byte == b'x' && previous == Some(b'\\') => {
                self.literal = Some(Literal::ByteEscape);
            }
            // One body byte and no closing quote yet: a lifetime such as 'a
            Literal::Char if self.literal_len == 1 => self.close_literal(),
            Literal::Char if byte == b'\'' && !is_escaped(source, index) => self.close_literal(),
            Literal::Str if byte == b'"' && !is_escaped(source, index) => self.close_literal(),
            Literal::ByteEscape if byte == b'\'' || !byte.is_ascii_hexdigit() => {
                self.close_literal()
            }
            _ => {
                if byte != b'\\' || previous == Some(b'\\') {
                    self.literal_len += 1;
                }
            }
        }
    }

    fn open_literal(&mut self, literal: Literal) -> Lexeme {
        self.literal = Some(literal);
        self.literal_len = 0;
        Lexeme::Skipped
    }

    fn close_literal(&mut self) {
        self.literal = None;
        self.literal_len = 0;
        self.just_closed = true;
    }

    fn opens_block_comment(&self, source: &[u8], index: usize) -> bool {
        source[index] == b'*' && self.follows_open_slash(source, index)
    }

    fn opens_line_comment(&self, source: &[u8], index: usize) -> bool {
        source[index] == b'/' && self.follows_open_slash(source, index)
    }

    /// The previous byte is a `/` that did not just close a block comment.
    fn follows_open_slash(&self, source: &[u8], index: usize) -> bool {
        index > 0
            && source[index - 1] == b'/'
            && self.last_closed_comment != Some(index - 1)
    }
}

/// `*/` ends the comment opened at `start`, unless the `/` directly follows
/// the opening `*` (as in `/*/`).
fn closes_block_comment(source: &[u8], index: usize, start: usize) -> bool {
    source[index] == b'/' && byte_before(source, index, 1) == Some(b'*') && index != start + 1
}

/// A quote is escaped when preceded by a backslash that is not itself an
/// escaped backslash.
fn is_escaped(source: &[u8], index: usize) -> bool {
    byte_before(source, index, 1) == Some(b'\\') && byte_before(source, index, 2) != Some(b'\\')
}

fn byte_before(source: &[u8], index: usize, distance: usize) -> Option<u8> {
    index.checked_sub(distance).map(|i| source[i])
}

#[cfg(test)]
#[path = "skip_state_tests.rs"]
mod skip_state_tests;
