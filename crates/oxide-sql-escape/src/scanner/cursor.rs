//! Character cursor over a borrowed input.

use super::Span;

/// A forward-only cursor over `&str`, tracking the current byte position.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The input being scanned.
    input: &'a str,
    /// The current byte position.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the full input.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the current character without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Returns the input between `start` and the current position.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Returns the span from `start` to the current position.
    #[must_use]
    pub const fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }
}
