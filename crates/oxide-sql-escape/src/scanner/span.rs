//! Byte ranges into the scanned input.

/// A half-open byte range in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Shifts the span right by `base` bytes.
    ///
    /// Clause tails are scanned as their own substrings; this maps a span
    /// found there back onto the enclosing input.
    #[must_use]
    pub const fn offset(self, base: usize) -> Self {
        Self::new(self.start + base, self.end + base)
    }

    /// Returns the text covered by this span.
    ///
    /// The span must lie on character boundaries of `input`.
    #[must_use]
    pub fn slice(self, input: &str) -> &str {
        &input[self.start..self.end]
    }
}
