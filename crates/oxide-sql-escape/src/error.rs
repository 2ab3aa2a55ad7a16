//! Error types for escape rewriting.

use thiserror::Error;

use crate::scanner::Span;

/// The category of a [`SyntaxError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// A `'`, `"` or `[` was opened and never closed.
    #[error("unterminated quoted text")]
    UnterminatedQuote,

    /// A `{` was opened and its matching `}` never found.
    #[error("unterminated escape")]
    UnterminatedEscape,

    /// A `}` appeared with no open escape.
    #[error("unopened escape")]
    UnopenedEscape,

    /// The escape body has no keyword before its first whitespace.
    #[error("missing escape keyword")]
    MissingKeyword,

    /// The escape keyword has no registered handler.
    #[error("unknown escape keyword '{0}'")]
    UnknownKeyword(String),
}

/// A malformed input rejected by the transformer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {}..{}: `{fragment}`", .span.start, .span.end)]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    span: Span,
    fragment: String,
}

impl SyntaxError {
    /// Creates a syntax error for `fragment`, found at `span`.
    #[must_use]
    pub fn new(kind: SyntaxErrorKind, span: Span, fragment: &str) -> Self {
        Self {
            kind,
            span,
            fragment: fragment.to_string(),
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// Returns the byte range of the offending fragment.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the offending fragment.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

/// Result type for escape rewriting.
pub type Result<T> = std::result::Result<T, SyntaxError>;
