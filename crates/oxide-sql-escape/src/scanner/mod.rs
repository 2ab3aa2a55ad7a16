//! Scanning primitives
//!
//! Spans, the quote-mode model and a character cursor, shared by the
//! splitter and the escape transformer.

mod cursor;
mod quote;
mod span;

pub use cursor::Cursor;
pub use quote::QuoteMode;
pub use span::Span;
