//! Escape clause rewriting.
//!
//! Finds `{keyword args}` clauses outside quoted text, rewrites their
//! arguments recursively, and replaces each clause with the output of the
//! handler registered for its keyword.

use tracing::{debug, trace};

use crate::error::{Result, SyntaxError, SyntaxErrorKind};
use crate::handler::Handlers;
use crate::scanner::{Cursor, QuoteMode, Span};

/// Rewrites every escape clause in `input`.
///
/// Text outside clauses, including anything in `'...'`, `"..."` or `[...]`,
/// is copied unchanged. Nested clauses resolve innermost first; siblings
/// resolve left to right. Any malformed input fails the whole call.
///
/// ```rust
/// use oxide_sql_escape::{Handlers, PassThrough, transform};
///
/// let handlers = Handlers::new().with("limit", PassThrough::new(true));
/// let sql = transform("SELECT * FROM t {limit {limit 100}}", &handlers).unwrap();
/// assert_eq!(sql, "SELECT * FROM t limit limit 100");
/// ```
///
/// # Errors
///
/// Returns a [`SyntaxError`] for unterminated quotes or clauses, a stray
/// `}`, a clause without a keyword, or a keyword with no handler.
pub fn transform(input: &str, handlers: &Handlers) -> Result<String> {
    let output = Transformer::new(input, handlers, 0).run()?;
    debug!(len = input.len(), output_len = output.len(), "Transformed escapes");
    Ok(output)
}

/// A single scan over one input or clause tail.
struct Transformer<'a, 'h> {
    cursor: Cursor<'a>,
    handlers: &'h Handlers,
    /// Byte offset of this input within the top-level input.
    base: usize,
    output: String,
}

impl<'a, 'h> Transformer<'a, 'h> {
    fn new(input: &'a str, handlers: &'h Handlers, base: usize) -> Self {
        Self {
            cursor: Cursor::new(input),
            handlers,
            base,
            output: String::with_capacity(input.len()),
        }
    }

    fn run(mut self) -> Result<String> {
        while let Some(c) = self.cursor.peek() {
            match c {
                '{' => self.escape()?,
                '}' => {
                    let start = self.cursor.pos();
                    self.cursor.advance();
                    return Err(self.error(
                        SyntaxErrorKind::UnopenedEscape,
                        self.cursor.span_from(start),
                    ));
                }
                c if QuoteMode::opened_by(c).is_some() => {
                    let start = self.cursor.pos();
                    self.skip_quoted()?;
                    self.output.push_str(self.cursor.slice_from(start));
                }
                c => {
                    self.cursor.advance();
                    self.output.push(c);
                }
            }
        }
        Ok(self.output)
    }

    /// Consumes quoted text, the cursor being on its opening delimiter.
    fn skip_quoted(&mut self) -> Result<()> {
        let start = self.cursor.pos();
        let mut mode = QuoteMode::Plain;
        while let Some(c) = self.cursor.advance() {
            mode = mode.step(c);
            if mode.is_plain() {
                return Ok(());
            }
        }
        Err(self.error(
            SyntaxErrorKind::UnterminatedQuote,
            self.cursor.span_from(start),
        ))
    }

    /// Consumes a whole clause, the cursor being on its `{`, and appends its
    /// replacement.
    fn escape(&mut self) -> Result<()> {
        let start = self.cursor.pos();
        self.cursor.advance(); // {
        let body_start = self.cursor.pos();
        let mut depth = 0usize;

        loop {
            match self.cursor.peek() {
                None => {
                    return Err(self.error(
                        SyntaxErrorKind::UnterminatedEscape,
                        self.cursor.span_from(start),
                    ));
                }
                Some('{') => {
                    depth += 1;
                    self.cursor.advance();
                }
                Some('}') if depth == 0 => break,
                Some('}') => {
                    depth -= 1;
                    self.cursor.advance();
                }
                Some(c) if QuoteMode::opened_by(c).is_some() => self.skip_quoted()?,
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }

        let body = self.cursor.slice_from(body_start);
        self.cursor.advance(); // }
        let clause = self.cursor.span_from(start);

        let replacement = self.resolve(body, body_start, clause)?;
        self.output.push_str(&replacement);
        Ok(())
    }

    /// Looks up the clause keyword, rewrites the tail and runs the handler.
    fn resolve(&self, body: &'a str, body_start: usize, clause: Span) -> Result<String> {
        let keyword = body.split(char::is_whitespace).next().unwrap_or_default();
        if keyword.is_empty() {
            return Err(self.error(SyntaxErrorKind::MissingKeyword, clause));
        }
        let Some(handler) = self.handlers.get(keyword) else {
            return Err(self.error(
                SyntaxErrorKind::UnknownKeyword(keyword.to_string()),
                clause,
            ));
        };

        let tail = body[keyword.len()..].trim_start();
        let tail_start = body_start + (body.len() - tail.len());
        let args = Self::new(tail, self.handlers, self.base + tail_start).run()?;

        trace!(
            keyword,
            start = self.base + clause.start,
            end = self.base + clause.end,
            "Resolved escape"
        );
        Ok(handler.process(keyword, &args))
    }

    fn error(&self, kind: SyntaxErrorKind, span: Span) -> SyntaxError {
        SyntaxError::new(
            kind,
            span.offset(self.base),
            span.slice(self.cursor.input()),
        )
    }
}
