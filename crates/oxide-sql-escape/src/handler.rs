//! Escape handlers and the keyword registry.
//!
//! A handler turns a resolved escape clause into replacement text. The
//! transformer looks handlers up by keyword in a [`Handlers`] registry that
//! the caller builds up front.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;

/// Produces the replacement text for an escape clause.
///
/// `args` is the clause tail after the keyword, with any nested clauses
/// already rewritten.
pub trait EscapeHandler: Send + Sync {
    /// Returns the text that replaces `{keyword args}`.
    fn process(&self, keyword: &str, args: &str) -> String;
}

impl<F> EscapeHandler for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn process(&self, keyword: &str, args: &str) -> String {
        self(keyword, args)
    }
}

/// Echoes the clause back without its braces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassThrough {
    include_keyword: bool,
}

impl PassThrough {
    /// Creates a pass-through handler.
    ///
    /// With `include_keyword` the output is `keyword args`; without it, just
    /// `args`.
    #[must_use]
    pub const fn new(include_keyword: bool) -> Self {
        Self { include_keyword }
    }
}

impl EscapeHandler for PassThrough {
    fn process(&self, keyword: &str, args: &str) -> String {
        if !self.include_keyword {
            return args.to_string();
        }
        if args.is_empty() {
            keyword.to_string()
        } else {
            format!("{keyword} {args}")
        }
    }
}

/// Keyword to handler lookup table.
///
/// Keywords are matched case-sensitively. The registry is only read while
/// transforming, so one instance can be shared across threads.
#[derive(Default)]
pub struct Handlers {
    handlers: HashMap<String, Box<dyn EscapeHandler>>,
}

impl Handlers {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry mapping every keyword to a [`PassThrough`] handler.
    #[must_use]
    pub fn pass_through<I, K>(keywords: I, include_keyword: bool) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut handlers = Self::new();
        for keyword in keywords {
            handlers.register(keyword, PassThrough::new(include_keyword));
        }
        handlers
    }

    /// Registers `handler` for `keyword`, returning the handler it replaced.
    pub fn register(
        &mut self,
        keyword: impl Into<String>,
        handler: impl EscapeHandler + 'static,
    ) -> Option<Box<dyn EscapeHandler>> {
        self.handlers.insert(keyword.into(), Box::new(handler))
    }

    /// Registers `handler` for `keyword` and returns the registry.
    #[must_use]
    pub fn with(
        mut self,
        keyword: impl Into<String>,
        handler: impl EscapeHandler + 'static,
    ) -> Self {
        self.register(keyword, handler);
        self
    }

    /// Returns the handler for `keyword`.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&dyn EscapeHandler> {
        self.handlers.get(keyword).map(Box::as_ref)
    }

    /// Returns true if `keyword` has a handler.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.handlers.contains_key(keyword)
    }

    /// Returns the number of registered keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no keyword is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns the registered keywords in sorted order.
    #[must_use]
    pub fn keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        keywords.sort_unstable();
        keywords
    }

    /// Rewrites every escape clause in `input` using this registry.
    ///
    /// See [`crate::transform`].
    ///
    /// # Errors
    ///
    /// Returns a [`crate::SyntaxError`] when `input` is malformed.
    pub fn transform(&self, input: &str) -> Result<String> {
        crate::transform::transform(input, self)
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("keywords", &self.keywords())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through_with_keyword() {
        let handler = PassThrough::new(true);
        assert_eq!(handler.process("limit", "100"), "limit 100");
    }

    #[test]
    fn test_pass_through_with_keyword_and_no_args() {
        let handler = PassThrough::new(true);
        assert_eq!(handler.process("now", ""), "now");
    }

    #[test]
    fn test_pass_through_without_keyword() {
        let handler = PassThrough::new(false);
        assert_eq!(handler.process("fn", "ucase('a')"), "ucase('a')");
        assert_eq!(handler.process("fn", ""), "");
    }

    #[test]
    fn test_closure_handler() {
        let handler = |keyword: &str, args: &str| format!("<{keyword}:{args}>");
        assert_eq!(handler.process("d", "'2024-01-01'"), "<d:'2024-01-01'>");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut handlers = Handlers::new();
        assert!(handlers.register("limit", PassThrough::new(true)).is_none());
        let previous = handlers.register("limit", PassThrough::new(false));
        assert!(previous.is_some());
        assert_eq!(handlers.len(), 1);
        assert_eq!(
            handlers.get("limit").map(|h| h.process("limit", "1")),
            Some("1".to_string())
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let handlers = Handlers::pass_through(["limit"], true);
        assert!(handlers.contains("limit"));
        assert!(!handlers.contains("LIMIT"));
        assert!(handlers.get("Limit").is_none());
    }

    #[test]
    fn test_keywords_sorted() {
        let handlers = Handlers::pass_through(["ts", "d", "fn"], false);
        assert_eq!(handlers.keywords(), vec!["d", "fn", "ts"]);
        assert_eq!(
            format!("{handlers:?}"),
            r#"Handlers { keywords: ["d", "fn", "ts"], .. }"#
        );
    }

    #[test]
    fn test_empty_registry() {
        let handlers = Handlers::default();
        assert!(handlers.is_empty());
        assert!(handlers.keywords().is_empty());
    }
}
