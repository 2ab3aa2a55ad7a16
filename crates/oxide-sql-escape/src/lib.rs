//! # oxide-sql-escape
//!
//! Escape clause rewriting for SQL query strings.
//!
//! Drivers accept portable directives such as `{fn ucase(name)}` or
//! `{limit 10}` embedded in a query and rewrite them into the target
//! database's syntax before the query is prepared. This crate provides:
//!
//! - [`transform`] - finds `{keyword args}` clauses outside quoted text and
//!   replaces each with the output of the handler registered for its keyword
//! - [`split`] - splits a field list on top-level commas, respecting
//!   parentheses and quotes
//! - [`EscapeHandler`] and [`Handlers`] - the keyword to handler registry,
//!   with a [`PassThrough`] handler that echoes clauses without braces
//!
//! ## Rewriting
//!
//! ```rust
//! use oxide_sql_escape::{Handlers, PassThrough};
//!
//! let handlers = Handlers::new()
//!     .with("limit", PassThrough::new(true))
//!     .with("fn", PassThrough::new(false));
//!
//! let sql = handlers
//!     .transform("SELECT {fn ucase(name)} FROM users WHERE note = '{keep}' {limit 10}")
//!     .unwrap();
//! assert_eq!(sql, "SELECT ucase(name) FROM users WHERE note = '{keep}' limit 10");
//! ```
//!
//! ## Custom handlers
//!
//! Any `Fn(&str, &str) -> String` closure is a handler:
//!
//! ```rust
//! use oxide_sql_escape::{Handlers, split};
//!
//! let handlers = Handlers::new().with("limit", |_: &str, args: &str| {
//!     let fields = split(args);
//!     match fields.as_slice() {
//!         [count, offset] => format!("LIMIT {count} OFFSET {offset}"),
//!         _ => format!("LIMIT {args}"),
//!     }
//! });
//!
//! assert_eq!(
//!     handlers.transform("SELECT * FROM t {limit 10, 20}").unwrap(),
//!     "SELECT * FROM t LIMIT 10 OFFSET 20"
//! );
//! ```
//!
//! ## Errors
//!
//! Malformed input is rejected as a whole with a [`SyntaxError`]; no partial
//! output is produced.
//!
//! ```rust
//! use oxide_sql_escape::{Handlers, SyntaxErrorKind, transform};
//!
//! let err = transform("SELECT {foo bar}", &Handlers::new()).unwrap_err();
//! assert_eq!(err.kind(), &SyntaxErrorKind::UnknownKeyword("foo".to_string()));
//! assert_eq!(err.fragment(), "{foo bar}");
//! ```

pub mod error;
pub mod handler;
pub mod scanner;
pub mod split;
pub mod transform;

pub use error::{Result, SyntaxError, SyntaxErrorKind};
pub use handler::{EscapeHandler, Handlers, PassThrough};
pub use scanner::{QuoteMode, Span};
pub use split::split;
pub use transform::transform;
