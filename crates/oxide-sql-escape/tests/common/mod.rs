#![allow(dead_code)]

use oxide_sql_escape::{Handlers, PassThrough, SyntaxError, SyntaxErrorKind, transform};

/// Handlers for the keywords exercised across the test suite.
pub fn handlers() -> Handlers {
    Handlers::new()
        .with("limit", PassThrough::new(true))
        .with("fn", PassThrough::new(false))
        .with("d", PassThrough::new(false))
        .with("oj", PassThrough::new(false))
}

pub fn rewrite(sql: &str) -> String {
    transform(sql, &handlers())
        .unwrap_or_else(|e| panic!("Failed to transform: {sql}\nError: {e:?}"))
}

pub fn rewrite_err(sql: &str) -> SyntaxError {
    match transform(sql, &handlers()) {
        Ok(output) => panic!("Expected syntax error for: {sql}, got: {output}"),
        Err(err) => err,
    }
}

pub fn rewrite_err_kind(sql: &str) -> SyntaxErrorKind {
    rewrite_err(sql).kind().clone()
}
