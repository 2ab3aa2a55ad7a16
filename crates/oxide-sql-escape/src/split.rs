//! Top-level comma splitting.
//!
//! Splits a field list such as a select list or escape arguments on commas
//! that are outside parentheses and outside quoted text.

use tracing::debug;

use crate::scanner::{Cursor, QuoteMode};

/// Splits `input` into trimmed, top-level comma-separated fields.
///
/// A comma separates fields only at parenthesis depth zero and outside
/// `'...'`, `"..."` and `[...]`. An empty first or last field is dropped, so
/// whitespace-only input yields no fields; empty fields in between are kept.
///
/// Unterminated quotes and parentheses are closed implicitly at end of input.
///
/// ```rust
/// use oxide_sql_escape::split;
///
/// assert_eq!(
///     split("(select foo, bar), baz, 'quoted, comma'"),
///     vec!["(select foo, bar)", "baz", "'quoted, comma'"]
/// );
/// ```
#[must_use]
pub fn split(input: &str) -> Vec<&str> {
    let mut cursor = Cursor::new(input);
    let mut fields = Vec::new();
    let mut mode = QuoteMode::Plain;
    let mut depth = 0usize;
    let mut field_start = 0;

    while let Some(c) = cursor.advance() {
        if !mode.is_plain() {
            mode = mode.step(c);
            continue;
        }
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let end = cursor.pos() - c.len_utf8();
                fields.push(input[field_start..end].trim());
                field_start = cursor.pos();
            }
            _ => mode = mode.step(c),
        }
    }
    fields.push(input[field_start..].trim());

    if fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    if fields.first().is_some_and(|field| field.is_empty()) {
        fields.remove(0);
    }

    debug!(len = input.len(), fields = fields.len(), "Split input");
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field_is_trimmed() {
        assert_eq!(split(" foo "), vec!["foo"]);
    }

    #[test]
    fn test_simple_list() {
        assert_eq!(split("foo, bar"), vec!["foo", "bar"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(split("").is_empty());
        assert!(split("   \t ").is_empty());
    }

    #[test]
    fn test_parentheses_nest() {
        assert_eq!(
            split("(select foo, bar), baz"),
            vec!["(select foo, bar)", "baz"]
        );
        assert_eq!(
            split("coalesce(a, (b, c)), d"),
            vec!["coalesce(a, (b, c))", "d"]
        );
    }

    #[test]
    fn test_quoted_commas() {
        assert_eq!(
            split("(select foo, bar), baz, 'quoted, comma'"),
            vec!["(select foo, bar)", "baz", "'quoted, comma'"]
        );
        assert_eq!(split("\"a, b\", c"), vec!["\"a, b\"", "c"]);
        assert_eq!(split("[a, b], c"), vec!["[a, b]", "c"]);
    }

    #[test]
    fn test_parentheses_inside_quotes_do_not_nest() {
        assert_eq!(split("'(', b"), vec!["'('", "b"]);
        assert_eq!(split("[)], b"), vec!["[)]", "b"]);
    }

    #[test]
    fn test_internal_empty_fields_kept() {
        assert_eq!(split("foo,,bar"), vec!["foo", "", "bar"]);
        assert_eq!(split("foo, ,bar"), vec!["foo", "", "bar"]);
    }

    #[test]
    fn test_empty_edge_fields_dropped() {
        assert_eq!(split("foo,"), vec!["foo"]);
        assert_eq!(split(", foo"), vec!["foo"]);
        assert_eq!(split(",,foo"), vec!["", "foo"]);
    }

    #[test]
    fn test_only_delimiters_leave_one_empty_field() {
        assert_eq!(split(","), Vec::<&str>::new());
        assert_eq!(split(",,"), vec![""]);
        assert_eq!(split(" , , "), vec![""]);
        assert_eq!(split(",,,"), vec!["", ""]);
    }

    #[test]
    fn test_unterminated_quote_is_tolerated() {
        assert_eq!(split("a, 'b, c"), vec!["a", "'b, c"]);
    }

    #[test]
    fn test_unterminated_paren_is_tolerated() {
        assert_eq!(split("a, (b, c"), vec!["a", "(b, c"]);
    }

    #[test]
    fn test_unmatched_close_paren_does_not_go_negative() {
        assert_eq!(split("a), b, c"), vec!["a)", "b", "c"]);
    }
}
