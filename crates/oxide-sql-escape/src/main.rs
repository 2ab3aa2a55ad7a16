//! oxide-escape CLI
//!
//! Command-line tool for rewriting escape clauses and splitting field lists.

use std::io::{self, Read};

use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_sql_escape::{Handlers, Result, split};

/// Escape clause rewriting for SQL query strings.
#[derive(Parser)]
#[command(name = "oxide-escape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite escape clauses with pass-through handlers.
    Transform {
        /// Query text (read from stdin if not specified).
        query: Option<String>,

        /// Keyword to accept; repeat or comma-separate for several.
        #[arg(
            short,
            long = "keyword",
            env = "OXIDE_ESCAPE_KEYWORDS",
            value_delimiter = ','
        )]
        keywords: Vec<String>,

        /// Keep the keyword in the rewritten output.
        #[arg(long, env = "OXIDE_ESCAPE_INCLUDE_KEYWORD")]
        include_keyword: bool,
    },

    /// Split a field list on top-level commas.
    Split {
        /// Field list (read from stdin if not specified).
        input: Option<String>,

        /// Print the fields as a JSON array.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Transform {
            query,
            keywords,
            include_keyword,
        } => {
            let query = read_input(query, &mut io::stdin())?;
            println!("{}", rewrite(&query, keywords, include_keyword)?);
        }

        Commands::Split { input, json } => {
            let input = read_input(input, &mut io::stdin())?;
            println!("{}", render_fields(&split(&input), json)?);
        }
    }

    Ok(())
}

/// Rewrites `query` with a pass-through handler for each keyword.
fn rewrite(query: &str, keywords: Vec<String>, include_keyword: bool) -> Result<String> {
    let handlers = Handlers::pass_through(keywords, include_keyword);
    debug!(keywords = ?handlers.keywords(), include_keyword, "Registered handlers");

    if handlers.is_empty() {
        info!("No keywords registered; any escape clause will be rejected.");
    }

    handlers.transform(query)
}

/// Formats split fields one per line, or as a pretty JSON array.
fn render_fields(fields: &[&str], json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(fields)
    } else {
        Ok(fields.join("\n"))
    }
}

/// Returns `arg`, or everything in `reader` without its trailing newline.
fn read_input(arg: Option<String>, reader: &mut impl Read) -> io::Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let trimmed_len = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(trimmed_len);
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_sql_escape::SyntaxErrorKind;

    #[test]
    fn test_rewrite_with_keywords() {
        let keywords = vec!["limit".to_string(), "fn".to_string()];
        assert_eq!(
            rewrite("SELECT {fn now()} {limit 5}", keywords, true).unwrap(),
            "SELECT fn now() limit 5"
        );
    }

    #[test]
    fn test_rewrite_without_keywords_rejects_escapes() {
        let err = rewrite("SELECT {limit 5}", Vec::new(), false).unwrap_err();
        assert_eq!(
            err.kind(),
            &SyntaxErrorKind::UnknownKeyword("limit".to_string())
        );
    }

    #[test]
    fn test_render_fields_lines() {
        assert_eq!(render_fields(&["a", "(b, c)"], false).unwrap(), "a\n(b, c)");
    }

    #[test]
    fn test_render_fields_json() {
        let fields = split("(select foo, bar), baz, 'quoted, comma'");
        assert_eq!(
            render_fields(&fields, true).unwrap(),
            "[\n  \"(select foo, bar)\",\n  \"baz\",\n  \"'quoted, comma'\"\n]"
        );
    }

    #[test]
    fn test_render_no_fields_as_json() {
        assert_eq!(render_fields(&[], true).unwrap(), "[]");
    }

    #[test]
    fn test_read_input_prefers_argument() {
        let mut stdin = "ignored".as_bytes();
        assert_eq!(
            read_input(Some("{limit 1}".to_string()), &mut stdin).unwrap(),
            "{limit 1}"
        );
    }

    #[test]
    fn test_read_input_strips_trailing_newline() {
        let mut stdin = "SELECT 1\r\n".as_bytes();
        assert_eq!(read_input(None, &mut stdin).unwrap(), "SELECT 1");
    }
}
