//! Ad-hoc query guard
//!
//! The admin surface lets users paste SQL to preview transform output, so
//! statements that would mutate the database are refused before anything
//! reaches storage. Like the extractor, this is a lexical check on the
//! leading keyword, not a parse.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static FORBIDDEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(create|update|delete|drop|insert|alter|truncate)\b")
        .expect("forbidden statement regex must compile")
});

static LIMIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)limit\s+\d+").expect("limit regex must compile"));

/// True when the statement opens with a mutating keyword.
pub fn is_forbidden(sql: &str) -> bool {
    FORBIDDEN_RE.is_match(sql)
}

/// Reject empty input and mutating statements.
pub fn check_query(sql: &str) -> Result<()> {
    if sql.trim().is_empty() {
        bail!("no SQL provided");
    }
    if is_forbidden(sql) {
        bail!("query type not allowed");
    }
    Ok(())
}

/// Cap a preview query at `max_rows` unless it already carries a LIMIT.
///
/// Trailing semicolons and whitespace are stripped before the clause is
/// appended so the result stays a single executable statement.
pub fn ensure_limit(sql: &str, max_rows: u32) -> String {
    if LIMIT_RE.is_match(sql) {
        return sql.to_string();
    }
    let trimmed = sql.trim_end().trim_end_matches(';').trim_end();
    format!("{} LIMIT {}", trimmed, max_rows)
}
