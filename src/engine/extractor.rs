//! SQL table-reference extraction
//!
//! This is a lexical heuristic, not a parser. It scans for table-position
//! keywords and captures the following identifier token, so keywords inside
//! comments or string literals can produce false positives and tables only
//! referenced through CTE bodies can be missed. The second filter-by-catalog
//! step masks most false positives, and downstream callers depend on that
//! exact two-step behavior, so this module must not grow into a grammar.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches FROM/JOIN/UPDATE/INTO/TABLE followed by an identifier token,
/// optionally wrapped in backticks, double quotes or square brackets.
/// Opening and closing quote characters are independently optional.
static TABLE_REF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:from|join|update|into|table)\s+([`"\[]?\w+[`"\]]?)"#)
        .expect("table reference regex must compile")
});

/// Lexical pass: every identifier token found in table position, quoting
/// characters stripped, in order of appearance, duplicates included.
///
/// Candidates are raw scan output; aliases, CTE names and other non-tables
/// are expected here and are removed by the catalog filter in
/// [`extract_referenced_tables`].
pub fn scan_candidate_tables(sql: &str) -> Vec<String> {
    TABLE_REF_RE
        .captures_iter(sql)
        .map(|cap| cap[1].replace(['`', '"', '[', ']'], ""))
        .collect()
}

/// The set of real tables referenced by `sql`.
///
/// Candidates from the lexical scan are deduplicated and intersected with
/// `known_tables`, the live catalog snapshot. SQL with no recognized table
/// yields an empty set, never an error.
pub fn extract_referenced_tables(sql: &str, known_tables: &HashSet<String>) -> HashSet<String> {
    scan_candidate_tables(sql)
        .into_iter()
        .filter(|candidate| known_tables.contains(candidate))
        .collect()
}
