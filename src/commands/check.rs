//! `datax check` — vet an ad-hoc query before it runs anywhere

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::catalog::Catalog;
use crate::commands::{load_catalog, read_sql_input};
use crate::engine::{extractor, guard};

/// Preview row cap applied to vetted queries, matching the admin UI's
/// 10-row result preview.
const PREVIEW_ROW_LIMIT: u32 = 10;

/// Run the check command.
pub fn check_command(
    project_path: Option<PathBuf>,
    query: Option<String>,
    sql_file: Option<PathBuf>,
) -> Result<()> {
    let sql = read_sql_input(query, sql_file)?;
    guard::check_query(&sql)?;

    let catalog = load_catalog(project_path)?;
    let known_tables: HashSet<String> = catalog.list_tables()?.into_iter().collect();
    let referenced = extractor::extract_referenced_tables(&sql, &known_tables);

    println!("{}", "Query allowed.".green());

    let mut tables: Vec<String> = referenced.into_iter().collect();
    tables.sort();
    if tables.is_empty() {
        println!("No known tables referenced.");
    } else {
        println!("Touches tables:");
        for table in &tables {
            println!("  • {}", table);
        }
    }

    println!("\nPreview statement:");
    println!("  {}", guard::ensure_limit(&sql, PREVIEW_ROW_LIMIT));

    Ok(())
}
