//! CLI command implementations

pub mod check;
pub mod deps;
pub mod lineage;
pub mod show;

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::catalog::MemoryCatalog;
use crate::project::ProjectFile;

/// Load the project file and build the catalog the commands run against.
pub fn load_catalog(project_path: Option<PathBuf>) -> Result<MemoryCatalog> {
    ProjectFile::read(project_path)?.into_catalog()
}

/// Resolve the SQL input for commands that accept either an inline query
/// or a file. Empty input is a caller error surfaced before any catalog
/// access.
pub fn read_sql_input(query: Option<String>, sql_file: Option<PathBuf>) -> Result<String> {
    let sql = match (query, sql_file) {
        (Some(query), None) => query,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read SQL file {}: {}", path.display(), e))?,
        (Some(_), Some(_)) => bail!("pass either --query or --sql, not both"),
        (None, None) => bail!("no SQL provided (use --query or --sql)"),
    };

    if sql.trim().is_empty() {
        bail!("no SQL provided");
    }

    Ok(sql)
}
