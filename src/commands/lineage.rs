//! `datax lineage` — upstream lineage graph for a table

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::commands::load_catalog;
use crate::engine::resolver;

/// Run the lineage command.
pub fn lineage_command(
    project_path: Option<PathBuf>,
    table: &str,
    parent_level: u32,
    format: &str,
) -> Result<()> {
    if parent_level < 1 {
        bail!("--parent-level must be at least 1");
    }

    let start_time = Instant::now();
    let catalog = load_catalog(project_path)?;
    let graph = resolver::resolve_lineage(&catalog, table, parent_level)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&graph)?),
        "dot" => print!("{}", graph.to_dot()),
        _ => {
            println!("--- {} ---", format!("Lineage for {}", table).green());
            println!(
                "{} nodes, {} edges (up to {} parent levels)",
                graph.nodes.len(),
                graph.edges.len(),
                parent_level
            );

            if graph.edges.is_empty() {
                println!("\nNo recorded upstream: {} has no load profile.", table.bold());
            } else {
                println!("\nUpstream edges:");
                for edge in &graph.edges {
                    println!("  {} → {}", edge.from, edge.to);
                }
            }
            println!("\nResolved in {:.2?}", start_time.elapsed());
        }
    }

    Ok(())
}
