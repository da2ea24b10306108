//! `datax show` — list the tables, transforms and loads in a project

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::catalog::Catalog;
use crate::commands::load_catalog;

/// Run the show command.
pub fn show_command(project_path: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(project_path)?;

    println!("--- {} ---", "Tables".green());
    for table in catalog.list_tables()? {
        println!("  • {}", table);
    }

    println!("\n--- {} ---", "Transforms".green());
    for transform in catalog.transforms() {
        println!("\n{} (id {})", transform.name.bold(), transform.id);
        println!("  created:  {}", transform.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
        println!("  checksum: {}", &transform.checksum()[..12]);
        let deps = transform.dependency_names();
        if deps.is_empty() {
            println!("  dependencies: (none declared)");
        } else {
            println!("  dependencies: {}", deps.join(", "));
        }
    }

    println!("\n--- {} ---", "Loads".green());
    for load in catalog.loads() {
        println!(
            "  • {} (id {}, transform {})",
            load.name.bold(),
            load.id,
            load.transform_id
        );
    }

    Ok(())
}
