use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use datax::commands;
use datax::display;

/// DataX CLI - SQL transform/load lineage tool
#[derive(Parser)]
#[clap(name = "datax", about = "DataX - SQL transform/load lineage tool", version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report which real tables a SQL query references
    Deps {
        /// Path to the project file (defaults to ./datax_project.yaml)
        #[clap(short, long)]
        project: Option<PathBuf>,

        /// Inline SQL text
        #[clap(short, long)]
        query: Option<String>,

        /// Path to a file containing the SQL text
        #[clap(short, long)]
        sql: Option<PathBuf>,

        /// Output format (text, json)
        #[clap(short, long, default_value = "text")]
        format: String,
    },

    /// Resolve the upstream lineage graph for a table
    Lineage {
        /// Path to the project file (defaults to ./datax_project.yaml)
        #[clap(short, long)]
        project: Option<PathBuf>,

        /// Table to resolve lineage for
        #[clap(short, long)]
        table: String,

        /// How many parent levels to walk
        #[clap(short = 'l', long, default_value_t = 1)]
        parent_level: u32,

        /// Output format (text, dot, json)
        #[clap(short, long, default_value = "text")]
        format: String,
    },

    /// List the tables, transforms and loads in a project
    Show {
        /// Path to the project file (defaults to ./datax_project.yaml)
        #[clap(short, long)]
        project: Option<PathBuf>,
    },

    /// Vet an ad-hoc query: refuse mutating statements, report touched tables
    Check {
        /// Path to the project file (defaults to ./datax_project.yaml)
        #[clap(short, long)]
        project: Option<PathBuf>,

        /// Inline SQL text
        #[clap(short, long)]
        query: Option<String>,

        /// Path to a file containing the SQL text
        #[clap(short, long)]
        sql: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Deps {
            project,
            query,
            sql,
            format,
        } => commands::deps::deps_command(project, query, sql, &format),
        Command::Lineage {
            project,
            table,
            parent_level,
            format,
        } => commands::lineage::lineage_command(project, &table, parent_level, &format),
        Command::Show { project } => commands::show::show_command(project),
        Command::Check {
            project,
            query,
            sql,
        } => commands::check::check_command(project, query, sql),
        Command::Version => {
            display::display_version();
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}
