//! Project definition file
//!
//! A `datax_project.yaml` file declares the base tables plus the transform
//! and load profiles the CLI works against, standing in for the metadata
//! database of a deployed installation.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::{Load, MemoryCatalog, Transform};

const SUPPORTED_VERSION: u32 = 1;

/// On-disk project definition.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Project file format version
    pub version: u32,

    /// Base tables that exist in storage independently of any load
    #[serde(default)]
    pub tables: Vec<String>,

    /// Transform profiles
    #[serde(default)]
    pub transforms: Vec<Transform>,

    /// Load profiles; each allocates a same-named materialized table
    #[serde(default)]
    pub loads: Vec<Load>,
}

impl ProjectFile {
    /// Read and parse a project file from `path`, or from
    /// `./datax_project.yaml` when no path is given.
    pub fn read(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => std::env::current_dir()?.join("datax_project.yaml"),
        };
        Self::read_from(&path)
    }

    fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("project file not found at: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read project file: {}", path.display()))?;
        let project: ProjectFile = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse project file: {}", path.display()))?;

        if project.version != SUPPORTED_VERSION {
            bail!(
                "unsupported project file version {} (expected {})",
                project.version,
                SUPPORTED_VERSION
            );
        }

        Ok(project)
    }

    /// Build the in-memory catalog: base tables first, then transforms,
    /// then loads, so each load sees the namespace it must not collide
    /// with.
    pub fn into_catalog(self) -> Result<MemoryCatalog> {
        let mut catalog = MemoryCatalog::new();

        for table in &self.tables {
            catalog.register_table(table);
        }
        for transform in self.transforms {
            catalog.register_transform(transform)?;
        }
        for load in self.loads {
            catalog.register_load(load)?;
        }

        Ok(catalog)
    }
}
