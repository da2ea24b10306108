//! In-memory catalog for the CLI and for tests

use std::collections::{BTreeSet, HashMap};

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use super::records::{Load, Transform};
use super::Catalog;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_]\w*$").expect("identifier regex must compile"));

/// In-memory catalog holding the table list and the transform/load records.
///
/// Tables are kept in a sorted set so listings are stable across calls.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    tables: BTreeSet<String>,
    transforms: HashMap<u64, Transform>,
    loads: HashMap<String, Load>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base table that exists in storage.
    pub fn register_table(&mut self, name: &str) {
        self.tables.insert(name.to_string());
    }

    /// Register a transform profile.
    ///
    /// Transform dependencies are free text and deliberately not checked
    /// against the table list here; the resolver tolerates entries that
    /// reference nothing real.
    pub fn register_transform(&mut self, transform: Transform) -> Result<()> {
        if self.transforms.values().any(|t| t.name == transform.name) {
            bail!("transform name must be unique: {}", transform.name);
        }
        self.transforms.insert(transform.id, transform);
        Ok(())
    }

    /// Register a load profile and allocate its materialized table.
    ///
    /// Load names share a namespace with physical tables: the name must be
    /// a valid table identifier, must not collide with an existing table,
    /// and must point at a registered transform.
    pub fn register_load(&mut self, load: Load) -> Result<()> {
        if !IDENTIFIER_RE.is_match(&load.name) {
            bail!("load name is not a valid table identifier: {}", load.name);
        }
        if self.tables.contains(&load.name) || self.loads.contains_key(&load.name) {
            bail!("load name must be unique among tables: {}", load.name);
        }
        if !self.transforms.contains_key(&load.transform_id) {
            bail!(
                "load {} references unknown transform id {}",
                load.name,
                load.transform_id
            );
        }

        // Creating a load materializes a same-named physical table.
        self.tables.insert(load.name.clone());
        self.loads.insert(load.name.clone(), load);
        Ok(())
    }

    /// All registered transforms, ordered by id.
    pub fn transforms(&self) -> Vec<&Transform> {
        let mut transforms: Vec<&Transform> = self.transforms.values().collect();
        transforms.sort_by_key(|t| t.id);
        transforms
    }

    /// All registered loads, ordered by id.
    pub fn loads(&self) -> Vec<&Load> {
        let mut loads: Vec<&Load> = self.loads.values().collect();
        loads.sort_by_key(|l| l.id);
        loads
    }
}

impl Catalog for MemoryCatalog {
    fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.tables.iter().cloned().collect())
    }

    fn find_load_by_name(&self, name: &str) -> Result<Option<Load>> {
        Ok(self.loads.get(name).cloned())
    }

    fn find_transform_by_id(&self, id: u64) -> Result<Option<Transform>> {
        Ok(self.transforms.get(&id).cloned())
    }
}
