//! Catalog records and the metadata collaborator seam

pub mod memory;
pub mod records;

pub use memory::MemoryCatalog;
pub use records::{Load, Transform};

use anyhow::Result;

/// Read access to the live catalog and the transform/load metadata store.
///
/// Lookup misses are `Ok(None)` and are valid terminal states for the
/// lineage resolver, never errors. An `Err` means the backing store itself
/// failed and aborts whatever operation was in flight.
pub trait Catalog {
    /// All real table names currently in storage.
    fn list_tables(&self) -> Result<Vec<String>>;

    /// Look up the load whose name (and therefore materialized table name)
    /// equals `name`.
    fn find_load_by_name(&self, name: &str) -> Result<Option<Load>>;

    /// Look up a transform by its id.
    fn find_transform_by_id(&self, id: u64) -> Result<Option<Transform>>;
}
