//! Transform and load profile records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A named, stored SQL query plus its declared upstream dependency names.
///
/// Dependencies are author-entered free text. They are not validated
/// against the catalog at write time, so an entry may name a real table,
/// another load, or nothing at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transform {
    pub id: u64,
    /// Unique display label
    pub name: String,
    /// Raw SQL text of the transform
    pub query: String,
    /// Declared upstream names, in declaration order
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Transform {
    pub fn new(id: u64, name: &str, query: &str, dependencies: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            query: query.to_string(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    /// Declared dependency names, trimmed, with empty entries dropped.
    ///
    /// Declaration order is preserved; the lineage resolver walks these in
    /// exactly this order.
    pub fn dependency_names(&self) -> Vec<String> {
        self.dependencies
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .map(|d| d.to_string())
            .collect()
    }

    /// SHA-256 fingerprint of the query text.
    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.query);
        format!("{:x}", hasher.finalize())
    }
}

/// A named pointer from a materialized physical table to the transform
/// that produced it.
///
/// The load's name doubles as the physical table name: creating a load
/// allocates a same-named table, so load names live in the table
/// namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Load {
    pub id: u64,
    /// Unique name, also the materialized table name
    pub name: String,
    /// Owning transform
    pub transform_id: u64,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Load {
    pub fn new(id: u64, name: &str, transform_id: u64) -> Self {
        Self {
            id,
            name: name.to_string(),
            transform_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_names_trims_and_drops_empties() {
        let transform = Transform::new(
            1,
            "order_summary_t",
            "SELECT * FROM orders",
            &[" orders ", "", "  ", "customers"],
        );

        assert_eq!(transform.dependency_names(), vec!["orders", "customers"]);
    }

    #[test]
    fn test_dependency_names_preserves_declared_order() {
        let transform = Transform::new(7, "t", "SELECT 1", &["c", "a", "b"]);
        assert_eq!(transform.dependency_names(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_checksum_tracks_query_text() {
        let a = Transform::new(1, "t", "SELECT 1", &[]);
        let b = Transform::new(2, "u", "SELECT 1", &[]);
        let c = Transform::new(3, "v", "SELECT 2", &[]);

        assert_eq!(a.checksum(), b.checksum());
        assert_ne!(a.checksum(), c.checksum());
        assert_eq!(a.checksum().len(), 64);
    }
}
