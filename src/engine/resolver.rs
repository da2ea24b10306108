//! Upstream lineage resolution
//!
//! Walks the Load → Transform → declared-dependency chain for a root table,
//! depth-first, bounded by the requested parent level and by a visited set
//! shared across the whole resolution. Dependency names are author-entered
//! free text, so every lookup along the way may legitimately come back
//! empty; a miss is a leaf, not an error.

use std::collections::HashSet;

use anyhow::{bail, Context, Result};

use crate::catalog::Catalog;
use crate::engine::graph::{LineageEdge, LineageGraph, LineageNode};

/// Resolve the upstream lineage graph for `root_table`, walking at most
/// `max_parent_level` levels of parents.
///
/// The returned node list is the root plus one node per distinct edge
/// `from`. Edges are emitted in pre-order: each level's edge first, in
/// dependency declaration order, immediately followed by the edges of its
/// own expansion. Edges are not deduplicated.
///
/// The only error surfaced besides an empty root name is a catalog access
/// failure, wrapped as "failed to fetch lineage"; partial results are
/// discarded in that case.
pub fn resolve_lineage(
    catalog: &dyn Catalog,
    root_table: &str,
    max_parent_level: u32,
) -> Result<LineageGraph> {
    let root_table = root_table.trim();
    if root_table.is_empty() {
        bail!("no table name provided");
    }

    let mut visited = HashSet::new();
    let edges = resolve_upstream(catalog, root_table, max_parent_level, &mut visited)
        .with_context(|| format!("failed to fetch lineage for {}", root_table))?;

    let mut nodes = vec![LineageNode::new(root_table)];
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(root_table.to_string());
    for edge in &edges {
        if seen.insert(edge.from.clone()) {
            nodes.push(LineageNode::new(&edge.from));
        }
    }

    Ok(LineageGraph { nodes, edges })
}

/// One step of the recursion: edges for `table`'s declared parents plus,
/// while `remaining_level > 1`, the edges of each parent's own expansion.
///
/// The visited set is shared across the entire resolution. That makes
/// cyclic dependency declarations terminate, and it also means a diamond
/// (A depends on B and C, both depend on D) expands D's own upstream only
/// once. The under-exploration is long-standing observed behavior that
/// callers rely on; do not revisit nodes to "complete" the graph.
fn resolve_upstream(
    catalog: &dyn Catalog,
    table: &str,
    remaining_level: u32,
    visited: &mut HashSet<String>,
) -> Result<Vec<LineageEdge>> {
    if remaining_level == 0 || visited.contains(table) {
        return Ok(Vec::new());
    }
    visited.insert(table.to_string());

    // No load record means no recorded upstream: a source table, a free
    // text dependency that names nothing real, or a plain base table.
    let Some(load) = catalog.find_load_by_name(table)? else {
        return Ok(Vec::new());
    };
    let Some(transform) = catalog.find_transform_by_id(load.transform_id)? else {
        return Ok(Vec::new());
    };

    let mut edges = Vec::new();
    for dep in transform.dependency_names() {
        edges.push(LineageEdge::new(&dep, table));
        if remaining_level > 1 {
            let sub_edges = resolve_upstream(catalog, &dep, remaining_level - 1, visited)?;
            edges.extend(sub_edges);
        }
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Load, MemoryCatalog, Transform};

    /// Chain catalog: load(A) <- [B], load(B) <- [C], load(C) <- [D].
    fn chain_catalog() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        catalog.register_table("d");
        catalog
            .register_transform(Transform::new(1, "a_t", "SELECT * FROM b", &["b"]))
            .unwrap();
        catalog
            .register_transform(Transform::new(2, "b_t", "SELECT * FROM c", &["c"]))
            .unwrap();
        catalog
            .register_transform(Transform::new(3, "c_t", "SELECT * FROM d", &["d"]))
            .unwrap();
        // Register leaf-most loads first so names resolve as tables exist.
        catalog.register_load(Load::new(3, "c", 3)).unwrap();
        catalog.register_load(Load::new(2, "b", 2)).unwrap();
        catalog.register_load(Load::new(1, "a", 1)).unwrap();
        catalog
    }

    fn edge_pairs(graph: &LineageGraph) -> Vec<(String, String)> {
        graph
            .edges
            .iter()
            .map(|e| (e.from.clone(), e.to.clone()))
            .collect()
    }

    fn pair(from: &str, to: &str) -> (String, String) {
        (from.to_string(), to.to_string())
    }

    #[test]
    fn test_table_without_load_is_a_leaf() {
        let catalog = MemoryCatalog::new();
        for level in [1, 2, 5] {
            let graph = resolve_lineage(&catalog, "orphan", level).unwrap();
            assert_eq!(graph.nodes, vec![LineageNode::new("orphan")]);
            assert!(graph.edges.is_empty());
        }
    }

    #[test]
    fn test_empty_root_is_an_input_error() {
        let catalog = MemoryCatalog::new();
        assert!(resolve_lineage(&catalog, "", 1).is_err());
        assert!(resolve_lineage(&catalog, "   ", 3).is_err());
    }

    #[test]
    fn test_depth_bound_on_chain() {
        let catalog = chain_catalog();

        let one = resolve_lineage(&catalog, "a", 1).unwrap();
        assert_eq!(edge_pairs(&one), vec![pair("b", "a")]);

        let two = resolve_lineage(&catalog, "a", 2).unwrap();
        assert_eq!(edge_pairs(&two), vec![pair("b", "a"), pair("c", "b")]);

        let three = resolve_lineage(&catalog, "a", 3).unwrap();
        assert_eq!(
            edge_pairs(&three),
            vec![pair("b", "a"), pair("c", "b"), pair("d", "c")]
        );
    }

    #[test]
    fn test_cycle_terminates() {
        let mut catalog = MemoryCatalog::new();
        catalog
            .register_transform(Transform::new(1, "a_t", "SELECT * FROM b", &["b"]))
            .unwrap();
        catalog
            .register_transform(Transform::new(2, "b_t", "SELECT * FROM a", &["a"]))
            .unwrap();
        catalog.register_load(Load::new(1, "a", 1)).unwrap();
        catalog.register_load(Load::new(2, "b", 2)).unwrap();

        // b's re-expansion of a is suppressed by the visited guard.
        let graph = resolve_lineage(&catalog, "a", 5).unwrap();
        assert_eq!(edge_pairs(&graph), vec![pair("b", "a"), pair("a", "b")]);
    }

    #[test]
    fn test_nodes_are_deduplicated_by_from() {
        let mut catalog = MemoryCatalog::new();
        catalog
            .register_transform(Transform::new(1, "a_t", "q", &["shared", "shared"]))
            .unwrap();
        catalog.register_load(Load::new(1, "a", 1)).unwrap();

        let graph = resolve_lineage(&catalog, "a", 1).unwrap();
        // Both declared edges survive; the shared name appears once as a node.
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(
            graph.nodes,
            vec![LineageNode::new("a"), LineageNode::new("shared")]
        );
    }

    #[test]
    fn test_diamond_under_exploration_is_preserved() {
        // a depends on b and c; b and c both depend on d; d has upstream e.
        let mut catalog = MemoryCatalog::new();
        catalog
            .register_transform(Transform::new(1, "a_t", "q", &["b", "c"]))
            .unwrap();
        catalog
            .register_transform(Transform::new(2, "b_t", "q", &["d"]))
            .unwrap();
        catalog
            .register_transform(Transform::new(3, "c_t", "q", &["d"]))
            .unwrap();
        catalog
            .register_transform(Transform::new(4, "d_t", "q", &["e"]))
            .unwrap();
        catalog.register_load(Load::new(4, "d", 4)).unwrap();
        catalog.register_load(Load::new(2, "b", 2)).unwrap();
        catalog.register_load(Load::new(3, "c", 3)).unwrap();
        catalog.register_load(Load::new(1, "a", 1)).unwrap();

        let graph = resolve_lineage(&catalog, "a", 10).unwrap();
        // d -> b expands d's own upstream; the second discovery via c emits
        // the d -> c edge but does not expand d again.
        assert_eq!(
            edge_pairs(&graph),
            vec![
                pair("b", "a"),
                pair("d", "b"),
                pair("e", "d"),
                pair("c", "a"),
                pair("d", "c"),
            ]
        );
        let node_ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(node_ids, vec!["a", "b", "d", "e", "c"]);
    }

    struct FailingCatalog;

    impl Catalog for FailingCatalog {
        fn list_tables(&self) -> Result<Vec<String>> {
            bail!("connection refused")
        }

        fn find_load_by_name(&self, _name: &str) -> Result<Option<Load>> {
            bail!("connection refused")
        }

        fn find_transform_by_id(&self, _id: u64) -> Result<Option<Transform>> {
            bail!("connection refused")
        }
    }

    #[test]
    fn test_catalog_failure_aborts_with_generic_signal() {
        let err = resolve_lineage(&FailingCatalog, "a", 3).unwrap_err();
        assert!(err.to_string().contains("failed to fetch lineage"));
        // The underlying message stays attached for diagnostics.
        assert!(format!("{:#}", err).contains("connection refused"));
    }

    #[test]
    fn test_dependencies_naming_nothing_real_are_edges_only() {
        let mut catalog = MemoryCatalog::new();
        catalog
            .register_transform(Transform::new(1, "a_t", "q", &["ghost"]))
            .unwrap();
        catalog.register_load(Load::new(1, "a", 1)).unwrap();

        let graph = resolve_lineage(&catalog, "a", 3).unwrap();
        assert_eq!(edge_pairs(&graph), vec![pair("ghost", "a")]);
    }
}
