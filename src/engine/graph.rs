//! Lineage graph wire types

use serde::{Deserialize, Serialize};

/// A table or transform name appearing in a lineage graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageNode {
    pub id: String,
    pub label: String,
}

impl LineageNode {
    pub fn new(name: &str) -> Self {
        Self {
            id: name.to_string(),
            label: name.to_string(),
        }
    }
}

/// A single upstream dependency: `from` feeds `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageEdge {
    pub from: String,
    pub to: String,
}

impl LineageEdge {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Upstream lineage for one root table, computed on demand and never
/// persisted.
///
/// Nodes are deduplicated by id; edges are exactly what the traversal
/// emitted and may repeat when the same dependency is rediscovered along
/// different paths before the visited guard prunes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageGraph {
    pub nodes: Vec<LineageNode>,
    pub edges: Vec<LineageEdge>,
}

impl LineageGraph {
    /// Render the graph in dot format for Graphviz.
    pub fn to_dot(&self) -> String {
        let mut result = String::from("digraph lineage {\n");
        result.push_str("  rankdir=LR;\n");
        result.push_str("  node [shape=box];\n");

        for node in &self.nodes {
            result.push_str(&format!("  \"{}\" [label=\"{}\"];\n", node.id, node.label));
        }

        for edge in &self.edges {
            result.push_str(&format!("  \"{}\" -> \"{}\";\n", edge.from, edge.to));
        }

        result.push_str("}\n");
        result
    }
}
