//! Core engine: SQL table-reference extraction and lineage resolution

pub mod extractor;
pub mod graph;
pub mod guard;
pub mod resolver;
