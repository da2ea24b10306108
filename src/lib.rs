//! DataX core library: catalog records, SQL table-reference extraction and
//! lineage graph resolution for a transform/load admin tool.

pub mod catalog;
pub mod commands;
pub mod display;
pub mod engine;
pub mod project;
