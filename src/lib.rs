//! Shared library for the fzrv instruction lookup tool.
//!
//! The crate holds the two pieces the binaries depend on: the instruction
//! catalog (a fixed, ordered set of reference records, embedded at build
//! time) and the search function that filters it. Matching semantics live
//! entirely in [`search`]: case-insensitive substring containment across all
//! five record fields, preserving catalog order. Everything else — argument
//! handling, output formatting — belongs to the binaries.

pub mod catalog;
pub mod search;

pub use catalog::{
    Catalog, CatalogDocument, EMBEDDED_CATALOG, Instruction, InstructionName,
    load_document_from_path, parse_document,
};
pub use search::search;
