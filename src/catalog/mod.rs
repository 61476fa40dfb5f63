//! Instruction catalog wiring.
//!
//! This module wraps the JSON catalog under `data/instructions.json` so the
//! CLI and tests can load a validated snapshot and iterate records in their
//! authored order. Types here mirror the document fields; callers use
//! [`Catalog`] for the validated, indexed view and the `model` types when the
//! raw document surface is required.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::InstructionName;
pub use index::Catalog;
pub use model::{CatalogDocument, Instruction, EMBEDDED_CATALOG};

pub use model::{load_document_from_path, parse_document};
