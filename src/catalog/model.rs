//! Deserializable representation of the catalog document.
//!
//! The types mirror `schema/instruction_catalog.schema.json` so the CLI and
//! tests can reason about records without ad-hoc JSON handling. Use
//! [`Catalog`](crate::catalog::Catalog) for validation and name lookup; use
//! these structs when the raw document surface is required.

use crate::catalog::identity::InstructionName;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Canonical catalog asset, compiled into the binary.
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/instructions.json");

/// JSON Schema the catalog document is validated against before parsing.
const CATALOG_SCHEMA: &str = include_str!("../../schema/instruction_catalog.schema.json");

/// Schema versions this build understands. The tool currently ships a single
/// catalog shape; reject anything else rather than guess at field meanings.
const SCHEMA_VERSION: &str = "riscv_catalog_v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Full catalog document as stored on disk or embedded in the binary.
pub struct CatalogDocument {
    pub schema_version: String,
    pub instructions: Vec<Instruction>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One instruction reference record.
///
/// All five fields are plain text and all participate in substring search.
/// `name` doubles as the record's stable identity.
pub struct Instruction {
    pub name: InstructionName,
    pub description: String,
    pub format: String,
    pub implementation: String,
    pub module: String,
}

/// Parse a catalog document from raw JSON text.
///
/// Validates against the embedded JSON Schema first so malformed documents
/// fail with every violation listed, then deserializes and checks the schema
/// version. Uniqueness of names is enforced later, in `Catalog`.
pub fn parse_document(raw: &str) -> Result<CatalogDocument> {
    let value: Value = serde_json::from_str(raw).context("parsing catalog JSON")?;
    validate_against_schema(&value)?;

    let document: CatalogDocument =
        serde_json::from_value(value).context("deserializing catalog document")?;
    if document.schema_version != SCHEMA_VERSION {
        bail!(
            "unsupported catalog schema_version '{}' (expected '{}')",
            document.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(document)
}

/// Read and parse a catalog document from disk.
pub fn load_document_from_path(path: &Path) -> Result<CatalogDocument> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_document(&raw).with_context(|| format!("loading {}", path.display()))
}

fn validate_against_schema(value: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(CATALOG_SCHEMA).context("parsing embedded catalog schema")?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling embedded catalog schema: {err}"))?;

    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog failed schema validation:\n{details}");
    }
    Ok(())
}
