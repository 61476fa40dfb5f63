//! Validated, indexed view of a catalog document.
//!
//! [`Catalog`] keeps records in their authored order (the order the search
//! contract preserves) and layers a name index on top for exact lookup. It is
//! intentionally strict about duplicate and empty names so rendered result
//! rows always have a usable unique key.

use crate::catalog::identity::InstructionName;
use crate::catalog::model::{
    CatalogDocument, EMBEDDED_CATALOG, Instruction, load_document_from_path, parse_document,
};
use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug)]
/// Immutable instruction catalog plus a derived index keyed by name.
pub struct Catalog {
    records: Vec<Instruction>,
    by_name: BTreeMap<InstructionName, usize>,
}

impl Catalog {
    /// Build the catalog from the asset compiled into the binary.
    ///
    /// The embedded asset is validated like any other document; a failure
    /// here means the shipped data is broken and the process should not
    /// continue.
    pub fn embedded() -> Result<Self> {
        let document = parse_document(EMBEDDED_CATALOG).context("loading embedded catalog")?;
        Self::from_document(document)
    }

    /// Load and validate a catalog from an external JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let document = load_document_from_path(path)?;
        Self::from_document(document).with_context(|| format!("validating {}", path.display()))
    }

    /// Validate a parsed document and build the name index.
    ///
    /// Record order is preserved exactly as authored; the index maps each
    /// name to its position in that order.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        if document.instructions.is_empty() {
            bail!("catalog contains no instructions");
        }

        let mut by_name = BTreeMap::new();
        for (position, record) in document.instructions.iter().enumerate() {
            if record.name.as_str().trim().is_empty() {
                bail!("encountered instruction with no name at position {position}");
            }
            if by_name.insert(record.name.clone(), position).is_some() {
                bail!("duplicate instruction name '{}'", record.name);
            }
        }

        Ok(Self {
            records: document.instructions,
            by_name,
        })
    }

    /// The full catalog in its authored order.
    pub fn all(&self) -> &[Instruction] {
        &self.records
    }

    /// Resolve a record by its exact name.
    pub fn get(&self, name: &InstructionName) -> Option<&Instruction> {
        self.by_name.get(name).map(|&position| &self.records[position])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Instruction {
        Instruction {
            name: InstructionName(name.to_string()),
            description: String::new(),
            format: String::new(),
            implementation: String::new(),
            module: String::new(),
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let document = CatalogDocument {
            schema_version: "riscv_catalog_v1".to_string(),
            instructions: vec![record("add"), record("sub"), record("add")],
        };
        let err = Catalog::from_document(document).unwrap_err();
        assert!(err.to_string().contains("duplicate instruction name 'add'"));
    }

    #[test]
    fn blank_names_are_rejected() {
        let document = CatalogDocument {
            schema_version: "riscv_catalog_v1".to_string(),
            instructions: vec![record("  ")],
        };
        assert!(Catalog::from_document(document).is_err());
    }

    #[test]
    fn order_and_lookup_agree() {
        let document = CatalogDocument {
            schema_version: "riscv_catalog_v1".to_string(),
            instructions: vec![record("sub"), record("add")],
        };
        let catalog = Catalog::from_document(document).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all()[0].name.as_str(), "sub");
        let found = catalog.get(&InstructionName("add".to_string())).unwrap();
        assert_eq!(found.name.as_str(), "add");
        assert!(catalog.get(&InstructionName("mul".to_string())).is_none());
    }
}
