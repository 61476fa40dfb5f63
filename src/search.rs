//! The search contract: case-insensitive substring filtering over the
//! catalog.
//!
//! Despite the tool's "fuzzy" name, matching is plain substring containment:
//! a record matches when the query appears contiguously, case-insensitively,
//! in at least one of its five fields. The filter is stable (catalog order is
//! preserved), unbounded (every match is returned), and total (any string is
//! a valid query).

use crate::catalog::{Catalog, Instruction};

/// Filter the catalog down to records matching `query`.
///
/// The empty query is the identity case and returns the whole catalog. Both
/// sides are upper-cased before the containment test so folding stays
/// consistent for non-ASCII text.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Instruction> {
    if query.is_empty() {
        return catalog.all().iter().collect();
    }

    let needle = query.to_uppercase();
    catalog
        .all()
        .iter()
        .filter(|record| record_matches(record, &needle))
        .collect()
}

/// True when any field of `record` contains the already upper-cased needle.
fn record_matches(record: &Instruction, needle: &str) -> bool {
    let contains = |field: &str| field.to_uppercase().contains(needle);

    contains(record.name.as_str())
        || contains(&record.description)
        || contains(&record.format)
        || contains(&record.implementation)
        || contains(&record.module)
}
