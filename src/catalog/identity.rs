use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for an individual catalog record (the mnemonic, e.g.
/// `addi`).
///
/// Uniqueness across the catalog is enforced at load time; consumers rely on
/// it as the row key when rendering results.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstructionName(pub String);

impl InstructionName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstructionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
