//! Build configuration.

use serde::{Deserialize, Serialize};
use soma_partition::SpinalTable;

/// Options for a build session. Every field has a default, so a partial
/// config file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Validate every catalogued shape during `assemble`.
    pub validate_shapes: bool,
    /// Organ keys of the spinal cord segments.
    pub spinal_organs: SpinalTable,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            validate_shapes: true,
            spinal_organs: SpinalTable::default(),
        }
    }
}
