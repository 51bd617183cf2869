//! Spinal pathway classification.

use crate::{PartitionError, PartitionResult};
use serde::{Deserialize, Serialize};
use soma_core::{LimbType, SpinalSegment};

/// Spinal cord segment serving each limb type.
///
/// Exhaustive over `LimbType`; a new limb type does not compile until it is
/// classified here.
pub fn spinal_segment(limb_type: LimbType) -> SpinalSegment {
    match limb_type {
        LimbType::Head | LimbType::Torso => SpinalSegment::Upper,
        LimbType::Arm | LimbType::Wing | LimbType::Appendage => SpinalSegment::Middle,
        LimbType::Leg | LimbType::Tail | LimbType::Genitals => SpinalSegment::Lower,
    }
}

/// Parse an authored limb type name for the limb `limb_name`.
pub fn parse_limb_type(limb_name: &str, limb_type: &str) -> PartitionResult<LimbType> {
    limb_type
        .parse()
        .map_err(|_| PartitionError::unclassified(limb_name, limb_type))
}

/// Organ keys of the three spinal cord segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinalTable {
    pub upper: String,
    pub middle: String,
    pub lower: String,
}

impl Default for SpinalTable {
    fn default() -> Self {
        Self {
            upper: "uspinalcord".to_string(),
            middle: "mspinalcord".to_string(),
            lower: "lspinalcord".to_string(),
        }
    }
}

impl SpinalTable {
    /// Organ key for a segment.
    pub fn organ_key(&self, segment: SpinalSegment) -> &str {
        match segment {
            SpinalSegment::Upper => &self.upper,
            SpinalSegment::Middle => &self.middle,
            SpinalSegment::Lower => &self.lower,
        }
    }

    /// Organ key serving a limb type.
    pub fn organ_for(&self, limb_type: LimbType) -> &str {
        self.organ_key(spinal_segment(limb_type))
    }
}
