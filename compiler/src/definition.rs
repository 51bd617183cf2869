//! JSON species definitions.

use serde::{Deserialize, Serialize};
use soma_core::{BodypartDef, Locomotion, OrganDef, ShapeDef, SizeCategory, SpeciesMetadata};

/// A complete authored species.
///
/// Entries reference each other by key; order within `bodyparts` only sets
/// display order, since parents may be declared after their children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDefinition {
    pub name: String,
    #[serde(default)]
    pub base_size: SizeCategory,
    #[serde(default = "Locomotion::walking")]
    pub locomotion: Locomotion,
    #[serde(default)]
    pub bodyparts: Vec<BodypartDef>,
    #[serde(default)]
    pub organs: Vec<OrganDef>,
    #[serde(default)]
    pub coverage: Vec<CoverageDef>,
    #[serde(default)]
    pub limbs: Vec<LimbEntry>,
    /// Explicit limb memberships overriding each bodypart's `limb`.
    #[serde(default)]
    pub assignments: Vec<AssignmentDef>,
    /// Shapes specific to this species, added to the shared catalogue.
    #[serde(default)]
    pub shapes: Vec<ShapeDef>,
}

impl SpeciesDefinition {
    pub fn metadata(&self) -> SpeciesMetadata {
        SpeciesMetadata::new(&self.name)
            .base_size(self.base_size)
            .locomotion(self.locomotion)
    }
}

/// One organ exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageDef {
    pub organ: String,
    pub bodypart: String,
    pub percentage: f64,
    #[serde(default)]
    pub primary: bool,
}

/// A limb as authored. The limb type stays a string until the compiler
/// classifies it, so an unknown type reports the limb it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimbEntry {
    pub name: String,
    pub limb_type: String,
    pub root: String,
    #[serde(default = "one")]
    pub damage_threshold_multiplier: f64,
    #[serde(default = "one")]
    pub pain_threshold_multiplier: f64,
}

fn one() -> f64 {
    1.0
}

/// Explicit membership of a bodypart in a limb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDef {
    pub limb: String,
    pub bodypart: String,
}
