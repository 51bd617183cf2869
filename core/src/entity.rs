//! Node and edge records.
//!
//! Each node comes in two forms: a `*Def` carrying the authored fields, with
//! references to other nodes held as unresolved string keys, and the resolved
//! record that a finalized stage produces (handles filled in).

use crate::{
    Alignment, BodypartKind, Handle, LimbType, OrganKind, Orientation, SizeCategory,
    SpinalSegment,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authored fields of a bodypart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodypartDef {
    /// Unique key within the build.
    pub key: String,
    /// Display name; defaults to the key when left empty.
    pub display_name: String,
    pub short_description: String,
    /// Coarse category ("breast", "ear", "wing") used by shape matching.
    pub generic_type: String,
    pub kind: BodypartKind,
    /// Key of the parent bodypart, resolved when the graph is finalized.
    #[serde(alias = "parent")]
    pub parent_key: Option<String>,
    pub alignment: Alignment,
    pub orientation: Orientation,
    /// Relative likelihood of being the target of an undirected strike.
    pub hit_weight: f64,
    /// Damage needed to sever the part. `None` means it cannot be severed.
    pub severance_threshold: Option<f64>,
    /// Maximum damage capacity.
    pub structural_integrity: f64,
    pub material: String,
    pub size: SizeCategory,
    /// Name of the limb this part joins.
    #[serde(alias = "limb")]
    pub limb_name: String,
    pub is_vital: bool,
    pub is_core: bool,
    pub implant_capacity: f64,
    pub stun_multiplier: f64,
}

impl Default for BodypartDef {
    fn default() -> Self {
        Self {
            key: String::new(),
            display_name: String::new(),
            short_description: String::new(),
            generic_type: String::new(),
            kind: BodypartKind::default(),
            parent_key: None,
            alignment: Alignment::default(),
            orientation: Orientation::default(),
            hit_weight: 1.0,
            severance_threshold: None,
            structural_integrity: 100.0,
            material: "flesh".to_string(),
            size: SizeCategory::default(),
            limb_name: String::new(),
            is_vital: false,
            is_core: false,
            implant_capacity: 0.0,
            stun_multiplier: 1.0,
        }
    }
}

impl BodypartDef {
    pub fn new(key: impl Into<String>, limb_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            limb_name: limb_name.into(),
            ..Self::default()
        }
    }

    pub fn parent(mut self, parent_key: impl Into<String>) -> Self {
        self.parent_key = Some(parent_key.into());
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.short_description = description.into();
        self
    }

    pub fn generic_type(mut self, generic_type: impl Into<String>) -> Self {
        self.generic_type = generic_type.into();
        self
    }

    pub fn kind(mut self, kind: BodypartKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn placed(mut self, alignment: Alignment, orientation: Orientation) -> Self {
        self.alignment = alignment;
        self.orientation = orientation;
        self
    }

    pub fn hit_weight(mut self, weight: f64) -> Self {
        self.hit_weight = weight;
        self
    }

    pub fn severable_at(mut self, threshold: f64) -> Self {
        self.severance_threshold = Some(threshold);
        self
    }

    pub fn integrity(mut self, integrity: f64) -> Self {
        self.structural_integrity = integrity;
        self
    }

    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    pub fn size(mut self, size: SizeCategory) -> Self {
        self.size = size;
        self
    }

    pub fn vital(mut self) -> Self {
        self.is_vital = true;
        self
    }

    pub fn core(mut self) -> Self {
        self.is_core = true;
        self
    }

    pub fn implant_capacity(mut self, capacity: f64) -> Self {
        self.implant_capacity = capacity;
        self
    }

    pub fn stun_multiplier(mut self, multiplier: f64) -> Self {
        self.stun_multiplier = multiplier;
        self
    }
}

/// A bodypart with its parent reference resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bodypart {
    pub id: Handle,
    /// Resolved parent; `None` for roots.
    pub parent: Option<Handle>,
    /// Insertion counter assigned by the builder.
    pub display_order: u32,
    pub def: BodypartDef,
}

impl Bodypart {
    pub fn key(&self) -> &str {
        &self.def.key
    }

    pub fn generic_type(&self) -> &str {
        &self.def.generic_type
    }

    pub fn limb_name(&self) -> &str {
        &self.def.limb_name
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn can_be_severed(&self) -> bool {
        self.def.severance_threshold.is_some()
    }
}

/// Authored fields of an organ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganDef {
    pub key: String,
    #[serde(default)]
    pub display_name: String,
    pub kind: OrganKind,
    #[serde(default)]
    pub mass: f64,
    #[serde(default = "default_integrity")]
    pub base_integrity: f64,
    #[serde(default = "default_modifier")]
    pub stun_modifier: f64,
    #[serde(default = "default_modifier")]
    pub pain_modifier: f64,
    #[serde(default = "default_modifier")]
    pub bleed_modifier: f64,
}

fn default_integrity() -> f64 {
    100.0
}

fn default_modifier() -> f64 {
    1.0
}

impl OrganDef {
    pub fn new(key: impl Into<String>, kind: OrganKind) -> Self {
        Self {
            key: key.into(),
            display_name: String::new(),
            kind,
            mass: 0.0,
            base_integrity: default_integrity(),
            stun_modifier: default_modifier(),
            pain_modifier: default_modifier(),
            bleed_modifier: default_modifier(),
        }
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn integrity(mut self, integrity: f64) -> Self {
        self.base_integrity = integrity;
        self
    }

    pub fn modifiers(mut self, stun: f64, pain: f64, bleed: f64) -> Self {
        self.stun_modifier = stun;
        self.pain_modifier = pain;
        self.bleed_modifier = bleed;
        self
    }
}

/// A registered organ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organ {
    pub id: Handle,
    pub def: OrganDef,
}

impl Organ {
    pub fn key(&self) -> &str {
        &self.def.key
    }
}

/// Weighted exposure of an organ through a bodypart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageEdge {
    pub bodypart: Handle,
    pub organ: Handle,
    pub bodypart_key: String,
    pub organ_key: String,
    /// Chance, in [0, 100], that a strike on the bodypart also reaches the
    /// organ. Independent per edge.
    pub percentage: f64,
    /// Marks the organ's canonical location.
    pub is_primary: bool,
}

/// Authored fields of a limb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimbDef {
    pub name: String,
    pub limb_type: LimbType,
    #[serde(alias = "root")]
    pub root_key: String,
    #[serde(default = "default_modifier")]
    pub damage_threshold_multiplier: f64,
    #[serde(default = "default_modifier")]
    pub pain_threshold_multiplier: f64,
}

impl LimbDef {
    pub fn new(name: impl Into<String>, limb_type: LimbType, root_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limb_type,
            root_key: root_key.into(),
            damage_threshold_multiplier: default_modifier(),
            pain_threshold_multiplier: default_modifier(),
        }
    }

    pub fn thresholds(mut self, damage: f64, pain: f64) -> Self {
        self.damage_threshold_multiplier = damage;
        self.pain_threshold_multiplier = pain;
        self
    }
}

/// A partitioned limb.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Limb {
    pub id: Handle,
    pub root: Handle,
    pub def: LimbDef,
    pub spinal_segment: SpinalSegment,
    pub spinal_organ: Handle,
    pub spinal_organ_key: String,
    /// Member bodyparts in display order.
    pub members: Vec<Handle>,
}

impl Limb {
    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn limb_type(&self) -> LimbType {
        self.def.limb_type
    }
}

/// How a shape tuple selects bodyparts by generic type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenericTypeMatcher {
    /// Whole generic type, ignoring case.
    Exact(String),
    /// Substring of the generic type, ignoring case.
    Contains(String),
    /// Case-insensitive regular expression.
    Pattern(String),
}

impl fmt::Display for GenericTypeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericTypeMatcher::Exact(text) => write!(f, "exact \"{}\"", text),
            GenericTypeMatcher::Contains(text) => write!(f, "contains \"{}\"", text),
            GenericTypeMatcher::Pattern(pattern) => write!(f, "pattern /{}/", pattern),
        }
    }
}

/// One cardinality requirement of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeTuple {
    pub matcher: GenericTypeMatcher,
    pub min: usize,
    pub max: usize,
}

impl ShapeTuple {
    pub fn new(matcher: GenericTypeMatcher, min: usize, max: usize) -> Self {
        Self { matcher, min, max }
    }

    pub fn exact(generic_type: impl Into<String>, min: usize, max: usize) -> Self {
        Self::new(GenericTypeMatcher::Exact(generic_type.into()), min, max)
    }

    pub fn contains(fragment: impl Into<String>, min: usize, max: usize) -> Self {
        Self::new(GenericTypeMatcher::Contains(fragment.into()), min, max)
    }

    pub fn pattern(pattern: impl Into<String>, min: usize, max: usize) -> Self {
        Self::new(GenericTypeMatcher::Pattern(pattern.into()), min, max)
    }

    /// Check whether a count satisfies this tuple.
    pub fn admits(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

impl fmt::Display for ShapeTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in [{}, {}]", self.matcher, self.min, self.max)
    }
}

/// A reusable descriptive grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub tuples: Vec<ShapeTuple>,
}

impl ShapeDef {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tuples: Vec::new(),
        }
    }

    pub fn tuple(mut self, tuple: ShapeTuple) -> Self {
        self.tuples.push(tuple);
        self
    }
}
