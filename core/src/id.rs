//! Key kinds and node handles.
//!
//! Handles are compiler-internal and scoped to one build session:
//! - Allocated densely per kind, in registration order
//! - The index addresses the node in its stage's storage
//! - Never persisted (the persistence sink assigns durable identities)

use serde::{Deserialize, Serialize};
use std::fmt;

/// The namespace a string key is registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    Bodypart,
    Organ,
    Limb,
    Shape,
}

impl KeyKind {
    /// All key kinds, in registry slot order.
    pub const ALL: [KeyKind; 4] = [
        KeyKind::Bodypart,
        KeyKind::Organ,
        KeyKind::Limb,
        KeyKind::Shape,
    ];

    /// Slot of this kind in per-kind tables.
    pub fn slot(self) -> usize {
        match self {
            KeyKind::Bodypart => 0,
            KeyKind::Organ => 1,
            KeyKind::Limb => 2,
            KeyKind::Shape => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            KeyKind::Bodypart => "bodypart",
            KeyKind::Organ => "organ",
            KeyKind::Limb => "limb",
            KeyKind::Shape => "shape",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compiler-internal identifier for a registered key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Handle {
    kind: KeyKind,
    index: u32,
}

impl Handle {
    /// Create a new handle from a kind and a raw index.
    pub fn new(kind: KeyKind, index: u32) -> Self {
        Self { kind, index }
    }

    /// Get the kind this handle was registered under.
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// Get the raw index.
    pub fn raw(&self) -> u32 {
        self.index
    }

    /// Get the index as a storage offset.
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.index)
    }
}
