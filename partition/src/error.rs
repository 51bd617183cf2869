//! Partition error types.

use soma_core::ErrorKind;
use soma_registry::RegistryError;
use thiserror::Error;

/// Errors raised while partitioning bodyparts into limbs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// Key registration or resolution failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A bodypart names a limb that was never added.
    #[error("Bodypart '{bodypart}' belongs to unregistered limb '{limb}'")]
    UnpartitionedBodypart { bodypart: String, limb: String },

    /// A limb type name is not in the classification table.
    #[error("Limb '{limb}' has unclassified limb type '{limb_type}'")]
    UnclassifiedLimbType { limb: String, limb_type: String },

    /// A limb's root bodypart was partitioned into a different limb.
    #[error("Root bodypart '{root}' of limb '{limb}' belongs to limb '{root_limb}'")]
    RootOutsideLimb {
        limb: String,
        root: String,
        root_limb: String,
    },

    /// A bodypart was explicitly assigned to two different limbs.
    #[error("Bodypart '{bodypart}' is assigned to both '{first}' and '{second}'")]
    AmbiguousAssignment {
        bodypart: String,
        first: String,
        second: String,
    },
}

impl PartitionError {
    pub fn unpartitioned(bodypart: impl Into<String>, limb: impl Into<String>) -> Self {
        Self::UnpartitionedBodypart {
            bodypart: bodypart.into(),
            limb: limb.into(),
        }
    }

    pub fn unclassified(limb: impl Into<String>, limb_type: impl Into<String>) -> Self {
        Self::UnclassifiedLimbType {
            limb: limb.into(),
            limb_type: limb_type.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PartitionError::Registry(e) => e.kind(),
            PartitionError::UnpartitionedBodypart { .. } => ErrorKind::UnpartitionedBodypart,
            PartitionError::UnclassifiedLimbType { .. } => ErrorKind::UnclassifiedLimbType,
            PartitionError::RootOutsideLimb { .. } => ErrorKind::RootOutsideLimb,
            PartitionError::AmbiguousAssignment { .. } => ErrorKind::AmbiguousLimbAssignment,
        }
    }
}

/// Result type for partition operations.
pub type PartitionResult<T> = Result<T, PartitionError>;
