//! Graph error types.

use soma_core::ErrorKind;
use soma_registry::RegistryError;
use thiserror::Error;

/// Errors raised while building or finalizing the bodypart and organ graphs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Key registration or resolution failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Following parent links from a bodypart revisits it.
    #[error("Bodypart cycle detected involving '{key}': {}", .path.join(" -> "))]
    Cycle { key: String, path: Vec<String> },

    /// A coverage percentage lies outside [0, 100].
    #[error("Coverage of organ '{organ}' by bodypart '{bodypart}' is {percentage}%, outside [0, 100]")]
    Range {
        organ: String,
        bodypart: String,
        percentage: f64,
    },

    /// The same organ/bodypart pair was covered twice.
    #[error("Organ '{organ}' is already covered by bodypart '{bodypart}'")]
    DuplicateCoverage { organ: String, bodypart: String },

    /// An organ has no primary coverage edge.
    #[error("Organ '{organ}' has no primary coverage ({edges} coverage edges)")]
    MissingPrimaryCoverage { organ: String, edges: usize },

    /// An organ has more than one primary coverage edge.
    #[error("Organ '{organ}' has {} primary coverage edges: {}", .bodyparts.len(), .bodyparts.join(", "))]
    MultiplePrimaryCoverage {
        organ: String,
        bodyparts: Vec<String>,
    },
}

impl GraphError {
    pub fn cycle(key: impl Into<String>, path: Vec<String>) -> Self {
        Self::Cycle {
            key: key.into(),
            path,
        }
    }

    pub fn range(organ: impl Into<String>, bodypart: impl Into<String>, percentage: f64) -> Self {
        Self::Range {
            organ: organ.into(),
            bodypart: bodypart.into(),
            percentage,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::Registry(e) => e.kind(),
            GraphError::Cycle { .. } => ErrorKind::Cycle,
            GraphError::Range { .. } => ErrorKind::Range,
            GraphError::DuplicateCoverage { .. } => ErrorKind::DuplicateCoverage,
            GraphError::MissingPrimaryCoverage { .. } => ErrorKind::MissingPrimaryCoverage,
            GraphError::MultiplePrimaryCoverage { .. } => ErrorKind::MultiplePrimaryCoverage,
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
