//! Shape error types.

use soma_core::{ErrorKind, ShapeTuple};
use soma_registry::RegistryError;
use thiserror::Error;

/// Errors raised while defining or validating shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Shape registration or lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A template's matching count lies outside a tuple's bounds.
    #[error("Shape '{shape}' requires {tuple}, found {actual_count}")]
    ShapeCardinality {
        shape: String,
        tuple: ShapeTuple,
        actual_count: usize,
    },

    /// A tuple's lower bound exceeds its upper bound.
    #[error("Shape '{shape}' has tuple {tuple} with min above max")]
    InvalidBounds { shape: String, tuple: ShapeTuple },

    /// A pattern matcher does not compile.
    #[error("Shape '{shape}' has invalid pattern /{pattern}/: {message}")]
    InvalidPattern {
        shape: String,
        pattern: String,
        message: String,
    },
}

impl ShapeError {
    pub fn cardinality(shape: impl Into<String>, tuple: ShapeTuple, actual_count: usize) -> Self {
        Self::ShapeCardinality {
            shape: shape.into(),
            tuple,
            actual_count,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ShapeError::Registry(e) => e.kind(),
            ShapeError::ShapeCardinality { .. } => ErrorKind::ShapeCardinality,
            ShapeError::InvalidBounds { .. } | ShapeError::InvalidPattern { .. } => {
                ErrorKind::InvalidShape
            }
        }
    }
}

/// Result type for shape operations.
pub type ShapeResult<T> = Result<T, ShapeError>;
