//! Build error types.

use crate::SinkError;
use soma_constraint::ShapeError;
use soma_core::ErrorKind;
use soma_graph::GraphError;
use soma_partition::PartitionError;
use soma_registry::RegistryError;
use thiserror::Error;

/// Errors raised by a build session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl BuildError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BuildError::Registry(e) => e.kind(),
            BuildError::Graph(e) => e.kind(),
            BuildError::Partition(e) => e.kind(),
            BuildError::Shape(e) => e.kind(),
            BuildError::Sink(e) => e.kind(),
        }
    }
}

/// Result type for build operations.
pub type BuildResult<T> = Result<T, BuildError>;
