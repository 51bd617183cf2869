//! Compiler error types.

use soma_core::ErrorKind;
use soma_session::BuildError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while compiling a species definition.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The definition is not valid JSON or has the wrong structure.
    #[error("Invalid species definition: {0}")]
    Parse(#[from] serde_json::Error),

    /// A definition or config file could not be read.
    #[error("Cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file is malformed.
    #[error("Invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A build stage rejected the definition.
    #[error(transparent)]
    Build(#[from] BuildError),
}

impl CompileError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Parse(_) | CompileError::Io { .. } | CompileError::Config { .. } => {
                ErrorKind::Definition
            }
            CompileError::Build(e) => e.kind(),
        }
    }
}

/// Result type for compiler operations.
pub type CompileResult<T> = Result<T, CompileError>;
