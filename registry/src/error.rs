//! Registry error types.

use soma_core::{ErrorKind, KeyKind};
use thiserror::Error;

/// Errors that can occur while registering or resolving keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The same key was registered twice for one kind.
    #[error("Duplicate {kind} key '{key}'")]
    DuplicateKey { kind: KeyKind, key: String },

    /// A key was resolved that was never registered for the kind.
    #[error("Unresolved {kind} reference '{key}'")]
    UnresolvedReference { kind: KeyKind, key: String },

    /// An empty key was registered.
    #[error("Empty {kind} key")]
    EmptyKey { kind: KeyKind },
}

impl RegistryError {
    pub fn duplicate_key(kind: KeyKind, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            kind,
            key: key.into(),
        }
    }

    pub fn unresolved(kind: KeyKind, key: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            kind,
            key: key.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            RegistryError::UnresolvedReference { .. } => ErrorKind::UnresolvedReference,
            RegistryError::EmptyKey { .. } => ErrorKind::EmptyKey,
        }
    }

    /// The offending key, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            RegistryError::DuplicateKey { key, .. }
            | RegistryError::UnresolvedReference { key, .. } => Some(key),
            RegistryError::EmptyKey { .. } => None,
        }
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
