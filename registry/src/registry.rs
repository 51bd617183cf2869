//! The KeyRegistry - string key to handle mapping.

use crate::{RegistryError, RegistryResult};
use soma_core::{Handle, KeyKind};
use std::collections::HashMap;

const KIND_COUNT: usize = KeyKind::ALL.len();

/// Maps string keys to handles, separately for each key kind.
///
/// One registry belongs to one build session. Handles are allocated densely
/// per kind, so the n-th key registered for a kind gets index n.
#[derive(Debug, Default, Clone)]
pub struct KeyRegistry {
    /// Key lookup per kind.
    names: [HashMap<String, Handle>; KIND_COUNT],
    /// Keys in registration order per kind (handle index -> key).
    keys: [Vec<String>; KIND_COUNT],
}

impl KeyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key under a kind and allocate its handle.
    pub fn register(&mut self, key: &str, kind: KeyKind) -> RegistryResult<Handle> {
        if key.is_empty() {
            return Err(RegistryError::EmptyKey { kind });
        }

        let slot = kind.slot();
        if self.names[slot].contains_key(key) {
            return Err(RegistryError::duplicate_key(kind, key));
        }

        let handle = Handle::new(kind, self.keys[slot].len() as u32);
        self.names[slot].insert(key.to_string(), handle);
        self.keys[slot].push(key.to_string());
        Ok(handle)
    }

    /// Resolve a key registered under a kind.
    pub fn resolve(&self, key: &str, kind: KeyKind) -> RegistryResult<Handle> {
        self.names[kind.slot()]
            .get(key)
            .copied()
            .ok_or_else(|| RegistryError::unresolved(kind, key))
    }

    /// Check whether a key is registered under a kind.
    pub fn contains(&self, key: &str, kind: KeyKind) -> bool {
        self.names[kind.slot()].contains_key(key)
    }

    /// Get the key a handle was registered with.
    pub fn key_of(&self, handle: Handle) -> Option<&str> {
        self.keys[handle.kind().slot()]
            .get(handle.index())
            .map(|s| s.as_str())
    }

    /// Keys of a kind in registration order.
    pub fn keys(&self, kind: KeyKind) -> impl Iterator<Item = &str> {
        self.keys[kind.slot()].iter().map(|s| s.as_str())
    }

    /// Number of keys registered under a kind.
    pub fn len(&self, kind: KeyKind) -> usize {
        self.keys[kind.slot()].len()
    }

    /// Check whether nothing is registered under any kind.
    pub fn is_empty(&self) -> bool {
        self.keys.iter().all(|k| k.is_empty())
    }

    /// Forget every key. Handles issued before the reset must not be reused.
    pub fn reset(&mut self) {
        for names in &mut self.names {
            names.clear();
        }
        for keys in &mut self.keys {
            keys.clear();
        }
    }
}
