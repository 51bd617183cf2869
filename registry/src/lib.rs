//! Soma Registry
//!
//! Key registry for one build session. Maps the short string keys authors
//! choose ("head", "lung") to compiler-internal handles, per key kind.
//! Every stage that accepts a string key resolves it here.

mod error;
mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::KeyRegistry;
