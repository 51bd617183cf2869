//! Soma Compiler
//!
//! Turns declarative species definitions into species templates.
//!
//! Responsibilities:
//! - Parse JSON species definitions
//! - Classify authored limb type names
//! - Drive a build session through every stage
//! - Load build configuration files

mod compiler;
mod definition;
mod error;

pub use compiler::{compile, load_config, Compiler};
pub use definition::{AssignmentDef, CoverageDef, LimbEntry, SpeciesDefinition};
pub use error::{CompileError, CompileResult};
