//! Soma Core Types
//!
//! This crate provides the foundational types shared by every compiler stage:
//! - Key kinds and node handles (KeyKind, Handle)
//! - Anatomical enumerations (BodypartKind, LimbType, SpinalSegment, ...)
//! - Node and edge records (Bodypart, Organ, CoverageEdge, Limb, ShapeDef)
//! - The immutable SpeciesTemplate produced by a build
//! - The flat ErrorKind taxonomy every stage error maps onto

mod entity;
mod error;
mod id;
mod template;
mod value;

pub use entity::*;
pub use error::*;
pub use id::*;
pub use template::*;
pub use value::*;
