//! Soma Graph
//!
//! The two node graphs of a species template:
//! - Bodypart graph: bodyparts with deferred parent references, resolved and
//!   checked into a forest once every bodypart exists
//! - Organ coverage graph: organs and the weighted bodypart -> organ edges
//!   exposing them

mod bodypart;
mod coverage;
mod error;

pub use bodypart::{BodypartForest, BodypartGraph};
pub use coverage::{OrganCoverage, OrganCoverageGraph};
pub use error::{GraphError, GraphResult};
