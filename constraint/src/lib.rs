//! Soma Constraint
//!
//! Shape validation. A shape names a descriptive grouping ("humanoid",
//! "winged quadruped") as cardinality bounds over bodypart generic types.
//! The catalogue of shapes outlives any single species build and is checked
//! read-only against finished templates.

mod error;
mod matcher;
mod shape;
mod violation;

pub use error::{ShapeError, ShapeResult};
pub use matcher::Matcher;
pub use shape::ShapeValidator;
pub use violation::{Violation, Violations};
