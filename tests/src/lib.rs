//! Soma integration test framework.
//!
//! Provides fixture species (as JSON files and as programmatic builders) and
//! a `Scenario` runner that compiles a definition and checks the outcome.

pub mod fixtures;

pub mod prelude {
    pub use crate::fixtures::{fixture_path, humanoid_session, load_fixture, torso_with_spine};
    pub use crate::scenario::{Scenario, ScenarioError};
    pub use soma_core::ErrorKind;
}
