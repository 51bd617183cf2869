//! Shape violation types.

use crate::ShapeError;
use soma_core::ShapeTuple;
use std::fmt;

/// One shape tuple whose bounds a template does not meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The shape that was checked.
    pub shape: String,
    /// Position of the tuple within the shape.
    pub tuple_index: usize,
    /// The violated tuple.
    pub tuple: ShapeTuple,
    /// Number of bodyparts that matched.
    pub actual_count: usize,
}

impl Violation {
    pub fn new(shape: impl Into<String>, tuple_index: usize, tuple: ShapeTuple, actual_count: usize) -> Self {
        Self {
            shape: shape.into(),
            tuple_index,
            tuple,
            actual_count,
        }
    }

    /// Check if the template has fewer matching bodyparts than required.
    pub fn is_shortfall(&self) -> bool {
        self.actual_count < self.tuple.min
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} (found {})",
            self.shape, self.tuple_index, self.tuple, self.actual_count
        )
    }
}

impl From<Violation> for ShapeError {
    fn from(v: Violation) -> Self {
        ShapeError::cardinality(v.shape, v.tuple, v.actual_count)
    }
}

/// Collection of violations.
#[derive(Debug, Clone, Default)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Get all violations in tuple order.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations of one shape.
    pub fn of_shape<'a>(&'a self, shape: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.shape == shape)
    }

    /// Merge another violations collection.
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }

    /// Turn the first violation, if any, into an error.
    pub fn into_result(self) -> Result<(), ShapeError> {
        match self.violations.into_iter().next() {
            Some(v) => Err(v.into()),
            None => Ok(()),
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
