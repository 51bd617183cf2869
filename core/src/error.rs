//! Flat error taxonomy.
//!
//! Every stage defines its own error enum; all of them map onto one
//! `ErrorKind` so callers can match on the failure class without walking the
//! wrapping layers.

use std::fmt;

/// Class of a template build failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A `(key, kind)` pair was registered twice.
    DuplicateKey,
    /// A key was looked up that was never registered for its kind.
    UnresolvedReference,
    /// A key was empty.
    EmptyKey,
    /// Following parent links revisits a bodypart.
    Cycle,
    /// A coverage percentage lies outside [0, 100].
    Range,
    /// The same organ/bodypart pair was covered twice.
    DuplicateCoverage,
    /// An organ has no primary coverage edge.
    MissingPrimaryCoverage,
    /// An organ has more than one primary coverage edge.
    MultiplePrimaryCoverage,
    /// A bodypart names no registered limb.
    UnpartitionedBodypart,
    /// A limb type name is outside the classification table.
    UnclassifiedLimbType,
    /// A limb's root bodypart belongs to another limb.
    RootOutsideLimb,
    /// A bodypart was explicitly assigned to two limbs.
    AmbiguousLimbAssignment,
    /// A shape tuple's count lies outside its bounds.
    ShapeCardinality,
    /// A shape descriptor is malformed (bad bounds or pattern).
    InvalidShape,
    /// The persistence sink rejected a write.
    Persistence,
    /// A species definition could not be read or parsed.
    Definition,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::DuplicateKey => "DuplicateKey",
            ErrorKind::UnresolvedReference => "UnresolvedReference",
            ErrorKind::EmptyKey => "EmptyKey",
            ErrorKind::Cycle => "Cycle",
            ErrorKind::Range => "Range",
            ErrorKind::DuplicateCoverage => "DuplicateCoverage",
            ErrorKind::MissingPrimaryCoverage => "MissingPrimaryCoverage",
            ErrorKind::MultiplePrimaryCoverage => "MultiplePrimaryCoverage",
            ErrorKind::UnpartitionedBodypart => "UnpartitionedBodypart",
            ErrorKind::UnclassifiedLimbType => "UnclassifiedLimbType",
            ErrorKind::RootOutsideLimb => "RootOutsideLimb",
            ErrorKind::AmbiguousLimbAssignment => "AmbiguousLimbAssignment",
            ErrorKind::ShapeCardinality => "ShapeCardinality",
            ErrorKind::InvalidShape => "InvalidShape",
            ErrorKind::Persistence => "Persistence",
            ErrorKind::Definition => "Definition",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
