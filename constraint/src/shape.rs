//! The shape catalogue and validator.

use crate::{Matcher, ShapeError, ShapeResult, Violation, Violations};
use soma_core::{GenericTypeMatcher, Handle, KeyKind, ShapeDef, SpeciesTemplate};
use soma_registry::KeyRegistry;
use tracing::{debug, warn};

/// A registered shape with its compiled matchers.
#[derive(Debug, Clone)]
struct CompiledShape {
    def: ShapeDef,
    matchers: Vec<Matcher>,
}

/// Catalogue of reusable shape descriptors.
///
/// Holds its own registry of shape names, so one catalogue can be kept
/// across species builds and shared read-only between them. Validation never
/// mutates the catalogue or the template.
#[derive(Debug, Clone, Default)]
pub struct ShapeValidator {
    registry: KeyRegistry,
    shapes: Vec<CompiledShape>,
}

impl ShapeValidator {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape. Bounds and patterns are checked before the name is taken.
    pub fn add_shape(&mut self, def: ShapeDef) -> ShapeResult<Handle> {
        let mut matchers = Vec::with_capacity(def.tuples.len());
        for tuple in &def.tuples {
            if tuple.min > tuple.max {
                return Err(ShapeError::InvalidBounds {
                    shape: def.name.clone(),
                    tuple: tuple.clone(),
                });
            }
            let matcher = Matcher::compile(&tuple.matcher).map_err(|message| {
                let pattern = match &tuple.matcher {
                    GenericTypeMatcher::Pattern(p) => p.clone(),
                    other => other.to_string(),
                };
                ShapeError::InvalidPattern {
                    shape: def.name.clone(),
                    pattern,
                    message,
                }
            })?;
            matchers.push(matcher);
        }

        let id = self.registry.register(&def.name, KeyKind::Shape)?;
        debug!(shape = %def.name, tuples = def.tuples.len(), "shape added");
        self.shapes.push(CompiledShape { def, matchers });
        Ok(id)
    }

    /// Look up a shape by name.
    pub fn shape(&self, name: &str) -> Option<&ShapeDef> {
        self.registry
            .resolve(name, KeyKind::Shape)
            .ok()
            .map(|h| &self.shapes[h.index()].def)
    }

    /// All shapes in registration order.
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeDef> {
        self.shapes.iter().map(|s| &s.def)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name, KeyKind::Shape)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Collect every tuple of a shape that the template violates.
    pub fn check(&self, template: &SpeciesTemplate, name: &str) -> ShapeResult<Violations> {
        let shape = self.compiled(name)?;
        let mut violations = Violations::new();

        for (i, (tuple, matcher)) in shape.def.tuples.iter().zip(&shape.matchers).enumerate() {
            let count = template
                .bodyparts()
                .iter()
                .filter(|p| matcher.matches(p.generic_type()))
                .count();
            if !tuple.admits(count) {
                let violation = Violation::new(name, i, tuple.clone(), count);
                warn!(species = %template.name(), %violation, "shape violated");
                violations.push(violation);
            }
        }

        Ok(violations)
    }

    /// Fail on the first tuple of a shape that the template violates.
    pub fn validate(&self, template: &SpeciesTemplate, name: &str) -> ShapeResult<()> {
        self.check(template, name)?.into_result()
    }

    /// Collect violations of every shape.
    pub fn check_all(&self, template: &SpeciesTemplate) -> ShapeResult<Violations> {
        let mut all = Violations::new();
        for shape in &self.shapes {
            all.merge(self.check(template, &shape.def.name)?);
        }
        Ok(all)
    }

    /// Validate every shape in registration order.
    pub fn validate_all(&self, template: &SpeciesTemplate) -> ShapeResult<()> {
        for shape in &self.shapes {
            self.validate(template, &shape.def.name)?;
        }
        Ok(())
    }

    fn compiled(&self, name: &str) -> ShapeResult<&CompiledShape> {
        let id = self.registry.resolve(name, KeyKind::Shape)?;
        Ok(&self.shapes[id.index()])
    }
}
