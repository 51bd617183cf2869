//! Build session for one species.

use crate::{BuildConfig, BuildResult};
use soma_constraint::ShapeValidator;
use soma_core::{BodypartDef, Handle, LimbDef, OrganDef, ShapeDef, SpeciesMetadata, SpeciesTemplate};
use soma_graph::{BodypartGraph, OrganCoverageGraph};
use soma_partition::LimbPartitioner;
use soma_registry::KeyRegistry;
use std::mem;
use tracing::{debug, info, info_span};

/// All mutable state of a species build.
///
/// A session is owned by its caller and never shared; independent sessions
/// may build on separate threads. The shape catalogue is the only state that
/// survives [`BuildSession::reset`].
#[derive(Debug)]
pub struct BuildSession {
    metadata: SpeciesMetadata,
    config: BuildConfig,
    registry: KeyRegistry,
    bodyparts: BodypartGraph,
    coverage: OrganCoverageGraph,
    limbs: LimbPartitioner,
    shapes: ShapeValidator,
}

impl BuildSession {
    /// Create a session for one species.
    pub fn new(metadata: SpeciesMetadata, config: BuildConfig) -> Self {
        Self::with_shapes(metadata, config, ShapeValidator::new())
    }

    /// Create a session starting from an existing shape catalogue.
    pub fn with_shapes(metadata: SpeciesMetadata, config: BuildConfig, shapes: ShapeValidator) -> Self {
        let limbs = LimbPartitioner::with_spinal_table(config.spinal_organs.clone());
        Self {
            metadata,
            config,
            registry: KeyRegistry::new(),
            bodyparts: BodypartGraph::new(),
            coverage: OrganCoverageGraph::new(),
            limbs,
            shapes,
        }
    }

    pub fn metadata(&self) -> &SpeciesMetadata {
        &self.metadata
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// The registry of keys added so far.
    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    /// The shape catalogue.
    pub fn shapes(&self) -> &ShapeValidator {
        &self.shapes
    }

    // ==================== Authoring ====================

    pub fn add_bodypart(&mut self, def: BodypartDef) -> BuildResult<Handle> {
        Ok(self.bodyparts.add_bodypart(&mut self.registry, def)?)
    }

    pub fn add_organ(&mut self, def: OrganDef) -> BuildResult<Handle> {
        Ok(self.coverage.add_organ(&mut self.registry, def)?)
    }

    /// Record that `bodypart_key` exposes `organ_key`.
    pub fn add_coverage(
        &mut self,
        organ_key: &str,
        bodypart_key: &str,
        percentage: f64,
        is_primary: bool,
    ) -> BuildResult<()> {
        Ok(self
            .coverage
            .add_coverage(&self.registry, organ_key, bodypart_key, percentage, is_primary)?)
    }

    pub fn add_limb(&mut self, def: LimbDef) -> BuildResult<Handle> {
        Ok(self.limbs.add_limb(&mut self.registry, def)?)
    }

    /// Place a bodypart in a limb regardless of its own limb name.
    pub fn assign_bodypart(&mut self, limb_name: &str, bodypart_key: &str) {
        self.limbs.assign_bodypart(limb_name, bodypart_key);
    }

    /// Add a shape to the catalogue.
    pub fn add_shape(&mut self, def: ShapeDef) -> BuildResult<Handle> {
        Ok(self.shapes.add_shape(def)?)
    }

    // ==================== Assembly ====================

    /// Finalize every stage and produce the template.
    ///
    /// Stage state is taken out of the session before the first stage runs,
    /// so the session is empty afterwards whether or not assembly succeeds.
    pub fn assemble(&mut self) -> BuildResult<SpeciesTemplate> {
        let span = info_span!("assemble", species = %self.metadata.name);
        let _enter = span.enter();

        let registry = mem::take(&mut self.registry);
        let bodyparts = mem::take(&mut self.bodyparts);
        let coverage = mem::take(&mut self.coverage);
        let limbs = mem::replace(
            &mut self.limbs,
            LimbPartitioner::with_spinal_table(self.config.spinal_organs.clone()),
        );

        let forest = bodyparts.finalize(&registry)?;
        let coverage = coverage.finalize()?;
        let limbs = limbs.finalize(&registry, &forest)?;
        debug!(limbs = limbs.len(), "stages finalized");

        let (organs, edges) = coverage.into_parts();
        let template = SpeciesTemplate::new(
            self.metadata.clone(),
            forest.into_parts(),
            organs,
            edges,
            limbs,
            self.shapes.shapes().cloned().collect(),
        );

        if self.config.validate_shapes {
            self.shapes.validate_all(&template)?;
        }

        info!(
            bodyparts = template.bodyparts().len(),
            organs = template.organs().len(),
            limbs = template.limbs().len(),
            "template assembled"
        );
        Ok(template)
    }

    /// Discard all stage state, keeping metadata, config and shapes.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.bodyparts = BodypartGraph::new();
        self.coverage = OrganCoverageGraph::new();
        self.limbs = LimbPartitioner::with_spinal_table(self.config.spinal_organs.clone());
    }

    /// Reset and start building another species.
    pub fn begin(&mut self, metadata: SpeciesMetadata) {
        self.reset();
        self.metadata = metadata;
    }
}
