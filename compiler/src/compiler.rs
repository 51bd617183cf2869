//! Main compiler implementation.

use crate::{CompileError, CompileResult, SpeciesDefinition};
use soma_constraint::ShapeValidator;
use soma_core::{LimbDef, ShapeDef, SpeciesTemplate};
use soma_partition::parse_limb_type;
use soma_session::{BuildConfig, BuildError, BuildSession};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Compiles species definitions against one config and shape catalogue.
///
/// Each definition is built in its own session; shapes declared by a
/// definition apply to that species only.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: BuildConfig,
    shapes: ShapeValidator,
}

impl Compiler {
    /// Create a compiler with the default config and no shapes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler with a config.
    pub fn with_config(config: BuildConfig) -> Self {
        Self {
            config,
            shapes: ShapeValidator::new(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// The shared shape catalogue.
    pub fn shapes(&self) -> &ShapeValidator {
        &self.shapes
    }

    /// Add a shape every compiled species is checked against.
    pub fn add_shape(&mut self, def: ShapeDef) -> CompileResult<()> {
        self.shapes.add_shape(def).map_err(BuildError::from)?;
        Ok(())
    }

    /// Compile a JSON species definition.
    pub fn compile(&self, source: &str) -> CompileResult<SpeciesTemplate> {
        let def: SpeciesDefinition = serde_json::from_str(source)?;
        self.compile_definition(&def)
    }

    /// Compile a JSON species definition file.
    pub fn compile_file(&self, path: impl AsRef<Path>) -> CompileResult<SpeciesTemplate> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| CompileError::io(path, e))?;
        debug!(path = %path.display(), "compiling definition file");
        self.compile(&source)
    }

    /// Build a parsed definition.
    pub fn compile_definition(&self, def: &SpeciesDefinition) -> CompileResult<SpeciesTemplate> {
        let mut session =
            BuildSession::with_shapes(def.metadata(), self.config.clone(), self.shapes.clone());

        for part in &def.bodyparts {
            session.add_bodypart(part.clone())?;
        }
        for organ in &def.organs {
            session.add_organ(organ.clone())?;
        }
        for edge in &def.coverage {
            session.add_coverage(&edge.organ, &edge.bodypart, edge.percentage, edge.primary)?;
        }
        for limb in &def.limbs {
            let limb_type = parse_limb_type(&limb.name, &limb.limb_type).map_err(BuildError::from)?;
            let limb_def = LimbDef::new(&limb.name, limb_type, &limb.root)
                .thresholds(limb.damage_threshold_multiplier, limb.pain_threshold_multiplier);
            session.add_limb(limb_def)?;
        }
        for assignment in &def.assignments {
            session.assign_bodypart(&assignment.limb, &assignment.bodypart);
        }
        for shape in &def.shapes {
            session.add_shape(shape.clone())?;
        }

        Ok(session.assemble()?)
    }
}

/// Compile a JSON species definition with default settings.
pub fn compile(source: &str) -> CompileResult<SpeciesTemplate> {
    Compiler::new().compile(source)
}

/// Load a build config from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> CompileResult<BuildConfig> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| CompileError::io(path, e))?;
    serde_json::from_str(&source).map_err(|e| CompileError::config(path, e))
}
