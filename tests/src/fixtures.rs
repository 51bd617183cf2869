//! Fixture species.

use soma_core::{BodypartDef, LimbDef, LimbType, OrganDef, OrganKind, SpeciesMetadata};
use soma_session::{BuildConfig, BuildResult, BuildSession};
use std::io;
use std::path::PathBuf;

/// Path of a file under the fixture directory.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Read a fixture file.
pub fn load_fixture(name: &str) -> io::Result<String> {
    std::fs::read_to_string(fixture_path(name))
}

/// Add a torso root (`abdomen`), the three spinal organs covered by it and
/// the `Torso` limb.
pub fn torso_with_spine(session: &mut BuildSession) -> BuildResult<()> {
    session.add_bodypart(BodypartDef::new("abdomen", "Torso").generic_type("abdomen").core())?;
    for key in ["uspinalcord", "mspinalcord", "lspinalcord"] {
        session.add_organ(OrganDef::new(key, OrganKind::SpinalSegment))?;
        session.add_coverage(key, "abdomen", 5.0, true)?;
    }
    session.add_limb(LimbDef::new("Torso", LimbType::Torso, "abdomen"))?;
    Ok(())
}

/// A session holding a small humanoid: torso, head with brain, two legs.
pub fn humanoid_session() -> BuildResult<BuildSession> {
    let mut session = BuildSession::new(SpeciesMetadata::new("Humanoid"), BuildConfig::default());
    torso_with_spine(&mut session)?;

    session.add_bodypart(BodypartDef::new("head", "Head").parent("abdomen").generic_type("head"))?;
    session.add_organ(OrganDef::new("brain", OrganKind::Brain))?;
    session.add_coverage("brain", "head", 100.0, true)?;
    session.add_limb(LimbDef::new("Head", LimbType::Head, "head"))?;

    for (side, limb) in [("l", "Left Leg"), ("r", "Right Leg")] {
        let upper = format!("{}upperleg", side);
        let knee = format!("{}knee", side);
        let lower = format!("{}lowerleg", side);
        let foot = format!("{}foot", side);
        session.add_bodypart(BodypartDef::new(&upper, limb).parent("abdomen").generic_type("upper leg"))?;
        session.add_bodypart(BodypartDef::new(&knee, limb).parent(&upper).generic_type("knee"))?;
        session.add_bodypart(BodypartDef::new(&lower, limb).parent(&knee).generic_type("lower leg"))?;
        session.add_bodypart(BodypartDef::new(&foot, limb).parent(&lower).generic_type("foot"))?;
        session.add_limb(LimbDef::new(limb, LimbType::Leg, &upper))?;
    }

    Ok(session)
}
