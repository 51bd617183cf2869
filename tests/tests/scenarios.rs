//! Build scenarios over small programmatic species.

use pretty_assertions::assert_eq;
use soma_core::{
    BodypartDef, LimbDef, LimbType, OrganDef, OrganKind, ShapeDef, ShapeTuple, SpeciesMetadata,
    SpinalSegment,
};
use soma_session::{BuildConfig, BuildSession};
use soma_tests::prelude::*;

fn session(name: &str) -> BuildSession {
    BuildSession::new(SpeciesMetadata::new(name), BuildConfig::default())
}

mod forest {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_head_on_abdomen_finalizes() {
        // GIVEN abdomen(parent=none), head(parent=abdomen)
        let mut session = session("A");
        torso_with_spine(&mut session).unwrap();
        session
            .add_bodypart(BodypartDef::new("head", "Torso").parent("abdomen"))
            .unwrap();

        // WHEN assemble
        let template = session.assemble().unwrap();

        // THEN head's path to root is head -> abdomen
        let head = template.bodypart("head").unwrap();
        let path: Vec<&str> = template.path_to_root(head.id).iter().map(|p| p.key()).collect();
        assert_eq!(path, vec!["head", "abdomen"]);
    }

    #[test]
    fn test_mutual_parents_are_a_cycle() {
        // GIVEN a(parent=b), b(parent=a)
        let mut session = session("A");
        session.add_bodypart(BodypartDef::new("a", "Torso").parent("b")).unwrap();
        session.add_bodypart(BodypartDef::new("b", "Torso").parent("a")).unwrap();

        // WHEN assemble
        let err = session.assemble().unwrap_err();

        // THEN Cycle
        assert_eq!(err.kind(), ErrorKind::Cycle);
    }
}

mod coverage {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_brain_primary_in_head_secondary_in_ear() {
        // GIVEN brain covered by head (100, primary) and ear (10)
        let mut session = session("B");
        torso_with_spine(&mut session).unwrap();
        session.add_bodypart(BodypartDef::new("head", "Torso").parent("abdomen")).unwrap();
        session.add_bodypart(BodypartDef::new("ear", "Torso").parent("head")).unwrap();
        session.add_organ(OrganDef::new("brain", OrganKind::Brain)).unwrap();
        session.add_coverage("brain", "head", 100.0, true).unwrap();
        session.add_coverage("brain", "ear", 10.0, false).unwrap();

        // WHEN assemble
        let template = session.assemble().unwrap();

        // THEN exactly one primary edge, at head
        let brain = template.organ("brain").unwrap();
        let primaries: Vec<&str> = template
            .coverage_of(brain.id)
            .filter(|e| e.is_primary)
            .map(|e| e.bodypart_key.as_str())
            .collect();
        assert_eq!(primaries, vec!["head"]);

        let ear = template.bodypart("ear").unwrap();
        let exposed: Vec<&str> = template.exposed_organs(ear.id).map(|(o, _)| o.key()).collect();
        assert_eq!(exposed, vec!["brain"]);
    }

    #[test]
    fn test_heart_without_coverage_fails() {
        let mut session = session("B");
        torso_with_spine(&mut session).unwrap();
        session.add_organ(OrganDef::new("heart", OrganKind::Heart)).unwrap();

        let err = session.assemble().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingPrimaryCoverage);
    }
}

mod shapes {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    fn with_wings(count: usize) -> BuildSession {
        let mut session = session("C");
        session
            .add_shape(ShapeDef::new("wings", "").tuple(ShapeTuple::exact("wing", 2, 2)))
            .unwrap();
        torso_with_spine(&mut session).unwrap();
        for i in 0..count {
            session
                .add_bodypart(
                    BodypartDef::new(format!("wing{}", i), "Torso")
                        .parent("abdomen")
                        .generic_type("wing"),
                )
                .unwrap();
        }
        session
    }

    #[test]
    fn test_two_wings_satisfy_shape() {
        let template = with_wings(2).assemble().unwrap();

        assert_eq!(template.bodyparts_of_type("WING").count(), 2);
    }

    #[test]
    fn test_one_wing_fails_shape() {
        let err = with_wings(1).assemble().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ShapeCardinality);
        assert!(err.to_string().contains("found 1"));
    }
}

mod limbs {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_left_leg_uses_lower_spinal_segment() {
        // GIVEN limb "Left Leg" rooted at lupperleg, all leg parts naming it
        let mut session = humanoid_session().unwrap();

        // WHEN assemble
        let template = session.assemble().unwrap();

        // THEN the limb holds the leg and maps to lspinalcord
        let leg = template.limb("Left Leg").unwrap();
        assert_eq!(leg.limb_type(), LimbType::Leg);
        assert_eq!(leg.spinal_segment, SpinalSegment::Lower);
        assert_eq!(leg.spinal_organ_key, "lspinalcord");
        let members: Vec<&str> = template.limb_members(leg.id).map(|p| p.key()).collect();
        assert_eq!(members, vec!["lupperleg", "lknee", "llowerleg", "lfoot"]);
        assert_eq!(template.organ("lspinalcord").unwrap().id, leg.spinal_organ);
    }

    #[test]
    fn test_every_bodypart_in_exactly_one_limb() {
        let template = humanoid_session().unwrap().assemble().unwrap();

        for part in template.bodyparts() {
            let owners = template
                .limbs()
                .iter()
                .filter(|l| l.members.contains(&part.id))
                .count();
            assert_eq!(owners, 1, "bodypart {}", part.key());
        }
    }

    #[test]
    fn test_misnamed_limb_is_unpartitioned() {
        // GIVEN a leg part naming "Leg Leg", which is never added
        let mut session = humanoid_session().unwrap();
        session
            .add_bodypart(BodypartDef::new("ltoe", "Leg Leg").parent("lfoot"))
            .unwrap();

        let err = session.assemble().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnpartitionedBodypart);
        assert!(err.to_string().contains("ltoe"));
    }

    #[test]
    fn test_assignment_moves_part_between_limbs() {
        // GIVEN lfoot explicitly moved into the Right Leg
        let mut session = humanoid_session().unwrap();
        session.assign_bodypart("Right Leg", "lfoot");

        let template = session.assemble().unwrap();

        let lfoot = template.bodypart("lfoot").unwrap();
        assert_eq!(template.limb_of(lfoot.id).unwrap().name(), "Right Leg");
        assert_eq!(template.limb("Left Leg").unwrap().members.len(), 3);
    }

    #[test]
    fn test_limb_with_unknown_root() {
        let mut session = humanoid_session().unwrap();

        let err = session
            .add_limb(LimbDef::new("Tail", LimbType::Tail, "tailbase"))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnresolvedReference);
    }
}
