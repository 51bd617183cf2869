//! End-to-end compilation of fixture definitions.

use pretty_assertions::assert_eq;
use soma_compiler::Compiler;
use soma_core::{ShapeDef, ShapeTuple};
use soma_session::{persist, BuildConfig, MemorySink, RecordKind, TemplateSink};
use soma_tests::prelude::*;
use std::thread;

mod humanoid {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("humanoid")
            .fixture("humanoid.json")
            .check("counts", |t| {
                let counts = (t.bodyparts().len(), t.organs().len(), t.limbs().len());
                if counts == (24, 9, 7) {
                    Ok(())
                } else {
                    Err(format!("got {:?}", counts))
                }
            })
            .check("single root", |t| match t.roots().count() {
                1 => Ok(()),
                n => Err(format!("{} roots", n)),
            })
    }

    #[test]
    fn test_humanoid_compiles() {
        let template = scenario().run().unwrap().unwrap();

        let spinal: Vec<(&str, &str)> = template
            .limbs()
            .iter()
            .map(|l| (l.name(), l.spinal_organ_key.as_str()))
            .collect();
        assert_eq!(
            spinal,
            vec![
                ("Torso", "uspinalcord"),
                ("Head", "uspinalcord"),
                ("Left Arm", "mspinalcord"),
                ("Right Arm", "mspinalcord"),
                ("Left Leg", "lspinalcord"),
                ("Right Leg", "lspinalcord"),
                ("Genitals", "lspinalcord"),
            ]
        );
    }

    #[test]
    fn test_humanoid_queries() {
        let template = scenario().run().unwrap().unwrap();

        let head = template.bodypart("head").unwrap();
        let children: Vec<&str> = template.children(head.id).map(|p| p.key()).collect();
        assert_eq!(children, vec!["leye", "reye", "lear", "rear", "mouth"]);

        let lear = template.bodypart("lear").unwrap();
        assert!(lear.can_be_severed());
        assert!(!template.bodypart("abdomen").unwrap().can_be_severed());
        assert_eq!(template.limb_of(lear.id).unwrap().name(), "Head");

        let uspinal = template.organ("uspinalcord").unwrap();
        assert_eq!(template.primary_location(uspinal.id).unwrap().key(), "neck");
        assert_eq!(template.shape("humanoid").unwrap().tuples.len(), 4);
    }

    #[test]
    fn test_missing_spinal_organ() {
        let mut config = BuildConfig::default();
        config.spinal_organs.lower = "sacralcord".into();

        Scenario::new("no sacral cord")
            .fixture("humanoid.json")
            .config(config)
            .fails_with(ErrorKind::UnresolvedReference)
            .run()
            .unwrap();
    }

    #[test]
    fn test_custom_spinal_table() {
        let mut config = BuildConfig::default();
        config.spinal_organs.lower = "mspinalcord".into();

        let template = Scenario::new("custom spine")
            .fixture("humanoid.json")
            .config(config)
            .run()
            .unwrap()
            .unwrap();

        assert_eq!(template.limb("Left Leg").unwrap().spinal_organ_key, "mspinalcord");
    }
}

mod avian {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_crow_compiles_with_wings_and_tail() {
        let template = Scenario::new("crow").fixture("avian.json").run().unwrap().unwrap();

        assert!(template.metadata().locomotion.flies);
        assert_eq!(template.bodyparts_of_type("wing").count(), 2);
        assert_eq!(template.limb("Tail").unwrap().spinal_organ_key, "lspinalcord");
        assert_eq!(template.limb("Left Wing").unwrap().spinal_organ_key, "mspinalcord");
    }

    #[test]
    fn test_crow_fails_humanoid_shape() {
        Scenario::new("crow as humanoid")
            .fixture("avian.json")
            .shape(ShapeDef::new("hands", "").tuple(ShapeTuple::exact("hand", 2, 2)))
            .fails_with(ErrorKind::ShapeCardinality)
            .run()
            .unwrap();
    }

    #[test]
    fn test_skip_shapes() {
        Scenario::new("crow unchecked")
            .fixture("avian.json")
            .shape(ShapeDef::new("hands", "").tuple(ShapeTuple::exact("hand", 2, 2)))
            .config(BuildConfig {
                validate_shapes: false,
                ..BuildConfig::default()
            })
            .run()
            .unwrap();
    }

    #[test]
    fn test_unknown_limb_type() {
        Scenario::new("tail typo")
            .fixture("avian.json")
            .edit(r#""limb_type": "tail""#, r#""limb_type": "Leg Leg""#)
            .fails_with(ErrorKind::UnclassifiedLimbType)
            .run()
            .unwrap();
    }

    #[test]
    fn test_duplicate_coverage() {
        Scenario::new("duplicate coverage")
            .fixture("avian.json")
            .edit(
                r#"{ "organ": "lspinalcord", "bodypart": "tail", "percentage": 2 }"#,
                r#"{ "organ": "heart", "bodypart": "body", "percentage": 2 }"#,
            )
            .fails_with(ErrorKind::DuplicateCoverage)
            .run()
            .unwrap();
    }

    #[test]
    fn test_percentage_out_of_range() {
        Scenario::new("over 100")
            .fixture("avian.json")
            .edit(r#""percentage": 30"#, r#""percentage": 130"#)
            .fails_with(ErrorKind::Range)
            .run()
            .unwrap();
    }

    #[test]
    fn test_root_outside_limb() {
        Scenario::new("tail rooted in torso")
            .fixture("avian.json")
            .edit(
                r#"{ "name": "Tail", "limb_type": "tail", "root": "tail" }"#,
                r#"{ "name": "Tail", "limb_type": "tail", "root": "body" }"#,
            )
            .fails_with(ErrorKind::RootOutsideLimb)
            .run()
            .unwrap();
    }
}

mod persistence {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_persist_humanoid() {
        // GIVEN the compiled humanoid
        let template = Compiler::new()
            .compile_file(fixture_path("humanoid.json"))
            .unwrap();
        let mut sink = MemorySink::new();

        // WHEN persisted
        persist(&mut sink, &template).unwrap();

        // THEN nodes for parts, organs and limbs; parent and coverage edges
        let count = |kind: RecordKind| sink.nodes().iter().filter(|n| n.kind == kind).count();
        assert_eq!(
            (
                count(RecordKind::Bodypart),
                count(RecordKind::Organ),
                count(RecordKind::Limb)
            ),
            (24, 9, 7)
        );
        let parents = sink.edges().iter().filter(|e| e.kind == RecordKind::Parent).count();
        let coverage = sink.edges().iter().filter(|e| e.kind == RecordKind::Coverage).count();
        assert_eq!((parents, coverage), (23, 12));
    }

    #[test]
    fn test_edges_need_nodes_first() {
        let template = Compiler::new()
            .compile_file(fixture_path("avian.json"))
            .unwrap();
        let mut sink = MemorySink::new();

        let result = sink.write_edges(&template);

        assert_eq!(result.unwrap_err().kind(), ErrorKind::Persistence);
        assert!(sink.nodes().is_empty());
    }

    #[test]
    fn test_two_species_share_a_sink() {
        let compiler = Compiler::new();
        let human = compiler.compile_file(fixture_path("humanoid.json")).unwrap();
        let crow = compiler.compile_file(fixture_path("avian.json")).unwrap();
        let mut sink = MemorySink::new();

        persist(&mut sink, &human).unwrap();
        persist(&mut sink, &crow).unwrap();

        assert!(sink.is_persisted("Human"));
        assert!(sink.is_persisted("Crow"));
        assert_ne!(
            sink.node_id("Human", RecordKind::Organ, "brain"),
            sink.node_id("Crow", RecordKind::Organ, "brain")
        );
        assert!(persist(&mut sink, &crow).is_err());
    }
}

mod concurrency {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sessions_compile_in_parallel() {
        let handles: Vec<_> = ["humanoid.json", "avian.json", "humanoid.json", "avian.json"]
            .into_iter()
            .map(|fixture| {
                thread::spawn(move || {
                    Compiler::new()
                        .compile_file(fixture_path(fixture))
                        .map(|t| t.name().to_string())
                })
            })
            .collect();

        let names: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert_eq!(names, vec!["Human", "Crow", "Human", "Crow"]);
    }

    #[test]
    fn test_shared_catalogue_across_threads() {
        let mut compiler = Compiler::new();
        compiler
            .add_shape(ShapeDef::new("headed", "").tuple(ShapeTuple::exact("head", 1, 1)))
            .unwrap();

        thread::scope(|scope| {
            let a = scope.spawn(|| compiler.compile_file(fixture_path("humanoid.json")));
            let b = scope.spawn(|| compiler.compile_file(fixture_path("avian.json")));
            assert!(a.join().unwrap().is_ok());
            assert!(b.join().unwrap().is_ok());
        });
    }
}
