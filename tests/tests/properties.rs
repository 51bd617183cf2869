//! Property tests over randomly generated anatomies.

use proptest::prelude::*;
use soma_constraint::ShapeValidator;
use soma_core::{BodypartDef, ErrorKind, KeyKind, OrganDef, OrganKind, ShapeDef, ShapeTuple};
use soma_graph::{BodypartGraph, OrganCoverageGraph};
use soma_registry::KeyRegistry;
use soma_tests::prelude::*;

/// Parent indexes where each parent precedes its child.
fn forest_parents(max: usize) -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(prop::option::of(any::<prop::sample::Index>()), 1..max).prop_map(
        |picks| {
            picks
                .iter()
                .enumerate()
                .map(|(i, pick)| match pick {
                    Some(idx) if i > 0 => Some(idx.index(i)),
                    _ => None,
                })
                .collect()
        },
    )
}

fn finalize(parents: &[Option<usize>]) -> Result<usize, ErrorKind> {
    let mut registry = KeyRegistry::new();
    let mut graph = BodypartGraph::new();
    for (i, parent) in parents.iter().enumerate() {
        let mut def = BodypartDef::new(format!("p{}", i), "Body");
        if let Some(p) = parent {
            def = def.parent(format!("p{}", p));
        }
        graph.add_bodypart(&mut registry, def).map_err(|e| e.kind())?;
    }
    graph
        .finalize(&registry)
        .map(|forest| forest.len())
        .map_err(|e| e.kind())
}

fn root_of(parents: &[Option<usize>], mut i: usize) -> usize {
    while let Some(p) = parents[i] {
        i = p;
    }
    i
}

proptest! {
    #[test]
    fn prop_forest_always_finalizes(parents in forest_parents(60)) {
        prop_assert_eq!(finalize(&parents), Ok(parents.len()));
    }

    #[test]
    fn prop_back_edge_is_a_cycle(
        parents in forest_parents(60),
        pick in any::<prop::sample::Index>(),
    ) {
        // Point the root of some node's chain back at that node.
        let mut parents = parents;
        let node = pick.index(parents.len());
        let root = root_of(&parents, node);
        parents[root] = Some(node);

        prop_assert_eq!(finalize(&parents), Err(ErrorKind::Cycle));
    }

    #[test]
    fn prop_single_primary_per_organ(
        primaries in prop::collection::vec(0usize..4, 1..10),
    ) {
        // Organ i is covered by min(primaries[i], 3) primary edges plus one secondary.
        let parts = ["head", "chest", "abdomen", "back"];
        let mut registry = KeyRegistry::new();
        for key in parts {
            registry.register(key, KeyKind::Bodypart).unwrap();
        }
        let mut graph = OrganCoverageGraph::new();
        for (i, &count) in primaries.iter().enumerate() {
            let organ = format!("o{}", i);
            graph.add_organ(&mut registry, OrganDef::new(&organ, OrganKind::Kidney)).unwrap();
            let count = count.min(3);
            for part in &parts[..count] {
                graph.add_coverage(&registry, &organ, part, 10.0, true).unwrap();
            }
            graph.add_coverage(&registry, &organ, "back", 1.0, false).unwrap();
        }

        let expected = match primaries.iter().map(|&c| c.min(3)).find(|&c| c != 1) {
            None => None,
            Some(0) => Some(ErrorKind::MissingPrimaryCoverage),
            Some(_) => Some(ErrorKind::MultiplePrimaryCoverage),
        };
        let result = graph.finalize().err().map(|e| e.kind());
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_registry_round_trip(
        keys in prop::collection::hash_set("[a-z]{1,8}", 1..30),
        probe in "[A-Z]{1,8}",
    ) {
        let mut registry = KeyRegistry::new();
        let handles: Vec<_> = keys
            .iter()
            .map(|k| (k.clone(), registry.register(k, KeyKind::Organ).unwrap()))
            .collect();

        for (key, handle) in &handles {
            prop_assert_eq!(registry.resolve(key, KeyKind::Organ), Ok(*handle));
            prop_assert_eq!(registry.key_of(*handle), Some(key.as_str()));
        }
        // Upper-case probes never collide with the lower-case keys.
        prop_assert_eq!(
            registry.resolve(&probe, KeyKind::Organ).unwrap_err().kind(),
            ErrorKind::UnresolvedReference
        );
    }
}

#[test]
fn test_validate_is_idempotent_on_fixture() {
    let template = Scenario::new("crow")
        .fixture("avian.json")
        .run()
        .unwrap()
        .unwrap();
    let mut validator = ShapeValidator::new();
    validator
        .add_shape(ShapeDef::new("four wings", "").tuple(ShapeTuple::exact("wing", 4, 4)))
        .unwrap();

    let first = validator.validate(&template, "four wings");
    let second = validator.validate(&template, "four wings");

    assert!(first.is_err());
    assert_eq!(first, second);
}
