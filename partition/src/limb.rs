//! Limb partitioner.

use crate::{spinal_segment, PartitionError, PartitionResult, SpinalTable};
use soma_core::{Handle, KeyKind, Limb, LimbDef};
use soma_graph::BodypartForest;
use soma_registry::KeyRegistry;
use std::collections::HashMap;
use tracing::debug;

/// Groups bodyparts into limbs.
///
/// Membership normally follows each bodypart's own `limb_name`; an explicit
/// [`LimbPartitioner::assign_bodypart`] overrides it. Both are resolved at
/// finalize time, against the finished bodypart forest.
#[derive(Debug, Default)]
pub struct LimbPartitioner {
    /// Limb definitions with their resolved root, indexed by limb handle.
    limbs: Vec<(Handle, LimbDef)>,
    /// Explicit (limb name, bodypart key) assignments.
    assignments: Vec<(String, String)>,
    spinal: SpinalTable,
}

impl LimbPartitioner {
    /// Create a partitioner using the default spinal organ keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a partitioner with custom spinal organ keys.
    pub fn with_spinal_table(spinal: SpinalTable) -> Self {
        Self {
            spinal,
            ..Self::default()
        }
    }

    /// Add a limb. Its root bodypart must already be registered.
    pub fn add_limb(&mut self, registry: &mut KeyRegistry, def: LimbDef) -> PartitionResult<Handle> {
        let root = registry.resolve(&def.root_key, KeyKind::Bodypart)?;
        let id = registry.register(&def.name, KeyKind::Limb)?;
        self.limbs.push((root, def));
        Ok(id)
    }

    /// Place a bodypart in a limb regardless of its own `limb_name`.
    pub fn assign_bodypart(&mut self, limb_name: impl Into<String>, bodypart_key: impl Into<String>) {
        self.assignments.push((limb_name.into(), bodypart_key.into()));
    }

    /// Number of limbs added so far.
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Partition every bodypart of the forest and derive spinal organs.
    pub fn finalize(self, registry: &KeyRegistry, forest: &BodypartForest) -> PartitionResult<Vec<Limb>> {
        let mut explicit: HashMap<Handle, Handle> = HashMap::new();
        for (limb_name, bodypart_key) in &self.assignments {
            let bodypart = registry.resolve(bodypart_key, KeyKind::Bodypart)?;
            let limb = registry.resolve(limb_name, KeyKind::Limb)?;
            if let Some(&first) = explicit.get(&bodypart) {
                if first != limb {
                    return Err(PartitionError::AmbiguousAssignment {
                        bodypart: bodypart_key.clone(),
                        first: self.limbs[first.index()].1.name.clone(),
                        second: limb_name.clone(),
                    });
                }
            }
            explicit.insert(bodypart, limb);
        }

        let mut members: Vec<Vec<Handle>> = vec![Vec::new(); self.limbs.len()];
        let mut limb_of: Vec<Handle> = Vec::with_capacity(forest.len());
        for part in forest.parts() {
            let limb = match explicit.get(&part.id) {
                Some(&limb) => limb,
                None => registry
                    .resolve(part.limb_name(), KeyKind::Limb)
                    .map_err(|_| PartitionError::unpartitioned(part.key(), part.limb_name()))?,
            };
            members[limb.index()].push(part.id);
            limb_of.push(limb);
        }

        let mut limbs = Vec::with_capacity(self.limbs.len());
        for (i, ((root, def), members)) in self.limbs.into_iter().zip(members).enumerate() {
            let id = Handle::new(KeyKind::Limb, i as u32);

            let root_limb = limb_of[root.index()];
            if root_limb != id {
                return Err(PartitionError::RootOutsideLimb {
                    limb: def.name,
                    root: def.root_key,
                    root_limb: registry.key_of(root_limb).unwrap_or_default().to_string(),
                });
            }

            let segment = spinal_segment(def.limb_type);
            let spinal_organ_key = self.spinal.organ_key(segment).to_string();
            let spinal_organ = registry.resolve(&spinal_organ_key, KeyKind::Organ)?;

            debug!(
                limb = %def.name,
                members = members.len(),
                spinal = %spinal_organ_key,
                "limb partitioned"
            );

            limbs.push(Limb {
                id,
                root,
                def,
                spinal_segment: segment,
                spinal_organ,
                spinal_organ_key,
                members,
            });
        }

        Ok(limbs)
    }
}
