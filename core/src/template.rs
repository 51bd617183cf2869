//! The immutable species template.

use crate::{
    Bodypart, CoverageEdge, Handle, Limb, Locomotion, Organ, ShapeDef, SizeCategory,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Species-level metadata carried by a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesMetadata {
    pub name: String,
    #[serde(default)]
    pub base_size: SizeCategory,
    #[serde(default)]
    pub locomotion: Locomotion,
}

impl SpeciesMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_size: SizeCategory::default(),
            locomotion: Locomotion::walking(),
        }
    }

    pub fn base_size(mut self, size: SizeCategory) -> Self {
        self.base_size = size;
        self
    }

    pub fn locomotion(mut self, locomotion: Locomotion) -> Self {
        self.locomotion = locomotion;
        self
    }
}

/// The finalized, validated anatomy of one species.
///
/// Node storage is indexed by handle: `bodyparts()[h.index()]` is the
/// bodypart with handle `h`, and likewise for organs and limbs. A template
/// has no mutators; it is produced whole by the template assembler.
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesTemplate {
    metadata: SpeciesMetadata,
    bodyparts: Vec<Bodypart>,
    organs: Vec<Organ>,
    coverage: Vec<CoverageEdge>,
    limbs: Vec<Limb>,
    shapes: Vec<ShapeDef>,

    #[serde(skip)]
    bodypart_keys: HashMap<String, Handle>,
    #[serde(skip)]
    organ_keys: HashMap<String, Handle>,
    #[serde(skip)]
    limb_names: HashMap<String, Handle>,
    #[serde(skip)]
    children: Vec<Vec<Handle>>,
    #[serde(skip)]
    limb_of: Vec<Option<Handle>>,
    #[serde(skip)]
    coverage_by_bodypart: Vec<Vec<usize>>,
    #[serde(skip)]
    coverage_by_organ: Vec<Vec<usize>>,
}

impl SpeciesTemplate {
    /// Assemble a template from finalized stage outputs and build its indexes.
    ///
    /// Callers are expected to pass outputs that already satisfy the forest,
    /// coverage and partition invariants.
    pub fn new(
        metadata: SpeciesMetadata,
        bodyparts: Vec<Bodypart>,
        organs: Vec<Organ>,
        coverage: Vec<CoverageEdge>,
        limbs: Vec<Limb>,
        shapes: Vec<ShapeDef>,
    ) -> Self {
        let bodypart_keys = bodyparts
            .iter()
            .map(|p| (p.def.key.clone(), p.id))
            .collect();
        let organ_keys = organs.iter().map(|o| (o.def.key.clone(), o.id)).collect();
        let limb_names = limbs.iter().map(|l| (l.def.name.clone(), l.id)).collect();

        let mut children = vec![Vec::new(); bodyparts.len()];
        for part in &bodyparts {
            if let Some(parent) = part.parent {
                if let Some(list) = children.get_mut(parent.index()) {
                    list.push(part.id);
                }
            }
        }

        let mut limb_of = vec![None; bodyparts.len()];
        for limb in &limbs {
            for member in &limb.members {
                if let Some(slot) = limb_of.get_mut(member.index()) {
                    *slot = Some(limb.id);
                }
            }
        }

        let mut coverage_by_bodypart = vec![Vec::new(); bodyparts.len()];
        let mut coverage_by_organ = vec![Vec::new(); organs.len()];
        for (i, edge) in coverage.iter().enumerate() {
            if let Some(list) = coverage_by_bodypart.get_mut(edge.bodypart.index()) {
                list.push(i);
            }
            if let Some(list) = coverage_by_organ.get_mut(edge.organ.index()) {
                list.push(i);
            }
        }

        Self {
            metadata,
            bodyparts,
            organs,
            coverage,
            limbs,
            shapes,
            bodypart_keys,
            organ_keys,
            limb_names,
            children,
            limb_of,
            coverage_by_bodypart,
            coverage_by_organ,
        }
    }

    // ==================== Collections ====================

    pub fn metadata(&self) -> &SpeciesMetadata {
        &self.metadata
    }

    /// Species name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn bodyparts(&self) -> &[Bodypart] {
        &self.bodyparts
    }

    pub fn organs(&self) -> &[Organ] {
        &self.organs
    }

    pub fn coverage(&self) -> &[CoverageEdge] {
        &self.coverage
    }

    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    pub fn shapes(&self) -> &[ShapeDef] {
        &self.shapes
    }

    // ==================== Lookups ====================

    /// Get a bodypart by key.
    pub fn bodypart(&self, key: &str) -> Option<&Bodypart> {
        self.bodypart_keys
            .get(key)
            .and_then(|h| self.bodyparts.get(h.index()))
    }

    /// Get a bodypart by handle.
    pub fn get_bodypart(&self, id: Handle) -> Option<&Bodypart> {
        self.bodyparts.get(id.index()).filter(|p| p.id == id)
    }

    /// Get an organ by key.
    pub fn organ(&self, key: &str) -> Option<&Organ> {
        self.organ_keys
            .get(key)
            .and_then(|h| self.organs.get(h.index()))
    }

    /// Get an organ by handle.
    pub fn get_organ(&self, id: Handle) -> Option<&Organ> {
        self.organs.get(id.index()).filter(|o| o.id == id)
    }

    /// Get a limb by name.
    pub fn limb(&self, name: &str) -> Option<&Limb> {
        self.limb_names
            .get(name)
            .and_then(|h| self.limbs.get(h.index()))
    }

    /// Get a limb by handle.
    pub fn get_limb(&self, id: Handle) -> Option<&Limb> {
        self.limbs.get(id.index()).filter(|l| l.id == id)
    }

    /// Get a shape descriptor by name.
    pub fn shape(&self, name: &str) -> Option<&ShapeDef> {
        self.shapes.iter().find(|s| s.name == name)
    }

    // ==================== Tree Queries ====================

    /// Bodyparts without a parent.
    pub fn roots(&self) -> impl Iterator<Item = &Bodypart> {
        self.bodyparts.iter().filter(|p| p.is_root())
    }

    /// Direct children of a bodypart, in display order.
    pub fn children(&self, id: Handle) -> impl Iterator<Item = &Bodypart> + '_ {
        self.children
            .get(id.index())
            .into_iter()
            .flat_map(|list| list.iter())
            .filter_map(|h| self.bodyparts.get(h.index()))
    }

    /// The chain from a bodypart up to its root, starting with the bodypart.
    pub fn path_to_root(&self, id: Handle) -> Vec<&Bodypart> {
        let mut path = Vec::new();
        let mut current = self.get_bodypart(id);
        while let Some(part) = current {
            path.push(part);
            // Bounded by the part count so a malformed template cannot spin.
            if path.len() > self.bodyparts.len() {
                break;
            }
            current = part.parent.and_then(|p| self.get_bodypart(p));
        }
        path
    }

    /// Bodyparts whose generic type equals `generic_type`, ignoring case.
    pub fn bodyparts_of_type<'a>(
        &'a self,
        generic_type: &'a str,
    ) -> impl Iterator<Item = &'a Bodypart> + 'a {
        self.bodyparts
            .iter()
            .filter(move |p| p.generic_type().eq_ignore_ascii_case(generic_type))
    }

    // ==================== Limb Queries ====================

    /// The limb a bodypart belongs to.
    pub fn limb_of(&self, id: Handle) -> Option<&Limb> {
        self.limb_of
            .get(id.index())
            .copied()
            .flatten()
            .and_then(|l| self.limbs.get(l.index()))
    }

    /// Member bodyparts of a limb, in display order.
    pub fn limb_members(&self, id: Handle) -> impl Iterator<Item = &Bodypart> + '_ {
        self.get_limb(id)
            .into_iter()
            .flat_map(|l| l.members.iter())
            .filter_map(|h| self.bodyparts.get(h.index()))
    }

    // ==================== Coverage Queries ====================

    /// Organs put at risk by a strike on a bodypart, with their edges.
    pub fn exposed_organs(&self, id: Handle) -> impl Iterator<Item = (&Organ, &CoverageEdge)> + '_ {
        self.coverage_by_bodypart
            .get(id.index())
            .into_iter()
            .flat_map(|list| list.iter())
            .filter_map(|&i| {
                let edge = self.coverage.get(i)?;
                let organ = self.organs.get(edge.organ.index())?;
                Some((organ, edge))
            })
    }

    /// Coverage edges of an organ.
    pub fn coverage_of(&self, organ: Handle) -> impl Iterator<Item = &CoverageEdge> + '_ {
        self.coverage_by_organ
            .get(organ.index())
            .into_iter()
            .flat_map(|list| list.iter())
            .filter_map(|&i| self.coverage.get(i))
    }

    /// The bodypart holding an organ's primary coverage edge.
    pub fn primary_location(&self, organ: Handle) -> Option<&Bodypart> {
        self.coverage_of(organ)
            .find(|e| e.is_primary)
            .and_then(|e| self.bodyparts.get(e.bodypart.index()))
    }
}
