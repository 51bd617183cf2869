//! Organ coverage graph.

use crate::{GraphError, GraphResult};
use soma_core::{CoverageEdge, Handle, KeyKind, Organ, OrganDef};
use soma_registry::KeyRegistry;
use std::collections::HashSet;
use tracing::debug;

/// Collects organs and the bodypart -> organ edges that expose them.
///
/// Like the bodypart graph, this must be the only registrar of organ keys in
/// its registry.
#[derive(Debug, Default)]
pub struct OrganCoverageGraph {
    organs: Vec<OrganDef>,
    edges: Vec<CoverageEdge>,
    /// (organ, bodypart) pairs already covered.
    covered: HashSet<(Handle, Handle)>,
}

impl OrganCoverageGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an organ.
    pub fn add_organ(&mut self, registry: &mut KeyRegistry, mut def: OrganDef) -> GraphResult<Handle> {
        let id = registry.register(&def.key, KeyKind::Organ)?;
        if def.display_name.is_empty() {
            def.display_name = def.key.clone();
        }
        self.organs.push(def);
        Ok(id)
    }

    /// Record that a bodypart exposes an organ.
    ///
    /// Both keys must already be registered. Percentages are independent per
    /// edge; they are not expected to sum to 100 for an organ or a bodypart.
    pub fn add_coverage(
        &mut self,
        registry: &KeyRegistry,
        organ_key: &str,
        bodypart_key: &str,
        percentage: f64,
        is_primary: bool,
    ) -> GraphResult<()> {
        let organ = registry.resolve(organ_key, KeyKind::Organ)?;
        let bodypart = registry.resolve(bodypart_key, KeyKind::Bodypart)?;

        if !(0.0..=100.0).contains(&percentage) {
            return Err(GraphError::range(organ_key, bodypart_key, percentage));
        }

        if !self.covered.insert((organ, bodypart)) {
            return Err(GraphError::DuplicateCoverage {
                organ: organ_key.to_string(),
                bodypart: bodypart_key.to_string(),
            });
        }

        self.edges.push(CoverageEdge {
            bodypart,
            organ,
            bodypart_key: bodypart_key.to_string(),
            organ_key: organ_key.to_string(),
            percentage,
            is_primary,
        });
        Ok(())
    }

    /// Number of organs added so far.
    pub fn organ_count(&self) -> usize {
        self.organs.len()
    }

    /// Number of coverage edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check that every organ has exactly one primary coverage edge.
    pub fn finalize(self) -> GraphResult<OrganCoverage> {
        let mut by_organ: Vec<Vec<usize>> = vec![Vec::new(); self.organs.len()];
        for (i, edge) in self.edges.iter().enumerate() {
            by_organ[edge.organ.index()].push(i);
        }

        for (def, edges) in self.organs.iter().zip(&by_organ) {
            let primaries: Vec<String> = edges
                .iter()
                .map(|&i| &self.edges[i])
                .filter(|e| e.is_primary)
                .map(|e| e.bodypart_key.clone())
                .collect();

            match primaries.len() {
                0 => {
                    return Err(GraphError::MissingPrimaryCoverage {
                        organ: def.key.clone(),
                        edges: edges.len(),
                    })
                }
                1 => {}
                _ => {
                    return Err(GraphError::MultiplePrimaryCoverage {
                        organ: def.key.clone(),
                        bodyparts: primaries,
                    })
                }
            }
        }

        let organs = self
            .organs
            .into_iter()
            .enumerate()
            .map(|(i, def)| Organ {
                id: Handle::new(KeyKind::Organ, i as u32),
                def,
            })
            .collect::<Vec<_>>();

        debug!(
            organs = organs.len(),
            edges = self.edges.len(),
            "organ coverage finalized"
        );

        Ok(OrganCoverage {
            organs,
            edges: self.edges,
            by_organ,
        })
    }
}

/// Validated organs and coverage edges.
#[derive(Debug, Clone)]
pub struct OrganCoverage {
    organs: Vec<Organ>,
    edges: Vec<CoverageEdge>,
    by_organ: Vec<Vec<usize>>,
}

impl OrganCoverage {
    /// All organs, indexed by handle.
    pub fn organs(&self) -> &[Organ] {
        &self.organs
    }

    /// All coverage edges in insertion order.
    pub fn edges(&self) -> &[CoverageEdge] {
        &self.edges
    }

    /// Coverage edges of one organ.
    pub fn edges_of(&self, organ: Handle) -> impl Iterator<Item = &CoverageEdge> {
        self.by_organ
            .get(organ.index())
            .into_iter()
            .flat_map(|list| list.iter())
            .map(|&i| &self.edges[i])
    }

    /// The primary coverage edge of an organ.
    pub fn primary_edge(&self, organ: Handle) -> Option<&CoverageEdge> {
        self.edges_of(organ).find(|e| e.is_primary)
    }

    /// Take ownership of organs and edges.
    pub fn into_parts(self) -> (Vec<Organ>, Vec<CoverageEdge>) {
        (self.organs, self.edges)
    }
}
