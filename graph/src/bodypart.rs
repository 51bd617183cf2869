//! Bodypart graph builder and forest validation.

use crate::{GraphError, GraphResult};
use soma_core::{Bodypart, BodypartDef, Handle, KeyKind};
use soma_registry::KeyRegistry;
use tracing::debug;

/// Collects bodyparts whose parent keys are resolved later.
///
/// Parent keys may name bodyparts that have not been added yet; nothing is
/// resolved until [`BodypartGraph::finalize`]. The graph must be the only
/// registrar of bodypart keys in the registry it is used with, so that the
/// n-th bodypart added holds the bodypart handle with index n.
#[derive(Debug, Default)]
pub struct BodypartGraph {
    defs: Vec<BodypartDef>,
}

/// Visit state of a bodypart during forest validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

impl BodypartGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bodypart. Its parent key is stored unresolved.
    pub fn add_bodypart(
        &mut self,
        registry: &mut KeyRegistry,
        mut def: BodypartDef,
    ) -> GraphResult<Handle> {
        let id = registry.register(&def.key, KeyKind::Bodypart)?;
        if def.display_name.is_empty() {
            def.display_name = def.key.clone();
        }
        self.defs.push(def);
        Ok(id)
    }

    /// Number of bodyparts added so far.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Authored definitions in insertion order.
    pub fn defs(&self) -> &[BodypartDef] {
        &self.defs
    }

    /// Resolve every parent key and check that the parent relation is a forest.
    ///
    /// Walks parent links from each bodypart, marking nodes in progress until a
    /// root or an already-validated node is reached. Reaching a node that is
    /// still in progress means the walk has looped.
    pub fn finalize(self, registry: &KeyRegistry) -> GraphResult<BodypartForest> {
        let mut parents = Vec::with_capacity(self.defs.len());
        for def in &self.defs {
            let parent = match &def.parent_key {
                Some(key) => Some(registry.resolve(key, KeyKind::Bodypart)?),
                None => None,
            };
            parents.push(parent);
        }

        let mut marks = vec![Mark::Unvisited; self.defs.len()];
        for start in 0..self.defs.len() {
            let mut trail = Vec::new();
            let mut current = Some(start);

            while let Some(i) = current {
                match marks[i] {
                    Mark::Done => break,
                    Mark::InProgress => {
                        let from = trail.iter().position(|&t| t == i).unwrap_or(0);
                        let path = trail[from..]
                            .iter()
                            .chain(std::iter::once(&i))
                            .map(|&t| self.defs[t].key.clone())
                            .collect();
                        return Err(GraphError::cycle(&self.defs[i].key, path));
                    }
                    Mark::Unvisited => {
                        marks[i] = Mark::InProgress;
                        trail.push(i);
                        current = parents[i].map(|h| h.index());
                    }
                }
            }

            for i in trail {
                marks[i] = Mark::Done;
            }
        }

        let mut children = vec![Vec::new(); self.defs.len()];
        let mut roots = Vec::new();
        let mut parts = Vec::with_capacity(self.defs.len());

        for (i, (def, parent)) in self.defs.into_iter().zip(parents).enumerate() {
            let id = Handle::new(KeyKind::Bodypart, i as u32);
            match parent {
                Some(p) => children[p.index()].push(id),
                None => roots.push(id),
            }
            parts.push(Bodypart {
                id,
                parent,
                display_order: i as u32,
                def,
            });
        }

        debug!(
            bodyparts = parts.len(),
            roots = roots.len(),
            "bodypart graph finalized"
        );

        Ok(BodypartForest {
            parts,
            children,
            roots,
        })
    }
}

/// A validated bodypart forest.
#[derive(Debug, Clone)]
pub struct BodypartForest {
    parts: Vec<Bodypart>,
    children: Vec<Vec<Handle>>,
    roots: Vec<Handle>,
}

impl BodypartForest {
    /// All bodyparts, indexed by handle.
    pub fn parts(&self) -> &[Bodypart] {
        &self.parts
    }

    /// Get a bodypart by handle.
    pub fn get(&self, id: Handle) -> Option<&Bodypart> {
        self.parts.get(id.index()).filter(|p| p.id == id)
    }

    /// Handles of the root bodyparts.
    pub fn roots(&self) -> &[Handle] {
        &self.roots
    }

    /// Handles of a bodypart's direct children.
    pub fn children(&self, id: Handle) -> &[Handle] {
        self.children
            .get(id.index())
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }

    /// Number of parent links between a bodypart and its root.
    pub fn depth(&self, id: Handle) -> usize {
        let mut depth = 0;
        let mut current = self.get(id).and_then(|p| p.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.get(parent).and_then(|p| p.parent);
        }
        depth
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Take ownership of the bodyparts.
    pub fn into_parts(self) -> Vec<Bodypart> {
        self.parts
    }
}
