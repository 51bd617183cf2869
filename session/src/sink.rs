//! Persistence of finished templates.

use soma_core::{ErrorKind, KeyKind, SpeciesTemplate};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised by a template sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// Edges were written before the nodes they connect.
    #[error("Edges for species '{species}' written before its nodes")]
    EdgesBeforeNodes { species: String },

    /// An edge refers to a key with no written node.
    #[error("Species '{species}' has an edge to unknown {kind} '{key}'")]
    UnknownKey {
        species: String,
        kind: KeyKind,
        key: String,
    },

    /// The species was already committed.
    #[error("Species '{species}' is already persisted")]
    AlreadyPersisted { species: String },

    /// Commit was called with nothing staged.
    #[error("Nothing staged to commit")]
    NothingStaged,

    /// A backend-specific failure.
    #[error("Sink failure: {message}")]
    Backend { message: String },
}

impl SinkError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Persistence
    }
}

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Destination for finished templates.
///
/// A template is written in two phases, all nodes and then all edges,
/// followed by `commit`. Nothing written may become visible before
/// `commit`; `rollback` discards whatever was staged.
pub trait TemplateSink {
    /// Stage bodypart, organ and limb nodes and assign them durable ids.
    fn write_nodes(&mut self, template: &SpeciesTemplate) -> SinkResult<()>;

    /// Stage parent and coverage edges between already staged nodes.
    fn write_edges(&mut self, template: &SpeciesTemplate) -> SinkResult<()>;

    /// Make staged writes visible.
    fn commit(&mut self) -> SinkResult<()>;

    /// Discard staged writes.
    fn rollback(&mut self);
}

/// Write a template to a sink, rolling back on any failure.
pub fn persist<S: TemplateSink + ?Sized>(sink: &mut S, template: &SpeciesTemplate) -> SinkResult<()> {
    let result = sink
        .write_nodes(template)
        .and_then(|()| sink.write_edges(template))
        .and_then(|()| sink.commit());

    match &result {
        Ok(()) => info!(species = %template.name(), "template persisted"),
        Err(e) => {
            warn!(species = %template.name(), error = %e, "persist failed, rolling back");
            sink.rollback();
        }
    }
    result
}

/// What a stored node or edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Bodypart,
    Organ,
    Limb,
    /// Child bodypart -> parent bodypart.
    Parent,
    /// Bodypart -> organ it exposes.
    Coverage,
}

/// A node with its durable id.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: u64,
    pub species: String,
    pub kind: RecordKind,
    pub key: String,
}

/// An edge between two durable ids.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub kind: RecordKind,
    pub from: u64,
    pub to: u64,
    /// Coverage percentage; `None` for parent edges.
    pub percentage: Option<f64>,
    pub is_primary: bool,
}

#[derive(Debug)]
struct Staging {
    species: String,
    nodes: Vec<NodeRecord>,
    ids: HashMap<(KeyKind, String), u64>,
    edges: Vec<EdgeRecord>,
}

/// In-memory sink that keeps committed records.
#[derive(Debug, Default)]
pub struct MemorySink {
    next_id: u64,
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
    persisted: HashSet<String>,
    staged: Option<Staging>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed nodes.
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    /// Committed edges.
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Check whether a species has been committed.
    pub fn is_persisted(&self, species: &str) -> bool {
        self.persisted.contains(species)
    }

    /// Check whether uncommitted writes are pending.
    pub fn has_staged(&self) -> bool {
        self.staged.is_some()
    }

    /// Durable id of a committed node.
    pub fn node_id(&self, species: &str, kind: RecordKind, key: &str) -> Option<u64> {
        self.nodes
            .iter()
            .find(|n| n.species == species && n.kind == kind && n.key == key)
            .map(|n| n.id)
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl TemplateSink for MemorySink {
    fn write_nodes(&mut self, template: &SpeciesTemplate) -> SinkResult<()> {
        let species = template.name().to_string();
        if self.persisted.contains(&species) {
            return Err(SinkError::AlreadyPersisted { species });
        }

        let keys = template
            .bodyparts()
            .iter()
            .map(|p| (KeyKind::Bodypart, RecordKind::Bodypart, p.key()))
            .chain(
                template
                    .organs()
                    .iter()
                    .map(|o| (KeyKind::Organ, RecordKind::Organ, o.key())),
            )
            .chain(
                template
                    .limbs()
                    .iter()
                    .map(|l| (KeyKind::Limb, RecordKind::Limb, l.name())),
            );

        let mut nodes = Vec::new();
        let mut ids = HashMap::new();
        for (key_kind, kind, key) in keys {
            let id = self.allocate();
            ids.insert((key_kind, key.to_string()), id);
            nodes.push(NodeRecord {
                id,
                species: species.clone(),
                kind,
                key: key.to_string(),
            });
        }

        self.staged = Some(Staging {
            species,
            nodes,
            ids,
            edges: Vec::new(),
        });
        Ok(())
    }

    fn write_edges(&mut self, template: &SpeciesTemplate) -> SinkResult<()> {
        let species = template.name();
        let staging = match self.staged.as_mut() {
            Some(s) if s.species == species => s,
            _ => {
                return Err(SinkError::EdgesBeforeNodes {
                    species: species.to_string(),
                })
            }
        };

        let lookup = |kind: KeyKind, key: &str| {
            staging
                .ids
                .get(&(kind, key.to_string()))
                .copied()
                .ok_or_else(|| SinkError::UnknownKey {
                    species: species.to_string(),
                    kind,
                    key: key.to_string(),
                })
        };

        let mut edges = Vec::new();
        for part in template.bodyparts() {
            if let Some(parent) = part.parent.and_then(|h| template.get_bodypart(h)) {
                edges.push(EdgeRecord {
                    kind: RecordKind::Parent,
                    from: lookup(KeyKind::Bodypart, part.key())?,
                    to: lookup(KeyKind::Bodypart, parent.key())?,
                    percentage: None,
                    is_primary: false,
                });
            }
        }
        for edge in template.coverage() {
            edges.push(EdgeRecord {
                kind: RecordKind::Coverage,
                from: lookup(KeyKind::Bodypart, &edge.bodypart_key)?,
                to: lookup(KeyKind::Organ, &edge.organ_key)?,
                percentage: Some(edge.percentage),
                is_primary: edge.is_primary,
            });
        }

        staging.edges.extend(edges);
        Ok(())
    }

    fn commit(&mut self) -> SinkResult<()> {
        let staging = self.staged.take().ok_or(SinkError::NothingStaged)?;
        self.nodes.extend(staging.nodes);
        self.edges.extend(staging.edges);
        self.persisted.insert(staging.species);
        Ok(())
    }

    fn rollback(&mut self) {
        self.staged = None;
    }
}
