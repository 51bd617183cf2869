//! Soma Session
//!
//! The build session owns every stage of one species build: the key
//! registry, the bodypart and coverage graphs, the limb partitioner and the
//! shape catalogue. `assemble` runs the stages in order and yields an
//! immutable `SpeciesTemplate`; `persist` hands a finished template to a
//! `TemplateSink` in two phases.

mod config;
mod error;
mod session;
mod sink;

pub use config::BuildConfig;
pub use error::{BuildError, BuildResult};
pub use session::BuildSession;
pub use sink::{persist, EdgeRecord, MemorySink, NodeRecord, RecordKind, SinkError, SinkResult, TemplateSink};
