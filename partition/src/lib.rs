//! Soma Partition
//!
//! Limb partitioning. Every bodypart joins exactly one named limb, each limb
//! is rooted at one of its own bodyparts, and each limb is given the spinal
//! cord segment its nerves run through.

mod error;
mod limb;
mod spine;

pub use error::{PartitionError, PartitionResult};
pub use limb::LimbPartitioner;
pub use spine::{parse_limb_type, spinal_segment, SpinalTable};
