//! Output formatting for compiled templates.

use soma_core::SpeciesTemplate;
use std::fmt::Write;

/// One header line per species, then one line per limb.
pub fn summary(template: &SpeciesTemplate) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} bodyparts, {} organs, {} limbs, {} shapes",
        template.name(),
        template.bodyparts().len(),
        template.organs().len(),
        template.limbs().len(),
        template.shapes().len()
    );
    for limb in template.limbs() {
        let _ = writeln!(
            out,
            "  {} ({}, {} parts, spinal {})",
            limb.name(),
            limb.limb_type(),
            limb.members.len(),
            limb.spinal_organ_key
        );
    }
    out
}
