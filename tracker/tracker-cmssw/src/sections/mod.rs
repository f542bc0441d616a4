//! Section builders.
//!
//! Each builder appends one section to a document root. Builders that read
//! bundle data check their slice of it first and return a [`BuildError`]
//! before appending anything.
//!
//! [`BuildError`]: crate::error::BuildError

mod logical;
mod materials;
mod placements;
mod prodcuts;
mod recomat;
mod rotations;
mod sensitive;
mod solids;
mod topology;

pub(crate) use logical::write_logical_parts;
pub(crate) use materials::write_materials;
pub(crate) use placements::write_placements;
pub(crate) use prodcuts::write_production_cuts;
pub(crate) use recomat::write_reco_material;
pub(crate) use rotations::write_rotations;
pub use rotations::fixed_rotations;
pub(crate) use sensitive::write_sensitive_regions;
pub(crate) use solids::write_solids;
pub(crate) use topology::{write_topology, ModuleSelectors};

use crate::document::DocNode;
use crate::error::Section;

/// Append an empty section carrying `label`.
pub(crate) fn open_section<'a>(root: &'a mut DocNode, section: Section, label: &str) -> &'a mut DocNode {
    let node = root.child(section.node_name());
    node.attr("label", label);
    node
}

/// Append the outer-tracker constants section.
pub(crate) fn write_constants(root: &mut DocNode, label: &str) {
    let section = open_section(root, Section::Constants, label);
    section.attr("eval", "true");
    section
        .named_child("Constant", "BackPlaneDz")
        .attr("value", "0.015*mm");
}

/// Append a `SpecPar` named `name`.
pub(crate) fn spec_par<'a>(section: &'a mut DocNode, name: &str) -> &'a mut DocNode {
    section.named_child("SpecPar", name)
}

/// Append a `PartSelector` for `path`.
pub(crate) fn part_selector(spec: &mut DocNode, path: &str) {
    spec.child("PartSelector").attr("path", path);
}

/// Append a `Parameter` and return it so callers can add `eval`.
pub(crate) fn parameter<'a>(spec: &'a mut DocNode, name: &str, value: &str) -> &'a mut DocNode {
    spec.named_child("Parameter", name).attr("value", value)
}
