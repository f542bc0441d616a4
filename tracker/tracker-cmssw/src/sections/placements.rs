use tracker_types::{Algorithm, Bundle, Placement};

use crate::document::DocNode;
use crate::error::{BuildResult, Section};
use crate::format::{with_unit, LENGTH_DIGITS};
use crate::validation;

use super::open_section;

/// Append the placement section: explicit placements first, then algorithms.
pub(crate) fn write_placements(root: &mut DocNode, bundle: &Bundle, label: &str) -> BuildResult<()> {
    validation::check_algorithms(bundle)?;

    let section = open_section(root, Section::Placements, label);
    for placement in &bundle.placements {
        write_pos_part(section, placement);
    }
    for algorithm in &bundle.algorithms {
        write_algorithm(section, algorithm);
    }
    Ok(())
}

fn write_pos_part(section: &mut DocNode, placement: &Placement) {
    let node = section.child("PosPart");
    node.attr("copyNumber", placement.copy.to_string());
    node.named_child("rParent", &placement.parent_tag);
    node.named_child("rChild", &placement.child_tag);
    if let Some(rotation) = placement.rotation_ref() {
        node.named_child("rRotation", rotation);
    }
    if placement.is_translated() {
        let t = placement.translation;
        node.child("Translation")
            .attr("x", with_unit(t.x, LENGTH_DIGITS, "mm"))
            .attr("y", with_unit(t.y, LENGTH_DIGITS, "mm"))
            .attr("z", with_unit(t.z, LENGTH_DIGITS, "mm"));
    }
}

fn write_algorithm(section: &mut DocNode, algorithm: &Algorithm) {
    let node = section.named_child("Algorithm", &algorithm.name);
    node.named_child("rParent", &algorithm.parent);
    for (name, parameter) in &algorithm.parameters {
        node.named_child(parameter.kind.node_name(), name)
            .attr("value", &parameter.value);
    }
    if let Some(vector) = &algorithm.vector {
        node.named_child("Vector", &vector.name)
            .attr("type", &vector.value_type)
            .attr("nEntries", vector.n_entries.to_string())
            .set_text(vector.values.join(","));
    }
}
