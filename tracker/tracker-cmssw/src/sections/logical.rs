use tracker_types::Bundle;

use crate::document::DocNode;
use crate::error::{BuildResult, Section};
use crate::validation;

use super::open_section;

/// Append the logical-part section.
pub(crate) fn write_logical_parts(
    root: &mut DocNode,
    bundle: &Bundle,
    namespace: &str,
    label: &str,
) -> BuildResult<()> {
    validation::check_logical_parts(bundle, namespace)?;

    let section = open_section(root, Section::LogicalParts, label);
    for part in &bundle.logical_parts {
        let node = section
            .named_child("LogicalPart", &part.name_tag)
            .attr("category", "unspecified");
        node.named_child("rSolid", &part.shape_tag);
        node.named_child("rMaterial", &part.material_tag);
    }
    Ok(())
}
