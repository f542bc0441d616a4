use tracker_types::Bundle;

use crate::document::DocNode;
use crate::error::{BuildResult, Section};
use crate::format::{format_exact, with_unit, ELEMENT_DIGITS, LENGTH_DIGITS};
use crate::validation;

use super::open_section;

/// Append the material section: every element, then every composite.
pub(crate) fn write_materials(
    root: &mut DocNode,
    bundle: &Bundle,
    namespace: &str,
    label: &str,
) -> BuildResult<()> {
    validation::check_materials(bundle, namespace)?;

    let section = open_section(root, Section::Materials, label);
    for element in &bundle.elements {
        section
            .named_child("ElementaryMaterial", &element.tag)
            .attr("symbol", &element.tag)
            .attr("atomicNumber", element.atomic_number.to_string())
            .attr(
                "atomicWeight",
                with_unit(element.atomic_weight, ELEMENT_DIGITS, "g/mole"),
            )
            .attr("density", with_unit(element.density, ELEMENT_DIGITS, "g/cm3"));
    }

    for composite in &bundle.composites {
        let node = section
            .named_child("CompositeMaterial", &composite.name)
            .attr("density", with_unit(composite.density, LENGTH_DIGITS, "g/cm3"))
            .attr("method", composite.method.ddl_literal());
        for fraction in &composite.fractions {
            node.child("MaterialFraction")
                .attr("fraction", format_exact(fraction.fraction))
                .named_child("rMaterial", qualify(namespace, &fraction.element));
        }
    }
    Ok(())
}

fn qualify(namespace: &str, tag: &str) -> String {
    if !namespace.is_empty() && tag.starts_with(namespace) {
        tag.to_string()
    } else {
        format!("{namespace}{tag}")
    }
}
