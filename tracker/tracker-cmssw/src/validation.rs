//! Input checks run by the section builders before they emit anything.
//!
//! Each function covers the invariants of one section and reports the first
//! violation as a [`BuildError`].

use std::collections::HashSet;

use tracker_types::{Bundle, DetectorRegion, RecoLayout};

use crate::error::{BuildError, BuildResult, Section};

/// Local name of `reference` under `namespace`, or `None` if it lives in another namespace.
///
/// Unqualified references are local.
#[must_use]
pub fn local_name<'a>(reference: &'a str, namespace: &str) -> Option<&'a str> {
    if !namespace.is_empty() {
        if let Some(rest) = reference.strip_prefix(namespace) {
            return Some(rest);
        }
    }
    if reference.contains(':') {
        None
    } else {
        Some(reference)
    }
}

/// Unique element tags and composite names; fractions reference declared elements.
///
/// # Errors
///
/// Returns a [`Section::Materials`] error for the first violation.
pub fn check_materials(bundle: &Bundle, namespace: &str) -> BuildResult<()> {
    let mut elements = HashSet::new();
    for element in &bundle.elements {
        if !elements.insert(element.tag.as_str()) {
            return Err(BuildError::duplicate(Section::Materials, &element.tag));
        }
    }

    let mut composites = HashSet::new();
    for composite in &bundle.composites {
        if !composites.insert(composite.name.as_str()) {
            return Err(BuildError::duplicate(Section::Materials, &composite.name));
        }
        for fraction in &composite.fractions {
            let resolved = local_name(&fraction.element, namespace)
                .is_some_and(|tag| elements.contains(tag));
            if !resolved {
                return Err(BuildError::unresolved(
                    Section::Materials,
                    &composite.name,
                    "element",
                    &fraction.element,
                ));
            }
        }
    }
    Ok(())
}

/// Unique shape names; finite, non-negative dimensions.
///
/// # Errors
///
/// Returns a [`Section::Solids`] error for the first violation.
pub fn check_shapes(bundle: &Bundle) -> BuildResult<()> {
    let mut names = HashSet::new();
    for shape in &bundle.shapes {
        if !names.insert(shape.name_tag.as_str()) {
            return Err(BuildError::duplicate(Section::Solids, &shape.name_tag));
        }
        for (dimension, value) in shape.geometry.dimensions() {
            if !value.is_finite() || value < 0.0 {
                return Err(BuildError::new(
                    Section::Solids,
                    &shape.name_tag,
                    format!("{dimension} must be finite and non-negative, got {value}"),
                ));
            }
        }
    }
    Ok(())
}

/// Shape and material references of logical parts resolve within the document.
///
/// References into another namespace are not checked.
///
/// # Errors
///
/// Returns a [`Section::LogicalParts`] error for the first unresolved reference.
pub fn check_logical_parts(bundle: &Bundle, namespace: &str) -> BuildResult<()> {
    let shapes: HashSet<&str> = bundle.shapes.iter().map(|s| s.name_tag.as_str()).collect();
    let materials: HashSet<&str> = bundle
        .elements
        .iter()
        .map(|e| e.tag.as_str())
        .chain(bundle.composites.iter().map(|c| c.name.as_str()))
        .collect();

    for part in &bundle.logical_parts {
        if let Some(shape) = local_name(&part.shape_tag, namespace) {
            if !shapes.contains(shape) {
                return Err(BuildError::unresolved(
                    Section::LogicalParts,
                    &part.name_tag,
                    "shape",
                    &part.shape_tag,
                ));
            }
        }
        if let Some(material) = local_name(&part.material_tag, namespace) {
            if !materials.contains(material) {
                return Err(BuildError::unresolved(
                    Section::LogicalParts,
                    &part.name_tag,
                    "material",
                    &part.material_tag,
                ));
            }
        }
    }
    Ok(())
}

/// Vector parameters declare a non-empty value list matching their entry count.
///
/// # Errors
///
/// Returns a [`Section::Placements`] error for the first malformed vector.
pub fn check_algorithms(bundle: &Bundle) -> BuildResult<()> {
    for algorithm in &bundle.algorithms {
        let Some(vector) = &algorithm.vector else {
            continue;
        };
        if vector.values.is_empty() {
            return Err(BuildError::new(
                Section::Placements,
                &algorithm.name,
                format!("vector parameter '{}' has no values", vector.name),
            ));
        }
        if vector.n_entries != vector.values.len() {
            return Err(BuildError::new(
                Section::Placements,
                &algorithm.name,
                format!(
                    "vector parameter '{}' declares {} entries but has {} values",
                    vector.name,
                    vector.n_entries,
                    vector.values.len()
                ),
            ));
        }
    }
    Ok(())
}

/// Every length record resolves to exactly one emitted region descriptor.
///
/// # Errors
///
/// Returns a [`Section::RecoMaterial`] error for an unresolved or duplicate record.
pub fn check_radiation_lengths(bundle: &Bundle) -> BuildResult<()> {
    let layout: &RecoLayout = &bundle.reco_layout;
    let mut seen = HashSet::new();

    for record in &bundle.radiation_lengths {
        let entity = format!("{} {}", record.region.as_str(), record.index);
        let resolves = match record.region {
            DetectorRegion::Barrel => (1..=layout.barrel_layers).contains(&record.index),
            DetectorRegion::Endcap => layout.discs.iter().any(|d| d.disc == record.index),
        };
        if !resolves {
            let declared = match record.region {
                DetectorRegion::Barrel => "no such barrel layer",
                DetectorRegion::Endcap => "no such endcap disc",
            };
            return Err(BuildError::new(Section::RecoMaterial, entity, declared));
        }
        if !seen.insert((record.region, record.index)) {
            return Err(BuildError::duplicate(Section::RecoMaterial, entity));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tracker_types::{
        Algorithm, Composite, DiscRings, Element, LogicalPart, RadLenInfo, Shape, VectorParameter,
    };

    fn materials() -> Bundle {
        Bundle::new()
            .with_element(Element::new("Si", 14, 28.09, 2.33))
            .with_element(Element::new("C", 6, 12.01, 2.26))
            .with_composite(
                Composite::new("SenSi", 2.33)
                    .with_fraction("Si", 0.9)
                    .with_fraction("C", 0.1),
            )
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("pixel:Box1", "pixel:"), Some("Box1"));
        assert_eq!(local_name("Box1", "pixel:"), Some("Box1"));
        assert_eq!(local_name("materials:Air", "pixel:"), None);
        assert_eq!(local_name("materials:Air", ""), None);
    }

    #[test]
    fn test_materials_ok() {
        check_materials(&materials(), "pixel:").unwrap();
    }

    #[test]
    fn test_duplicate_element() {
        let bundle = materials().with_element(Element::new("Si", 14, 28.09, 2.33));
        let err = check_materials(&bundle, "pixel:").unwrap_err();
        assert_eq!(err.section, Section::Materials);
        assert_eq!(err.entity, "Si");
    }

    #[test]
    fn test_unknown_fraction_element() {
        let bundle = materials().with_composite(Composite::new("Glue", 1.2).with_fraction("O", 1.0));
        let err = check_materials(&bundle, "pixel:").unwrap_err();
        assert_eq!(err.entity, "Glue");
        assert!(err.message.contains("'O'"));
    }

    #[test]
    fn test_negative_dimension() {
        let bundle = Bundle::new().with_shape(Shape::tube("Pipe", 10.0, -1.0, 5.0));
        let err = check_shapes(&bundle).unwrap_err();
        assert_eq!(err.section, Section::Solids);
        assert!(err.message.contains("rmax"));

        let bundle = Bundle::new().with_shape(Shape::cuboid("Bad", f64::NAN, 1.0, 1.0));
        assert!(check_shapes(&bundle).is_err());
    }

    #[test]
    fn test_duplicate_shape() {
        let bundle = Bundle::new()
            .with_shape(Shape::cuboid("A", 1.0, 1.0, 1.0))
            .with_shape(Shape::tube("A", 0.0, 1.0, 1.0));
        assert!(check_shapes(&bundle).is_err());
    }

    #[test]
    fn test_logical_part_references() {
        let bundle = materials()
            .with_shape(Shape::cuboid("Sensor", 1.0, 1.0, 0.1))
            .with_logical_part(LogicalPart::new("Sensor", "pixel:Sensor", "pixel:SenSi"))
            .with_logical_part(LogicalPart::new("Air", "pixel:Sensor", "materials:Air"));
        check_logical_parts(&bundle, "pixel:").unwrap();

        let bundle = bundle.with_logical_part(LogicalPart::new("Bad", "pixel:Missing", "Si"));
        let err = check_logical_parts(&bundle, "pixel:").unwrap_err();
        assert_eq!(err.section, Section::LogicalParts);
        assert_eq!(err.entity, "Bad");
    }

    #[test]
    fn test_vector_rules() {
        let empty = Algorithm::new("track:Phi", "pixel:L1")
            .with_vector(VectorParameter::new("Phi", "numeric", Vec::new()));
        let err = check_algorithms(&Bundle::new().with_algorithm(empty)).unwrap_err();
        assert!(err.message.contains("no values"));

        let mut vector = VectorParameter::new("Phi", "numeric", vec!["0*deg".into()]);
        vector.n_entries = 2;
        let mismatched = Algorithm::new("track:Phi", "pixel:L1").with_vector(vector);
        assert!(check_algorithms(&Bundle::new().with_algorithm(mismatched)).is_err());

        let plain = Algorithm::new("track:Phi", "pixel:L1").with_numeric("N", "4");
        check_algorithms(&Bundle::new().with_algorithm(plain)).unwrap();
    }

    #[test]
    fn test_radiation_length_resolution() {
        let layout = RecoLayout {
            barrel_layers: 2,
            discs: vec![DiscRings { disc: 1, rings: 3 }],
            ..Default::default()
        };
        let ok = Bundle::new()
            .with_reco_layout(layout.clone())
            .with_radiation_length(RadLenInfo::barrel(2, 0.1, 0.01))
            .with_radiation_length(RadLenInfo::endcap(1, 0.2, 0.02));
        check_radiation_lengths(&ok).unwrap();

        let outside = ok.clone().with_radiation_length(RadLenInfo::barrel(3, 0.1, 0.01));
        let err = check_radiation_lengths(&outside).unwrap_err();
        assert_eq!(err.entity, "barrel 3");

        let zero = Bundle::new()
            .with_reco_layout(layout.clone())
            .with_radiation_length(RadLenInfo::barrel(0, 0.1, 0.01));
        assert!(check_radiation_lengths(&zero).is_err());

        let undeclared_disc = Bundle::new()
            .with_reco_layout(layout)
            .with_radiation_length(RadLenInfo::endcap(2, 0.1, 0.01));
        assert!(check_radiation_lengths(&undeclared_disc).is_err());

        let duplicate = ok.with_radiation_length(RadLenInfo::endcap(1, 0.3, 0.03));
        let err = check_radiation_lengths(&duplicate).unwrap_err();
        assert!(err.message.contains("more than once"));
    }
}
