use tracker_types::{Bundle, ShapeGeometry};

use crate::document::DocNode;
use crate::error::{BuildResult, Section};
use crate::format::{with_unit, LENGTH_DIGITS, RADIUS_DIGITS};
use crate::validation;

use super::open_section;

/// Append the solid section.
///
/// Only boxes and tubes have a DDL rendition here; cones and trapezoids are
/// validated but not written.
pub(crate) fn write_solids(root: &mut DocNode, bundle: &Bundle, label: &str) -> BuildResult<()> {
    validation::check_shapes(bundle)?;

    let section = open_section(root, Section::Solids, label);
    for shape in &bundle.shapes {
        match shape.geometry {
            ShapeGeometry::Box { dx, dy, dz } => {
                section
                    .named_child("Box", &shape.name_tag)
                    .attr("dx", with_unit(dx, LENGTH_DIGITS, "mm"))
                    .attr("dy", with_unit(dy, LENGTH_DIGITS, "mm"))
                    .attr("dz", with_unit(dz, LENGTH_DIGITS, "mm"));
            }
            ShapeGeometry::Tube { rmin, rmax, dz } => {
                section
                    .named_child("Tubs", &shape.name_tag)
                    .attr("rMin", with_unit(rmin, RADIUS_DIGITS, "mm"))
                    .attr("rMax", with_unit(rmax, RADIUS_DIGITS, "mm"))
                    .attr("dz", with_unit(dz, RADIUS_DIGITS, "mm"))
                    .attr("startPhi", "0*deg")
                    .attr("deltaPhi", "360*deg");
            }
            ShapeGeometry::Cone { .. } | ShapeGeometry::Trapezoid { .. } => {
                tracing::debug!(
                    shape = %shape.name_tag,
                    kind = shape.kind().as_str(),
                    "solid kind has no DDL rendition, skipped"
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tracker_types::Shape;

    #[test]
    fn test_box_and_tube() {
        let bundle = Bundle::new()
            .with_shape(Shape::cuboid("Sensor", 10.123, 20.0, 0.1505))
            .with_shape(Shape::tube("Layer1", 28.4567, 31.0, 372.5));
        let mut root = DocNode::dd_definition();
        write_solids(&mut root, &bundle, "pixel.xml").unwrap();

        let section = root.first_child("SolidSection").unwrap();
        let boxed = section.first_child("Box").unwrap();
        assert_eq!(boxed.attribute("name"), Some("Sensor"));
        assert_eq!(boxed.attribute("dx"), Some("10.1*mm"));
        assert_eq!(boxed.attribute("dy"), Some("20*mm"));

        let tube = section.first_child("Tubs").unwrap();
        assert_eq!(tube.attribute("rMin"), Some("28.46*mm"));
        assert_eq!(tube.attribute("rMax"), Some("31*mm"));
        assert_eq!(tube.attribute("dz"), Some("372.5*mm"));
        assert_eq!(tube.attribute("startPhi"), Some("0*deg"));
        assert_eq!(tube.attribute("deltaPhi"), Some("360*deg"));
    }

    #[test]
    fn test_cone_and_trapezoid_skipped() {
        let bundle = Bundle::new()
            .with_shape(Shape::cone("Flange", 1.0, 2.0, 1.5, 2.5, 3.0))
            .with_shape(Shape::trapezoid("Blade", 1.0, 2.0, 3.0, 0.5))
            .with_shape(Shape::cuboid("Sensor", 1.0, 1.0, 1.0));
        let mut root = DocNode::dd_definition();
        write_solids(&mut root, &bundle, "pixel.xml").unwrap();

        let section = root.first_child("SolidSection").unwrap();
        assert_eq!(section.children().len(), 1);
        assert_eq!(section.children()[0].name(), "Box");
    }
}
