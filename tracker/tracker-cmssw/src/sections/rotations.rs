use tracker_types::Rotation;

use crate::document::DocNode;
use crate::error::Section;
use crate::format::{with_unit, ANGLE_DIGITS};

use super::open_section;

const ANGLE_ATTRIBUTES: [&str; 6] = ["thetaX", "phiX", "thetaY", "phiY", "thetaZ", "phiZ"];

/// Rotations every geometry document declares, independent of the bundle.
#[must_use]
pub fn fixed_rotations() -> [Rotation; 3] {
    [
        Rotation::new("HCZ2YX", [90.0, 270.0, 180.0, 0.0, 90.0, 0.0]),
        Rotation::new("FlippedHCZ2YX", [90.0, 270.0, 0.0, 0.0, 90.0, 180.0]),
        Rotation::new("FLIP", [90.0, 180.0, 90.0, 90.0, 180.0, 0.0]),
    ]
}

/// Append the rotation section.
pub(crate) fn write_rotations(root: &mut DocNode, label: &str) {
    let section = open_section(root, Section::Rotations, label);
    for rotation in fixed_rotations() {
        let node = section.named_child("Rotation", &rotation.name);
        for (attribute, angle) in ANGLE_ATTRIBUTES.iter().zip(rotation.angles()) {
            node.attr(*attribute, with_unit(angle, ANGLE_DIGITS, "deg"));
        }
    }
}
