//! Human-readable bundle dump for debugging.
//!
//! The format is not stable and never reaches the committed documents.

use std::fmt;

use tracker_types::{Bundle, ShapeGeometry};

/// Describe every entity of `bundle`, one line per entity.
#[must_use]
pub fn describe_bundle(bundle: &Bundle) -> String {
    BundleDump(bundle).to_string()
}

struct BundleDump<'a>(&'a Bundle);

impl fmt::Display for BundleDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        writeln!(f, "bundle: {} entities", b.entity_count())?;

        writeln!(f, "elements: {} entries", b.elements.len())?;
        for (i, e) in b.elements.iter().enumerate() {
            writeln!(
                f,
                "  [{i}] tag = {}, density = {}, atomic number = {}, atomic weight = {}",
                e.tag, e.density, e.atomic_number, e.atomic_weight
            )?;
        }

        writeln!(f, "composites: {} entries", b.composites.len())?;
        for (i, c) in b.composites.iter().enumerate() {
            write!(
                f,
                "  [{i}] name = {}, density = {}, method = {}, elements:",
                c.name,
                c.density,
                c.method.describe()
            )?;
            for fraction in &c.fractions {
                write!(f, " ({}, {})", fraction.element, fraction.fraction)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "rotations: {} entries", b.rotations.len())?;
        for r in &b.rotations {
            writeln!(
                f,
                "  name = {}, thetax = {}, phix = {}, thetay = {}, phiy = {}, thetaz = {}, phiz = {}",
                r.name, r.theta_x, r.phi_x, r.theta_y, r.phi_y, r.theta_z, r.phi_z
            )?;
        }

        writeln!(f, "logic: {} entries", b.logical_parts.len())?;
        for l in &b.logical_parts {
            writeln!(
                f,
                "  name_tag = {}, shape_tag = {}, material_tag = {}",
                l.name_tag, l.shape_tag, l.material_tag
            )?;
        }

        writeln!(f, "shapes: {} entries", b.shapes.len())?;
        for s in &b.shapes {
            write!(f, "  name_tag = {}, type = ", s.name_tag)?;
            match s.geometry {
                ShapeGeometry::Box { dx, dy, dz } => {
                    writeln!(f, "box, dx = {dx}, dy = {dy}, dz = {dz}")?;
                }
                ShapeGeometry::Tube { rmin, rmax, dz } => {
                    writeln!(f, "tube, rmin = {rmin}, rmax = {rmax}, dz = {dz}")?;
                }
                ShapeGeometry::Cone {
                    rmin1,
                    rmax1,
                    rmin2,
                    rmax2,
                    dz,
                } => writeln!(
                    f,
                    "cone, rmin1 = {rmin1}, rmax1 = {rmax1}, rmin2 = {rmin2}, rmax2 = {rmax2}, dz = {dz}"
                )?,
                ShapeGeometry::Trapezoid { dx, dy, dyy, dz } => {
                    writeln!(f, "trapezoid, dx = {dx}, dy = {dy}, dyy = {dyy}, dz = {dz}")?;
                }
            }
        }

        writeln!(f, "positions: {} entries", b.placements.len())?;
        for p in &b.placements {
            let t = p.translation;
            writeln!(
                f,
                "  parent_tag = {}, child_tag = {}, rotref = {}, translation = ({}, {}, {}), copy = {}",
                p.parent_tag,
                p.child_tag,
                p.rotation_ref().unwrap_or("[no name]"),
                t.x,
                t.y,
                t.z,
                p.copy
            )?;
        }

        writeln!(f, "algorithms: {} entries", b.algorithms.len())?;
        for a in &b.algorithms {
            writeln!(f, "  name = {}, parent = {}", a.name, a.parent)?;
            for (name, parameter) in &a.parameters {
                writeln!(
                    f,
                    "    {} {name} = {}",
                    parameter.kind.node_name(),
                    parameter.value
                )?;
            }
            if let Some(v) = &a.vector {
                writeln!(
                    f,
                    "    Vector {} ({}, {} entries) = {}",
                    v.name,
                    v.value_type,
                    v.n_entries,
                    v.values.join(",")
                )?;
            }
        }

        writeln!(f, "topology: {} entries", b.specs.len())?;
        for s in &b.specs {
            writeln!(
                f,
                "  name = {}, parameter = ({}, {})",
                s.name, s.parameter.name, s.parameter.value
            )?;
            for selector in &s.part_selectors {
                writeln!(f, "    partselector {selector}")?;
            }
        }

        writeln!(f, "radiation lengths: {} entries", b.radiation_lengths.len())?;
        for r in &b.radiation_lengths {
            writeln!(
                f,
                "  {} {}: radiation length = {}, interaction length = {}",
                r.region.as_str(),
                r.index,
                r.radiation_length,
                r.interaction_length
            )?;
        }
        Ok(())
    }
}
