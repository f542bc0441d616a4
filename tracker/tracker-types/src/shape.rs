//! Solid primitives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of a solid, without its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShapeKind {
    /// Rectangular box.
    Box,
    /// Tube segment covering the full revolution.
    Tube,
    /// Cone section.
    Cone,
    /// Trapezoid.
    Trapezoid,
}

impl ShapeKind {
    /// Lower-case name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Tube => "tube",
            Self::Cone => "cone",
            Self::Trapezoid => "trapezoid",
        }
    }
}

/// Kind-specific dimensions, all half-lengths in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ShapeGeometry {
    /// Box with half-extents.
    Box {
        /// Half-length along x.
        dx: f64,
        /// Half-length along y.
        dy: f64,
        /// Half-length along z.
        dz: f64,
    },
    /// Full tube.
    Tube {
        /// Inner radius.
        rmin: f64,
        /// Outer radius.
        rmax: f64,
        /// Half-length along z.
        dz: f64,
    },
    /// Cone section with independent radii at both ends.
    Cone {
        /// Inner radius at -dz.
        rmin1: f64,
        /// Outer radius at -dz.
        rmax1: f64,
        /// Inner radius at +dz.
        rmin2: f64,
        /// Outer radius at +dz.
        rmax2: f64,
        /// Half-length along z.
        dz: f64,
    },
    /// Trapezoid.
    Trapezoid {
        /// Half-length along x.
        dx: f64,
        /// Half-length along y at -dz.
        dy: f64,
        /// Half-length along y at +dz.
        dyy: f64,
        /// Half-length along z.
        dz: f64,
    },
}

impl ShapeGeometry {
    /// Kind of this geometry.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Box { .. } => ShapeKind::Box,
            Self::Tube { .. } => ShapeKind::Tube,
            Self::Cone { .. } => ShapeKind::Cone,
            Self::Trapezoid { .. } => ShapeKind::Trapezoid,
        }
    }

    /// All dimensions paired with their names, in declaration order.
    #[must_use]
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Box { dx, dy, dz } => vec![("dx", dx), ("dy", dy), ("dz", dz)],
            Self::Tube { rmin, rmax, dz } => vec![("rmin", rmin), ("rmax", rmax), ("dz", dz)],
            Self::Cone {
                rmin1,
                rmax1,
                rmin2,
                rmax2,
                dz,
            } => vec![
                ("rmin1", rmin1),
                ("rmax1", rmax1),
                ("rmin2", rmin2),
                ("rmax2", rmax2),
                ("dz", dz),
            ],
            Self::Trapezoid { dx, dy, dyy, dz } => {
                vec![("dx", dx), ("dy", dy), ("dyy", dyy), ("dz", dz)]
            }
        }
    }
}

/// A named solid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    /// Unique name tag.
    pub name_tag: String,
    /// Dimensions.
    pub geometry: ShapeGeometry,
}

impl Shape {
    /// Create a box.
    #[must_use]
    pub fn cuboid(name_tag: impl Into<String>, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            name_tag: name_tag.into(),
            geometry: ShapeGeometry::Box { dx, dy, dz },
        }
    }

    /// Create a full tube.
    #[must_use]
    pub fn tube(name_tag: impl Into<String>, rmin: f64, rmax: f64, dz: f64) -> Self {
        Self {
            name_tag: name_tag.into(),
            geometry: ShapeGeometry::Tube { rmin, rmax, dz },
        }
    }

    /// Create a cone section.
    #[must_use]
    pub fn cone(
        name_tag: impl Into<String>,
        rmin1: f64,
        rmax1: f64,
        rmin2: f64,
        rmax2: f64,
        dz: f64,
    ) -> Self {
        Self {
            name_tag: name_tag.into(),
            geometry: ShapeGeometry::Cone {
                rmin1,
                rmax1,
                rmin2,
                rmax2,
                dz,
            },
        }
    }

    /// Create a trapezoid.
    #[must_use]
    pub fn trapezoid(name_tag: impl Into<String>, dx: f64, dy: f64, dyy: f64, dz: f64) -> Self {
        Self {
            name_tag: name_tag.into(),
            geometry: ShapeGeometry::Trapezoid { dx, dy, dyy, dz },
        }
    }

    /// Kind of this shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }
}
