//! Logical hierarchy: logical parts, their placements and rotations.

use std::collections::BTreeMap;

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rotations
// ============================================================================

/// A rotation given by the polar/azimuthal angles of the rotated axes, in degrees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rotation {
    /// Rotation name.
    pub name: String,
    /// Polar angle of the new x axis.
    pub theta_x: f64,
    /// Azimuthal angle of the new x axis.
    pub phi_x: f64,
    /// Polar angle of the new y axis.
    pub theta_y: f64,
    /// Azimuthal angle of the new y axis.
    pub phi_y: f64,
    /// Polar angle of the new z axis.
    pub theta_z: f64,
    /// Azimuthal angle of the new z axis.
    pub phi_z: f64,
}

impl Rotation {
    /// Create a rotation from its six angles, `[thetaX, phiX, thetaY, phiY, thetaZ, phiZ]`.
    #[must_use]
    pub fn new(name: impl Into<String>, angles: [f64; 6]) -> Self {
        Self {
            name: name.into(),
            theta_x: angles[0],
            phi_x: angles[1],
            theta_y: angles[2],
            phi_y: angles[3],
            theta_z: angles[4],
            phi_z: angles[5],
        }
    }

    /// The six angles in `[thetaX, phiX, thetaY, phiY, thetaZ, phiZ]` order.
    #[must_use]
    pub fn angles(&self) -> [f64; 6] {
        [
            self.theta_x,
            self.phi_x,
            self.theta_y,
            self.phi_y,
            self.theta_z,
            self.phi_z,
        ]
    }
}

// ============================================================================
// Logical parts and placements
// ============================================================================

/// A named pairing of a solid with a material.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogicalPart {
    /// Name tag of the part.
    pub name_tag: String,
    /// Reference to a [`crate::Shape`] name tag.
    pub shape_tag: String,
    /// Reference to an element or composite.
    pub material_tag: String,
}

impl LogicalPart {
    /// Create a logical part.
    #[must_use]
    pub fn new(
        name_tag: impl Into<String>,
        shape_tag: impl Into<String>,
        material_tag: impl Into<String>,
    ) -> Self {
        Self {
            name_tag: name_tag.into(),
            shape_tag: shape_tag.into(),
            material_tag: material_tag.into(),
        }
    }
}

/// One instance of a logical part inside a parent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Parent logical part.
    pub parent_tag: String,
    /// Placed logical part.
    pub child_tag: String,
    /// Optional rotation reference.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: Option<String>,
    /// Translation in millimetres.
    #[cfg_attr(feature = "serde", serde(default = "zero_translation"))]
    pub translation: Vector3<f64>,
    /// Copy number.
    #[cfg_attr(feature = "serde", serde(default = "default_copy"))]
    pub copy: u32,
}

#[cfg(feature = "serde")]
fn zero_translation() -> Vector3<f64> {
    Vector3::zeros()
}

#[cfg(feature = "serde")]
fn default_copy() -> u32 {
    1
}

impl Placement {
    /// Create an unrotated, untranslated placement with copy number 1.
    #[must_use]
    pub fn new(parent_tag: impl Into<String>, child_tag: impl Into<String>) -> Self {
        Self {
            parent_tag: parent_tag.into(),
            child_tag: child_tag.into(),
            rotation: None,
            translation: Vector3::zeros(),
            copy: 1,
        }
    }

    /// Set the rotation reference.
    #[must_use]
    pub fn with_rotation(mut self, rotation: impl Into<String>) -> Self {
        self.rotation = Some(rotation.into());
        self
    }

    /// Set the translation.
    #[must_use]
    pub fn with_translation(mut self, x: f64, y: f64, z: f64) -> Self {
        self.translation = Vector3::new(x, y, z);
        self
    }

    /// Set the copy number.
    #[must_use]
    pub fn with_copy(mut self, copy: u32) -> Self {
        self.copy = copy;
        self
    }

    /// Rotation reference, if one with a non-empty name is present.
    #[must_use]
    pub fn rotation_ref(&self) -> Option<&str> {
        self.rotation.as_deref().filter(|r| !r.is_empty())
    }

    /// True if any translation component is non-zero.
    #[must_use]
    pub fn is_translated(&self) -> bool {
        self.translation.iter().any(|c| *c != 0.0)
    }
}

// ============================================================================
// Algorithms
// ============================================================================

/// Declared type of a scalar algorithm parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParameterKind {
    /// Free text.
    String,
    /// Numeric expression.
    Numeric,
}

impl ParameterKind {
    /// Node name used for parameters of this kind.
    #[must_use]
    pub fn node_name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Numeric => "Numeric",
        }
    }
}

/// A scalar algorithm parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlgoParameter {
    /// Pre-formatted value.
    pub value: String,
    /// Declared type.
    pub kind: ParameterKind,
}

/// A vector algorithm parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorParameter {
    /// Vector name.
    pub name: String,
    /// Element type, e.g. `numeric`.
    pub value_type: String,
    /// Declared entry count.
    pub n_entries: usize,
    /// Pre-formatted values.
    pub values: Vec<String>,
}

impl VectorParameter {
    /// Create a vector parameter whose entry count matches its values.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
            n_entries: values.len(),
            values,
        }
    }
}

/// A parametric, repeated placement generator.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Algorithm {
    /// Algorithm name, e.g. `track:DDTrackerPhiAlgo`.
    pub name: String,
    /// Parent logical part.
    pub parent: String,
    /// Scalar parameters keyed by name; kept sorted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: BTreeMap<String, AlgoParameter>,
    /// Optional vector parameter.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vector: Option<VectorParameter>,
}

impl Algorithm {
    /// Create an algorithm without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
            ..Default::default()
        }
    }

    /// Add a string parameter.
    #[must_use]
    pub fn with_string(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(
            name.into(),
            AlgoParameter {
                value: value.into(),
                kind: ParameterKind::String,
            },
        );
        self
    }

    /// Add a numeric parameter.
    #[must_use]
    pub fn with_numeric(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(
            name.into(),
            AlgoParameter {
                value: value.into(),
                kind: ParameterKind::Numeric,
            },
        );
        self
    }

    /// Set the vector parameter.
    #[must_use]
    pub fn with_vector(mut self, vector: VectorParameter) -> Self {
        self.vector = Some(vector);
        self
    }
}
