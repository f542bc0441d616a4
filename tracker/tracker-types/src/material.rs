//! Elementary and composite materials.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A chemical element used by at least one material of the bundle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    /// Symbolic tag, also used as the element symbol.
    pub tag: String,
    /// Atomic number (Z).
    pub atomic_number: u32,
    /// Atomic weight in g/mole.
    pub atomic_weight: f64,
    /// Density in g/cm3.
    pub density: f64,
}

impl Element {
    /// Create a new element.
    #[must_use]
    pub fn new(tag: impl Into<String>, atomic_number: u32, atomic_weight: f64, density: f64) -> Self {
        Self {
            tag: tag.into(),
            atomic_number,
            atomic_weight,
            density,
        }
    }
}

/// How the fractions of a composite are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MixtureMethod {
    /// Fractions are mass fractions.
    #[default]
    Weight,
    /// Fractions are volume fractions.
    Volume,
    /// Fractions are atomic proportions.
    AtomicProportion,
}

impl MixtureMethod {
    /// The DDL literal naming this mixing method.
    #[must_use]
    pub fn ddl_literal(self) -> &'static str {
        match self {
            Self::Weight => "mixture by weight",
            Self::Volume => "mixture by volume",
            Self::AtomicProportion => "mixture by atomic proportion",
        }
    }

    /// Human readable description used in diagnostics.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Weight => "fraction by weight",
            Self::Volume => "fraction by volume",
            Self::AtomicProportion => "fraction by atomic proportion",
        }
    }
}

/// One constituent of a composite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialFraction {
    /// Tag of the referenced [`Element`].
    pub element: String,
    /// Fraction of this constituent, interpreted per [`MixtureMethod`].
    pub fraction: f64,
}

/// A mixture material.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Composite {
    /// Unique material name.
    pub name: String,
    /// Density in g/cm3.
    pub density: f64,
    /// Mixing method.
    #[cfg_attr(feature = "serde", serde(default))]
    pub method: MixtureMethod,
    /// Ordered constituents.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fractions: Vec<MaterialFraction>,
}

impl Composite {
    /// Create an empty composite mixed by weight.
    #[must_use]
    pub fn new(name: impl Into<String>, density: f64) -> Self {
        Self {
            name: name.into(),
            density,
            method: MixtureMethod::Weight,
            fractions: Vec::new(),
        }
    }

    /// Set the mixing method.
    #[must_use]
    pub fn with_method(mut self, method: MixtureMethod) -> Self {
        self.method = method;
        self
    }

    /// Append a constituent.
    #[must_use]
    pub fn with_fraction(mut self, element: impl Into<String>, fraction: f64) -> Self {
        self.fractions.push(MaterialFraction {
            element: element.into(),
            fraction,
        });
        self
    }

    /// Sum of all fractions.
    #[must_use]
    pub fn total_fraction(&self) -> f64 {
        self.fractions.iter().map(|f| f.fraction).sum()
    }
}
