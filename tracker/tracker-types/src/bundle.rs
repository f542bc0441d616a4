//! The translation-ready bundle.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hierarchy::{Algorithm, LogicalPart, Placement, Rotation};
use crate::material::{Composite, Element};
use crate::region::{RadLenInfo, RecoLayout, SpecParInfo};
use crate::shape::Shape;

/// Flat, ordered projection of the material-budget model for one subsystem.
///
/// Produced once per run by the analysis stage and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Bundle {
    /// Elements, in emission order.
    pub elements: Vec<Element>,
    /// Composites, in emission order.
    pub composites: Vec<Composite>,
    /// Rotations known to the model. Only shown in diagnostics.
    pub rotations: Vec<Rotation>,
    /// Solids.
    pub shapes: Vec<Shape>,
    /// Logical parts.
    pub logical_parts: Vec<LogicalPart>,
    /// Placements.
    pub placements: Vec<Placement>,
    /// Placement algorithms.
    pub algorithms: Vec<Algorithm>,
    /// Region and topology descriptors.
    pub specs: Vec<SpecParInfo>,
    /// Per-layer and per-disc material records.
    pub radiation_lengths: Vec<RadLenInfo>,
    /// Paths and counts for reconstruction-material regions.
    pub reco_layout: RecoLayout,
}

impl Bundle {
    /// Create an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element.
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Add a composite.
    #[must_use]
    pub fn with_composite(mut self, composite: Composite) -> Self {
        self.composites.push(composite);
        self
    }

    /// Add a rotation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotations.push(rotation);
        self
    }

    /// Add a shape.
    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Add a logical part.
    #[must_use]
    pub fn with_logical_part(mut self, part: LogicalPart) -> Self {
        self.logical_parts.push(part);
        self
    }

    /// Add a placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placements.push(placement);
        self
    }

    /// Add an algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithms.push(algorithm);
        self
    }

    /// Add a region descriptor.
    #[must_use]
    pub fn with_spec(mut self, spec: SpecParInfo) -> Self {
        self.specs.push(spec);
        self
    }

    /// Add a radiation/interaction length record.
    #[must_use]
    pub fn with_radiation_length(mut self, record: RadLenInfo) -> Self {
        self.radiation_lengths.push(record);
        self
    }

    /// Set the reconstruction-material layout.
    #[must_use]
    pub fn with_reco_layout(mut self, layout: RecoLayout) -> Self {
        self.reco_layout = layout;
        self
    }

    /// Total number of entities held, rotations and layout excluded.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.elements.len()
            + self.composites.len()
            + self.shapes.len()
            + self.logical_parts.len()
            + self.placements.len()
            + self.algorithms.len()
            + self.specs.len()
            + self.radiation_lengths.len()
    }

    /// True if the bundle holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0
    }
}
