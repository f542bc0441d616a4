//! Material-budget bundle types for tracker geometry translation.
//!
//! This crate holds the plain data a tracker analysis stage hands to the
//! CMSSW translator:
//!
//! - [`Element`], [`Composite`] - materials
//! - [`Shape`] - solid primitives (box, tube, cone, trapezoid)
//! - [`LogicalPart`], [`Placement`], [`Rotation`], [`Algorithm`] - the logical hierarchy
//! - [`SpecParInfo`], [`RadLenInfo`], [`RecoLayout`] - region descriptors and
//!   reconstruction-material inputs
//! - [`Bundle`] - everything above for one subsystem
//!
//! Nothing here performs I/O. All values are read-only once the bundle is
//! handed over for translation.
//!
//! # Units
//!
//! Lengths are millimetres, angles degrees, densities g/cm3 and atomic
//! weights g/mole.
//!
//! # Example
//!
//! ```
//! use tracker_types::{Bundle, Composite, Element, Shape};
//!
//! let bundle = Bundle::new()
//!     .with_element(Element::new("Si", 14, 28.09, 2.33))
//!     .with_composite(Composite::new("SenSi", 2.33).with_fraction("Si", 1.0))
//!     .with_shape(Shape::cuboid("Sensor", 10.0, 20.0, 0.1));
//!
//! assert_eq!(bundle.entity_count(), 3);
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for every type, so bundles can be
//!   exchanged as JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

mod bundle;
mod hierarchy;
mod material;
mod region;
mod shape;

pub use bundle::Bundle;
pub use hierarchy::{
    AlgoParameter, Algorithm, LogicalPart, ParameterKind, Placement, Rotation, VectorParameter,
};
pub use material::{Composite, Element, MaterialFraction, MixtureMethod};
pub use region::{
    DetectorRegion, DiscRings, ModuleReadout, RadLenInfo, RecoLayout, SpecParInfo, SpecParameter,
};
pub use shape::{Shape, ShapeGeometry, ShapeKind};

// Re-export nalgebra types for convenience
pub use nalgebra::Vector3;
