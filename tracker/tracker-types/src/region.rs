//! Region descriptors and per-layer material records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Barrel or endcap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DetectorRegion {
    /// Cylindrical layers around the beam line.
    Barrel,
    /// Discs perpendicular to the beam line.
    Endcap,
}

impl DetectorRegion {
    /// Lower-case name of the region.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Barrel => "barrel",
            Self::Endcap => "endcap",
        }
    }
}

/// A `(name, value)` parameter attached to a region descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecParameter {
    /// Parameter name.
    pub name: String,
    /// Parameter value.
    pub value: String,
}

impl SpecParameter {
    /// Create a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Readout-chip geometry of one pixel module type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModuleReadout {
    /// Pixel rows per readout chip.
    pub roc_rows: u32,
    /// Pixel columns per readout chip.
    pub roc_cols: u32,
    /// Number of chips along the local x axis.
    pub roc_x: u32,
    /// Number of chips along the local y axis.
    pub roc_y: u32,
}

/// A named region or topology descriptor.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecParInfo {
    /// Descriptor name; module/barrel/endcap membership is encoded in it.
    pub name: String,
    /// Part-selector paths, without the leading `//`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub part_selectors: Vec<String>,
    /// The descriptor's parameter.
    pub parameter: SpecParameter,
    /// Readout geometry, one entry per module type.
    #[cfg_attr(feature = "serde", serde(default))]
    pub module_types: Vec<ModuleReadout>,
}

impl SpecParInfo {
    /// Create a descriptor with one parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, parameter: SpecParameter) -> Self {
        Self {
            name: name.into(),
            parameter,
            ..Default::default()
        }
    }

    /// Add a part selector.
    #[must_use]
    pub fn with_selector(mut self, path: impl Into<String>) -> Self {
        self.part_selectors.push(path.into());
        self
    }

    /// Add a module type.
    #[must_use]
    pub fn with_module_type(mut self, readout: ModuleReadout) -> Self {
        self.module_types.push(readout);
        self
    }
}

/// Radiation and interaction length of one barrel layer or endcap disc.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadLenInfo {
    /// Barrel or endcap.
    pub region: DetectorRegion,
    /// Layer index (barrel) or disc index (endcap), starting at 1.
    pub index: u32,
    /// Radiation length fraction.
    pub radiation_length: f64,
    /// Interaction length fraction.
    pub interaction_length: f64,
}

impl RadLenInfo {
    /// Record for a barrel layer.
    #[must_use]
    pub fn barrel(layer: u32, radiation_length: f64, interaction_length: f64) -> Self {
        Self {
            region: DetectorRegion::Barrel,
            index: layer,
            radiation_length,
            interaction_length,
        }
    }

    /// Record for an endcap disc.
    #[must_use]
    pub fn endcap(disc: u32, radiation_length: f64, interaction_length: f64) -> Self {
        Self {
            region: DetectorRegion::Endcap,
            index: disc,
            radiation_length,
            interaction_length,
        }
    }
}

/// Number of rings on one endcap disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiscRings {
    /// Disc index.
    pub disc: u32,
    /// Ring count; rings are numbered from 1.
    pub rings: u32,
}

/// Volume paths used to build reconstruction-material regions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecoLayout {
    /// Barrel paths; each carries a `Layer<n>` token.
    pub barrel_paths: Vec<String>,
    /// Endcap paths; each carries a `Ring<r>Disc<d>` token.
    pub endcap_paths: Vec<String>,
    /// Number of barrel layers, numbered from 1.
    pub barrel_layers: u32,
    /// Discs in emission order.
    pub discs: Vec<DiscRings>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = SpecParInfo::new(
            "PixelBarrelBModule1Par",
            SpecParameter::new("TkDDDStructure", "PixelBarrelModule"),
        )
        .with_selector("pixel:BModule1Layer1")
        .with_module_type(ModuleReadout {
            roc_rows: 160,
            roc_cols: 416,
            roc_x: 2,
            roc_y: 8,
        });
        assert_eq!(spec.part_selectors.len(), 1);
        assert_eq!(spec.module_types[0].roc_cols, 416);
    }

    #[test]
    fn test_radlen_constructors() {
        let b = RadLenInfo::barrel(2, 0.03, 0.01);
        assert_eq!(b.region, DetectorRegion::Barrel);
        assert_eq!(b.index, 2);
        let e = RadLenInfo::endcap(4, 0.05, 0.02);
        assert_eq!(e.region.as_str(), "endcap");
    }
}
