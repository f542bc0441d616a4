//! Translator configuration.
//!
//! A [`TranslatorConfig`] is an ordinary value owned by the caller. The
//! defaults reproduce the names and labels consumed by existing CMSSW
//! configurations, including the historical quirks of the outer-tracker
//! geometry document.

use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::DocumentKind;
use crate::engine::Subsystem;

/// Names and labels written into the documents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectorNames {
    /// Namespace prefix, including the trailing `:`.
    pub namespace: String,
    /// Barrel subsystem label.
    pub barrel: String,
    /// Endcap subsystem label.
    pub endcap: String,
    /// Token preceding the layer index in barrel names and paths.
    pub layer_token: String,
    /// Token preceding the disc index in endcap reco-material names.
    pub disk_token: String,
    /// Label of the topology and sensitive-detector sections.
    pub specpars_label: String,
    /// Label of the production-cuts section.
    pub prodcuts_label: String,
    /// Label of the reconstruction-material section.
    pub recomat_label: String,
    /// Parameter name carrying the radiation length.
    pub radiation_length_parameter: String,
    /// Parameter name carrying the interaction length.
    pub xi_parameter: String,
}

impl Default for DetectorNames {
    fn default() -> Self {
        Self {
            namespace: "pixel:".to_string(),
            barrel: "PixelBarrel".to_string(),
            endcap: "PixelForward".to_string(),
            layer_token: "Layer".to_string(),
            disk_token: "Disk".to_string(),
            specpars_label: "spec-pars2.xml".to_string(),
            prodcuts_label: "trackerProdCuts.xml".to_string(),
            recomat_label: "spec-pars2.xml".to_string(),
            radiation_length_parameter: "TrackerRadLength".to_string(),
            xi_parameter: "TrackerXi".to_string(),
        }
    }
}

/// Labels of the sections of one geometry document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectionLabels {
    /// Label of the constants, materials, solids and rotations sections.
    pub geometry: String,
    /// Label of the logical-part section.
    pub logical_parts: String,
    /// Label of the placement section.
    pub placements: String,
}

impl SectionLabels {
    /// Use one label for every section.
    #[must_use]
    pub fn uniform(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            geometry: label.clone(),
            logical_parts: label.clone(),
            placements: label,
        }
    }
}

/// Geometry section labels per subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeometryLabels {
    /// Outer-tracker geometry document.
    pub outer_tracker: SectionLabels,
    /// Pixel geometry document.
    pub inner_pixel: SectionLabels,
}

impl Default for GeometryLabels {
    fn default() -> Self {
        Self {
            // Logical parts and placements keep the pixel label; downstream
            // configurations select on it.
            outer_tracker: SectionLabels {
                geometry: "tracker.xml".to_string(),
                logical_parts: "pixel.xml".to_string(),
                placements: "pixel.xml".to_string(),
            },
            inner_pixel: SectionLabels::uniform("pixel.xml"),
        }
    }
}

impl GeometryLabels {
    /// Labels for the geometry document of `subsystem`.
    #[must_use]
    pub fn for_subsystem(&self, subsystem: Subsystem) -> &SectionLabels {
        match subsystem {
            Subsystem::OuterTracker => &self.outer_tracker,
            Subsystem::InnerPixel => &self.inner_pixel,
        }
    }
}

/// Output file names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutputFiles {
    /// Outer-tracker geometry.
    pub tracker: String,
    /// Pixel geometry.
    pub pixel: String,
    /// Pixel structure topology.
    pub pixel_topology: String,
    /// Pixel sensitive-detector regions.
    pub pixel_sensitive: String,
    /// Pixel production cuts.
    pub pixel_prodcuts: String,
    /// Pixel reconstruction material.
    pub pixel_recomat: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            tracker: "tracker_test.xml".to_string(),
            pixel: "pixel_test.xml".to_string(),
            pixel_topology: "pixelStructureTopology_test.xml".to_string(),
            pixel_sensitive: "pixelsens_test.xml".to_string(),
            pixel_prodcuts: "pixelProdCuts_test.xml".to_string(),
            pixel_recomat: "pixelRecoMaterial_test.xml".to_string(),
        }
    }
}

impl OutputFiles {
    /// File name of a document of `subsystem`.
    #[must_use]
    pub fn file_name(&self, subsystem: Subsystem, kind: DocumentKind) -> &str {
        match (subsystem, kind) {
            (Subsystem::OuterTracker, _) => &self.tracker,
            (Subsystem::InnerPixel, DocumentKind::Geometry) => &self.pixel,
            (Subsystem::InnerPixel, DocumentKind::StructureTopology) => &self.pixel_topology,
            (Subsystem::InnerPixel, DocumentKind::SensitiveRegions) => &self.pixel_sensitive,
            (Subsystem::InnerPixel, DocumentKind::ProductionCuts) => &self.pixel_prodcuts,
            (Subsystem::InnerPixel, DocumentKind::RecoMaterial) => &self.pixel_recomat,
        }
    }
}

/// Complete translator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TranslatorConfig {
    /// Root directory for XML output.
    pub xml_directory: PathBuf,
    /// Names and labels.
    pub names: DetectorNames,
    /// Geometry section labels.
    pub labels: GeometryLabels,
    /// Output file names.
    pub files: OutputFiles,
    /// Indentation width of written documents; 0 writes each document on one line.
    pub indent: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            xml_directory: PathBuf::from("xml"),
            names: DetectorNames::default(),
            labels: GeometryLabels::default(),
            files: OutputFiles::default(),
            indent: 2,
        }
    }
}

impl TranslatorConfig {
    /// Create a configuration rooted at `xml_directory`.
    #[must_use]
    pub fn new(xml_directory: impl Into<PathBuf>) -> Self {
        Self {
            xml_directory: xml_directory.into(),
            ..Default::default()
        }
    }

    /// Set the namespace prefix.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.names.namespace = namespace.into();
        self
    }

    /// Set the indentation width.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Output directory for `subdir`; an empty subdir means the XML root itself.
    #[must_use]
    pub fn output_dir(&self, subdir: impl AsRef<Path>) -> PathBuf {
        let subdir = subdir.as_ref();
        if subdir.as_os_str().is_empty() {
            self.xml_directory.clone()
        } else {
            self.xml_directory.join(subdir)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let config = TranslatorConfig::default();
        assert_eq!(config.names.namespace, "pixel:");
        assert_eq!(config.names.specpars_label, "spec-pars2.xml");
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn test_outer_tracker_label_quirk() {
        let labels = GeometryLabels::default();
        let ot = labels.for_subsystem(Subsystem::OuterTracker);
        assert_eq!(ot.geometry, "tracker.xml");
        assert_eq!(ot.logical_parts, "pixel.xml");
        assert_eq!(ot.placements, "pixel.xml");
        assert_eq!(
            labels.for_subsystem(Subsystem::InnerPixel),
            &SectionLabels::uniform("pixel.xml")
        );
    }

    #[test]
    fn test_output_dir() {
        let config = TranslatorConfig::new("/tmp/xml");
        assert_eq!(config.output_dir(""), PathBuf::from("/tmp/xml"));
        assert_eq!(config.output_dir("v2"), PathBuf::from("/tmp/xml/v2"));
    }

    #[test]
    fn test_file_names() {
        let files = OutputFiles::default();
        assert_eq!(
            files.file_name(Subsystem::OuterTracker, DocumentKind::Geometry),
            "tracker_test.xml"
        );
        assert_eq!(
            files.file_name(Subsystem::InnerPixel, DocumentKind::RecoMaterial),
            "pixelRecoMaterial_test.xml"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json() {
        let config: TranslatorConfig =
            serde_json::from_str(r#"{"names": {"namespace": "tracker:"}, "indent": 0}"#).unwrap();
        assert_eq!(config.names.namespace, "tracker:");
        assert_eq!(config.names.barrel, "PixelBarrel");
        assert_eq!(config.indent, 0);
        assert_eq!(config.files, OutputFiles::default());
    }
}
