//! Translation engine.
//!
//! A [`Translator`] turns a [`Bundle`] into the document set of one
//! [`Subsystem`]. Every document is built in memory first; files are only
//! touched once all of them built, and then through the staged commit in
//! [`crate::commit`].

use std::fmt;
use std::path::{Path, PathBuf};

use tracker_types::Bundle;

use crate::commit;
use crate::config::TranslatorConfig;
use crate::document::DocNode;
use crate::error::{BuildResult, Result, TranslateError};
use crate::sections;
use crate::writer::{DocumentWriter, XmlDocumentWriter};

// ============================================================================
// Subsystems and documents
// ============================================================================

/// Detector partition translated as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    /// Outer tracker: a single geometry document.
    OuterTracker,
    /// Inner pixel detector: geometry plus four region documents.
    InnerPixel,
}

impl Subsystem {
    /// Documents produced for this subsystem, in build order.
    #[must_use]
    pub fn documents(self) -> &'static [DocumentKind] {
        match self {
            Self::OuterTracker => &[DocumentKind::Geometry],
            Self::InnerPixel => &[
                DocumentKind::Geometry,
                DocumentKind::StructureTopology,
                DocumentKind::SensitiveRegions,
                DocumentKind::ProductionCuts,
                DocumentKind::RecoMaterial,
            ],
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OuterTracker => "outer tracker",
            Self::InnerPixel => "inner pixel",
        })
    }
}

/// Kind of output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Materials, solids, rotations, logical parts and placements.
    Geometry,
    /// Structure topology descriptors.
    StructureTopology,
    /// Sensitive-detector regions.
    SensitiveRegions,
    /// Production cuts.
    ProductionCuts,
    /// Reconstruction-material parameters.
    RecoMaterial,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Geometry => "geometry",
            Self::StructureTopology => "structure-topology",
            Self::SensitiveRegions => "sensitive-regions",
            Self::ProductionCuts => "production-cuts",
            Self::RecoMaterial => "reconstruction-material",
        })
    }
}

/// A document built in memory, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltDocument {
    /// What the document holds.
    pub kind: DocumentKind,
    /// File name inside the output directory.
    pub file_name: String,
    /// Document root.
    pub root: DocNode,
}

/// Outcome of a committed translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationReport {
    /// Subsystem translated.
    pub subsystem: Subsystem,
    /// Directory the documents were committed to.
    pub output_dir: PathBuf,
    /// Committed files, in build order.
    pub files: Vec<PathBuf>,
    /// Number of committed files that replaced an existing file.
    pub replaced: usize,
}

// ============================================================================
// Translator
// ============================================================================

/// Builds and commits subsystem document sets.
pub struct Translator {
    config: TranslatorConfig,
    writer: Box<dyn DocumentWriter>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// Create a translator writing XML with the configured indentation.
    #[must_use]
    pub fn new(config: TranslatorConfig) -> Self {
        let writer = XmlDocumentWriter::new(config.indent);
        Self {
            config,
            writer: Box::new(writer),
        }
    }

    /// Replace the document writer.
    #[must_use]
    pub fn with_writer(mut self, writer: impl DocumentWriter + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Build every document of `subsystem` without touching the file system.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Build`] for the first document whose input is malformed.
    pub fn build(&self, subsystem: Subsystem, bundle: &Bundle) -> Result<Vec<BuiltDocument>> {
        tracing::info!(%subsystem, entities = bundle.entity_count(), "building documents");

        let names = &self.config.names;
        let mut documents = Vec::with_capacity(subsystem.documents().len());
        let mut selectors = sections::ModuleSelectors::default();

        for &kind in subsystem.documents() {
            let mut root = DocNode::dd_definition();
            let built: BuildResult<()> = match kind {
                DocumentKind::Geometry => self.build_geometry(&mut root, subsystem, bundle),
                DocumentKind::StructureTopology => {
                    selectors = sections::write_topology(&mut root, &bundle.specs, names);
                    Ok(())
                }
                DocumentKind::SensitiveRegions => {
                    sections::write_sensitive_regions(&mut root, &selectors, names);
                    Ok(())
                }
                DocumentKind::ProductionCuts => {
                    sections::write_production_cuts(&mut root, &selectors, names);
                    Ok(())
                }
                DocumentKind::RecoMaterial => sections::write_reco_material(&mut root, bundle, names),
            };
            built.map_err(|source| TranslateError::Build {
                subsystem,
                document: kind,
                source,
            })?;

            tracing::debug!(document = %kind, nodes = root.node_count(), "document built");
            documents.push(BuiltDocument {
                kind,
                file_name: self.config.files.file_name(subsystem, kind).to_string(),
                root,
            });
        }
        Ok(documents)
    }

    /// Build every document of `subsystem` and commit them to `output_dir`.
    ///
    /// Nothing in `output_dir` changes unless every document was built and
    /// staged; a failed commit restores the files it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Build`] for malformed input,
    /// [`TranslateError::Write`] if staging a document fails and
    /// [`TranslateError::Commit`] if moving staged files into place fails.
    pub fn translate(
        &self,
        subsystem: Subsystem,
        bundle: &Bundle,
        output_dir: impl AsRef<Path>,
    ) -> Result<TranslationReport> {
        let output_dir = output_dir.as_ref();
        let documents = self.build(subsystem, bundle)?;

        let staged = commit::stage(subsystem, &documents, self.writer.as_ref(), output_dir)?;
        let replaced = staged.commit(output_dir)?;

        let files: Vec<PathBuf> = documents
            .iter()
            .map(|d| output_dir.join(&d.file_name))
            .collect();
        tracing::info!(
            %subsystem,
            dir = %output_dir.display(),
            files = files.len(),
            replaced,
            "translation committed"
        );
        Ok(TranslationReport {
            subsystem,
            output_dir: output_dir.to_path_buf(),
            files,
            replaced,
        })
    }

    fn build_geometry(
        &self,
        root: &mut DocNode,
        subsystem: Subsystem,
        bundle: &Bundle,
    ) -> BuildResult<()> {
        let namespace = &self.config.names.namespace;
        let labels = self.config.labels.for_subsystem(subsystem);

        if subsystem == Subsystem::OuterTracker {
            sections::write_constants(root, &labels.geometry);
        }
        sections::write_materials(root, bundle, namespace, &labels.geometry)?;
        sections::write_solids(root, bundle, &labels.geometry)?;
        sections::write_rotations(root, &labels.geometry);
        sections::write_logical_parts(root, bundle, namespace, &labels.logical_parts)?;
        sections::write_placements(root, bundle, &labels.placements)
    }
}
