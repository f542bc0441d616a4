//! Error types for document building and committing.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::engine::{DocumentKind, Subsystem};

/// Document section a builder works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// `ConstantsSection`.
    Constants,
    /// `MaterialSection`.
    Materials,
    /// `SolidSection`.
    Solids,
    /// `RotationSection`.
    Rotations,
    /// `LogicalPartSection`.
    LogicalParts,
    /// `PosPartSection`.
    Placements,
    /// Structure-topology `SpecParSection`.
    Topology,
    /// Sensitive-detector `SpecParSection`.
    SensitiveRegions,
    /// Production-cuts `SpecParSection`.
    ProductionCuts,
    /// Reconstruction-material `SpecParSection`.
    RecoMaterial,
}

impl Section {
    /// Node name of the section.
    #[must_use]
    pub fn node_name(self) -> &'static str {
        match self {
            Self::Constants => "ConstantsSection",
            Self::Materials => "MaterialSection",
            Self::Solids => "SolidSection",
            Self::Rotations => "RotationSection",
            Self::LogicalParts => "LogicalPartSection",
            Self::Placements => "PosPartSection",
            Self::Topology
            | Self::SensitiveRegions
            | Self::ProductionCuts
            | Self::RecoMaterial => "SpecParSection",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constants => "constants",
            Self::Materials => "materials",
            Self::Solids => "solids",
            Self::Rotations => "rotations",
            Self::LogicalParts => "logical parts",
            Self::Placements => "placements",
            Self::Topology => "structure topology",
            Self::SensitiveRegions => "sensitive regions",
            Self::ProductionCuts => "production cuts",
            Self::RecoMaterial => "reconstruction material",
        };
        f.write_str(name)
    }
}

/// Malformed input found while building one section.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{section} section, entity '{entity}': {message}")]
pub struct BuildError {
    /// Section being built.
    pub section: Section,
    /// Identifier of the offending entity.
    pub entity: String,
    /// What is wrong with it.
    pub message: String,
}

impl BuildError {
    /// Create a build error.
    pub fn new(section: Section, entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            section,
            entity: entity.into(),
            message: message.into(),
        }
    }

    /// A reference that does not resolve within the document.
    pub fn unresolved(
        section: Section,
        entity: impl Into<String>,
        what: &str,
        reference: &str,
    ) -> Self {
        Self::new(
            section,
            entity,
            format!("unresolved {what} reference '{reference}'"),
        )
    }

    /// A name declared twice within the document.
    pub fn duplicate(section: Section, entity: impl Into<String>) -> Self {
        Self::new(section, entity, "declared more than once")
    }
}

/// Result type for section builders.
pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// Errors raised by a subsystem translation.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A document could not be built from the bundle.
    #[error("{subsystem}: failed to build {document}: {source}")]
    Build {
        /// Subsystem being translated.
        subsystem: Subsystem,
        /// Document being built.
        document: DocumentKind,
        /// Underlying problem.
        #[source]
        source: BuildError,
    },

    /// A document could not be written to the staging area.
    #[error("{subsystem}: failed to write {document} to '{}': {source}", path.display())]
    Write {
        /// Subsystem being translated.
        subsystem: Subsystem,
        /// Document being written.
        document: DocumentKind,
        /// Staging path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Moving staged documents into the output directory failed; prior files were restored.
    #[error("{subsystem}: failed to commit '{}': {source}", path.display())]
    Commit {
        /// Subsystem being translated.
        subsystem: Subsystem,
        /// File that could not be moved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Other file-system error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranslateError {
    /// The section-level error, if this is a build failure.
    #[must_use]
    pub fn build_error(&self) -> Option<&BuildError> {
        match self {
            Self::Build { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for translations.
pub type Result<T> = std::result::Result<T, TranslateError>;
