//! CMSSW detector-description output for tracker material budgets.
//!
//! This crate turns a [`tracker_types::Bundle`] into the XML documents the
//! CMSSW detector description reads:
//!
//! - **Outer tracker** - one geometry document
//! - **Inner pixel** - geometry, structure topology, sensitive regions,
//!   production cuts and reconstruction material
//!
//! A subsystem is translated all-or-nothing. Every document is built in
//! memory first; only when all of them succeed are they staged and moved into
//! the output directory, replacing the previous files.
//!
//! # Example
//!
//! ```no_run
//! use tracker_cmssw::{Subsystem, Translator, TranslatorConfig};
//! use tracker_types::{Bundle, Element};
//!
//! let bundle = Bundle::new().with_element(Element::new("Si", 14, 28.09, 2.33));
//! let config = TranslatorConfig::new("xml");
//! let output_dir = config.output_dir("phase2");
//!
//! let report = Translator::new(config)
//!     .translate(Subsystem::OuterTracker, &bundle, &output_dir)
//!     .unwrap();
//! assert_eq!(report.files.len(), 1);
//! ```
//!
//! # Inspecting documents
//!
//! [`Translator::build`] returns the document trees without writing
//! anything, and [`XmlDocumentWriter::to_xml_string`] renders one of them:
//!
//! ```
//! use tracker_cmssw::{Subsystem, Translator, TranslatorConfig, XmlDocumentWriter};
//! use tracker_types::{Bundle, Element};
//!
//! let bundle = Bundle::new().with_element(Element::new("Si", 14, 28.09, 2.33));
//! let documents = Translator::new(TranslatorConfig::default())
//!     .build(Subsystem::InnerPixel, &bundle)
//!     .unwrap();
//!
//! let xml = XmlDocumentWriter::default().to_xml_string(&documents[0].root).unwrap();
//! assert!(xml.contains(r#"atomicWeight="28.09*g/mole""#));
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`TranslatorConfig`] and the
//!   bundle types.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions)]

pub mod classify;
mod commit;
mod config;
mod diagnostic;
mod document;
mod engine;
mod error;
pub mod format;
mod sections;
mod validation;
mod writer;

pub use config::{DetectorNames, GeometryLabels, OutputFiles, SectionLabels, TranslatorConfig};
pub use diagnostic::describe_bundle;
pub use document::{DocNode, DDL_NAMESPACE, DDL_SCHEMA_LOCATION, XSI_NAMESPACE};
pub use engine::{BuiltDocument, DocumentKind, Subsystem, TranslationReport, Translator};
pub use error::{BuildError, BuildResult, Result, Section, TranslateError};
pub use sections::fixed_rotations;
pub use writer::{DocumentWriter, XmlDocumentWriter};
