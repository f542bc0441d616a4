//! End-to-end translation tests.
//!
//! Each test translates a bundle into a temporary directory and inspects
//! either the committed files or the in-memory documents.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use tracker_cmssw::{
    DocNode, DocumentKind, DocumentWriter, Section, Subsystem, TranslateError, Translator,
    TranslatorConfig, XmlDocumentWriter,
};
use tracker_types::{
    Algorithm, Bundle, Composite, DiscRings, Element, LogicalPart, ModuleReadout, Placement,
    RadLenInfo, RecoLayout, Shape, SpecParInfo, SpecParameter, VectorParameter,
};

// =============================================================================
// Fixtures
// =============================================================================

fn pixel_bundle() -> Bundle {
    let readout = ModuleReadout {
        roc_rows: 160,
        roc_cols: 416,
        roc_x: 2,
        roc_y: 8,
    };
    Bundle::new()
        .with_element(Element::new("Si", 14, 28.09, 2.33))
        .with_element(Element::new("C", 6, 12.01, 2.265))
        .with_composite(
            Composite::new("SenSi", 2.3456)
                .with_fraction("Si", 0.95)
                .with_fraction("C", 0.05),
        )
        .with_shape(Shape::tube("Layer1", 28.0, 32.0, 372.5))
        .with_shape(Shape::cuboid("BModule1Layer1", 8.2, 32.6, 0.15))
        .with_logical_part(LogicalPart::new("Layer1", "pixel:Layer1", "materials:Air"))
        .with_logical_part(LogicalPart::new(
            "BModule1Layer1",
            "pixel:BModule1Layer1",
            "pixel:SenSi",
        ))
        .with_placement(Placement::new("pixbar:PixelBarrel", "pixel:Layer1"))
        .with_placement(
            Placement::new("pixel:Layer1", "pixel:BModule1Layer1")
                .with_rotation("pixel:HCZ2YX")
                .with_translation(29.5, 0.0, -33.0)
                .with_copy(2),
        )
        .with_algorithm(
            Algorithm::new("track:DDTrackerPhiAlgo", "pixel:Layer1")
                .with_string("ChildName", "pixel:BModule1Layer1")
                .with_numeric("N", "12")
                .with_vector(VectorParameter::new(
                    "Phi",
                    "numeric",
                    vec!["0*deg".into(), "30*deg".into()],
                )),
        )
        .with_spec(
            SpecParInfo::new(
                "PixelBarrelPar",
                SpecParameter::new("TkDDDStructure", "PixelPhase2Barrel"),
            )
            .with_selector("pixbar:PixelBarrel"),
        )
        .with_spec(
            SpecParInfo::new(
                "BModule1Layer1Par",
                SpecParameter::new("TkDDDStructure", "PixelPhase2FullModule"),
            )
            .with_selector("pixel:BModule1Layer1")
            .with_module_type(readout),
        )
        .with_spec(
            SpecParInfo::new(
                "EModule1Disc1Par",
                SpecParameter::new("TkDDDStructure", "PixelPhase2FullModule"),
            )
            .with_selector("pixel:EModule1Disc1")
            .with_module_type(readout),
        )
        .with_reco_layout(RecoLayout {
            barrel_paths: vec![
                "pixbar:Layer1/pixel:BModule1Layer1".into(),
                "pixbar:Layer2/pixel:BModule1Layer2".into(),
            ],
            endcap_paths: vec!["pixfwd:Ring1Disc1/pixel:EModule1Disc1".into()],
            barrel_layers: 2,
            discs: vec![DiscRings { disc: 1, rings: 1 }],
        })
        .with_radiation_length(RadLenInfo::barrel(1, 0.0175, 0.0042))
        .with_radiation_length(RadLenInfo::barrel(2, 0.0181, 0.0044))
        .with_radiation_length(RadLenInfo::endcap(1, 0.021, 0.005))
}

fn translator() -> Translator {
    Translator::new(TranslatorConfig::default())
}

/// File names and contents of every entry in `dir`.
fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            (
                entry.file_name().to_string_lossy().into_owned(),
                fs::read(entry.path()).unwrap(),
            )
        })
        .collect()
}

fn document(documents: &[tracker_cmssw::BuiltDocument], kind: DocumentKind) -> &DocNode {
    &documents.iter().find(|d| d.kind == kind).unwrap().root
}

/// Writer that fails for one file name and delegates otherwise.
struct FailingWriter {
    fail_on: &'static str,
}

impl DocumentWriter for FailingWriter {
    fn write(&self, document: &DocNode, path: &Path) -> io::Result<()> {
        if path.file_name().is_some_and(|n| n == self.fail_on) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "disk says no"));
        }
        XmlDocumentWriter::default().write(document, path)
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn single_element_materials_section() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("xml");
    let bundle = Bundle::new().with_element(Element::new("Si", 14, 28.09, 2.33));

    let report = translator()
        .translate(Subsystem::OuterTracker, &bundle, &out)
        .unwrap();
    assert_eq!(report.files, [out.join("tracker_test.xml")]);
    assert_eq!(report.replaced, 0);

    let xml = fs::read_to_string(out.join("tracker_test.xml")).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert_eq!(xml.matches("<ElementaryMaterial ").count(), 1);
    assert!(xml.contains(
        r#"<ElementaryMaterial name="Si" symbol="Si" atomicNumber="14" atomicWeight="28.09*g/mole" density="2.33*g/cm3"/>"#
    ));
    assert!(!xml.contains("<CompositeMaterial"));
    assert!(xml.contains(r#"<Constant name="BackPlaneDz" value="0.015*mm"/>"#));
}

#[test]
fn two_barrel_layers_get_two_lengths_each() {
    let bundle = Bundle::new()
        .with_reco_layout(RecoLayout {
            barrel_paths: vec!["pixbar:Layer1/A".into(), "pixbar:Layer2/B".into()],
            barrel_layers: 2,
            ..Default::default()
        })
        .with_radiation_length(RadLenInfo::barrel(1, 0.0175, 0.0042))
        .with_radiation_length(RadLenInfo::barrel(2, 0.0181, 0.0044));

    let documents = translator().build(Subsystem::InnerPixel, &bundle).unwrap();
    let section = document(&documents, DocumentKind::RecoMaterial)
        .first_child("SpecParSection")
        .unwrap();

    let specs: Vec<_> = section.children_named("SpecPar").collect();
    assert_eq!(specs.len(), 2);
    for spec in &specs {
        assert_eq!(spec.children_named("Parameter").count(), 2);
    }

    let radlen = specs[1]
        .children_named("Parameter")
        .find(|p| p.attribute("name") == Some("TrackerRadLength"))
        .and_then(|p| p.attribute("value"))
        .unwrap();
    assert_relative_eq!(radlen.parse::<f64>().unwrap(), 0.0181);
}

#[test]
fn pixel_documents_written() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("xml").join("phase2");

    let report = translator()
        .translate(Subsystem::InnerPixel, &pixel_bundle(), &out)
        .unwrap();
    assert_eq!(report.files.len(), 5);

    let files: Vec<_> = snapshot(&out).into_keys().collect();
    assert_eq!(
        files,
        [
            "pixelProdCuts_test.xml",
            "pixelRecoMaterial_test.xml",
            "pixelStructureTopology_test.xml",
            "pixel_test.xml",
            "pixelsens_test.xml",
        ]
    );

    let geometry = fs::read_to_string(out.join("pixel_test.xml")).unwrap();
    assert!(geometry.contains(r#"<CompositeMaterial name="SenSi" density="2.35*g/cm3" method="mixture by weight">"#));
    assert!(geometry.contains(r#"<rMaterial name="pixel:Si"/>"#));
    assert!(geometry.contains(r#"<Translation x="29.5*mm" y="0*mm" z="-33*mm"/>"#));
    assert!(geometry.contains(r#"<Vector name="Phi" type="numeric" nEntries="2">0*deg,30*deg</Vector>"#));
    assert!(!geometry.contains("ConstantsSection"));

    let sensitive = fs::read_to_string(out.join("pixelsens_test.xml")).unwrap();
    assert!(sensitive.contains(r#"<PartSelector path="//pixel:BModule1Layer1"/>"#));
    assert!(sensitive.contains(r#"<PartSelector path="//pixel:EModule1Disc1"/>"#));

    let cuts = fs::read_to_string(out.join("pixelProdCuts_test.xml")).unwrap();
    assert!(cuts.contains(r#"<SpecParSection label="trackerProdCuts.xml" eval="true">"#));
}

#[test]
fn untranslated_placement_has_no_translation_node() {
    let documents = translator()
        .build(Subsystem::InnerPixel, &pixel_bundle())
        .unwrap();
    let placements = document(&documents, DocumentKind::Geometry)
        .first_child("PosPartSection")
        .unwrap();

    let pos: Vec<_> = placements.children_named("PosPart").collect();
    assert!(pos[0].first_child("Translation").is_none());
    assert!(pos[0].first_child("rRotation").is_none());
    assert!(pos[1].first_child("Translation").is_some());
    assert_eq!(pos[1].attribute("copyNumber"), Some("2"));
}

#[test]
fn module_specs_only_in_module_pass() {
    let documents = translator()
        .build(Subsystem::InnerPixel, &pixel_bundle())
        .unwrap();
    let topology = document(&documents, DocumentKind::StructureTopology)
        .first_child("SpecParSection")
        .unwrap();
    let names: Vec<_> = topology
        .children_named("SpecPar")
        .filter_map(|s| s.attribute("name"))
        .collect();
    assert_eq!(
        names,
        [
            "FullTrackerPar",
            "PixelBarrelPar",
            "BModule1Layer1Par",
            "EModule1Disc1Par"
        ]
    );
}

// =============================================================================
// Commit behaviour
// =============================================================================

#[test]
fn rerun_is_byte_identical() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("xml");
    let translator = translator();

    translator
        .translate(Subsystem::InnerPixel, &pixel_bundle(), &out)
        .unwrap();
    let first = snapshot(&out);

    let report = translator
        .translate(Subsystem::InnerPixel, &pixel_bundle(), &out)
        .unwrap();
    assert_eq!(report.replaced, 5);
    assert_eq!(snapshot(&out), first);
}

#[test]
fn failed_reco_build_leaves_output_untouched() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("xml");
    translator()
        .translate(Subsystem::InnerPixel, &pixel_bundle(), &out)
        .unwrap();
    let before = snapshot(&out);

    // Layer 7 does not exist in the layout.
    let broken = pixel_bundle().with_radiation_length(RadLenInfo::barrel(7, 0.1, 0.1));
    let err = translator()
        .translate(Subsystem::InnerPixel, &broken, &out)
        .unwrap_err();

    match &err {
        TranslateError::Build {
            subsystem,
            document,
            source,
        } => {
            assert_eq!(*subsystem, Subsystem::InnerPixel);
            assert_eq!(*document, DocumentKind::RecoMaterial);
            assert_eq!(source.section, Section::RecoMaterial);
            assert_eq!(source.entity, "barrel 7");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(snapshot(&out), before);
    let leftovers: Vec<PathBuf> = fs::read_dir(root.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(leftovers, [out]);
}

#[test]
fn failed_build_creates_nothing() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("xml");
    let broken = pixel_bundle().with_shape(Shape::cuboid("Layer1", 1.0, 1.0, 1.0));

    let err = translator()
        .translate(Subsystem::InnerPixel, &broken, &out)
        .unwrap_err();
    assert_eq!(err.build_error().map(|e| e.section), Some(Section::Solids));
    assert!(!out.exists());
}

#[test]
fn failed_write_leaves_output_untouched() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("xml");
    translator()
        .translate(Subsystem::InnerPixel, &pixel_bundle(), &out)
        .unwrap();
    let before = snapshot(&out);

    let changed = pixel_bundle().with_element(Element::new("O", 8, 15.999, 0.001_43));
    let err = translator()
        .with_writer(FailingWriter {
            fail_on: "pixelProdCuts_test.xml",
        })
        .translate(Subsystem::InnerPixel, &changed, &out)
        .unwrap_err();

    match &err {
        TranslateError::Write { document, .. } => {
            assert_eq!(*document, DocumentKind::ProductionCuts);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(snapshot(&out), before);
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
}

#[test]
fn unrelated_files_survive_commit() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("xml");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("notes.txt"), "keep me").unwrap();

    translator()
        .translate(Subsystem::OuterTracker, &pixel_bundle(), &out)
        .unwrap();
    assert_eq!(fs::read_to_string(out.join("notes.txt")).unwrap(), "keep me");
    assert!(out.join("tracker_test.xml").exists());
}

#[cfg(unix)]
#[test]
fn read_only_parent_with_writable_output() {
    use std::os::unix::fs::PermissionsExt;

    let root = tempfile::tempdir().unwrap();
    let shared = root.path().join("shared");
    let out = shared.join("phase2");
    fs::create_dir_all(&out).unwrap();
    fs::set_permissions(&out, fs::Permissions::from_mode(0o777)).unwrap();
    fs::set_permissions(&shared, fs::Permissions::from_mode(0o555)).unwrap();

    let result = translator().translate(Subsystem::OuterTracker, &pixel_bundle(), &out);
    let shared_entries: Vec<_> = fs::read_dir(&shared)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    fs::set_permissions(&shared, fs::Permissions::from_mode(0o755)).unwrap();

    let report = result.unwrap();
    assert_eq!(report.files, [out.join("tracker_test.xml")]);
    assert_eq!(shared_entries, ["phase2"]);
    assert_eq!(snapshot(&out).keys().collect::<Vec<_>>(), ["tracker_test.xml"]);
}

#[test]
fn compact_output_without_indentation() {
    let config = TranslatorConfig::default().with_indent(0);
    let documents = Translator::new(config.clone())
        .build(Subsystem::OuterTracker, &pixel_bundle())
        .unwrap();
    let xml = XmlDocumentWriter::new(config.indent)
        .to_xml_string(&documents[0].root)
        .unwrap();
    assert_eq!(xml.lines().count(), 1);
}
