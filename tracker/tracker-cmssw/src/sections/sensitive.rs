use crate::config::DetectorNames;
use crate::document::DocNode;
use crate::error::Section;

use super::{open_section, parameter, part_selector, spec_par, ModuleSelectors};

const SENSITIVE_DETECTOR: &str = "TkAccumulatingSensitiveDetector";

/// Append the sensitive-detector section: one descriptor for the barrel, one for the endcap.
pub(crate) fn write_sensitive_regions(
    root: &mut DocNode,
    selectors: &ModuleSelectors,
    names: &DetectorNames,
) {
    let section = open_section(root, Section::SensitiveRegions, &names.specpars_label);
    write_region(section, &names.barrel, &selectors.barrel);
    write_region(section, &names.endcap, &selectors.endcap);
}

fn write_region(section: &mut DocNode, label: &str, selectors: &[String]) {
    let spec = spec_par(section, &format!("ROUHitsTracker{label}"));
    for selector in selectors {
        part_selector(spec, &format!("//{selector}"));
    }
    parameter(spec, "SensitiveDetector", SENSITIVE_DETECTOR);
    parameter(spec, "ReadOutName", &format!("TrackerHits{label}"));
}
