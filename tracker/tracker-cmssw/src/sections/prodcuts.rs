use crate::config::DetectorNames;
use crate::document::DocNode;
use crate::error::Section;

use super::{open_section, parameter, part_selector, spec_par, ModuleSelectors};

const DEAD_REGION_CUT: &str = "1*mm";
const SENSITIVE_REGION_CUT: &str = "0.01*mm";

/// Append the production-cuts section: the dead pixel region, then the sensitive one.
pub(crate) fn write_production_cuts(
    root: &mut DocNode,
    selectors: &ModuleSelectors,
    names: &DetectorNames,
) {
    let section = open_section(root, Section::ProductionCuts, &names.prodcuts_label);
    section.attr("eval", "true");

    let dead = spec_par(section, "tracker-dead-pixel");
    part_selector(dead, &format!("//pixbar:{}", names.barrel));
    part_selector(dead, &format!("//pixfwd:{}", names.endcap));
    write_cuts(dead, "TrackerPixelDeadRegion", DEAD_REGION_CUT);

    let sensitive = spec_par(section, "tracker-sens-pixel");
    for selector in selectors.barrel.iter().chain(&selectors.endcap) {
        part_selector(sensitive, &format!("//{selector}"));
    }
    write_cuts(sensitive, "TrackerPixelSensRegion", SENSITIVE_REGION_CUT);
}

fn write_cuts(spec: &mut DocNode, region: &str, cut: &str) {
    parameter(spec, "CMSCutsRegion", region).attr("eval", "false");
    parameter(spec, "ProdCutsForElectrons", cut);
    parameter(spec, "ProdCutsForPositrons", cut);
    parameter(spec, "ProdCutsForGamma", cut);
}
