use tracker_types::SpecParInfo;

use crate::classify::{classify, module_selector, RegionClass};
use crate::config::DetectorNames;
use crate::document::DocNode;
use crate::error::Section;

use super::{open_section, parameter, part_selector, spec_par};

/// Module selectors gathered by the topology pass, in descriptor order.
///
/// Entries are namespace-qualified module names with the fixed suffix removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ModuleSelectors {
    pub(crate) barrel: Vec<String>,
    pub(crate) endcap: Vec<String>,
}

/// Append the structure-topology section and collect module selectors.
///
/// Generic descriptors come first, then module descriptors with their readout
/// geometry.
pub(crate) fn write_topology(
    root: &mut DocNode,
    specs: &[SpecParInfo],
    names: &DetectorNames,
) -> ModuleSelectors {
    let section = open_section(root, Section::Topology, &names.specpars_label);

    let full = spec_par(section, "FullTrackerPar");
    part_selector(full, "//Tracker");
    parameter(full, "TkDDDStructure", "FullTracker");

    for spec in specs.iter().filter(|s| !classify(&s.name).is_module()) {
        write_descriptor(section, spec);
    }

    let mut selectors = ModuleSelectors::default();
    for spec in specs {
        match classify(&spec.name) {
            RegionClass::Generic => continue,
            RegionClass::BarrelModule => selectors
                .barrel
                .push(module_selector(&names.namespace, &spec.name)),
            RegionClass::EndcapModule => selectors
                .endcap
                .push(module_selector(&names.namespace, &spec.name)),
            RegionClass::OtherModule => {
                tracing::warn!(
                    spec = %spec.name,
                    "module descriptor names neither barrel nor endcap, not selected as sensitive"
                );
            }
        }

        let node = write_descriptor(section, spec);
        for readout in &spec.module_types {
            parameter(node, "PixelROCRows", &readout.roc_rows.to_string());
            parameter(node, "PixelROCCols", &readout.roc_cols.to_string());
            parameter(node, "PixelROC_X", &readout.roc_x.to_string());
            parameter(node, "PixelROC_Y", &readout.roc_y.to_string());
        }
    }

    tracing::debug!(
        barrel = selectors.barrel.len(),
        endcap = selectors.endcap.len(),
        "collected module selectors"
    );
    selectors
}

fn write_descriptor<'a>(section: &'a mut DocNode, spec: &SpecParInfo) -> &'a mut DocNode {
    let node = spec_par(section, &spec.name);
    for path in &spec.part_selectors {
        part_selector(node, &format!("//{path}"));
    }
    parameter(node, &spec.parameter.name, &spec.parameter.value);
    node
}
