use std::collections::HashMap;

use tracker_types::{Bundle, DetectorRegion, RadLenInfo};

use crate::classify::{in_layer, in_ring_of_disc};
use crate::config::DetectorNames;
use crate::document::DocNode;
use crate::error::{BuildResult, Section};
use crate::format::format_exact;
use crate::validation;

use super::{open_section, parameter, part_selector, spec_par};

/// Append the reconstruction-material section.
///
/// One descriptor per barrel layer, then one per declared disc. A descriptor
/// without a length record carries no length parameters.
pub(crate) fn write_reco_material(
    root: &mut DocNode,
    bundle: &Bundle,
    names: &DetectorNames,
) -> BuildResult<()> {
    validation::check_radiation_lengths(bundle)?;

    let lengths: HashMap<(DetectorRegion, u32), &RadLenInfo> = bundle
        .radiation_lengths
        .iter()
        .map(|r| ((r.region, r.index), r))
        .collect();
    let layout = &bundle.reco_layout;
    let section = open_section(root, Section::RecoMaterial, &names.recomat_label);

    for layer in 1..=layout.barrel_layers {
        let name = format!(
            "TrackerRecMaterial{}{}{layer}",
            names.barrel, names.layer_token
        );
        let spec = spec_par(section, &name).attr("eval", "true");
        for path in layout
            .barrel_paths
            .iter()
            .filter(|p| in_layer(p, &names.layer_token, layer))
        {
            part_selector(spec, path);
        }
        write_lengths(spec, lengths.get(&(DetectorRegion::Barrel, layer)), names);
    }

    for disc in &layout.discs {
        let name = format!(
            "TrackerRecMaterial{}{}{}Fw",
            names.endcap, names.disk_token, disc.disc
        );
        let spec = spec_par(section, &name).attr("eval", "true");
        for ring in 1..=disc.rings {
            for path in layout
                .endcap_paths
                .iter()
                .filter(|p| in_ring_of_disc(p, ring, disc.disc))
            {
                part_selector(spec, path);
            }
        }
        write_lengths(spec, lengths.get(&(DetectorRegion::Endcap, disc.disc)), names);
    }
    Ok(())
}

fn write_lengths(spec: &mut DocNode, record: Option<&&RadLenInfo>, names: &DetectorNames) {
    let Some(record) = record else {
        tracing::debug!(
            spec = spec.attribute("name").unwrap_or_default(),
            "no length record"
        );
        return;
    };
    parameter(
        spec,
        &names.radiation_length_parameter,
        &format_exact(record.radiation_length),
    );
    parameter(spec, &names.xi_parameter, &format_exact(record.interaction_length));
}
