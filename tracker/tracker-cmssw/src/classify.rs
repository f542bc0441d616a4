//! Name- and path-based classification.
//!
//! Region descriptors carry their role only in their names, and
//! reconstruction-material paths carry their layer or disc only as a token
//! inside the path. Every substring rule used by the builders lives here.

/// Role of a region descriptor, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionClass {
    /// No `Module` token; emitted in the generic topology pass.
    Generic,
    /// Contains `Module` and `BModule`.
    BarrelModule,
    /// Contains `Module` and `EModule` but not `BModule`.
    EndcapModule,
    /// Contains `Module` but neither region token.
    OtherModule,
}

impl RegionClass {
    /// True for every class emitted in the module pass.
    #[must_use]
    pub fn is_module(self) -> bool {
        !matches!(self, Self::Generic)
    }
}

const MODULE_TOKEN: &str = "Module";
const BARREL_MODULE_TOKEN: &str = "BModule";
const ENDCAP_MODULE_TOKEN: &str = "EModule";

/// Number of trailing characters removed from a module name to obtain its selector.
pub const MODULE_SUFFIX_LEN: usize = 3;

/// Classify a region descriptor by name.
#[must_use]
pub fn classify(name: &str) -> RegionClass {
    if !name.contains(MODULE_TOKEN) {
        RegionClass::Generic
    } else if name.contains(BARREL_MODULE_TOKEN) {
        RegionClass::BarrelModule
    } else if name.contains(ENDCAP_MODULE_TOKEN) {
        RegionClass::EndcapModule
    } else {
        RegionClass::OtherModule
    }
}

/// Selector for a module descriptor: namespace-qualified name without its fixed suffix.
///
/// Names shorter than the suffix lose everything after the namespace.
#[must_use]
pub fn module_selector(namespace: &str, name: &str) -> String {
    let keep = name.chars().count().saturating_sub(MODULE_SUFFIX_LEN);
    let mut selector = String::with_capacity(namespace.len() + name.len());
    selector.push_str(namespace);
    selector.extend(name.chars().take(keep));
    selector
}

/// True if `path` belongs to barrel layer `layer`.
#[must_use]
pub fn in_layer(path: &str, layer_token: &str, layer: u32) -> bool {
    path.contains(&format!("{layer_token}{layer}"))
}

/// True if `path` belongs to ring `ring` of endcap disc `disc`.
#[must_use]
pub fn in_ring_of_disc(path: &str, ring: u32, disc: u32) -> bool {
    path.contains(&format!("Ring{ring}Disc{disc}"))
}
