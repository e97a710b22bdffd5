//! Hydraulic conductance scaling
//!
//! Stem conductance per unit leaf area from xylem conductivity, path length
//! and the leaf-to-sapwood area ratio, with optional conduit-taper
//! compensation (Savage et al. 2010). Whole-plant conductance is the
//! harmonic sum of the leaf, stem and root segments.

use super::constants::WATER_MOLAR_MASS_KG;

/// Savage et al. (2010) taper exponent: with tapering conduits, whole-path
/// conductance declines as height^(-1/3) instead of height^(-1).
const TAPER_EXPONENT: f64 = 2.0 / 3.0;

/// Maximum stem hydraulic conductance per unit leaf area
/// (mmol · m-2 leaf · s-1 · MPa-1)
///
/// # Arguments
/// * `xylem_conductivity` - Sapwood-specific conductivity (kg·m-1·s-1·MPa-1)
/// * `reference_height` - Species median height (cm) at which the
///   conductivity was measured; anchors the taper correction
/// * `al2as` - Leaf area per unit sapwood area (m2·m-2)
/// * `height` - Plant height (cm)
/// * `taper` - Apply conduit-taper compensation
pub fn maximum_stem_hydraulic_conductance(
    xylem_conductivity: f64,
    reference_height: f64,
    al2as: f64,
    height: f64,
    taper: bool,
) -> f64 {
    if height <= 0.0 || al2as <= 0.0 {
        return 0.0;
    }
    let height_m = height / 100.0;
    // kg water -> mmol, per metre of path, per m2 of leaf
    let kmax = (1000.0 / WATER_MOLAR_MASS_KG) * xylem_conductivity / (height_m * al2as);
    if taper && reference_height > 0.0 {
        kmax * (height / reference_height).powf(TAPER_EXPONENT)
    } else {
        kmax
    }
}

/// Whole-plant conductance as the harmonic sum of segment conductances
///
/// Zero if any segment has no conductance (infinite resistance).
pub fn whole_plant_conductance(k_leaf: f64, k_stem: f64, k_root: f64) -> f64 {
    if k_leaf <= 0.0 || k_stem <= 0.0 || k_root <= 0.0 {
        return 0.0;
    }
    1.0 / (1.0 / k_leaf + 1.0 / k_stem + 1.0 / k_root)
}
