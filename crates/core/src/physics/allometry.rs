//! Per-individual geometry, storage volumes and structural biomass
//!
//! Cohorts carry stand-level geometry (LAI, density) and individual-level
//! geometry (sapwood area, height). These helpers convert between the two
//! and derive the storage volumes, starch capacities and construction costs
//! the daily engine needs. All guards return zero flux rather than erroring.
//!
//! Units: LAI m2·m-2, density ind·ha-1, SLA m2·kg-1, tissue densities
//! g·cm-3, height cm, rooting depth mm, sapwood area cm2, leaf area m2,
//! volumes litres, biomass g dry weight.

use super::constants::{
    CONDUIT_TO_SAPWOOD, GLUCOSE_MOLAR_MASS, LEAF_CONSTRUCTION_COST, LEAF_STARCH_DRY_FRACTION,
    SAPWOOD_CONSTRUCTION_COST, SAPWOOD_STARCH_DRY_FRACTION, WOOD_MATRIX_DENSITY,
};

/// Leaf area of one individual (m2) from cohort LAI and density
pub fn leaf_area_per_individual(lai: f64, density: f64) -> f64 {
    if density <= 0.0 {
        return 0.0;
    }
    10_000.0 * lai / density
}

/// Leaf structural dry biomass of one individual (g)
pub fn leaf_structural_biomass(lai: f64, density: f64, sla: f64) -> f64 {
    if sla <= 0.0 {
        return 0.0;
    }
    1000.0 * leaf_area_per_individual(lai, density) / sla
}

/// Symplastic water storage volume of the leaves of one individual (l)
///
/// Leaf volume per unit area is the leaf mass per area divided by the leaf
/// tissue density.
pub fn leaf_storage_volume(lai: f64, density: f64, sla: f64, leaf_density: f64) -> f64 {
    if sla <= 0.0 || leaf_density <= 0.0 {
        return 0.0;
    }
    leaf_area_per_individual(lai, density) / (sla * leaf_density)
}

/// Total sapwood volume of one individual (l)
///
/// Sapwood cross-section times the water transport path: height plus the
/// rooting depth (mm converted to cm).
pub fn sapwood_volume(sapwood_area: f64, height: f64, rooting_depth: f64) -> f64 {
    1e-3 * sapwood_area * (height + rooting_depth / 10.0)
}

/// Symplastic water storage volume of the sapwood of one individual (l)
///
/// Excludes dead conduits and the solid wood matrix.
pub fn sapwood_storage_volume(
    sapwood_area: f64,
    height: f64,
    rooting_depth: f64,
    wood_density: f64,
) -> f64 {
    (1.0 - CONDUIT_TO_SAPWOOD)
        * sapwood_volume(sapwood_area, height, rooting_depth)
        * (1.0 - wood_density / WOOD_MATRIX_DENSITY)
}

/// Living (parenchyma) sapwood dry biomass of one individual (g)
pub fn sapwood_living_biomass(
    sapwood_area: f64,
    height: f64,
    rooting_depth: f64,
    wood_density: f64,
) -> f64 {
    (1.0 - CONDUIT_TO_SAPWOOD)
        * 1000.0
        * sapwood_volume(sapwood_area, height, rooting_depth)
        * wood_density
}

/// Maximum leaf starch storage (mol glucose equivalents per individual)
pub fn leaf_starch_capacity(lai: f64, density: f64, sla: f64) -> f64 {
    LEAF_STARCH_DRY_FRACTION * leaf_structural_biomass(lai, density, sla) / GLUCOSE_MOLAR_MASS
}

/// Maximum sapwood starch storage (mol glucose equivalents per individual)
pub fn sapwood_starch_capacity(
    sapwood_area: f64,
    height: f64,
    rooting_depth: f64,
    wood_density: f64,
) -> f64 {
    SAPWOOD_STARCH_DRY_FRACTION
        * sapwood_living_biomass(sapwood_area, height, rooting_depth, wood_density)
        / GLUCOSE_MOLAR_MASS
}

/// Construction cost of new leaf area (g glucose · m-2)
pub fn leaf_cost_per_area(sla: f64) -> f64 {
    1000.0 * LEAF_CONSTRUCTION_COST / sla
}

/// Construction cost of new sapwood area (g glucose · cm-2)
///
/// New sapwood rings run the whole transport path, so the cost per unit of
/// cross-section scales with height plus rooting depth.
pub fn sapwood_cost_per_area(height: f64, rooting_depth: f64, wood_density: f64) -> f64 {
    SAPWOOD_CONSTRUCTION_COST * (height + rooting_depth / 10.0) * wood_density
}
