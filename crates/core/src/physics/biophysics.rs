//! Osmotic relations and sap viscosity
//!
//! Sugar concentrations are expressed in mol glucose per litre of symplastic
//! water at full hydration. Osmotic potentials follow the van't Hoff relation
//! with a fixed non-sugar solute background supplied by the caller.

use super::constants::{CELSIUS_TO_KELVIN, GAS_CONSTANT_MPA, GLUCOSE_MOLAR_MASS};

/// Osmotic water potential (MPa) of a sugar solution
///
/// Van't Hoff: `psi_osm = -(c_sugar + c_nonsugar) * R * T`
///
/// # Arguments
/// * `sugar_conc` - Sugar concentration (mol·l-1)
/// * `temperature` - Temperature (°C)
/// * `non_sugar_conc` - Non-sugar osmolyte background (mol·l-1)
pub fn osmotic_water_potential(sugar_conc: f64, temperature: f64, non_sugar_conc: f64) -> f64 {
    -(sugar_conc + non_sugar_conc) * GAS_CONSTANT_MPA * (temperature + CELSIUS_TO_KELVIN)
}

/// Sugar concentration (mol·l-1) implied by an osmotic potential
///
/// Inverse of [`osmotic_water_potential`]; used to seed storage pools from
/// trait full-turgor osmotic potentials.
pub fn sugar_concentration(osmotic_wp: f64, temperature: f64, non_sugar_conc: f64) -> f64 {
    -osmotic_wp / (GAS_CONSTANT_MPA * (temperature + CELSIUS_TO_KELVIN)) - non_sugar_conc
}

/// Turgor pressure (MPa) of a symplastic compartment
///
/// Difference between total water potential and osmotic potential, floored at
/// zero (cells cannot sustain negative turgor).
pub fn turgor(psi: f64, sugar_conc: f64, temperature: f64, non_sugar_conc: f64) -> f64 {
    (psi - osmotic_water_potential(sugar_conc, temperature, non_sugar_conc)).max(0.0)
}

/// Relative viscosity of sap with respect to pure water at the same
/// temperature (dimensionless, >= 1)
///
/// Empirical fit for glucose solutions (Forst et al. 2002): viscosity grows
/// exponentially with solute mass fraction and relaxes with temperature.
///
/// # Arguments
/// * `conc` - Sugar concentration (mol·l-1)
/// * `temperature` - Temperature (°C)
pub fn relative_sap_viscosity(conc: f64, temperature: f64) -> f64 {
    // mol·l-1 to kg solute per litre of sap
    let x = conc.max(0.0) * GLUCOSE_MOLAR_MASS / 1e3;
    let tk = temperature + CELSIUS_TO_KELVIN;
    (x * (-1.5018 + 2.9593e3 / tk)).exp()
}
