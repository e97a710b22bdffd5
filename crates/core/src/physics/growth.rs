//! Instantaneous growth and respiration limitation factors

use super::constants::Q10_RESPIRATION;

/// Temperature limitation of tissue growth, in [0, 1]
///
/// Parabolic response with floor 5 °C, ceiling 40 °C and optimum 25 °C;
/// zero outside the [5, 40] range.
pub fn temperature_growth_factor(temperature: f64) -> f64 {
    const T_LOW: f64 = 5.0;
    const T_HIGH: f64 = 40.0;
    const T_OPT: f64 = 25.0;
    let f = ((temperature - T_LOW) * (T_HIGH - temperature))
        / ((T_OPT - T_LOW) * (T_HIGH - T_OPT));
    f.clamp(0.0, 1.0)
}

/// Turgor limitation of tissue growth, in [0, 1]
///
/// `max(0, 1 - exp(psi/psi_tlp - 1)^5)`: 1 at full turgor (psi = 0), falling
/// to 0 as the water potential approaches the turgor-loss point `psi_tlp`.
///
/// # Arguments
/// * `psi` - Symplastic water potential (MPa, <= 0)
/// * `psi_tlp` - Water potential at turgor loss (MPa, < 0)
pub fn turgor_growth_factor(psi: f64, psi_tlp: f64) -> f64 {
    (1.0 - ((psi / psi_tlp) - 1.0).exp().powi(5)).max(0.0)
}

/// Q10 scaling of maintenance respiration relative to the 20 °C base rate
pub fn q10_respiration_factor(temperature: f64) -> f64 {
    Q10_RESPIRATION.powf((temperature - 20.0) / 10.0)
}
