//! End-of-day senescence, turnover and mortality rules

use crate::core_types::SpeciesParams;
use crate::physics::constants::DAILY_SAPWOOD_TURNOVER;
use crate::physics::tissue_moisture::{apoplastic_rwc, symplastic_rwc};

/// Relative water content of a whole tissue, weighting the symplastic and
/// apoplastic compartments by the apoplastic fraction
pub(crate) fn combined_rwc(
    psi_symplastic: f64,
    psi_apoplastic: f64,
    pi0: f64,
    eps: f64,
    apoplastic_fraction: f64,
    vc_c: f64,
    vc_d: f64,
) -> f64 {
    symplastic_rwc(psi_symplastic, pi0, eps) * (1.0 - apoplastic_fraction)
        + apoplastic_rwc(psi_apoplastic, vc_c, vc_d) * apoplastic_fraction
}

/// Daily fractional leaf loss from aging and drought
///
/// Evergreens shed a constant daily fraction derived from their leaf
/// lifespan. Below 0.5 relative water content a drought hazard kicks in,
/// but the applied rate is the smaller of the two, so drought caps the
/// age-based loss rather than adding to it.
pub(crate) fn leaf_senescence_proportion(species: &SpeciesParams, leaf_rwc: f64) -> f64 {
    let mut proportion = if species.phenology.is_evergreen() {
        1.0 / (365.25 * species.leaf_duration)
    } else {
        0.0
    };
    if leaf_rwc < 0.5 {
        let k = -5.0;
        let drought =
            ((k * leaf_rwc).exp() - (k * 0.5).exp()) / (1.0 - (k * 0.5).exp());
        proportion = proportion.min(drought.max(0.0));
    }
    proportion
}

/// Daily fractional sapwood loss as a function of plant height
///
/// The rate saturates towards the base value as height grows; short plants
/// retire their sapwood more slowly.
pub(crate) fn sapwood_turnover_proportion(height: f64) -> f64 {
    DAILY_SAPWOOD_TURNOVER / (1.0 + 15.0 * (-0.01 * height).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn evergreen_age_loss_matches_leaf_lifespan() {
        let species = SpeciesParams::holm_oak();
        let p = leaf_senescence_proportion(&species, 0.9);
        assert_relative_eq!(p, 1.0 / (365.25 * species.leaf_duration), max_relative = 1e-12);
    }

    #[test]
    fn deciduous_lose_nothing_while_hydrated() {
        let species = SpeciesParams::downy_oak();
        assert_eq!(leaf_senescence_proportion(&species, 0.9), 0.0);
    }

    #[test]
    fn drought_caps_rather_than_adds() {
        let species = SpeciesParams::holm_oak();
        let age_only = leaf_senescence_proportion(&species, 0.9);
        // Just under the threshold the drought hazard is near zero and wins
        let capped = leaf_senescence_proportion(&species, 0.499);
        assert!(capped < age_only);
        // A deciduous cohort stays at zero even under severe drought
        let deciduous = SpeciesParams::downy_oak();
        assert_eq!(leaf_senescence_proportion(&deciduous, 0.2), 0.0);
    }

    #[test]
    fn sapwood_turnover_increases_with_height() {
        let short = sapwood_turnover_proportion(100.0);
        let tall = sapwood_turnover_proportion(3000.0);
        assert!(short < tall);
        assert!(tall <= DAILY_SAPWOOD_TURNOVER);
    }

    #[test]
    fn combined_rwc_is_one_at_zero_potential() {
        let rwc = combined_rwc(0.0, 0.0, -2.5, 15.0, 0.3, 2.5, -3.0);
        assert_relative_eq!(rwc, 1.0, max_relative = 1e-12);
    }
}
