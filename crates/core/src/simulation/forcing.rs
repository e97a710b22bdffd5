//! Deterministic synthetic forcing for demos and tests
//!
//! Stands in for the external water/energy-balance engine: sinusoidal
//! seasonal and diurnal canopy temperature, daylight-shaped assimilation
//! scaled by the cohort's expanded leaf area and sugar feedback, and water
//! potentials that dip at midday and can drift into drought over the run.

use std::f64::consts::PI;

use super::season::{ForcingProvider, DAYS_PER_YEAR};
use super::Stand;
use crate::core_types::{
    CohortForcing, DailyForcing, PhenologyFlags, PhenologyKind, WaterStatusEndOfDay,
};
use crate::physics::tissue_moisture::symplastic_rwc;

#[derive(Debug, Clone)]
pub struct SyntheticForcing {
    pub steps_per_day: usize,
    /// Annual mean canopy temperature (°C)
    pub mean_temperature: f64,
    /// Half-range of the seasonal temperature cycle (°C)
    pub seasonal_amplitude: f64,
    /// Half-range of the diurnal temperature cycle (°C)
    pub diurnal_amplitude: f64,
    /// Midday gross assimilation per unit leaf area index (g C·m-2·h-1)
    pub max_assimilation: f64,
    /// Predawn water potential at the start of the run (MPa)
    pub predawn_psi: f64,
    /// Additional leaf water-potential drop at midday (MPa)
    pub midday_psi_drop: f64,
    /// Daily drift of the predawn potential; negative values dry the stand
    /// out over the run (MPa·day-1)
    pub psi_trend_per_day: f64,
}

impl Default for SyntheticForcing {
    fn default() -> Self {
        SyntheticForcing {
            steps_per_day: 24,
            mean_temperature: 15.0,
            seasonal_amplitude: 8.0,
            diurnal_amplitude: 8.0,
            max_assimilation: 0.3,
            predawn_psi: -0.3,
            midday_psi_drop: 1.0,
            psi_trend_per_day: 0.0,
        }
    }
}

impl SyntheticForcing {
    /// Daylight intensity for the step, 0 at night, 1 at solar noon
    fn daylight(&self, step: usize) -> f64 {
        let hour = (step as f64 + 0.5) * 24.0 / self.steps_per_day as f64;
        (PI * (hour - 6.0) / 12.0).sin().max(0.0)
    }

    fn day_mean_temperature(&self, day: usize) -> f64 {
        let doy = (day % DAYS_PER_YEAR) as f64;
        self.mean_temperature
            + self.seasonal_amplitude * (2.0 * PI * (doy - 105.0) / 365.0).sin()
    }

    fn phenology_flags(&self, day: usize, kind: PhenologyKind) -> PhenologyFlags {
        let doy = day % DAYS_PER_YEAR;
        let leaf_unfolding = match kind {
            PhenologyKind::Deciduous => (90..=270).contains(&doy),
            PhenologyKind::OneflushEvergreen | PhenologyKind::ProgressiveEvergreen => true,
        };
        PhenologyFlags {
            leaf_unfolding,
            bud_formation: (150..=210).contains(&doy),
        }
    }
}

impl ForcingProvider for SyntheticForcing {
    fn daily_forcing(&mut self, day: usize, stand: &Stand) -> DailyForcing {
        let steps = self.steps_per_day;
        let day_mean = self.day_mean_temperature(day);
        let predawn = self.predawn_psi + self.psi_trend_per_day * day as f64;

        let canopy_temperature: Vec<f64> = (0..steps)
            .map(|s| day_mean + self.diurnal_amplitude * (self.daylight(s) - 0.5))
            .collect();

        let cohorts = stand
            .cohorts()
            .iter()
            .enumerate()
            .map(|(index, cohort)| {
                let species = stand.species_for(index);
                let mut assimilation = Vec::with_capacity(steps);
                let mut psi_leaf = Vec::with_capacity(steps);
                let mut psi_stem = Vec::with_capacity(steps);
                let mut rwc_leaf = Vec::with_capacity(steps);
                let mut rwc_stem = Vec::with_capacity(steps);
                for s in 0..steps {
                    let light = self.daylight(s);
                    let leaf_psi = predawn - self.midday_psi_drop * light;
                    let stem_psi = predawn - 0.5 * self.midday_psi_drop * light;
                    assimilation
                        .push(self.max_assimilation * light * cohort.lai_expanded * cohort.nspl);
                    psi_leaf.push(leaf_psi);
                    psi_stem.push(stem_psi);
                    rwc_leaf.push(symplastic_rwc(leaf_psi, cohort.leaf_pi0, species.leaf_eps));
                    rwc_stem.push(symplastic_rwc(stem_psi, cohort.stem_pi0, species.stem_eps));
                }
                CohortForcing {
                    assimilation,
                    psi_symplastic_leaf: psi_leaf,
                    psi_symplastic_stem: psi_stem,
                    rwc_symplastic_leaf: rwc_leaf,
                    rwc_symplastic_stem: rwc_stem,
                    end_of_day: WaterStatusEndOfDay {
                        psi_symplastic_leaf: predawn,
                        psi_apoplastic_leaf: predawn,
                        psi_symplastic_stem: predawn,
                        psi_apoplastic_stem: predawn,
                    },
                    phenology: self.phenology_flags(day, species.phenology),
                }
            })
            .collect();

        DailyForcing {
            canopy_temperature,
            cohorts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{CohortGeometry, SpeciesParams};
    use crate::simulation::StandConfig;
    use rustc_hash::FxHashMap;

    fn stand() -> Stand {
        let mut species = FxHashMap::default();
        species.insert(0, SpeciesParams::holm_oak());
        species.insert(1, SpeciesParams::downy_oak());
        let geometry = CohortGeometry {
            density: 400.0,
            height: 500.0,
            rooting_depth: 2000.0,
            dbh: Some(15.0),
            crown_ratio: 0.6,
            sapwood_area: 120.0,
            lai_live: 1.5,
        };
        Stand::new(species, &[(0, geometry), (1, geometry)], StandConfig::default()).unwrap()
    }

    #[test]
    fn forcing_shape_matches_the_stand() {
        let stand = stand();
        let mut forcing = SyntheticForcing::default();
        let daily = forcing.daily_forcing(0, &stand);
        assert!(daily.is_consistent(stand.num_cohorts()));
        assert_eq!(daily.steps(), 24);
    }

    #[test]
    fn assimilation_is_zero_at_night_and_positive_at_noon() {
        let stand = stand();
        let mut forcing = SyntheticForcing::default();
        let daily = forcing.daily_forcing(180, &stand);
        assert_eq!(daily.cohorts[0].assimilation[0], 0.0);
        assert!(daily.cohorts[0].assimilation[12] > 0.0);
    }

    #[test]
    fn deciduous_cohorts_only_unfold_in_season() {
        let stand = stand();
        let mut forcing = SyntheticForcing::default();
        // Cohort 1 is deciduous (downy oak), cohort 0 evergreen (holm oak)
        let winter = forcing.daily_forcing(10, &stand);
        assert!(winter.cohorts[0].phenology.leaf_unfolding);
        assert!(!winter.cohorts[1].phenology.leaf_unfolding);
        let summer = forcing.daily_forcing(180, &stand);
        assert!(summer.cohorts[1].phenology.leaf_unfolding);
        assert!(summer.cohorts[1].phenology.bud_formation);
    }

    #[test]
    fn drought_trend_lowers_the_potentials() {
        let stand = stand();
        let mut forcing = SyntheticForcing {
            psi_trend_per_day: -0.02,
            ..SyntheticForcing::default()
        };
        let early = forcing.daily_forcing(0, &stand);
        let late = forcing.daily_forcing(100, &stand);
        assert!(
            late.cohorts[0].psi_symplastic_leaf[12] < early.cohorts[0].psi_symplastic_leaf[12]
        );
    }
}
