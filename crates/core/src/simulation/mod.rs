//! Stand-level simulation state and the daily stepping entry point
//!
//! A [`Stand`] owns the cohort state vector, the species-parameter registry
//! and the run configuration. External collaborators feed it one
//! [`DailyForcing`](crate::core_types::DailyForcing) per day through
//! [`Stand::step_day`]; cohorts are advanced independently and in parallel.

pub mod forcing;
pub mod season;
pub mod series;

pub use forcing::SyntheticForcing;
pub use season::{run_season, AnnualUpdater, ForcingProvider, NoopAnnualUpdater, DAYS_PER_YEAR};
pub use series::{SeasonOutput, SeasonSeries};

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core_types::{
    Cohort, CohortDailyOutput, CohortGeometry, CohortStatus, DailyForcing, SpeciesParams,
};
use crate::solver::grow_cohort_day;

/// How the leaf-area target is recomputed during bud formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AllocationStrategy {
    /// Scale current leaf area by the ratio of whole-plant conductance to
    /// the conductance captured when allocation started
    #[default]
    PlantKmax,
    /// Fixed leaf area per unit of sapwood cross-section
    Al2As,
}

/// Whether embolized conduits recover their conductance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CavitationRefill {
    /// Conductance losses are permanent
    #[default]
    None,
    /// Conductance is restored in proportion to new sapwood growth
    Growth,
}

/// Run configuration shared by every cohort
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandConfig {
    pub allocation_strategy: AllocationStrategy,
    pub cavitation_refill: CavitationRefill,
    /// Apply conduit-taper compensation to stem conductance
    pub taper: bool,
    /// Down-regulate photosynthesis when leaf sugar accumulates
    pub non_stomatal_limitation: bool,
    /// Non-sugar osmolyte background concentration (mol·l-1)
    pub non_sugar_conc: f64,
    /// Total osmolyte concentration the leaf sugar-starch kinetics relax
    /// towards (mol·l-1)
    pub equilibrium_leaf_total_conc: f64,
    /// Total osmolyte concentration the sapwood sugar-starch kinetics relax
    /// towards (mol·l-1)
    pub equilibrium_sapwood_total_conc: f64,
    /// Sugar concentration below which growth sinks cannot draw (mol·l-1)
    pub minimum_sugar_conc: f64,
    /// Phloem conductance per unit leaf area (l·m-2·MPa-1·s-1)
    pub k_phloem: f64,
}

impl Default for StandConfig {
    fn default() -> Self {
        StandConfig {
            allocation_strategy: AllocationStrategy::default(),
            cavitation_refill: CavitationRefill::default(),
            taper: true,
            non_stomatal_limitation: true,
            non_sugar_conc: 0.25,
            equilibrium_leaf_total_conc: 0.8,
            equilibrium_sapwood_total_conc: 0.6,
            minimum_sugar_conc: 0.4,
            k_phloem: 1.0e-4,
        }
    }
}

impl StandConfig {
    /// Sugar concentration the leaf starch kinetics hold the pool at
    pub fn minimum_leaf_sugar_conc(&self) -> f64 {
        self.equilibrium_leaf_total_conc - self.non_sugar_conc
    }

    /// Sugar concentration the sapwood starch kinetics hold the pool at
    pub fn minimum_sapwood_sugar_conc(&self) -> f64 {
        self.equilibrium_sapwood_total_conc - self.non_sugar_conc
    }

    fn validate(&self) -> Result<(), SetupError> {
        if !(self.non_sugar_conc > 0.0 && self.non_sugar_conc.is_finite()) {
            return Err(SetupError::InvalidConfig("non_sugar_conc"));
        }
        if self.equilibrium_leaf_total_conc <= self.non_sugar_conc {
            return Err(SetupError::InvalidConfig("equilibrium_leaf_total_conc"));
        }
        if self.equilibrium_sapwood_total_conc <= self.non_sugar_conc {
            return Err(SetupError::InvalidConfig("equilibrium_sapwood_total_conc"));
        }
        if !(self.minimum_sugar_conc >= 0.0 && self.minimum_sugar_conc.is_finite()) {
            return Err(SetupError::InvalidConfig("minimum_sugar_conc"));
        }
        if !(self.k_phloem >= 0.0 && self.k_phloem.is_finite()) {
            return Err(SetupError::InvalidConfig("k_phloem"));
        }
        Ok(())
    }
}

/// Errors detected while assembling a stand
///
/// All of these are fatal at setup time; once a stand is built, the daily
/// step handles every numeric edge case by clamping rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The stand has no cohorts
    EmptyStand,
    /// A cohort references a species code missing from the registry
    UnknownSpecies { cohort: usize, species_code: u32 },
    /// A geometry field is non-finite or out of its physical range
    InvalidGeometry { cohort: usize, field: &'static str },
    /// A configuration value is out of its valid range
    InvalidConfig(&'static str),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::EmptyStand => write!(f, "stand has no cohorts"),
            SetupError::UnknownSpecies {
                cohort,
                species_code,
            } => write!(
                f,
                "cohort {cohort} references unknown species code {species_code}"
            ),
            SetupError::InvalidGeometry { cohort, field } => {
                write!(f, "cohort {cohort} has invalid geometry field '{field}'")
            }
            SetupError::InvalidConfig(field) => {
                write!(f, "configuration field '{field}' is out of range")
            }
        }
    }
}

impl std::error::Error for SetupError {}

fn validate_geometry(index: usize, geometry: &CohortGeometry) -> Result<(), SetupError> {
    let invalid = |field| SetupError::InvalidGeometry {
        cohort: index,
        field,
    };
    if !(geometry.density > 0.0 && geometry.density.is_finite()) {
        return Err(invalid("density"));
    }
    if !(geometry.height > 0.0 && geometry.height.is_finite()) {
        return Err(invalid("height"));
    }
    if !(geometry.rooting_depth > 0.0 && geometry.rooting_depth.is_finite()) {
        return Err(invalid("rooting_depth"));
    }
    if !(geometry.sapwood_area > 0.0 && geometry.sapwood_area.is_finite()) {
        return Err(invalid("sapwood_area"));
    }
    if !(geometry.lai_live >= 0.0 && geometry.lai_live.is_finite()) {
        return Err(invalid("lai_live"));
    }
    if !(0.0..=1.0).contains(&geometry.crown_ratio) {
        return Err(invalid("crown_ratio"));
    }
    if let Some(dbh) = geometry.dbh {
        if !(dbh > 0.0 && dbh.is_finite()) {
            return Err(invalid("dbh"));
        }
    }
    Ok(())
}

/// A mixed-species stand: the unit a season is run over
#[derive(Debug, Clone)]
pub struct Stand {
    config: StandConfig,
    species: FxHashMap<u32, SpeciesParams>,
    /// Species parameters resolved per cohort at setup, parallel to `cohorts`
    cohort_species: Vec<SpeciesParams>,
    cohorts: Vec<Cohort>,
    /// Snapshot taken right after setup, restored by [`Stand::reset`]
    baseline: Vec<Cohort>,
    /// Sapwood area grown since the last annual update (cm2 per individual)
    sa_growth_cum: Vec<f64>,
}

impl Stand {
    /// Build a stand from a species registry and per-cohort geometry
    ///
    /// Validates configuration and geometry once; storage pools are seeded
    /// from the species' full-turgor osmotic potentials.
    ///
    /// # Errors
    /// Returns a [`SetupError`] if the cohort list is empty, a species code
    /// is unknown, or any geometry/configuration value is out of range.
    pub fn new(
        species: FxHashMap<u32, SpeciesParams>,
        cohorts: &[(u32, CohortGeometry)],
        config: StandConfig,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        if cohorts.is_empty() {
            return Err(SetupError::EmptyStand);
        }
        let mut state = Vec::with_capacity(cohorts.len());
        let mut cohort_species = Vec::with_capacity(cohorts.len());
        for (index, (code, geometry)) in cohorts.iter().enumerate() {
            validate_geometry(index, geometry)?;
            let params = species
                .get(code)
                .ok_or(SetupError::UnknownSpecies {
                    cohort: index,
                    species_code: *code,
                })?
                .clone();
            state.push(Cohort::new(*code, &params, *geometry, &config));
            cohort_species.push(params);
        }
        let baseline = state.clone();
        let sa_growth_cum = vec![0.0; state.len()];
        Ok(Stand {
            config,
            species,
            cohort_species,
            cohorts: state,
            baseline,
            sa_growth_cum,
        })
    }

    /// Advance every cohort by one day
    ///
    /// Cohorts do not read each other's state, so they are processed in
    /// parallel. Dead cohorts yield an all-zero output record.
    ///
    /// # Panics
    /// Panics if the forcing shape does not match the stand; a mismatched
    /// driver is a programming error in the collaborator, not a model state.
    pub fn step_day(&mut self, forcing: &DailyForcing) -> Vec<CohortDailyOutput> {
        assert!(
            forcing.is_consistent(self.cohorts.len()),
            "daily forcing shape does not match the stand"
        );
        let config = &self.config;
        let temperature = &forcing.canopy_temperature;
        let outputs: Vec<CohortDailyOutput> = self
            .cohorts
            .par_iter_mut()
            .zip(self.cohort_species.par_iter())
            .zip(forcing.cohorts.par_iter())
            .map(|((cohort, params), drivers)| {
                grow_cohort_day(cohort, params, temperature, drivers, config)
            })
            .collect();
        // sapwood_area_growth is normalized by the end-of-day area, so the
        // product recovers the absolute daily increment
        for (cum, out) in self.sa_growth_cum.iter_mut().zip(&outputs) {
            *cum += out.sapwood_area_growth * out.sapwood_area;
        }
        outputs
    }

    /// Restore every cohort to its post-setup state
    pub fn reset(&mut self) {
        self.cohorts.clone_from(&self.baseline);
        self.sa_growth_cum.fill(0.0);
    }

    /// Accumulated sapwood-area growth since the last annual update, and
    /// reset the accumulator (consumed by annual allometric updates)
    pub fn take_annual_sapwood_growth(&mut self) -> Vec<f64> {
        let taken = self.sa_growth_cum.clone();
        self.sa_growth_cum.fill(0.0);
        taken
    }

    pub fn cohorts(&self) -> &[Cohort] {
        &self.cohorts
    }

    pub fn cohorts_mut(&mut self) -> &mut [Cohort] {
        &mut self.cohorts
    }

    pub fn num_cohorts(&self) -> usize {
        self.cohorts.len()
    }

    /// Species parameters resolved for cohort `index`
    pub fn species_for(&self, index: usize) -> &SpeciesParams {
        &self.cohort_species[index]
    }

    pub fn species(&self, code: u32) -> Option<&SpeciesParams> {
        self.species.get(&code)
    }

    pub fn config(&self) -> &StandConfig {
        &self.config
    }

    pub fn statuses(&self) -> Vec<CohortStatus> {
        self.cohorts.iter().map(|c| c.status).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> FxHashMap<u32, SpeciesParams> {
        let mut species = FxHashMap::default();
        species.insert(0, SpeciesParams::holm_oak());
        species.insert(1, SpeciesParams::aleppo_pine());
        species
    }

    fn geometry() -> CohortGeometry {
        CohortGeometry {
            density: 400.0,
            height: 500.0,
            rooting_depth: 2000.0,
            dbh: Some(15.0),
            crown_ratio: 0.6,
            sapwood_area: 120.0,
            lai_live: 1.5,
        }
    }

    #[test]
    fn empty_stand_is_rejected() {
        let err = Stand::new(registry(), &[], StandConfig::default()).unwrap_err();
        assert_eq!(err, SetupError::EmptyStand);
    }

    #[test]
    fn unknown_species_is_rejected() {
        let err = Stand::new(registry(), &[(7, geometry())], StandConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SetupError::UnknownSpecies {
                cohort: 0,
                species_code: 7
            }
        );
    }

    #[test]
    fn invalid_geometry_names_the_field() {
        let mut bad = geometry();
        bad.density = 0.0;
        let err = Stand::new(registry(), &[(0, bad)], StandConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SetupError::InvalidGeometry {
                cohort: 0,
                field: "density"
            }
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = StandConfig {
            non_sugar_conc: -0.1,
            ..StandConfig::default()
        };
        let err = Stand::new(registry(), &[(0, geometry())], config).unwrap_err();
        assert_eq!(err, SetupError::InvalidConfig("non_sugar_conc"));
    }

    #[test]
    fn reset_restores_the_setup_state() {
        let mut stand =
            Stand::new(registry(), &[(0, geometry()), (1, geometry())], StandConfig::default())
                .unwrap();
        let before = stand.cohorts()[0].sugar_sapwood;
        stand.cohorts_mut()[0].sugar_sapwood = 0.0;
        stand.cohorts_mut()[1].status = CohortStatus::Starvation;
        stand.reset();
        assert_eq!(stand.cohorts()[0].sugar_sapwood, before);
        assert_eq!(stand.cohorts()[1].status, CohortStatus::Alive);
    }

    #[test]
    fn annual_sapwood_growth_is_taken_once() {
        let mut stand = Stand::new(registry(), &[(0, geometry())], StandConfig::default()).unwrap();
        stand.sa_growth_cum[0] = 2.5;
        assert_eq!(stand.take_annual_sapwood_growth(), vec![2.5]);
        assert_eq!(stand.take_annual_sapwood_growth(), vec![0.0]);
    }
}
