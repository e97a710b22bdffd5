//! Read-only daily forcing from the external collaborators
//!
//! The water/energy-balance engine owns the water status and photosynthesis
//! of the stand; the phenology module owns the day-level flags. The growth
//! engine consumes one [`DailyForcing`] per simulated day and never writes
//! back into it.

use serde::{Deserialize, Serialize};

/// Day-level phenology flags for one cohort
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PhenologyFlags {
    /// Leaf unfolding active: leaf growth sink is open
    pub leaf_unfolding: bool,
    /// Bud formation active: the leaf-area target is recomputed today
    pub bud_formation: bool,
}

/// End-of-day tissue water potentials for one cohort (MPa)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaterStatusEndOfDay {
    pub psi_symplastic_leaf: f64,
    pub psi_apoplastic_leaf: f64,
    pub psi_symplastic_stem: f64,
    pub psi_apoplastic_stem: f64,
}

/// Sub-daily driver series for one cohort
///
/// All vectors share the length of the day's canopy-temperature series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortForcing {
    /// Gross assimilation per step (g C · m-2 ground · step-1)
    pub assimilation: Vec<f64>,
    /// Leaf symplastic water potential per step (MPa)
    pub psi_symplastic_leaf: Vec<f64>,
    /// Stem symplastic water potential per step (MPa)
    pub psi_symplastic_stem: Vec<f64>,
    /// Leaf symplastic relative water content per step (0-1)
    pub rwc_symplastic_leaf: Vec<f64>,
    /// Stem symplastic relative water content per step (0-1)
    pub rwc_symplastic_stem: Vec<f64>,
    /// Water status at the end of the day (senescence/mortality checks)
    pub end_of_day: WaterStatusEndOfDay,
    /// Phenology flags for the day
    pub phenology: PhenologyFlags,
}

/// One day of forcing for the whole stand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForcing {
    /// Canopy temperature per sub-daily step (°C), shared by all cohorts
    pub canopy_temperature: Vec<f64>,
    /// Per-cohort series, indexed like the stand's cohort vector
    pub cohorts: Vec<CohortForcing>,
}

impl DailyForcing {
    /// Number of sub-daily steps in this day
    pub fn steps(&self) -> usize {
        self.canopy_temperature.len()
    }

    /// Check internal consistency against a stand of `num_cohorts` cohorts.
    /// Forcing shape is a programming error, not a runtime condition, so the
    /// daily step asserts on this rather than returning a `Result`.
    pub fn is_consistent(&self, num_cohorts: usize) -> bool {
        let n = self.steps();
        self.cohorts.len() == num_cohorts
            && self.cohorts.iter().all(|c| {
                c.assimilation.len() == n
                    && c.psi_symplastic_leaf.len() == n
                    && c.psi_symplastic_stem.len() == n
                    && c.rwc_symplastic_leaf.len() == n
                    && c.rwc_symplastic_stem.len() == n
            })
    }
}
