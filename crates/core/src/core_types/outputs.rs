//! Per-cohort daily and sub-daily output records

use serde::{Deserialize, Serialize};

/// Instantaneous (per sub-daily step) diagnostic series for one cohort
///
/// Carbon terms are per unit of total live biomass (g gluc · g dw-1);
/// pool levels are concentrations (mol·l-1); transport is mmol·s-1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CohortSubdailySeries {
    pub gross_photosynthesis: Vec<f64>,
    pub maintenance_respiration: Vec<f64>,
    pub growth_respiration: Vec<f64>,
    pub carbon_balance: Vec<f64>,
    pub sugar_leaf: Vec<f64>,
    pub starch_leaf: Vec<f64>,
    pub sugar_sapwood: Vec<f64>,
    pub starch_sapwood: Vec<f64>,
    pub sugar_transport: Vec<f64>,
}

impl CohortSubdailySeries {
    pub(crate) fn with_capacity(steps: usize) -> Self {
        CohortSubdailySeries {
            gross_photosynthesis: Vec::with_capacity(steps),
            maintenance_respiration: Vec::with_capacity(steps),
            growth_respiration: Vec::with_capacity(steps),
            carbon_balance: Vec::with_capacity(steps),
            sugar_leaf: Vec::with_capacity(steps),
            starch_leaf: Vec::with_capacity(steps),
            sugar_sapwood: Vec::with_capacity(steps),
            starch_sapwood: Vec::with_capacity(steps),
            sugar_transport: Vec::with_capacity(steps),
        }
    }
}

/// Daily summary of one cohort's carbon balance and growth
///
/// A dead cohort produces the default (all-zero) record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CohortDailyOutput {
    /// Gross photosynthesis (g gluc · g dw-1 · day-1)
    pub gross_photosynthesis: f64,
    /// Maintenance respiration (g gluc · g dw-1 · day-1)
    pub maintenance_respiration: f64,
    /// Growth respiration / construction cost (g gluc · g dw-1 · day-1)
    pub growth_respiration: f64,
    /// Net carbon balance (g gluc · g dw-1 · day-1)
    pub carbon_balance: f64,
    /// End-of-day pool concentrations (mol·l-1)
    pub sugar_leaf: f64,
    pub starch_leaf: f64,
    pub sugar_sapwood: f64,
    pub starch_sapwood: f64,
    /// Net phloem export towards the stem over the day (mol glucose)
    pub sugar_transport: f64,
    /// Labile (sugar + starch) mass per individual (g gluc)
    pub labile_mass_leaf: f64,
    pub labile_mass_sapwood: f64,
    /// End-of-day geometry
    pub sapwood_area: f64,
    pub leaf_area: f64,
    /// Sapwood area per unit leaf area (cm2·m-2)
    pub huber_value: f64,
    /// Leaf-area growth per unit sapwood area (m2·cm-2·day-1)
    pub leaf_area_growth: f64,
    /// Relative sapwood-area growth (cm2·cm-2·day-1)
    pub sapwood_area_growth: f64,
    /// Recomputed full-turgor osmotic potentials (MPa)
    pub leaf_pi0: f64,
    pub stem_pi0: f64,
    /// Instantaneous series (empty for dead cohorts)
    pub subdaily: CohortSubdailySeries,
}
