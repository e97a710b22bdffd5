//! Pure biophysical, allometric and transport functions
//!
//! Everything in this module is stateless and deterministic: functions of
//! instantaneous driver values and trait constants only. The daily engine in
//! [`crate::solver`] composes them; no function here mutates cohort state.

pub mod allometry;
pub mod biophysics;
pub mod constants;
pub mod growth;
pub mod hydraulics;
pub mod phloem;
pub mod starch;
pub mod tissue_moisture;

pub use biophysics::{osmotic_water_potential, relative_sap_viscosity, sugar_concentration, turgor};
pub use growth::{q10_respiration_factor, temperature_growth_factor, turgor_growth_factor};
pub use hydraulics::{maximum_stem_hydraulic_conductance, whole_plant_conductance};
pub use phloem::phloem_flow;
pub use starch::{sugar_starch_rate_leaf, sugar_starch_rate_sapwood};
pub use tissue_moisture::{apoplastic_rwc, symplastic_rwc, turgor_loss_point};
