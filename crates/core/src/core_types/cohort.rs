//! Cohort state
//!
//! A cohort is the modeled unit: one species/size class treated as a single
//! state vector, scaled to the stand through its individual density. The
//! storage pools persist across days; structural biomass is re-derived from
//! geometry every day and not stored.

use serde::{Deserialize, Serialize};

use super::species::SpeciesParams;
use super::status::CohortStatus;
use crate::physics::allometry::{
    leaf_starch_capacity, leaf_storage_volume, sapwood_starch_capacity, sapwood_storage_volume,
};
use crate::physics::biophysics::sugar_concentration;
use crate::physics::hydraulics::{maximum_stem_hydraulic_conductance, whole_plant_conductance};
use crate::simulation::{AllocationStrategy, StandConfig};

/// Initial geometry of a cohort at stand setup
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CohortGeometry {
    /// Individual density (ind·ha-1)
    pub density: f64,
    /// Height (cm)
    pub height: f64,
    /// Rooting depth (mm)
    pub rooting_depth: f64,
    /// Diameter at breast height (cm); `None` for shrub cohorts
    pub dbh: Option<f64>,
    /// Crown ratio (0-1)
    pub crown_ratio: f64,
    /// Sapwood cross-sectional area per individual (cm2)
    pub sapwood_area: f64,
    /// Live leaf area index (m2·m-2)
    pub lai_live: f64,
}

/// Full per-cohort state, mutated exactly once per simulated day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cohort {
    /// Key into the stand's species-parameter table
    pub species_code: u32,
    pub status: CohortStatus,

    // Geometry
    pub density: f64,
    pub height: f64,
    pub rooting_depth: f64,
    pub dbh: Option<f64>,
    pub crown_ratio: f64,
    pub sapwood_area: f64,
    pub lai_live: f64,
    pub lai_expanded: f64,
    pub lai_dead: f64,

    // Labile storage pools (mol gluc · l-1 of storage volume at full hydration)
    pub sugar_leaf: f64,
    pub starch_leaf: f64,
    pub sugar_sapwood: f64,
    pub starch_sapwood: f64,

    // Derived hydraulic and osmotic state, recomputed at the end of each day
    /// Leaf area per unit sapwood area (m2·m-2)
    pub al2as: f64,
    pub vc_leaf_kmax: f64,
    pub vc_stem_kmax: f64,
    pub vc_root_kmax: f64,
    pub plant_kmax: f64,
    /// Full-turgor osmotic potentials implied by current sugar levels (MPa)
    pub leaf_pi0: f64,
    pub stem_pi0: f64,
    /// Stem percent loss of conductance from embolism (0-1)
    pub stem_plc: f64,
    /// Non-stomatal photosynthesis limitation factor (0-1)
    pub nspl: f64,

    // Allocation state
    /// Value of the allocation driver captured when the target was last set
    pub allocation_target: f64,
    /// Leaf area the phenology program is building towards (m2 per individual)
    pub leaf_area_target: f64,
}

impl Cohort {
    /// Create a cohort and seed its storage pools from trait values
    ///
    /// Sugar pools are seeded so that their osmotic contribution reproduces
    /// the species' full-turgor osmotic potential at 20 °C; starch pools are
    /// seeded at half their geometric capacity.
    pub fn new(
        species_code: u32,
        species: &SpeciesParams,
        geometry: CohortGeometry,
        config: &StandConfig,
    ) -> Self {
        let al2as = species.al2as;
        let vc_stem_kmax = maximum_stem_hydraulic_conductance(
            species.kmax_stemxylem,
            species.reference_height,
            al2as,
            geometry.height,
            config.taper,
        );
        let plant_kmax =
            whole_plant_conductance(species.vc_leaf_kmax, vc_stem_kmax, species.vc_root_kmax);

        let leaf_volume = leaf_storage_volume(
            geometry.lai_live,
            geometry.density,
            species.sla,
            species.leaf_density,
        );
        let sapwood_volume = sapwood_storage_volume(
            geometry.sapwood_area,
            geometry.height,
            geometry.rooting_depth,
            species.wood_density,
        );

        let (sugar_leaf, starch_leaf) = if geometry.lai_live > 0.0 && leaf_volume > 0.0 {
            let capacity =
                leaf_starch_capacity(geometry.lai_live, geometry.density, species.sla);
            (
                sugar_concentration(species.leaf_pi0, 20.0, config.non_sugar_conc),
                0.5 * capacity / leaf_volume,
            )
        } else {
            (0.0, 0.0)
        };
        let starch_sapwood = if sapwood_volume > 0.0 {
            let capacity = sapwood_starch_capacity(
                geometry.sapwood_area,
                geometry.height,
                geometry.rooting_depth,
                species.wood_density,
            );
            0.5 * capacity / sapwood_volume
        } else {
            0.0
        };
        let sugar_sapwood = sugar_concentration(species.stem_pi0, 20.0, config.non_sugar_conc);

        let leaf_area_target = al2as * (geometry.sapwood_area / 10_000.0);
        let allocation_target = match config.allocation_strategy {
            AllocationStrategy::PlantKmax => plant_kmax,
            AllocationStrategy::Al2As => al2as,
        };

        Cohort {
            species_code,
            status: CohortStatus::Alive,
            density: geometry.density,
            height: geometry.height,
            rooting_depth: geometry.rooting_depth,
            dbh: geometry.dbh,
            crown_ratio: geometry.crown_ratio,
            sapwood_area: geometry.sapwood_area,
            lai_live: geometry.lai_live,
            lai_expanded: geometry.lai_live,
            lai_dead: 0.0,
            sugar_leaf,
            starch_leaf,
            sugar_sapwood,
            starch_sapwood,
            al2as,
            vc_leaf_kmax: species.vc_leaf_kmax,
            vc_stem_kmax,
            vc_root_kmax: species.vc_root_kmax,
            plant_kmax,
            leaf_pi0: species.leaf_pi0,
            stem_pi0: species.stem_pi0,
            stem_plc: 0.0,
            nspl: 1.0,
            allocation_target,
            leaf_area_target,
        }
    }
}
