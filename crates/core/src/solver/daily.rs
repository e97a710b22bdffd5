//! The per-cohort daily growth driver

use tracing::info;

use super::senescence::{combined_rwc, leaf_senescence_proportion, sapwood_turnover_proportion};
use super::transport::{integrate_step_transport, PoolGeometry, StepDrivers, SECONDS_PER_STEP};
use crate::core_types::{
    Cohort, CohortDailyOutput, CohortForcing, CohortStatus, CohortSubdailySeries, SpeciesParams,
};
use crate::physics::allometry::{
    leaf_area_per_individual, leaf_cost_per_area, leaf_starch_capacity, leaf_storage_volume,
    leaf_structural_biomass, sapwood_cost_per_area, sapwood_living_biomass,
    sapwood_starch_capacity, sapwood_storage_volume,
};
use crate::physics::biophysics::osmotic_water_potential;
use crate::physics::constants::{
    CARBON_MOLAR_MASS, FINEROOT_RESPIRATION_RATE, GLUCOSE_MOLAR_MASS, LEAF_RESPIRATION_RATE,
    RGR_LEAF_MAX, SAPWOOD_RESPIRATION_RATE,
};
use crate::physics::growth::{
    q10_respiration_factor, temperature_growth_factor, turgor_growth_factor,
};
use crate::physics::hydraulics::{maximum_stem_hydraulic_conductance, whole_plant_conductance};
use crate::physics::tissue_moisture::turgor_loss_point;
use crate::simulation::{AllocationStrategy, CavitationRefill, StandConfig};

/// Live leaf area below this threshold collapses to zero (m2)
const MIN_LEAF_AREA: f64 = 1e-4;

/// Advance one cohort by one day
///
/// Integrates the sub-daily carbon balance, the second-resolution pool
/// dynamics, and the end-of-day senescence, turnover, mortality and
/// structural updates. Cohorts whose status is terminal are not mutated and
/// produce an all-zero output record.
///
/// `canopy_temperature` carries one value per sub-daily step and fixes the
/// step count; the per-cohort `forcing` series must have the same length.
pub fn grow_cohort_day(
    cohort: &mut Cohort,
    species: &SpeciesParams,
    canopy_temperature: &[f64],
    forcing: &CohortForcing,
    config: &StandConfig,
) -> CohortDailyOutput {
    if !cohort.status.is_alive() {
        return CohortDailyOutput::default();
    }
    let steps = canopy_temperature.len();
    debug_assert!(forcing.assimilation.len() == steps);
    let steps_f = steps as f64;

    // Geometry, storage capacity and structural biomass for the day.
    // Expanded leaf area carries the storage volume; live area gates fluxes.
    let cost_per_la = leaf_cost_per_area(species.sla);
    let cost_per_sa = sapwood_cost_per_area(cohort.height, cohort.rooting_depth, species.wood_density);
    let leaf_volume = leaf_storage_volume(
        cohort.lai_expanded,
        cohort.density,
        species.sla,
        species.leaf_density,
    );
    let sapwood_volume = sapwood_storage_volume(
        cohort.sapwood_area,
        cohort.height,
        cohort.rooting_depth,
        species.wood_density,
    );
    let leaf_starch_max = if leaf_volume > 0.0 {
        leaf_starch_capacity(cohort.lai_expanded, cohort.density, species.sla) / leaf_volume
    } else {
        0.0
    };
    let sapwood_starch_max = if sapwood_volume > 0.0 {
        sapwood_starch_capacity(
            cohort.sapwood_area,
            cohort.height,
            cohort.rooting_depth,
            species.wood_density,
        ) / sapwood_volume
    } else {
        0.0
    };
    let b_leaves = leaf_structural_biomass(cohort.lai_expanded, cohort.density, species.sla);
    let b_sapwood = sapwood_living_biomass(
        cohort.sapwood_area,
        cohort.height,
        cohort.rooting_depth,
        species.wood_density,
    );
    let b_fineroots = b_leaves / 2.0;
    let labile_leaf = (cohort.sugar_leaf + cohort.starch_leaf) * GLUCOSE_MOLAR_MASS * leaf_volume;
    let labile_sapwood =
        (cohort.sugar_sapwood + cohort.starch_sapwood) * GLUCOSE_MOLAR_MASS * sapwood_volume;
    let b_total = b_leaves + b_sapwood + b_fineroots + labile_leaf + labile_sapwood;

    let pool_geometry = PoolGeometry {
        leaf_volume,
        sapwood_volume,
        leaf_starch_max,
        sapwood_starch_max,
    };

    let mut la_expanded = leaf_area_per_individual(cohort.lai_expanded, cohort.density);
    let mut la_live = leaf_area_per_individual(cohort.lai_live, cohort.density);
    let mut la_dead = leaf_area_per_individual(cohort.lai_dead, cohort.density);

    // Phenology gate: retarget leaf area while buds are forming
    if forcing.phenology.bud_formation {
        cohort.leaf_area_target = match config.allocation_strategy {
            AllocationStrategy::PlantKmax => {
                if cohort.allocation_target > 0.0 {
                    la_live * (cohort.plant_kmax / cohort.allocation_target)
                } else {
                    la_live
                }
            }
            AllocationStrategy::Al2As => (cohort.sapwood_area / 10_000.0) * cohort.allocation_target,
        };
    }

    let leaf_tlp = turgor_loss_point(cohort.leaf_pi0, species.leaf_eps);
    let stem_tlp = turgor_loss_point(cohort.stem_pi0, species.stem_eps);

    let mut output = CohortDailyOutput::default();
    let mut series = CohortSubdailySeries::with_capacity(steps);
    let mut delta_la_growth = 0.0;
    let mut delta_sa_growth = 0.0;
    let mut leaf_resp_day = 0.0;

    for s in 0..steps {
        let temperature = canopy_temperature[s];

        // Maintenance respiration from structural plus current sugar mass
        let leaf_sugar_mass = cohort.sugar_leaf * leaf_volume * GLUCOSE_MOLAR_MASS;
        let sapwood_sugar_mass = cohort.sugar_sapwood * sapwood_volume * GLUCOSE_MOLAR_MASS;
        let q10 = q10_respiration_factor(temperature);
        let leaf_resp = if la_live > 0.0 {
            (b_leaves + leaf_sugar_mass) * LEAF_RESPIRATION_RATE * q10 / steps_f
        } else {
            0.0
        };
        let sapwood_resp =
            (b_sapwood + sapwood_sugar_mass) * SAPWOOD_RESPIRATION_RATE * q10 / steps_f;
        let fineroot_resp = b_fineroots * FINEROOT_RESPIRATION_RATE * q10 / steps_f;
        leaf_resp_day += leaf_resp;

        // Gross photosynthesis: ground-area carbon to per-individual glucose
        let mut leaf_ag = 0.0;
        let mut gross_inst = 0.0;
        if la_live > 0.0 {
            let ag_carbon = forcing.assimilation[s] / (cohort.density / 10_000.0);
            leaf_ag = ag_carbon * (GLUCOSE_MOLAR_MASS / (CARBON_MOLAR_MASS * 6.0));
            gross_inst = leaf_ag / b_total;
        }

        // Growth sinks, gated by temperature and turgor
        let f_temp = temperature_growth_factor(temperature);
        let f_la_turgor = turgor_growth_factor(forcing.psi_symplastic_leaf[s], leaf_tlp);
        let f_sa_turgor = turgor_growth_factor(forcing.psi_symplastic_stem[s], stem_tlp);
        let mut growth_cost_la = 0.0;
        let mut growth_cost_sa = 0.0;

        if forcing.phenology.leaf_unfolding && f_la_turgor > 0.0 && f_temp > 0.0 {
            let gap = (cohort.leaf_area_target - la_live).max(0.0);
            let sink = gap.min(RGR_LEAF_MAX / steps_f * cohort.leaf_area_target * f_temp * f_la_turgor);
            if la_live > 0.0 {
                let available = ((cohort.sugar_leaf - config.minimum_sugar_conc)
                    * (GLUCOSE_MOLAR_MASS * leaf_volume)
                    / cost_per_la)
                    .max(0.0);
                let grown = sink.min(available);
                growth_cost_la += grown * cost_per_la;
                delta_la_growth += grown;
            } else {
                // Establishing foliage is financed from stem reserves; the
                // cost lands in the sapwood accounting
                let available = ((cohort.sugar_sapwood - config.minimum_sugar_conc)
                    * (GLUCOSE_MOLAR_MASS * sapwood_volume)
                    / cost_per_la)
                    .max(0.0);
                let grown = sink.min(available);
                growth_cost_sa += grown * cost_per_la;
                delta_la_growth += grown;
            }
        }

        if la_live > 0.0 && f_sa_turgor > 0.0 && f_temp > 0.0 {
            let available = ((cohort.sugar_sapwood - config.minimum_sugar_conc)
                * (GLUCOSE_MOLAR_MASS * sapwood_volume)
                / cost_per_sa)
                .max(0.0);
            let sink = species.rgr_sapwood_max / steps_f * cohort.sapwood_area * f_temp * f_sa_turgor;
            let grown = sink.min(available);
            growth_cost_sa += grown * cost_per_sa;
            delta_sa_growth += grown;
        }

        let maintenance_inst = (leaf_resp + sapwood_resp + fineroot_resp) / b_total;
        let growth_inst = (growth_cost_la + growth_cost_sa) / b_total;
        let balance_inst = gross_inst - maintenance_inst - growth_inst;
        output.gross_photosynthesis += gross_inst;
        output.maintenance_respiration += maintenance_inst;
        output.growth_respiration += growth_inst;
        output.carbon_balance += balance_inst;

        // Second-resolution pool integration: the step's net mass changes
        // are spread evenly over the fine iterations
        let leaf_mass_delta = leaf_ag - leaf_resp - growth_cost_la;
        let sapwood_mass_delta = -sapwood_resp - fineroot_resp - growth_cost_sa;
        let drivers = StepDrivers {
            temperature,
            psi_leaf: forcing.psi_symplastic_leaf[s],
            psi_stem: forcing.psi_symplastic_stem[s],
            rwc_leaf: forcing.rwc_symplastic_leaf[s],
            rwc_stem: forcing.rwc_symplastic_stem[s],
        };
        let flow = integrate_step_transport(
            cohort,
            &pool_geometry,
            &drivers,
            leaf_mass_delta,
            sapwood_mass_delta,
            la_live,
            config,
        );
        output.sugar_transport += flow;

        series.gross_photosynthesis.push(gross_inst);
        series.maintenance_respiration.push(maintenance_inst);
        series.growth_respiration.push(growth_inst);
        series.carbon_balance.push(balance_inst);
        series.sugar_leaf.push(cohort.sugar_leaf);
        series.starch_leaf.push(cohort.starch_leaf);
        series.sugar_sapwood.push(cohort.sugar_sapwood);
        series.starch_sapwood.push(cohort.starch_sapwood);
        series.sugar_transport.push(1000.0 * flow / SECONDS_PER_STEP as f64);
    }

    // Negative leaf sugar means respiration outran supply: shed the leaf
    // area whose respiration produced the deficit
    if cohort.sugar_leaf < 0.0 {
        let excess_mass = -cohort.sugar_leaf * leaf_volume * GLUCOSE_MOLAR_MASS;
        let proportion = if leaf_resp_day > 0.0 {
            (excess_mass / leaf_resp_day).min(1.0)
        } else {
            1.0
        };
        la_dead += la_expanded * proportion;
        la_expanded *= 1.0 - proportion;
        la_live *= 1.0 - proportion;
        if la_live < MIN_LEAF_AREA {
            la_live = 0.0;
            la_expanded = 0.0;
        }
        cohort.sugar_leaf = 0.0;
    }

    // Realized leaf growth, normalized by the pre-update sapwood area
    la_live += delta_la_growth;
    la_expanded += delta_la_growth;
    output.leaf_area_growth = delta_la_growth / cohort.sapwood_area;

    // Age- and drought-driven leaf shedding
    let leaf_rwc = combined_rwc(
        forcing.end_of_day.psi_symplastic_leaf,
        forcing.end_of_day.psi_apoplastic_leaf,
        cohort.leaf_pi0,
        species.leaf_eps,
        species.leaf_apoplastic_fraction,
        species.vc_leaf_c,
        species.vc_leaf_d,
    );
    let senescence = leaf_senescence_proportion(species, leaf_rwc);
    la_dead += la_expanded * senescence;
    la_expanded *= 1.0 - senescence;
    la_live *= 1.0 - senescence;

    // Sapwood turnover, then growth; refill embolism if growth-coupled
    cohort.sapwood_area -= sapwood_turnover_proportion(cohort.height) * cohort.sapwood_area;
    cohort.sapwood_area += delta_sa_growth;
    output.sapwood_area_growth = delta_sa_growth / cohort.sapwood_area;
    if config.cavitation_refill == CavitationRefill::Growth {
        cohort.stem_plc = (cohort.stem_plc - delta_sa_growth / cohort.sapwood_area).max(0.0);
    }

    // Mortality: starvation if the sapwood sugar pool ran out, desiccation
    // if the stem dried past half its relative water content
    let stem_rwc = combined_rwc(
        forcing.end_of_day.psi_symplastic_stem,
        forcing.end_of_day.psi_apoplastic_stem,
        cohort.stem_pi0,
        species.stem_eps,
        species.stem_apoplastic_fraction,
        species.vc_stem_c,
        species.vc_stem_d,
    );
    if cohort.sugar_sapwood < 0.0 || stem_rwc < 0.5 {
        la_dead = la_live;
        la_live = 0.0;
        la_expanded = 0.0;
        let cause = if cohort.sugar_sapwood < 0.0 {
            cohort.sugar_sapwood = 0.0;
            CohortStatus::Starvation
        } else {
            CohortStatus::Desiccation
        };
        cohort.status = cohort.status.transition(cause);
        info!(species = %species.name, ?cause, "cohort died");
    }

    cohort.lai_live = la_live * cohort.density / 10_000.0;
    cohort.lai_expanded = la_expanded * cohort.density / 10_000.0;
    cohort.lai_dead = la_dead * cohort.density / 10_000.0;

    // Rescale the hydraulic network to the new geometry, preserving the
    // stem:root resistance proportion measured before the update
    let old_stem_resistance = 1.0 / cohort.vc_stem_kmax;
    let old_root_resistance = 1.0 / cohort.vc_root_kmax;
    let old_root_proportion = old_root_resistance / (old_root_resistance + old_stem_resistance);
    if la_live > 0.0 {
        cohort.al2as = la_live / (cohort.sapwood_area / 10_000.0);
        cohort.vc_stem_kmax = maximum_stem_hydraulic_conductance(
            species.kmax_stemxylem,
            species.reference_height,
            cohort.al2as,
            cohort.height,
            config.taper,
        );
    }
    let new_stem_resistance = 1.0 / cohort.vc_stem_kmax;
    let new_root_resistance =
        old_root_proportion * new_stem_resistance / (1.0 - old_root_proportion);
    cohort.vc_root_kmax = 1.0 / new_root_resistance;
    cohort.plant_kmax =
        whole_plant_conductance(cohort.vc_leaf_kmax, cohort.vc_stem_kmax, cohort.vc_root_kmax);

    // Osmotic potentials implied by the end-of-day sugar levels, at 20 °C
    cohort.leaf_pi0 = osmotic_water_potential(cohort.sugar_leaf, 20.0, config.non_sugar_conc);
    cohort.stem_pi0 = osmotic_water_potential(cohort.sugar_sapwood, 20.0, config.non_sugar_conc);

    // Feedback inhibition of photosynthesis by accumulated leaf sugar
    cohort.nspl = if config.non_stomatal_limitation {
        1.0 - (cohort.sugar_leaf - 0.5).clamp(0.0, 1.0)
    } else {
        1.0
    };

    output.sugar_leaf = cohort.sugar_leaf;
    output.starch_leaf = cohort.starch_leaf;
    output.sugar_sapwood = cohort.sugar_sapwood;
    output.starch_sapwood = cohort.starch_sapwood;
    output.sapwood_area = cohort.sapwood_area;
    output.leaf_area = la_expanded;
    output.huber_value = 10_000.0 / cohort.al2as;
    output.labile_mass_leaf =
        (cohort.sugar_leaf + cohort.starch_leaf) * GLUCOSE_MOLAR_MASS * leaf_volume;
    output.labile_mass_sapwood =
        (cohort.sugar_sapwood + cohort.starch_sapwood) * GLUCOSE_MOLAR_MASS * sapwood_volume;
    output.leaf_pi0 = cohort.leaf_pi0;
    output.stem_pi0 = cohort.stem_pi0;
    output.subdaily = series;
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{CohortGeometry, PhenologyFlags, WaterStatusEndOfDay};
    use approx::assert_relative_eq;

    const STEPS: usize = 24;

    fn test_cohort(config: &StandConfig) -> (Cohort, SpeciesParams) {
        let species = SpeciesParams::holm_oak();
        let geometry = CohortGeometry {
            density: 400.0,
            height: 500.0,
            rooting_depth: 2000.0,
            dbh: Some(15.0),
            crown_ratio: 0.6,
            sapwood_area: 120.0,
            lai_live: 1.5,
        };
        (Cohort::new(0, &species, geometry, config), species)
    }

    fn quiet_forcing(assimilation: f64, psi: f64) -> (Vec<f64>, CohortForcing) {
        let temperature = vec![25.0; STEPS];
        let forcing = CohortForcing {
            assimilation: vec![assimilation; STEPS],
            psi_symplastic_leaf: vec![psi; STEPS],
            psi_symplastic_stem: vec![psi; STEPS],
            rwc_symplastic_leaf: vec![1.0; STEPS],
            rwc_symplastic_stem: vec![1.0; STEPS],
            end_of_day: WaterStatusEndOfDay {
                psi_symplastic_leaf: psi,
                psi_apoplastic_leaf: psi,
                psi_symplastic_stem: psi,
                psi_apoplastic_stem: psi,
            },
            phenology: PhenologyFlags {
                leaf_unfolding: true,
                bud_formation: false,
            },
        };
        (temperature, forcing)
    }

    #[test]
    fn carbon_balance_closes() {
        let config = StandConfig::default();
        let (mut cohort, species) = test_cohort(&config);
        let (temperature, forcing) = quiet_forcing(0.4, -0.5);
        let out = grow_cohort_day(&mut cohort, &species, &temperature, &forcing, &config);
        assert_relative_eq!(
            out.carbon_balance,
            out.gross_photosynthesis - out.maintenance_respiration - out.growth_respiration,
            max_relative = 1e-9
        );
    }

    #[test]
    fn dead_cohort_is_not_mutated() {
        let config = StandConfig::default();
        let (mut cohort, species) = test_cohort(&config);
        cohort.status = CohortStatus::Starvation;
        let snapshot = cohort.clone();
        let (temperature, forcing) = quiet_forcing(0.4, -0.5);
        let out = grow_cohort_day(&mut cohort, &species, &temperature, &forcing, &config);
        assert_eq!(out.gross_photosynthesis, 0.0);
        assert_eq!(cohort.sugar_sapwood, snapshot.sugar_sapwood);
        assert_eq!(cohort.sapwood_area, snapshot.sapwood_area);
    }

    /// Total labile mass at the cohort's current geometry (g glucose)
    fn labile_mass(cohort: &Cohort, species: &SpeciesParams) -> f64 {
        let leaf_volume = leaf_storage_volume(
            cohort.lai_expanded,
            cohort.density,
            species.sla,
            species.leaf_density,
        );
        let sapwood_volume = sapwood_storage_volume(
            cohort.sapwood_area,
            cohort.height,
            cohort.rooting_depth,
            species.wood_density,
        );
        (cohort.sugar_leaf + cohort.starch_leaf) * GLUCOSE_MOLAR_MASS * leaf_volume
            + (cohort.sugar_sapwood + cohort.starch_sapwood) * GLUCOSE_MOLAR_MASS * sapwood_volume
    }

    #[test]
    fn sink_limited_leaf_growth_matches_rate_cap() {
        // Abundant sugar, optimum temperature, full turgor, target twice the
        // current area: growth is limited by the sink rate alone
        let config = StandConfig::default();
        let (mut cohort, species) = test_cohort(&config);
        cohort.sugar_leaf = 2.0;
        cohort.sugar_sapwood = 2.0;
        let la_live = leaf_area_per_individual(cohort.lai_live, cohort.density);
        cohort.leaf_area_target = 2.0 * la_live;
        let target = cohort.leaf_area_target;
        let sapwood_area = cohort.sapwood_area;
        let leaf_tlp = turgor_loss_point(cohort.leaf_pi0, species.leaf_eps);
        let (temperature, forcing) = quiet_forcing(3.0, 0.0);
        let out = grow_cohort_day(&mut cohort, &species, &temperature, &forcing, &config);
        // f_temp = 1 at 25 °C; the turgor factor at zero potential is
        // 1 - exp(-5), just under one. Normalized by the pre-update sapwood
        // area.
        let f_turgor = turgor_growth_factor(0.0, leaf_tlp);
        let expected = RGR_LEAF_MAX * target * f_turgor / sapwood_area;
        assert_relative_eq!(out.leaf_area_growth, expected, max_relative = 1e-9);
    }

    #[test]
    fn cold_day_grows_nothing_but_still_respires() {
        let config = StandConfig::default();
        let (mut cohort, species) = test_cohort(&config);
        let labile_before = labile_mass(&cohort, &species);
        let (mut temperature, forcing) = quiet_forcing(0.0, -0.5);
        temperature.fill(2.0);
        let out = grow_cohort_day(&mut cohort, &species, &temperature, &forcing, &config);
        assert_eq!(out.growth_respiration, 0.0);
        assert_eq!(out.leaf_area_growth, 0.0);
        assert_eq!(out.sapwood_area_growth, 0.0);
        assert!(out.maintenance_respiration > 0.0);
        // Q10 at 2 °C is below the 20 °C base rate
        assert!(q10_respiration_factor(2.0) < 1.0);
        // With zero assimilation the total labile mass can only shrink
        assert!(out.labile_mass_leaf + out.labile_mass_sapwood < labile_before);
    }

    #[test]
    fn respiration_only_day_drains_pools_without_transport_when_leafless() {
        let config = StandConfig::default();
        let (mut cohort, species) = test_cohort(&config);
        cohort.lai_live = 0.0;
        cohort.lai_expanded = 0.0;
        let labile_before =
            (cohort.sugar_sapwood + cohort.starch_sapwood) * GLUCOSE_MOLAR_MASS;
        let (temperature, mut forcing) = quiet_forcing(0.0, -0.5);
        forcing.phenology.leaf_unfolding = false;
        let out = grow_cohort_day(&mut cohort, &species, &temperature, &forcing, &config);
        assert_eq!(out.sugar_transport, 0.0);
        assert_eq!(out.gross_photosynthesis, 0.0);
        let labile_after = (cohort.sugar_sapwood + cohort.starch_sapwood) * GLUCOSE_MOLAR_MASS;
        assert!(labile_after < labile_before);
    }

    #[test]
    fn starvation_is_terminal_and_sheds_all_leaves() {
        // Phloem transport is switched off so leaf reserves cannot bail the
        // stem out; sapwood respiration pushes its exhausted pool negative
        let config = StandConfig {
            k_phloem: 0.0,
            ..StandConfig::default()
        };
        let (mut cohort, species) = test_cohort(&config);
        cohort.sugar_sapwood = 1e-6;
        cohort.starch_sapwood = 0.0;
        let (temperature, forcing) = quiet_forcing(0.0, -0.5);
        grow_cohort_day(&mut cohort, &species, &temperature, &forcing, &config);
        assert_eq!(cohort.status, CohortStatus::Starvation);
        assert_eq!(cohort.lai_live, 0.0);
        assert_eq!(cohort.lai_expanded, 0.0);
        assert!(cohort.lai_dead > 0.0);

        // Subsequent days never revive the cohort
        let (temperature, forcing) = quiet_forcing(3.0, -0.1);
        grow_cohort_day(&mut cohort, &species, &temperature, &forcing, &config);
        assert_eq!(cohort.status, CohortStatus::Starvation);
        assert_eq!(cohort.lai_live, 0.0);
    }

    #[test]
    fn desiccation_kills_when_stem_dries_out() {
        let config = StandConfig::default();
        let (mut cohort, species) = test_cohort(&config);
        let (temperature, mut forcing) = quiet_forcing(0.5, -0.5);
        forcing.end_of_day.psi_symplastic_stem = -12.0;
        forcing.end_of_day.psi_apoplastic_stem = -12.0;
        grow_cohort_day(&mut cohort, &species, &temperature, &forcing, &config);
        assert_eq!(cohort.status, CohortStatus::Desiccation);
        assert_eq!(cohort.lai_live, 0.0);
    }

    #[test]
    fn daily_pool_change_matches_carbon_fluxes() {
        // Mass conservation at the day scale: the change in total labile
        // mass equals photosynthesis minus respiration and growth cost
        let config = StandConfig::default();
        let (mut cohort, species) = test_cohort(&config);
        let leaf_volume = leaf_storage_volume(
            cohort.lai_expanded,
            cohort.density,
            species.sla,
            species.leaf_density,
        );
        let sapwood_volume = sapwood_storage_volume(
            cohort.sapwood_area,
            cohort.height,
            cohort.rooting_depth,
            species.wood_density,
        );
        let labile_before = (cohort.sugar_leaf + cohort.starch_leaf)
            * GLUCOSE_MOLAR_MASS
            * leaf_volume
            + (cohort.sugar_sapwood + cohort.starch_sapwood) * GLUCOSE_MOLAR_MASS * sapwood_volume;
        let b_leaves = leaf_structural_biomass(cohort.lai_expanded, cohort.density, species.sla);
        let b_sapwood = sapwood_living_biomass(
            cohort.sapwood_area,
            cohort.height,
            cohort.rooting_depth,
            species.wood_density,
        );
        let b_total = b_leaves + b_sapwood + b_leaves / 2.0 + labile_before;

        let (temperature, forcing) = quiet_forcing(0.3, -0.5);
        let out = grow_cohort_day(&mut cohort, &species, &temperature, &forcing, &config);
        assert!(cohort.status.is_alive(), "no mortality expected here");

        let labile_after = out.labile_mass_leaf + out.labile_mass_sapwood;
        let net_flux = out.carbon_balance * b_total;
        assert_relative_eq!(labile_after - labile_before, net_flux, max_relative = 1e-6);
    }
}
