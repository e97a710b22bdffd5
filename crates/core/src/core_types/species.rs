//! Species trait parameters
//!
//! One immutable record per species, shared by all cohorts of that species.
//! Values for the built-in presets follow published Mediterranean trait
//! compilations; they are representative, not calibrated.

use serde::{Deserialize, Serialize};

/// Leaf phenology habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhenologyKind {
    /// Winter-deciduous: leaves shed each autumn, no age-based turnover
    Deciduous,
    /// Evergreen flushing once per season
    OneflushEvergreen,
    /// Evergreen with progressive leaf replacement
    ProgressiveEvergreen,
}

impl PhenologyKind {
    /// Evergreen habits senesce leaves continuously by age
    pub fn is_evergreen(self) -> bool {
        matches!(
            self,
            PhenologyKind::OneflushEvergreen | PhenologyKind::ProgressiveEvergreen
        )
    }
}

/// Static trait parameters of one species
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesParams {
    pub name: String,
    pub phenology: PhenologyKind,
    /// Leaf lifespan (years); drives age-based senescence in evergreens
    pub leaf_duration: f64,
    /// Specific leaf area (m2·kg-1)
    pub sla: f64,
    /// Leaf tissue density (g·cm-3)
    pub leaf_density: f64,
    /// Wood density (g·cm-3)
    pub wood_density: f64,
    /// Reference leaf area per unit sapwood area (m2·m-2)
    pub al2as: f64,
    /// Maximum relative growth rate of sapwood area (cm2·cm-2·day-1)
    pub rgr_sapwood_max: f64,
    /// Maximum sapwood-specific xylem conductivity (kg·m-1·s-1·MPa-1)
    pub kmax_stemxylem: f64,
    /// Species median height (cm); taper reference
    pub reference_height: f64,
    /// Maximum leaf hydraulic conductance (mmol·m-2·s-1·MPa-1)
    pub vc_leaf_kmax: f64,
    /// Initial root hydraulic conductance (mmol·m-2·s-1·MPa-1)
    pub vc_root_kmax: f64,
    /// Leaf osmotic potential at full turgor (MPa, negative)
    pub leaf_pi0: f64,
    /// Leaf bulk modulus of elasticity (MPa)
    pub leaf_eps: f64,
    /// Leaf apoplastic water fraction (0-1)
    pub leaf_apoplastic_fraction: f64,
    /// Stem osmotic potential at full turgor (MPa, negative)
    pub stem_pi0: f64,
    /// Stem bulk modulus of elasticity (MPa)
    pub stem_eps: f64,
    /// Stem apoplastic water fraction (0-1)
    pub stem_apoplastic_fraction: f64,
    /// Leaf xylem vulnerability, Weibull shape
    pub vc_leaf_c: f64,
    /// Leaf xylem vulnerability, Weibull scale (MPa, negative)
    pub vc_leaf_d: f64,
    /// Stem xylem vulnerability, Weibull shape
    pub vc_stem_c: f64,
    /// Stem xylem vulnerability, Weibull scale (MPa, negative)
    pub vc_stem_d: f64,
}

impl SpeciesParams {
    /// Sclerophyllous evergreen oak (holm oak type)
    pub fn holm_oak() -> Self {
        SpeciesParams {
            name: "holm-oak".to_string(),
            phenology: PhenologyKind::OneflushEvergreen,
            leaf_duration: 2.4,
            sla: 4.8,
            leaf_density: 0.52,
            wood_density: 0.9,
            al2as: 1100.0,
            rgr_sapwood_max: 0.002,
            kmax_stemxylem: 0.4,
            reference_height: 600.0,
            vc_leaf_kmax: 5.0,
            vc_root_kmax: 3.5,
            leaf_pi0: -2.5,
            leaf_eps: 15.0,
            leaf_apoplastic_fraction: 0.29,
            stem_pi0: -1.6,
            stem_eps: 12.0,
            stem_apoplastic_fraction: 0.4,
            vc_leaf_c: 2.8,
            vc_leaf_d: -4.0,
            vc_stem_c: 3.0,
            vc_stem_d: -5.5,
        }
    }

    /// Drought-tolerant conifer (Aleppo pine type)
    pub fn aleppo_pine() -> Self {
        SpeciesParams {
            name: "aleppo-pine".to_string(),
            phenology: PhenologyKind::ProgressiveEvergreen,
            leaf_duration: 2.8,
            sla: 5.1,
            leaf_density: 0.45,
            wood_density: 0.6,
            al2as: 1500.0,
            rgr_sapwood_max: 0.003,
            kmax_stemxylem: 0.15,
            reference_height: 850.0,
            vc_leaf_kmax: 4.0,
            vc_root_kmax: 3.0,
            leaf_pi0: -1.7,
            leaf_eps: 10.0,
            leaf_apoplastic_fraction: 0.25,
            stem_pi0: -1.4,
            stem_eps: 9.0,
            stem_apoplastic_fraction: 0.45,
            vc_leaf_c: 2.5,
            vc_leaf_d: -2.8,
            vc_stem_c: 2.7,
            vc_stem_d: -4.8,
        }
    }

    /// Winter-deciduous oak (downy oak type)
    pub fn downy_oak() -> Self {
        SpeciesParams {
            name: "downy-oak".to_string(),
            phenology: PhenologyKind::Deciduous,
            leaf_duration: 1.0,
            sla: 12.4,
            leaf_density: 0.4,
            wood_density: 0.65,
            al2as: 1900.0,
            rgr_sapwood_max: 0.0025,
            kmax_stemxylem: 0.8,
            reference_height: 900.0,
            vc_leaf_kmax: 6.0,
            vc_root_kmax: 4.0,
            leaf_pi0: -2.0,
            leaf_eps: 12.0,
            leaf_apoplastic_fraction: 0.27,
            stem_pi0: -1.5,
            stem_eps: 10.0,
            stem_apoplastic_fraction: 0.4,
            vc_leaf_c: 2.3,
            vc_leaf_d: -3.2,
            vc_stem_c: 2.6,
            vc_stem_d: -4.0,
        }
    }
}
