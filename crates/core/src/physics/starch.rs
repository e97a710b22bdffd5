//! Sugar-starch interconversion kinetics
//!
//! Net conversion rate between the soluble sugar pool and the starch pool of
//! one symplastic compartment. Synthesis is a saturating (Michaelis-Menten)
//! function of the sugar excess over the compartment's equilibrium
//! concentration; hydrolysis is the mirror function of the deficit. The
//! caller is responsible for capping synthesis at the starch capacity and
//! hydrolysis at the available starch.

/// Net starch synthesis rate (mol gluc · l-1 · s-1; negative = hydrolysis)
fn sugar_starch_rate(
    sugar_conc: f64,
    eq_sugar_conc: f64,
    vmax_synthesis: f64,
    km_synthesis: f64,
    vmax_hydrolysis: f64,
    km_hydrolysis: f64,
) -> f64 {
    let excess = (sugar_conc - eq_sugar_conc).max(0.0);
    let deficit = (eq_sugar_conc - sugar_conc).max(0.0);
    let synthesis = vmax_synthesis * excess / (km_synthesis + excess);
    let hydrolysis = vmax_hydrolysis * deficit / (km_hydrolysis + deficit);
    synthesis - hydrolysis
}

/// Leaf compartment kinetics: fast turnover of transient leaf starch
pub fn sugar_starch_rate_leaf(sugar_conc: f64, eq_sugar_conc: f64) -> f64 {
    sugar_starch_rate(sugar_conc, eq_sugar_conc, 3.0e-6, 0.1, 4.0e-6, 0.1)
}

/// Sapwood compartment kinetics: slower synthesis into long-term reserves
pub fn sugar_starch_rate_sapwood(sugar_conc: f64, eq_sugar_conc: f64) -> f64 {
    sugar_starch_rate(sugar_conc, eq_sugar_conc, 1.5e-6, 0.1, 4.0e-6, 0.1)
}
