//! Tissue water relations from pressure-volume theory
//!
//! Symplastic relations follow the classic pressure-volume curve formulation
//! (Bartlett et al. 2012): solute potential pi0/R, turgor declining linearly
//! with relative water content, loss of turgor at the turgor-loss point.
//! Apoplastic water content follows the Weibull xylem vulnerability curve.

/// Water potential at turgor loss (MPa)
///
/// # Arguments
/// * `pi0` - Osmotic potential at full turgor (MPa, negative)
/// * `eps` - Bulk modulus of elasticity (MPa, positive)
pub fn turgor_loss_point(pi0: f64, eps: f64) -> f64 {
    (pi0 * eps) / (pi0 + eps)
}

/// Symplastic relative water content at a given symplastic water potential
///
/// Above the turgor-loss point the total potential is the sum of solute
/// potential `pi0 / R` and turgor `-pi0 - eps * (1 - R)`; solving for R gives
/// the positive root of `eps*R^2 - (pi0 + eps + psi)*R + pi0 = 0`. Below the
/// turgor-loss point only the solute term remains: `R = pi0 / psi`.
///
/// Returns a value in (0, 1]; 1 at `psi >= 0`.
pub fn symplastic_rwc(psi_sym: f64, pi0: f64, eps: f64) -> f64 {
    if psi_sym >= 0.0 {
        return 1.0;
    }
    let psi_tlp = turgor_loss_point(pi0, eps);
    let rwc = if psi_sym < psi_tlp {
        pi0 / psi_sym
    } else {
        let b = pi0 + eps + psi_sym;
        let disc = (b * b - 4.0 * eps * pi0).max(0.0);
        (b + disc.sqrt()) / (2.0 * eps)
    };
    rwc.clamp(0.0, 1.0)
}

/// Apoplastic relative water content from the Weibull vulnerability curve
///
/// `RWC = exp(-(psi/d)^c)`; 1 at zero potential, declining sigmoidally as the
/// potential drops past `d` (the potential causing ~63 % conductance loss).
///
/// # Arguments
/// * `psi_apo` - Apoplastic water potential (MPa, <= 0)
/// * `c` - Weibull shape parameter
/// * `d` - Weibull scale parameter (MPa, negative)
pub fn apoplastic_rwc(psi_apo: f64, c: f64, d: f64) -> f64 {
    if psi_apo >= 0.0 {
        return 1.0;
    }
    (-(psi_apo / d).powf(c)).exp()
}
