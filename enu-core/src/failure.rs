//! Coulomb failure criterion and slip tendency.
//!
//! Shear strength of a plane follows the linear Coulomb law
//!
//! ```text
//! τ_strength = C + μ σ_N
//! ```
//!
//! with cohesion C, friction coefficient μ and normal stress σ_N
//! (compression positive). Slip tendency is the ratio of resolved shear
//! stress to that strength; values of 1 or more mean the plane is at or
//! beyond failure.

use crate::error::{Error, Result};

/// Coulomb shear strength for one normal stress value.
pub fn strength_coulomb(cohesion: f64, friction: f64, normal_stress: f64) -> f64 {
    cohesion + friction * normal_stress
}

/// Coulomb shear strength for every normal stress value.
pub fn strength_coulomb_batch(cohesion: f64, friction: f64, normal_stress: &[f64]) -> Vec<f64> {
    normal_stress
        .iter()
        .map(|&sn| strength_coulomb(cohesion, friction, sn))
        .collect()
}

/// Ratio of shear stress to shear strength.
///
/// A non-positive strength cannot resist any shear: the result is infinite
/// when `shear > 0` and zero otherwise.
pub fn slip_tendency(shear: f64, strength: f64) -> f64 {
    if strength > 0.0 {
        shear / strength
    } else if shear > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}

/// Slip tendency for paired shear and strength arrays.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if the arrays differ in length.
pub fn slip_tendency_batch(shear: &[f64], strength: &[f64]) -> Result<Vec<f64>> {
    if shear.len() != strength.len() {
        return Err(Error::lengths("shear/strength", shear.len(), strength.len()));
    }
    Ok(shear
        .iter()
        .zip(strength)
        .map(|(&tau, &s)| slip_tendency(tau, s))
        .collect())
}
