//! Mohr-diagram data for a stress state.
//!
//! A [`MohrDiagram`] sweeps planes over a strike/dip grid, resolves the stress
//! tensor on each plane and evaluates Coulomb strength and slip tendency. All
//! arrays are paired by index and can be handed straight to a plotting layer
//! (scatter of normal vs. shear coloured by slip tendency).
//!
//! [`mohr_circles`] and [`failure_envelope`] give the geometry usually drawn
//! underneath the scatter.

use crate::config::MohrConfig;
use crate::error::{Error, Result};
use crate::failure::{slip_tendency_batch, strength_coulomb, strength_coulomb_batch};
use crate::orientation::dir_vec_plane_with;
use crate::resolve::stress_on_plane;
use crate::types::StressTensor;

/// Resolved stresses for a sweep of planes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MohrDiagram {
    /// Strike of each plane (degrees).
    pub strike: Vec<f64>,
    /// Dip of each plane (degrees).
    pub dip: Vec<f64>,
    /// Normal stress on each plane.
    pub normal: Vec<f64>,
    /// Shear stress magnitude on each plane.
    pub shear: Vec<f64>,
    /// Coulomb strength of each plane.
    pub strength: Vec<f64>,
    /// Shear over strength for each plane.
    pub slip_tendency: Vec<f64>,
}

impl MohrDiagram {
    /// Sample every plane on the strike/dip grid described by `config`.
    ///
    /// Strikes run over [0, 360) and dips over [0, 90], both starting at zero.
    /// The dip range always includes 90 so vertical planes are represented.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if the config fails validation, or
    /// [`Error::Domain`] from the configured domain policy.
    pub fn sample(stress: &StressTensor, config: &MohrConfig) -> Result<Self> {
        config.validate()?;

        let strikes = sweep(0.0, 360.0, config.strike_step_deg, false);
        let dips = sweep(0.0, 90.0, config.dip_step_deg, true);

        let n_planes = strikes.len() * dips.len();
        let mut strike = Vec::with_capacity(n_planes);
        let mut dip = Vec::with_capacity(n_planes);
        for &d in &dips {
            for &s in &strikes {
                strike.push(s);
                dip.push(d);
            }
        }

        let normals = dir_vec_plane_with(&strike, &dip, config.domain_policy)?;
        let resolved = stress_on_plane(stress, &normals);
        let strength = strength_coulomb_batch(config.cohesion, config.friction, &resolved.normal);
        let slip_tendency = slip_tendency_batch(&resolved.shear, &strength)?;

        log::debug!(
            "sampled {} planes ({} strikes x {} dips)",
            n_planes,
            strikes.len(),
            dips.len()
        );

        Ok(Self {
            strike,
            dip,
            normal: resolved.normal,
            shear: resolved.shear,
            strength,
            slip_tendency,
        })
    }

    /// Number of sampled planes.
    pub fn len(&self) -> usize {
        self.normal.len()
    }

    /// True when no planes were sampled.
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty()
    }

    /// Indices of planes at or beyond failure (slip tendency >= 1).
    pub fn critically_stressed(&self) -> Vec<usize> {
        self.slip_tendency
            .iter()
            .enumerate()
            .filter(|&(_, &ts)| ts >= 1.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Largest slip tendency, with the index of the plane that has it.
    pub fn max_slip_tendency(&self) -> Option<(usize, f64)> {
        self.slip_tendency
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Evenly spaced values from `start` in steps of `step`, stopping before `end`
/// (or at `end` when `inclusive`).
fn sweep(start: f64, end: f64, step: f64, inclusive: bool) -> Vec<f64> {
    let n = ((end - start) / step).floor() as usize;
    let mut values: Vec<f64> = (0..=n).map(|k| start + k as f64 * step).collect();

    // Drop values that reach `end` through rounding.
    let tol = step * 1e-9;
    values.retain(|&v| v < end - tol);
    if inclusive {
        values.push(end);
    }
    values
}

/// A Mohr circle in (normal, shear) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MohrCircle {
    /// Center on the normal stress axis.
    pub center: f64,
    /// Radius (half the principal stress difference).
    pub radius: f64,
}

impl MohrCircle {
    /// Circle through two principal stresses.
    pub fn from_principal(a: f64, b: f64) -> Self {
        Self {
            center: 0.5 * (a + b),
            radius: 0.5 * (a - b).abs(),
        }
    }

    /// Signed distance of (normal, shear) from the circle; negative inside.
    pub fn distance(&self, normal: f64, shear: f64) -> f64 {
        (normal - self.center).hypot(shear) - self.radius
    }

    /// Points along the upper half of the circle, for drawing.
    pub fn upper_half(&self, n_points: usize) -> (Vec<f64>, Vec<f64>) {
        let denom = n_points.saturating_sub(1).max(1) as f64;
        (0..n_points)
            .map(|k| {
                let theta = std::f64::consts::PI * k as f64 / denom;
                (
                    self.center + self.radius * theta.cos(),
                    self.radius * theta.sin(),
                )
            })
            .unzip()
    }
}

/// The three principal Mohr circles: σ1-σ3, σ1-σ2 and σ2-σ3.
///
/// The normal and shear stress on any plane lie inside the first circle and
/// outside the other two.
pub fn mohr_circles(stress: &StressTensor) -> [MohrCircle; 3] {
    let [s1, s2, s3] = stress.principal_stresses();
    [
        MohrCircle::from_principal(s1, s3),
        MohrCircle::from_principal(s1, s2),
        MohrCircle::from_principal(s2, s3),
    ]
}

/// Points along the Coulomb failure line for normal stress in [0, `normal_max`].
///
/// Returns paired (normal, shear strength) arrays of length `n_points`.
///
/// # Errors
///
/// [`Error::InvalidConfig`] if fewer than two points are requested.
pub fn failure_envelope(
    cohesion: f64,
    friction: f64,
    normal_max: f64,
    n_points: usize,
) -> Result<(Vec<f64>, Vec<f64>)> {
    if n_points < 2 {
        return Err(Error::InvalidConfig(format!(
            "failure envelope needs at least 2 points, got {n_points}"
        )));
    }
    let step = normal_max / (n_points - 1) as f64;
    Ok((0..n_points)
        .map(|k| {
            let sn = k as f64 * step;
            (sn, strength_coulomb(cohesion, friction, sn))
        })
        .unzip())
}
