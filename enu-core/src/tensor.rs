//! Stress tensor construction in ENU axes.
//!
//! A stress state is described by its three principal magnitudes and the
//! azimuth of the maximum horizontal stress:
//!
//! 1. Place (SHmin, SHmax, SV) on the (East, North, Up) diagonal, i.e. with
//!    SHmax pointing North.
//! 2. Rotate about the vertical axis: S = R · D · Rᵀ.
//!
//! The rotation matrix is
//!
//! ```text
//! R(a) = [ cos a   sin a   0 ]
//!        [-sin a   cos a   0 ]
//!        [   0       0     1 ]
//! ```
//!
//! R maps North (0, 1, 0) onto (sin a, cos a, 0), which is the horizontal
//! line with trend `a`. SHmax therefore ends up along azimuth `a`, clockwise
//! from North, the same convention as [`crate::orientation::line_direction`].

use crate::types::StressTensor;
use nalgebra::Matrix3;

/// Diagonal stress tensor with principal values in ENU order.
pub fn stress_tensor_diagonal(sigma_e: f64, sigma_n: f64, sigma_u: f64) -> StressTensor {
    StressTensor::diagonal(sigma_e, sigma_n, sigma_u)
}

/// Rotation about the Up axis by `angle` degrees, clockwise seen from above.
#[rustfmt::skip]
pub fn rotation_matrix_around_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.to_radians().sin_cos();
    Matrix3::new(
        c,   s,   0.0,
        -s,  c,   0.0,
        0.0, 0.0, 1.0,
    )
}

impl StressTensor {
    /// Rotate the tensor: R · S · Rᵀ.
    pub fn rotated(&self, rotation: &Matrix3<f64>) -> StressTensor {
        StressTensor(rotation * self.0 * rotation.transpose())
    }
}

/// Build a stress tensor from principal magnitudes and the SHmax azimuth (degrees).
///
/// The result is symmetric up to floating point rounding.
///
/// # Example
///
/// ```
/// use enu_core::tensor::make_stress_tensor;
///
/// // SHmax along East
/// let s = make_stress_tensor(190.0, 312.0, 67.0, 90.0);
/// assert!((s.0[(0, 0)] - 312.0).abs() < 1e-9);
/// assert!((s.0[(1, 1)] - 190.0).abs() < 1e-9);
/// ```
pub fn make_stress_tensor(
    sh_min: f64,
    sh_max: f64,
    sv: f64,
    azimuth_sh_max: f64,
) -> StressTensor {
    let principal = stress_tensor_diagonal(sh_min, sh_max, sv);
    let rotation = rotation_matrix_around_z(azimuth_sh_max);
    principal.rotated(&rotation)
}
