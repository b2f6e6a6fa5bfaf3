//! Core data types for orientation and stress operations.
//!
//! This module defines the fundamental types used throughout the crate:
//! - ENU vectors and batches of column vectors
//! - The 3x3 stress tensor in ENU axes
//! - Paired normal/shear output of stress resolution
//!
//! Axes are East (x), North (y), Up (z).

use nalgebra::{Matrix3, Matrix3xX, SymmetricEigen, Vector3, Vector6};

/// A single vector in ENU coordinates.
pub type Vec3 = Vector3<f64>;

/// A 3x3 matrix in ENU axes.
pub type Mat3 = Matrix3<f64>;

/// A batch of N vectors stored as the columns of a 3xN matrix.
///
/// Row 0 holds East components, row 1 North, row 2 Up.
pub type DirectionBatch = Matrix3xX<f64>;

/// Build a batch from individual column vectors. An empty slice gives a 3x0 batch.
pub fn batch_from_columns(columns: &[Vec3]) -> DirectionBatch {
    let mut batch = DirectionBatch::zeros(columns.len());
    for (j, column) in columns.iter().enumerate() {
        batch.set_column(j, column);
    }
    batch
}

/// Stress tensor in ENU axes.
///
/// Compression is positive, following the geomechanics convention used for
/// Coulomb strength. The wrapped matrix is expected to be symmetric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressTensor(pub Matrix3<f64>);

impl StressTensor {
    /// Wrap a full 3x3 matrix.
    pub fn from_matrix(matrix: Matrix3<f64>) -> Self {
        Self(matrix)
    }

    /// Diagonal tensor with principal values along East, North and Up.
    pub fn diagonal(sigma_e: f64, sigma_n: f64, sigma_u: f64) -> Self {
        Self(Matrix3::from_diagonal(&Vector3::new(sigma_e, sigma_n, sigma_u)))
    }

    /// Zero stress state.
    pub fn zero() -> Self {
        Self(Matrix3::zeros())
    }

    /// Underlying matrix.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    /// Traction vector T = S * n acting on a plane with unit normal `n`.
    pub fn traction(&self, normal: &Vec3) -> Vec3 {
        self.0 * normal
    }

    /// True when every off-diagonal pair agrees within `tolerance`.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let s = &self.0;
        (s[(0, 1)] - s[(1, 0)]).abs() <= tolerance
            && (s[(0, 2)] - s[(2, 0)]).abs() <= tolerance
            && (s[(1, 2)] - s[(2, 1)]).abs() <= tolerance
    }

    /// Mean (hydrostatic) stress, one third of the trace.
    pub fn mean_stress(&self) -> f64 {
        self.0.trace() / 3.0
    }

    /// Principal stresses sorted so that σ1 >= σ2 >= σ3.
    pub fn principal_stresses(&self) -> [f64; 3] {
        let eigen = SymmetricEigen::new(self.0);
        let mut values = [
            eigen.eigenvalues[0],
            eigen.eigenvalues[1],
            eigen.eigenvalues[2],
        ];
        values.sort_by(|a, b| b.total_cmp(a));
        values
    }

    /// Voigt components [σ_EE, σ_NN, σ_UU, σ_EN, σ_NU, σ_EU].
    pub fn to_voigt(&self) -> Vector6<f64> {
        let s = &self.0;
        Vector6::new(s[(0, 0)], s[(1, 1)], s[(2, 2)], s[(0, 1)], s[(1, 2)], s[(0, 2)])
    }
}

impl Default for StressTensor {
    fn default() -> Self {
        Self::zero()
    }
}

/// Normal and shear stress resolved on a batch of planes, paired by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaneStress {
    /// Normal stress σ_N = T · n for each plane.
    pub normal: Vec<f64>,
    /// Shear stress magnitude |T - σ_N n| for each plane.
    pub shear: Vec<f64>,
}

impl PlaneStress {
    /// Number of planes.
    pub fn len(&self) -> usize {
        self.normal.len()
    }

    /// True when no planes were resolved.
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty()
    }

    /// Iterate over (normal, shear) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.normal.iter().copied().zip(self.shear.iter().copied())
    }
}
