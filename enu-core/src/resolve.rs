//! Resolution of a stress tensor onto planes.
//!
//! For every unit normal n:
//! 1. Traction: T = S · n
//! 2. Normal stress: σ_N = T · n
//! 3. Shear traction: τ = T - σ_N n, reported as its magnitude |τ|
//!
//! Planes are independent, so the batch is processed in parallel with Rayon.
//! Output order always follows the column order of the input.

use crate::types::{DirectionBatch, PlaneStress, StressTensor, Vec3};
use rayon::prelude::*;

/// Normal stress and shear magnitude on a single plane.
pub fn resolve_on_normal(stress: &StressTensor, normal: &Vec3) -> (f64, f64) {
    let traction = stress.traction(normal);
    let normal_stress = traction.dot(normal);
    let shear = traction - normal * normal_stress;
    (normal_stress, shear.norm())
}

/// Resolve `stress` on every plane whose unit normal is a column of `normals`.
///
/// Returns paired normal and shear arrays of length N. Both shapes are fixed by
/// the types (3x3 tensor, 3xN batch), so there is no failure path.
pub fn stress_on_plane(stress: &StressTensor, normals: &DirectionBatch) -> PlaneStress {
    let (normal, shear): (Vec<f64>, Vec<f64>) = (0..normals.ncols())
        .into_par_iter()
        .map(|j| {
            let n: Vec3 = normals.column(j).into_owned();
            resolve_on_normal(stress, &n)
        })
        .unzip();

    log::trace!("resolved stress on {} planes", normal.len());
    PlaneStress { normal, shear }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::dir_vec_plane;
    use crate::tensor::{make_stress_tensor, stress_tensor_diagonal};
    use crate::types::batch_from_columns;
    use approx::assert_relative_eq;

    #[test]
    fn test_horizontal_plane_under_diagonal_tensor() {
        let s = stress_tensor_diagonal(40.0, 90.0, 65.0);
        let normals = batch_from_columns(&[Vec3::new(0.0, 0.0, 1.0)]);
        let result = stress_on_plane(&s, &normals);
        assert_eq!(result.len(), 1);
        assert_relative_eq!(result.normal[0], 65.0, epsilon = 1e-12);
        assert_relative_eq!(result.shear[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_principal_planes_have_no_shear() {
        let s = stress_tensor_diagonal(10.0, 20.0, 30.0);
        let normals = batch_from_columns(&[Vec3::x(), Vec3::y(), Vec3::z()]);
        let result = stress_on_plane(&s, &normals);
        assert_eq!(result.normal, vec![10.0, 20.0, 30.0]);
        for tau in &result.shear {
            assert_relative_eq!(*tau, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_plane_at_45_degrees() {
        // Normal halfway between East and Up: σ_N = (σ1+σ3)/2, τ = (σ1-σ3)/2
        let s = stress_tensor_diagonal(100.0, 50.0, 20.0);
        let n = Vec3::new(1.0, 0.0, 1.0).normalize();
        let (sn, tau) = resolve_on_normal(&s, &n);
        assert_relative_eq!(sn, 60.0, epsilon = 1e-10);
        assert_relative_eq!(tau, 40.0, epsilon = 1e-10);
    }

    #[test]
    fn test_batch_matches_single() {
        let s = make_stress_tensor(30.0, 110.0, 75.0, 35.0);
        let strikes = [0.0, 45.0, 133.0, 290.0];
        let dips = [10.0, 60.0, 85.0, 40.0];
        let normals = dir_vec_plane(&strikes, &dips).unwrap();
        let result = stress_on_plane(&s, &normals);

        assert_eq!(result.len(), 4);
        for (j, (sn, tau)) in result.pairs().enumerate() {
            let n: Vec3 = normals.column(j).into_owned();
            let (expected_sn, expected_tau) = resolve_on_normal(&s, &n);
            assert_relative_eq!(sn, expected_sn, epsilon = 1e-12);
            assert_relative_eq!(tau, expected_tau, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_shear_is_orthogonal_to_normal() {
        let s = make_stress_tensor(30.0, 110.0, 75.0, 35.0);
        let n = crate::orientation::plane_normal(72.0, 48.0);
        let t = s.traction(&n);
        let shear = t - n * t.dot(&n);
        assert_relative_eq!(shear.dot(&n), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_empty_batch() {
        let s = stress_tensor_diagonal(1.0, 2.0, 3.0);
        let result = stress_on_plane(&s, &DirectionBatch::zeros(0));
        assert!(result.is_empty());
    }
}
