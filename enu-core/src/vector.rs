//! Column-wise operations on batches of ENU vectors.

use crate::error::{Error, Result};
use crate::types::DirectionBatch;

/// Euclidean norm of every column.
pub fn vec_magnitude(vectors: &DirectionBatch) -> Vec<f64> {
    vectors.column_iter().map(|c| c.norm()).collect()
}

/// Dot product of matching columns of two batches.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if the batches have different column counts.
/// There is no broadcasting of a single vector against a batch.
pub fn vec_dot_product(u: &DirectionBatch, v: &DirectionBatch) -> Result<Vec<f64>> {
    if u.ncols() != v.ncols() {
        return Err(Error::lengths("vector batches", u.ncols(), v.ncols()));
    }
    Ok(u
        .column_iter()
        .zip(v.column_iter())
        .map(|(a, b)| a.dot(&b))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{batch_from_columns, Vec3};
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude_single() {
        let v = batch_from_columns(&[Vec3::new(3.0, 4.0, 12.0)]);
        let m = vec_magnitude(&v);
        assert_eq!(m.len(), 1);
        assert_relative_eq!(m[0], 13.0, epsilon = 1e-12);
    }

    #[test]
    fn test_magnitude_batch() {
        let v = batch_from_columns(&[
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        ]);
        let m = vec_magnitude(&v);
        assert_eq!(m.len(), 3);
        assert_relative_eq!(m[0], 1.0);
        assert_relative_eq!(m[1], 2.0);
        assert_relative_eq!(m[2], 3f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_dot_product() {
        let u = batch_from_columns(&[Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 0.0, 0.0)]);
        let v = batch_from_columns(&[Vec3::new(4.0, 5.0, 6.0), Vec3::new(0.0, 1.0, 0.0)]);
        let d = vec_dot_product(&u, &v).unwrap();
        assert_relative_eq!(d[0], 32.0);
        assert_relative_eq!(d[1], 0.0);
    }

    #[test]
    fn test_dot_product_mismatch() {
        let u = batch_from_columns(&[Vec3::x(), Vec3::y()]);
        let v = batch_from_columns(&[Vec3::z()]);
        assert!(matches!(vec_dot_product(&u, &v), Err(Error::ShapeMismatch(_))));
    }
}
