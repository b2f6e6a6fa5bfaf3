//! Conversion of geological orientations into ENU unit vectors.
//!
//! Lines are given as (plunge, trend) and planes as (strike, dip), all in degrees.
//!
//! - Trend and strike are measured clockwise from North in the horizontal plane.
//! - Plunge and dip are measured downwards from the horizontal.
//! - Strike follows the right-hand rule: the plane dips to the right of the
//!   strike direction, towards azimuth strike + 90.
//!
//! A line with plunge `p` and trend `t` has direction cosines
//!
//! ```text
//! x = cos(p) sin(t)    (East)
//! y = cos(p) cos(t)    (North)
//! z = -sin(p)          (Up; plunge is positive down)
//! ```
//!
//! The normal of a plane is the line with trend = strike + 90 and
//! plunge = dip - 90. Its Up component is cos(dip) >= 0, so normals always
//! point upwards and lean towards the dip direction.
//!
//! # Usage
//!
//! ```
//! use enu_core::orientation::{dir_vec_line, dir_vec_plane};
//!
//! let lines = dir_vec_line(&[30.0, 60.0], &[45.0, 200.0]).unwrap();
//! assert_eq!(lines.ncols(), 2);
//!
//! let normals = dir_vec_plane(&[0.0], &[90.0]).unwrap();
//! assert!((normals[(0, 0)] - 1.0).abs() < 1e-12);
//! ```

use crate::config::DomainPolicy;
use crate::error::{Error, Result};
use crate::types::{DirectionBatch, Vec3};

/// Unit vector of a line with the given plunge and trend (degrees).
///
/// No range checks are applied.
pub fn line_direction(plunge: f64, trend: f64) -> Vec3 {
    let p = plunge.to_radians();
    let t = trend.to_radians();
    let horizontal = p.cos();
    Vec3::new(t.sin() * horizontal, t.cos() * horizontal, -p.sin())
}

/// Upward unit normal of a plane with the given strike and dip (degrees).
///
/// No range checks are applied.
pub fn plane_normal(strike: f64, dip: f64) -> Vec3 {
    line_direction(dip - 90.0, strike + 90.0)
}

/// Pair up two angle arrays, repeating a single value to match the other side.
///
/// Used at input boundaries where a lone angle is given for a whole batch,
/// e.g. one trend for many plunges.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if the lengths differ and neither is 1.
pub fn broadcast_angles(a: &[f64], b: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    match (a.len(), b.len()) {
        (n, m) if n == m => Ok((a.to_vec(), b.to_vec())),
        (1, m) => Ok((vec![a[0]; m], b.to_vec())),
        (n, 1) => Ok((a.to_vec(), vec![b[0]; n])),
        (n, m) => Err(Error::lengths("angle arrays", n, m)),
    }
}

/// Unit direction vectors for a batch of lines.
///
/// Returns a 3xN batch, one column per (plunge, trend) pair. Out-of-range
/// plunges pass through with a warning; see [`dir_vec_line_with`].
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if `plunge` and `trend` differ in length.
pub fn dir_vec_line(plunge: &[f64], trend: &[f64]) -> Result<DirectionBatch> {
    dir_vec_line_with(plunge, trend, DomainPolicy::default())
}

/// [`dir_vec_line`] with an explicit policy for plunges outside [0, 90].
pub fn dir_vec_line_with(
    plunge: &[f64],
    trend: &[f64],
    policy: DomainPolicy,
) -> Result<DirectionBatch> {
    if plunge.len() != trend.len() {
        return Err(Error::lengths("plunge/trend", plunge.len(), trend.len()));
    }

    let mut batch = DirectionBatch::zeros(plunge.len());
    for (j, (&p, &t)) in plunge.iter().zip(trend).enumerate() {
        let p = policy.apply("plunge", p)?;
        batch.set_column(j, &line_direction(p, t));
    }
    Ok(batch)
}

/// Upward unit normals for a batch of planes.
///
/// Returns a 3xN batch, one column per (strike, dip) pair. Out-of-range
/// dips pass through with a warning; see [`dir_vec_plane_with`].
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if `strike` and `dip` differ in length.
pub fn dir_vec_plane(strike: &[f64], dip: &[f64]) -> Result<DirectionBatch> {
    dir_vec_plane_with(strike, dip, DomainPolicy::default())
}

/// [`dir_vec_plane`] with an explicit policy for dips outside [0, 90].
pub fn dir_vec_plane_with(
    strike: &[f64],
    dip: &[f64],
    policy: DomainPolicy,
) -> Result<DirectionBatch> {
    if strike.len() != dip.len() {
        return Err(Error::lengths("strike/dip", strike.len(), dip.len()));
    }

    let mut batch = DirectionBatch::zeros(strike.len());
    for (j, (&s, &d)) in strike.iter().zip(dip).enumerate() {
        // The dip is checked here; the derived plunge lies in [-90, 0] by construction.
        let d = policy.apply("dip", d)?;
        batch.set_column(j, &plane_normal(s, d));
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec_magnitude;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_line_vectors() {
        let v = dir_vec_line(&[1.0, 89.0, 1.0, 89.0], &[1.0, 1.0, 181.0, 181.0]).unwrap();
        let expected = [
            [0.01745, 0.000305, -0.01745, -0.000305],
            [0.999695, 0.01745, -0.999695, -0.01745],
            [-0.017452, -0.999848, -0.017452, -0.999848],
        ];
        assert_eq!(v.ncols(), 4);
        for (i, row) in expected.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                assert_relative_eq!(v[(i, j)], value, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_cardinal_lines() {
        // Horizontal line trending north
        let v = line_direction(0.0, 0.0);
        assert_relative_eq!(v, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-12);

        // Horizontal line trending east
        let v = line_direction(0.0, 90.0);
        assert_relative_eq!(v, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-12);

        // Vertical line points down
        let v = line_direction(90.0, 123.0);
        assert_relative_eq!(v.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_line_unit_length_grid() {
        let mut plunge = Vec::new();
        let mut trend = Vec::new();
        for p in 0..=90 {
            for t in (0..360).step_by(5) {
                plunge.push(p as f64);
                trend.push(t as f64 + 0.25);
            }
        }
        let v = dir_vec_line(&plunge, &trend).unwrap();
        for m in vec_magnitude(&v) {
            assert_relative_eq!(m, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_plane_unit_length_and_upward() {
        let mut strike = Vec::new();
        let mut dip = Vec::new();
        for s in (0..360).step_by(7) {
            for d in 0..=90 {
                strike.push(s as f64);
                dip.push(d as f64);
            }
        }
        let n = dir_vec_plane(&strike, &dip).unwrap();
        for (j, m) in vec_magnitude(&n).into_iter().enumerate() {
            assert_relative_eq!(m, 1.0, epsilon = 1e-6);
            assert!(n[(2, j)] >= -1e-12, "normal {j} points down");
        }
    }

    #[test]
    fn test_horizontal_plane_normal_is_up() {
        let n = plane_normal(37.0, 0.0);
        assert_relative_eq!(n, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_plane_normal_leans_down_dip() {
        // Strike north, dip 30 east: normal leans east
        let n = plane_normal(0.0, 30.0);
        assert_relative_eq!(n.x, 30f64.to_radians().sin(), epsilon = 1e-12);
        assert_relative_eq!(n.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.z, 30f64.to_radians().cos(), epsilon = 1e-12);

        // Vertical plane striking north has an east-pointing normal
        let n = plane_normal(0.0, 90.0);
        assert_relative_eq!(n, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_plane_normal_perpendicular_to_strike_and_dip_lines() {
        let (strike, dip) = (130.0, 55.0);
        let n = plane_normal(strike, dip);
        let strike_line = line_direction(0.0, strike);
        let dip_line = line_direction(dip, strike + 90.0);
        assert_relative_eq!(n.dot(&strike_line), 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.dot(&dip_line), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            dir_vec_line(&[1.0, 2.0], &[3.0]),
            Err(Error::ShapeMismatch(_))
        ));
        assert!(matches!(
            dir_vec_plane(&[1.0], &[]),
            Err(Error::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_broadcast_angles() {
        let (p, t) = broadcast_angles(&[30.0], &[0.0, 90.0, 180.0]).unwrap();
        assert_eq!(p, vec![30.0; 3]);
        assert_eq!(t, vec![0.0, 90.0, 180.0]);

        let (s, d) = broadcast_angles(&[10.0, 20.0], &[45.0]).unwrap();
        assert_eq!(s, vec![10.0, 20.0]);
        assert_eq!(d, vec![45.0, 45.0]);

        // Single values stay a single column
        let (p, t) = broadcast_angles(&[1.0], &[1.0]).unwrap();
        let v = dir_vec_line(&p, &t).unwrap();
        assert_eq!(v.shape(), (3, 1));

        assert!(matches!(
            broadcast_angles(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(Error::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_empty_batch() {
        let v = dir_vec_line(&[], &[]).unwrap();
        assert_eq!(v.ncols(), 0);
    }

    #[test]
    fn test_domain_policies() {
        // Default passes out-of-range values through
        let v = dir_vec_plane(&[0.0], &[120.0]).unwrap();
        assert_relative_eq!(v.column(0).into_owned(), plane_normal(0.0, 120.0), epsilon = 1e-12);

        let v = dir_vec_plane_with(&[0.0], &[120.0], DomainPolicy::Clamp).unwrap();
        assert_relative_eq!(v.column(0).into_owned(), plane_normal(0.0, 90.0), epsilon = 1e-12);

        assert!(matches!(
            dir_vec_line_with(&[95.0], &[0.0], DomainPolicy::Reject),
            Err(Error::Domain(_))
        ));
    }
}
