//! ENU Core - orientations and stresses in East-North-Up coordinates
//!
//! Small geomechanics toolkit for structural geology exercises:
//! - Plunge/trend and strike/dip to ENU unit vectors
//! - Column-wise vector operations on 3xN batches
//! - Stress tensors from principal magnitudes and SHmax azimuth
//! - Normal and shear stress resolved on planes
//! - Coulomb strength, slip tendency and Mohr-diagram data
//!
//! # Conventions
//!
//! - Angles are in degrees; azimuths are clockwise from North.
//! - Plunge and dip are positive downwards; z is positive up.
//! - Strike follows the right-hand rule; plane normals point upwards.
//! - Compression is positive.
//!
//! # Architecture
//!
//! - [`DirectionBatch`]: 3xN batch of column vectors, the container for every
//!   batched operation
//! - [`StressTensor`]: 3x3 stress state in ENU axes
//! - [`MohrDiagram`]: paired normal/shear/slip-tendency arrays for plotting

pub mod types;
pub mod orientation;
pub mod vector;
pub mod tensor;
pub mod resolve;
pub mod failure;
pub mod mohr;
pub mod config;
pub mod error;

pub use types::{batch_from_columns, DirectionBatch, Mat3, PlaneStress, StressTensor, Vec3};
pub use orientation::{
    broadcast_angles, dir_vec_line, dir_vec_plane, line_direction, plane_normal,
};
pub use vector::{vec_dot_product, vec_magnitude};
pub use tensor::{make_stress_tensor, rotation_matrix_around_z, stress_tensor_diagonal};
pub use resolve::stress_on_plane;
pub use failure::{slip_tendency, strength_coulomb, strength_coulomb_batch};
pub use mohr::{failure_envelope, mohr_circles, MohrCircle, MohrDiagram};
pub use config::{DomainPolicy, MohrConfig};
pub use error::{Error, Result};
