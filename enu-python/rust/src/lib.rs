//! Python bindings for the ENU toolkit.
//!
//! This crate provides PyO3 bindings exposing enu-core functionality to Python.
//! The bindings follow a minimal wrapper pattern - most logic stays in Rust.
//!
//! Batches of vectors cross the boundary as 3xN NumPy arrays (one vector per
//! column); 3x3 tensors as 3x3 arrays. Angles and normal stresses may be
//! given as a float, a 1-D array or a list; a lone value is repeated against
//! the other argument. Shape problems raise `ValueError`.

use numpy::{PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyFloat;

use enu_core::error::Error;
use enu_core::failure::{
    slip_tendency_batch, strength_coulomb as core_strength_coulomb, strength_coulomb_batch,
};
use enu_core::orientation::{
    broadcast_angles, dir_vec_line as core_dir_vec_line, dir_vec_plane as core_dir_vec_plane,
};
use enu_core::resolve::stress_on_plane as core_stress_on_plane;
use enu_core::tensor::{
    make_stress_tensor as core_make_stress_tensor,
    rotation_matrix_around_z as core_rotation_matrix_around_z,
    stress_tensor_diagonal as core_stress_tensor_diagonal,
};
use enu_core::types::{DirectionBatch, Mat3, StressTensor};
use enu_core::vector::{
    vec_dot_product as core_vec_dot_product, vec_magnitude as core_vec_magnitude,
};

fn to_py_err(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// A float, a 1-D NumPy array or a list of floats.
#[derive(FromPyObject)]
enum ScalarOrArray<'py> {
    Scalar(f64),
    Array(PyReadonlyArray1<'py, f64>),
    List(Vec<f64>),
}

impl ScalarOrArray<'_> {
    fn to_vec(&self) -> Vec<f64> {
        match self {
            ScalarOrArray::Scalar(x) => vec![*x],
            ScalarOrArray::Array(a) => a.as_array().to_vec(),
            ScalarOrArray::List(v) => v.clone(),
        }
    }
}

/// Read a 3xN NumPy array into a batch of column vectors.
fn batch_from_numpy(name: &str, array: &PyReadonlyArray2<f64>) -> PyResult<DirectionBatch> {
    let shape = array.shape();
    if shape[0] != 3 {
        return Err(PyValueError::new_err(format!(
            "{} must be a 3xN array, got {}x{}",
            name, shape[0], shape[1]
        )));
    }
    let view = array.as_array();
    Ok(DirectionBatch::from_fn(shape[1], |i, j| view[[i, j]]))
}

/// Read a 3x3 NumPy array into a stress tensor.
fn tensor_from_numpy(array: &PyReadonlyArray2<f64>) -> PyResult<StressTensor> {
    let shape = array.shape();
    if shape[0] != 3 || shape[1] != 3 {
        return Err(PyValueError::new_err(format!(
            "stress tensor must be a 3x3 array, got {}x{}",
            shape[0], shape[1]
        )));
    }
    let view = array.as_array();
    Ok(StressTensor::from_matrix(Mat3::from_fn(|i, j| view[[i, j]])))
}

fn batch_to_numpy<'py>(
    py: Python<'py>,
    batch: &DirectionBatch,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let rows: Vec<Vec<f64>> = batch.row_iter().map(|r| r.iter().copied().collect()).collect();
    PyArray2::from_vec2(py, &rows)
        .map_err(|e| PyRuntimeError::new_err(format!("Failed to create array: {}", e)))
}

fn matrix_to_numpy<'py>(
    py: Python<'py>,
    matrix: &Mat3,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let rows: Vec<Vec<f64>> = matrix.row_iter().map(|r| r.iter().copied().collect()).collect();
    PyArray2::from_vec2(py, &rows)
        .map_err(|e| PyRuntimeError::new_err(format!("Failed to create array: {}", e)))
}

/// Unit direction vectors of lines.
///
/// Args:
///     plunge: angle or angles (degrees) downwards from horizontal
///     trend: angle or angles (degrees) clockwise from North
///
/// Returns:
///     3xN array of ENU unit vectors, one per column (3x1 for scalars)
#[pyfunction]
fn dir_vec_line<'py>(
    py: Python<'py>,
    plunge: ScalarOrArray<'py>,
    trend: ScalarOrArray<'py>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let (plunge, trend) = broadcast_angles(&plunge.to_vec(), &trend.to_vec()).map_err(to_py_err)?;
    let batch = core_dir_vec_line(&plunge, &trend).map_err(to_py_err)?;
    batch_to_numpy(py, &batch)
}

/// Upward unit normals of planes.
///
/// Args:
///     strike: angle or angles (degrees) clockwise from North, right-hand rule
///     dip: angle or angles (degrees) downwards from horizontal
///
/// Returns:
///     3xN array of ENU unit normals, one per column (3x1 for scalars)
#[pyfunction]
fn dir_vec_plane<'py>(
    py: Python<'py>,
    strike: ScalarOrArray<'py>,
    dip: ScalarOrArray<'py>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let (strike, dip) = broadcast_angles(&strike.to_vec(), &dip.to_vec()).map_err(to_py_err)?;
    let batch = core_dir_vec_plane(&strike, &dip).map_err(to_py_err)?;
    batch_to_numpy(py, &batch)
}

/// Euclidean norm of each column of a 3xN array.
#[pyfunction]
fn vec_magnitude<'py>(
    py: Python<'py>,
    vectors: PyReadonlyArray2<f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let batch = batch_from_numpy("vectors", &vectors)?;
    Ok(PyArray1::from_vec(py, core_vec_magnitude(&batch)))
}

/// Dot products of matching columns of two 3xN arrays.
#[pyfunction]
fn vec_dot_product<'py>(
    py: Python<'py>,
    u: PyReadonlyArray2<f64>,
    v: PyReadonlyArray2<f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let u = batch_from_numpy("u", &u)?;
    let v = batch_from_numpy("v", &v)?;
    let dots = core_vec_dot_product(&u, &v).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, dots))
}

/// Diagonal stress tensor with principal values in ENU order.
#[pyfunction]
fn stress_tensor_diagonal<'py>(
    py: Python<'py>,
    sigma_e: f64,
    sigma_n: f64,
    sigma_u: f64,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let tensor = core_stress_tensor_diagonal(sigma_e, sigma_n, sigma_u);
    matrix_to_numpy(py, tensor.matrix())
}

/// 3x3 clockwise rotation about the vertical axis by `angle` degrees.
#[pyfunction]
fn rotation_matrix_around_z<'py>(
    py: Python<'py>,
    angle: f64,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    matrix_to_numpy(py, &core_rotation_matrix_around_z(angle))
}

/// Stress tensor from principal magnitudes and the SHmax azimuth (degrees).
#[pyfunction]
#[pyo3(signature = (sh_min, sh_max, sv, azimuth_sh_max))]
fn make_stress_tensor<'py>(
    py: Python<'py>,
    sh_min: f64,
    sh_max: f64,
    sv: f64,
    azimuth_sh_max: f64,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let tensor = core_make_stress_tensor(sh_min, sh_max, sv, azimuth_sh_max);
    matrix_to_numpy(py, tensor.matrix())
}

/// Normal and shear stress on planes.
///
/// Args:
///     stress: 3x3 stress tensor
///     normals: 3xN array of unit plane normals
///
/// Returns:
///     Tuple (normal_stress, shear_stress) of length-N arrays
#[pyfunction]
fn stress_on_plane<'py>(
    py: Python<'py>,
    stress: PyReadonlyArray2<f64>,
    normals: PyReadonlyArray2<f64>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let tensor = tensor_from_numpy(&stress)?;
    let normals = batch_from_numpy("normals", &normals)?;
    let resolved = core_stress_on_plane(&tensor, &normals);
    Ok((
        PyArray1::from_vec(py, resolved.normal),
        PyArray1::from_vec(py, resolved.shear),
    ))
}

/// Coulomb shear strength: cohesion + friction * normal_stress.
///
/// Returns a float for a float `normal_stress`, otherwise a 1-D array.
#[pyfunction]
fn strength_coulomb<'py>(
    py: Python<'py>,
    cohesion: f64,
    friction: f64,
    normal_stress: ScalarOrArray<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    match normal_stress {
        ScalarOrArray::Scalar(sn) => {
            Ok(PyFloat::new(py, core_strength_coulomb(cohesion, friction, sn)).into_any())
        }
        other => {
            let strength = strength_coulomb_batch(cohesion, friction, &other.to_vec());
            Ok(PyArray1::from_vec(py, strength).into_any())
        }
    }
}

/// Slip tendency: shear stress over Coulomb strength.
#[pyfunction]
fn slip_tendency<'py>(
    py: Python<'py>,
    shear: PyReadonlyArray1<f64>,
    strength: PyReadonlyArray1<f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let shear: Vec<f64> = shear.as_array().to_vec();
    let strength: Vec<f64> = strength.as_array().to_vec();
    let ts = slip_tendency_batch(&shear, &strength).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, ts))
}

/// Get library version.
#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Python module definition.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(dir_vec_line, m)?)?;
    m.add_function(wrap_pyfunction!(dir_vec_plane, m)?)?;
    m.add_function(wrap_pyfunction!(vec_magnitude, m)?)?;
    m.add_function(wrap_pyfunction!(vec_dot_product, m)?)?;
    m.add_function(wrap_pyfunction!(stress_tensor_diagonal, m)?)?;
    m.add_function(wrap_pyfunction!(rotation_matrix_around_z, m)?)?;
    m.add_function(wrap_pyfunction!(make_stress_tensor, m)?)?;
    m.add_function(wrap_pyfunction!(stress_on_plane, m)?)?;
    m.add_function(wrap_pyfunction!(strength_coulomb, m)?)?;
    m.add_function(wrap_pyfunction!(slip_tendency, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;
    Ok(())
}
