use num_complex::Complex64;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tmm::{Layer, Stack};

/// Reflectance and transmittance of a layer stack.
///
/// `layers` is a list of `(index, thickness)` tuples, ambient medium first
/// and substrate last; indices may be Python complex numbers. Returns the
/// tuple `(R, T)`.
#[pyfunction]
fn solve_tmm(layers: Vec<(Complex64, f64)>, wavelength: f64, angle: f64) -> PyResult<(f64, f64)> {
    let layers = layers
        .into_iter()
        .map(|(n, d)| Layer::new(n, d))
        .collect();
    let stack = Stack::new(layers).map_err(|e| PyValueError::new_err(e.to_string()))?;
    tmm::solve_tmm(&stack, wavelength, angle).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Amplitude reflection and transmission coefficients `(r, t)` of a layer
/// stack.
#[pyfunction]
fn amplitudes(
    layers: Vec<(Complex64, f64)>,
    wavelength: f64,
    angle: f64,
) -> PyResult<(Complex64, Complex64)> {
    let layers = layers
        .into_iter()
        .map(|(n, d)| Layer::new(n, d))
        .collect();
    let stack = Stack::new(layers).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let response = tmm::solve(&stack, wavelength, angle)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((response.r, response.t))
}

#[pymodule]
fn _tmm_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(solve_tmm, m)?)?;
    m.add_function(wrap_pyfunction!(amplitudes, m)?)?;
    Ok(())
}
