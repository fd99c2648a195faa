//! Snell's law for the propagation angle inside each layer.
//!
//! The local angle is computed from the real parts of the refractive indices
//! only, `θ_i = asin(Re(n_0)·sin θ / Re(n_i))`. For absorbing layers this
//! neglects the effect of the extinction coefficient on the refraction
//! angle. Where the inverse sine has no real solution (total internal
//! reflection, or a layer with zero real index) the angle is reported as a
//! [`TmmError::Domain`] rather than returned as NaN.

use nalgebra::Complex;

use crate::error::{Result, TmmError};


/// Computes the propagation angle in a layer of index `n` for a plane wave
/// incident at `theta` (radians) from a medium of index `n0`.
///
/// `layer` is the position of the layer in its stack and is only used to
/// label a [`TmmError::Domain`] failure.
pub fn local_angle(n0: Complex<f64>, n: Complex<f64>, theta: f64, layer: usize) -> Result<f64> {
    let argument = n0.re * theta.sin() / n.re;

    if !argument.is_finite() || argument.abs() > 1.0 {
        return Err(TmmError::Domain { layer, argument });
    }

    Ok(argument.asin())
}
