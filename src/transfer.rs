//! Characteristic matrices of homogeneous layers.
//!
//! **Context**: A slab of index `n` and thickness `d` relates the tangential
//! electric and magnetic fields on its two faces through a 2x2 matrix
//! derived from Maxwell's equations. Chaining these matrices across a stack
//! gives the response of the whole stack.
//!
//! **How it Works**: With longitudinal wavenumber `k_z = k_0·n·cos θ` and
//! phase thickness `δ = k_z·d`, the matrix is
//!
//! ```text
//! [ cos δ            i·sin δ / (n cos θ) ]
//! [ i·n cos θ·sin δ  cos δ               ]
//! ```
//!
//! with the trigonometric terms evaluated by the range-reduced functions in
//! [`crate::complex`] so that strongly absorbing layers do not overflow.

use nalgebra::Complex;

use crate::complex::{cos_complex, sin_complex};
use crate::error::{Result, TmmError};
use crate::matrix::{TransferMatrix, SINGULAR_THRESHOLD};


/// Builds the characteristic matrix of one layer.
///
/// `k0` is the free-space wavenumber `2π/λ`, `n` the layer index, `d` its
/// thickness and `theta` the local propagation angle in radians.
///
/// Fails with [`TmmError::SingularMatrix`] if the layer admittance
/// `n·cos θ` vanishes (grazing propagation or zero index).
pub fn layer_matrix(k0: f64, n: Complex<f64>, d: f64, theta: f64) -> Result<TransferMatrix> {
    let cos_theta = theta.cos();
    let n_cos_th = n * cos_theta;
    if n_cos_th.norm() < SINGULAR_THRESHOLD {
        return Err(TmmError::singular(format!(
            "layer admittance n·cos(θ) = {} vanishes",
            n_cos_th
        )));
    }

    let k_z = k0 * n_cos_th;
    let phase = k_z * d;

    let q1 = cos_complex(phase);
    let q2 = Complex::<f64>::i() * sin_complex(phase);

    Ok(TransferMatrix::new(q1, q2 / n_cos_th, n_cos_th * q2, q1))
}
