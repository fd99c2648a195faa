//! Transfer matrix solution of a layer stack.
//!
//! This module chains the characteristic matrices of the interior layers and
//! applies the boundary conditions of the two semi-infinite media to obtain
//! reflection and transmission coefficients.
//!
//! The solution proceeds in two stages:
//! - [`global_matrix`]: fold of the interior layer matrices, in stack order,
//!   starting from the identity
//! - [`assemble`]: `M_total = M_in⁻¹ · M · M_out`, from which
//!   `r = M_total[1,0] / M_total[0,0]` and `t = 1 / M_total[0,0]`
//!
//! # Example
//! ```rust
//! use nalgebra::Complex;
//! use tmm::{Layer, Stack};
//!
//! let stack = Stack::new(vec![
//!     Layer::semi_infinite(Complex::new(1.0, 0.0)),
//!     Layer::semi_infinite(Complex::new(1.5, 0.0)),
//! ])?;
//! let (r, t) = tmm::solve_tmm(&stack, 550.0, 0.0)?;
//! assert!((r - 0.04).abs() < 1e-12);
//! assert!((r + t - 1.0).abs() < 1e-12);
//! # Ok::<(), tmm::TmmError>(())
//! ```

use std::f64::consts::TAU;

use log::{debug, trace};
use nalgebra::Complex;

use crate::error::{Result, TmmError};
use crate::layer::{Layer, Stack};
use crate::matrix::{TransferMatrix, SINGULAR_THRESHOLD};
use crate::response::Response;
use crate::snell;
use crate::transfer;


/// Chains the characteristic matrices of the `interior` layers into the
/// global matrix `M = T_1 · T_2 · ... · T_n`.
///
/// `n0` is the index of the incidence medium and `theta` the incidence
/// angle, used with Snell's law to find the angle in each layer. Indices in
/// any [`TmmError::Domain`] failure count from the ambient medium (the first
/// interior layer is layer 1).
pub fn global_matrix(
    n0: Complex<f64>,
    interior: &[Layer],
    k0: f64,
    theta: f64,
) -> Result<TransferMatrix> {
    interior
        .iter()
        .enumerate()
        .try_fold(TransferMatrix::identity(), |m, (i, layer)| {
            let index = i + 1;
            let theta_i = snell::local_angle(n0, layer.n, theta, index)?;
            let t_i = transfer::layer_matrix(k0, layer.n, layer.d, theta_i)?;
            debug!(
                "layer {}: n = {}, d = {}, theta = {:.6}, phase = {:.6}",
                index,
                layer.n,
                layer.d,
                theta_i,
                k0 * layer.n * theta_i.cos() * layer.d
            );
            trace!("layer {} matrix:\n{}", index, t_i);
            Ok(m * t_i)
        })
}

/// Boundary matrix `[[1, 1], [q, -q]]` of a semi-infinite medium with
/// longitudinal admittance `q = n·cos θ`.
fn boundary_matrix(q: Complex<f64>) -> TransferMatrix {
    let one = Complex::new(1.0, 0.0);
    TransferMatrix::new(one, one, q, -q)
}

/// Applies the boundary conditions of the incidence and exit media to the
/// global matrix `m` and extracts the response.
///
/// `theta` is the incidence angle in the ambient medium of index `n0`, and
/// `theta_l` the angle in the substrate of index `n_l`.
pub fn assemble(
    m: &TransferMatrix,
    n0: Complex<f64>,
    n_l: Complex<f64>,
    theta: f64,
    theta_l: f64,
) -> Result<Response> {
    let q1 = n0 * theta.cos();
    let q2 = n_l * theta_l.cos();

    let m_in = boundary_matrix(q1);
    let m_out = boundary_matrix(q2);

    let m_in_inv = m_in.try_inverse().map_err(|_| {
        TmmError::singular(format!(
            "incidence matrix is degenerate (n0·cos θ = {})",
            q1
        ))
    })?;
    let m_total = m_in_inv * *m * m_out;
    trace!("total matrix:\n{}", m_total);

    let pivot = m_total[(0, 0)];
    if !pivot.norm().is_finite() || pivot.norm() < SINGULAR_THRESHOLD {
        return Err(TmmError::singular(format!(
            "total matrix pivot M[0,0] = {} cannot be inverted",
            pivot
        )));
    }

    let r = m_total[(1, 0)] / pivot;
    let t = pivot.inv();

    let reflectance = r.norm_sqr();
    let transmittance = t.norm_sqr() * q2.re / q1.re;

    if !reflectance.is_finite() || !transmittance.is_finite() {
        return Err(TmmError::singular(format!(
            "non-finite response (R = {}, T = {})",
            reflectance, transmittance
        )));
    }

    Ok(Response {
        r,
        t,
        reflectance,
        transmittance,
    })
}

/// Solves a stack for its full [`Response`] at the given wavelength and
/// incidence angle (radians, from the stack normal in the ambient medium).
///
/// The wavelength must be positive and in the same length unit as the layer
/// thicknesses.
pub fn solve(stack: &Stack, wavelength: f64, theta: f64) -> Result<Response> {
    if !wavelength.is_finite() || wavelength <= 0.0 {
        return Err(TmmError::invalid(format!(
            "wavelength must be positive, got {}",
            wavelength
        )));
    }
    if !theta.is_finite() {
        return Err(TmmError::invalid(format!(
            "incidence angle must be finite, got {}",
            theta
        )));
    }

    let k0 = TAU / wavelength;
    let n0 = stack.ambient().n;
    let n_l = stack.substrate().n;

    let m = global_matrix(n0, stack.interior(), k0, theta)?;
    let theta_l = snell::local_angle(n0, n_l, theta, stack.len() - 1)?;
    debug!("substrate: n = {}, theta = {:.6}", n_l, theta_l);

    let response = assemble(&m, n0, n_l, theta, theta_l)?;
    debug!(
        "R = {:.6}, T = {:.6}",
        response.reflectance, response.transmittance
    );
    Ok(response)
}

/// Reflectance and transmittance `(R, T)` of a stack.
///
/// See [`solve`] for the amplitude coefficients as well.
pub fn solve_tmm(stack: &Stack, wavelength: f64, theta: f64) -> Result<(f64, f64)> {
    let response = solve(stack, wavelength, theta)?;
    Ok((response.reflectance, response.transmittance))
}
