//! Fixed-size 2x2 complex matrices for chaining layer transfer matrices.
//!
//! The two rows and columns correspond to the two independent field
//! components of a plane wave in a layer (tangential E and H, or forward and
//! backward amplitudes). [`TransferMatrix`] wraps an `nalgebra` `Matrix2`
//! and exposes only the algebra the solver needs, with inversion failing
//! loudly instead of producing non-finite entries.

use std::fmt;
use std::ops::Mul;

use nalgebra::{Complex, Matrix2};

use crate::error::{Result, TmmError};

/// Modulus below which a pivot or determinant is treated as zero.
pub const SINGULAR_THRESHOLD: f64 = 1e-12;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    fn assert_matrix_eq(a: &TransferMatrix, b: &TransferMatrix) {
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(a[(i, j)].re, b[(i, j)].re, epsilon = 1e-12);
                assert_abs_diff_eq!(a[(i, j)].im, b[(i, j)].im, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn identity_is_neutral() {
        let m = TransferMatrix::new(c(1.0, 2.0), c(0.0, -1.0), c(3.0, 0.5), c(-2.0, 0.0));
        assert_matrix_eq(&(TransferMatrix::identity() * m), &m);
        assert_matrix_eq(&(m * TransferMatrix::identity()), &m);
    }

    #[test]
    fn product_row_major() {
        let a = TransferMatrix::new(c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0), c(4.0, 0.0));
        let b = TransferMatrix::new(c(0.0, 1.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0));
        let expected = TransferMatrix::new(c(2.0, 1.0), c(1.0, 0.0), c(4.0, 3.0), c(3.0, 0.0));
        assert_matrix_eq(&(a * b), &expected);
    }

    #[test]
    fn product_is_not_commutative() {
        let a = TransferMatrix::new(c(1.0, 0.0), c(2.0, 0.0), c(0.0, 0.0), c(1.0, 0.0));
        let b = TransferMatrix::new(c(1.0, 0.0), c(0.0, 0.0), c(3.0, 0.0), c(1.0, 0.0));
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn inverse_round_trip() {
        let m = TransferMatrix::new(c(1.0, 1.0), c(2.0, 0.0), c(0.5, -0.5), c(3.0, 2.0));
        let inv = m.try_inverse().unwrap();
        assert_matrix_eq(&(m * inv), &TransferMatrix::identity());
    }

    #[test]
    fn boundary_matrix_inverse() {
        let q = c(1.5, 0.0);
        let m = TransferMatrix::new(c(1.0, 0.0), c(1.0, 0.0), q, -q);
        assert_abs_diff_eq!(m.determinant().re, -3.0, epsilon = 1e-12);
        let inv = m.try_inverse().unwrap();
        assert_abs_diff_eq!(inv[(0, 0)].re, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[(0, 1)].re, 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[(1, 0)].re, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[(1, 1)].re, -1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn singular_inverse_fails() {
        let m = TransferMatrix::new(c(1.0, 0.0), c(2.0, 0.0), c(2.0, 0.0), c(4.0, 0.0));
        assert!(matches!(
            m.try_inverse(),
            Err(TmmError::SingularMatrix { .. })
        ));
    }
}

/// A 2x2 complex characteristic matrix, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferMatrix(Matrix2<Complex<f64>>);

impl TransferMatrix {
    /// Builds a matrix from its entries in row-major order.
    pub fn new(
        m00: Complex<f64>,
        m01: Complex<f64>,
        m10: Complex<f64>,
        m11: Complex<f64>,
    ) -> Self {
        Self(Matrix2::new(m00, m01, m10, m11))
    }

    pub fn identity() -> Self {
        Self(Matrix2::identity())
    }

    pub fn determinant(&self) -> Complex<f64> {
        let m = &self.0;
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
    }

    /// Closed-form inverse: the adjugate divided by the determinant.
    ///
    /// Fails with [`TmmError::SingularMatrix`] if the determinant modulus is
    /// below [`SINGULAR_THRESHOLD`].
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.norm().is_nan() || det.norm() < SINGULAR_THRESHOLD {
            return Err(TmmError::singular(format!(
                "determinant {} is too small to invert",
                det
            )));
        }
        let m = &self.0;
        Ok(Self::new(
            m[(1, 1)] / det,
            -m[(0, 1)] / det,
            -m[(1, 0)] / det,
            m[(0, 0)] / det,
        ))
    }

    /// Returns true if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|z| z.re.is_finite() && z.im.is_finite())
    }
}

impl Mul for TransferMatrix {
    type Output = TransferMatrix;

    fn mul(self, rhs: TransferMatrix) -> TransferMatrix {
        TransferMatrix(self.0 * rhs.0)
    }
}

impl std::ops::Index<(usize, usize)> for TransferMatrix {
    type Output = Complex<f64>;

    fn index(&self, index: (usize, usize)) -> &Complex<f64> {
        &self.0[index]
    }
}

impl fmt::Display for TransferMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        writeln!(f, "[{:.6}, {:.6}]", m[(0, 0)], m[(0, 1)])?;
        write!(f, "[{:.6}, {:.6}]", m[(1, 0)], m[(1, 1)])
    }
}
