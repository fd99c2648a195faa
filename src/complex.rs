//! Range-reduced complex trigonometry for optical phase thicknesses.
//!
//! The phase thickness `k_z·d` of a strongly absorbing layer can carry an
//! imaginary part of several thousand radians, at which point a direct
//! evaluation of `cosh`/`sinh` overflows. The functions here fold both parts
//! of the argument into a bounded range before evaluating the circular and
//! hyperbolic terms:
//!
//! - the real part is reduced modulo `2π`
//! - the imaginary part is reduced with [`complex_modulo`] against `2π·i`,
//!   which keeps its sign and bounds its magnitude below `2π`

use std::f64::consts::TAU;

use nalgebra::Complex;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn modulo_keeps_phase() {
        let z1 = Complex::from_polar(7.5, 0.3);
        let z2 = Complex::new(0.0, 2.0);
        let result = complex_modulo(z1, z2);
        assert_abs_diff_eq!(result.norm(), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(result.arg(), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn modulo_negative_imaginary() {
        let z1 = Complex::new(0.0, -10.0);
        let z2 = Complex::new(0.0, TAU);
        let result = complex_modulo(z1, z2);
        assert_abs_diff_eq!(result.im, -(10.0 - TAU), epsilon = 1e-12);
        assert_abs_diff_eq!(result.re, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn modulo_smaller_than_period() {
        let z1 = Complex::new(1.0, 1.0);
        let z2 = Complex::new(5.0, 0.0);
        let result = complex_modulo(z1, z2);
        assert_abs_diff_eq!(result.re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.im, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn matches_std_within_first_period() {
        let values = [
            Complex::new(0.5, 2.0),
            Complex::new(-1.2, 0.0),
            Complex::new(3.0, -3.0),
            Complex::new(100.0, 0.25),
        ];
        for v in values {
            let sin = sin_complex(v);
            let cos = cos_complex(v);
            assert_abs_diff_eq!(sin.re, v.sin().re, epsilon = 1e-9);
            assert_abs_diff_eq!(sin.im, v.sin().im, epsilon = 1e-9);
            assert_abs_diff_eq!(cos.re, v.cos().re, epsilon = 1e-9);
            assert_abs_diff_eq!(cos.im, v.cos().im, epsilon = 1e-9);
        }
    }

    #[test]
    fn real_period_shift() {
        let v = Complex::new(1.3, 0.7);
        let shifted = v + Complex::new(2.0 * PI, 0.0);
        assert_abs_diff_eq!(sin_complex(v).re, sin_complex(shifted).re, epsilon = 1e-12);
        assert_abs_diff_eq!(sin_complex(v).im, sin_complex(shifted).im, epsilon = 1e-12);
        assert_abs_diff_eq!(cos_complex(v).re, cos_complex(shifted).re, epsilon = 1e-12);
        assert_abs_diff_eq!(cos_complex(v).im, cos_complex(shifted).im, epsilon = 1e-12);
    }

    #[test]
    fn large_imaginary_part_is_finite() {
        for im in [1e3, -1e3, 5e4, 1e8] {
            let v = Complex::new(3.0, im);
            let sin = sin_complex(v);
            let cos = cos_complex(v);
            assert!(sin.re.is_finite() && sin.im.is_finite(), "sin({}) = {}", v, sin);
            assert!(cos.re.is_finite() && cos.im.is_finite(), "cos({}) = {}", v, cos);
        }
    }

    #[test]
    fn pythagorean_identity() {
        // sin² + cos² = 1 holds for any value of the reduced arguments
        let v = Complex::new(12.0, 800.0);
        let s = sin_complex(v);
        let c = cos_complex(v);
        let sum = s * s + c * c;
        assert_abs_diff_eq!(sum.re, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(sum.im, 0.0, epsilon = 1e-6);
    }
}

/// Reduces the magnitude of `z1` modulo the magnitude of `z2`, keeping the
/// phase of `z1`.
///
/// The remainder follows the real `%` convention on the (non-negative)
/// magnitudes, so the result always has magnitude in `[0, |z2|)` and its sign
/// is carried entirely by the phase.
///
/// `z2` must be nonzero; a zero period yields NaN.
pub fn complex_modulo(z1: Complex<f64>, z2: Complex<f64>) -> Complex<f64> {
    let remainder = z1.norm() % z2.norm();
    Complex::from_polar(remainder, z1.arg())
}

/// Reduces both parts of a complex argument to their bounded equivalents.
fn reduce(v: Complex<f64>) -> (f64, f64) {
    let a = v.re % TAU;
    let b = complex_modulo(Complex::new(0.0, v.im), Complex::new(0.0, TAU)).im;
    (a, b)
}

/// Complex sine, evaluated on range-reduced arguments.
///
/// # Example
/// ```rust
/// use nalgebra::Complex;
/// let s = tmm::complex::sin_complex(Complex::new(3.0, 1e3));
/// assert!(s.re.is_finite() && s.im.is_finite());
/// ```
pub fn sin_complex(v: Complex<f64>) -> Complex<f64> {
    let (a, b) = reduce(v);
    Complex::new(a.sin() * b.cosh(), a.cos() * b.sinh())
}

/// Complex cosine, evaluated on range-reduced arguments.
pub fn cos_complex(v: Complex<f64>) -> Complex<f64> {
    let (a, b) = reduce(v);
    Complex::new(a.cos() * b.cosh(), -a.sin() * b.sinh())
}
