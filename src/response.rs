//! Optical response of a layer stack.

use std::fmt;

use nalgebra::Complex;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorptance_is_remainder() {
        let response = Response {
            r: Complex::new(0.3, 0.0),
            t: Complex::new(0.8, 0.0),
            reflectance: 0.09,
            transmittance: 0.64,
        };
        assert!((response.absorptance() - 0.27).abs() < 1e-12);
        assert!(!response.is_energy_conserving(1e-6));
    }

    #[test]
    fn serializes_power_fractions() {
        let response = Response {
            r: Complex::new(0.2, 0.0),
            t: Complex::new(0.0, 0.9797958971132712),
            reflectance: 0.04,
            transmittance: 0.96,
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["reflectance"], 0.04);
        assert_eq!(json["transmittance"], 0.96);
        assert_eq!(json["r"][0], 0.2);
    }
}

/// Amplitude coefficients and power fractions for one wavelength and angle.
///
/// `r` and `t` are the complex reflection and transmission amplitude
/// coefficients. `reflectance = |r|²`, and `transmittance` is `|t|²` scaled
/// by the ratio of the longitudinal admittances of the exit and incidence
/// media, so that `reflectance + transmittance = 1` for a lossless stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Response {
    pub r: Complex<f64>,
    pub t: Complex<f64>,
    pub reflectance: f64,
    pub transmittance: f64,
}

impl Response {
    /// Fraction of incident power neither reflected nor transmitted.
    pub fn absorptance(&self) -> f64 {
        1.0 - self.reflectance - self.transmittance
    }

    /// Whether `R + T` is within `tol` of one.
    pub fn is_energy_conserving(&self, tol: f64) -> bool {
        self.absorptance().abs() <= tol
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reflectance: {:.6}", self.reflectance)?;
        writeln!(f, "Transmittance: {:.6}", self.transmittance)?;
        write!(f, "Absorptance: {:.6}", self.absorptance())
    }
}
