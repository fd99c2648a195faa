//! Layers and layer stacks.
//!
//! A [`Stack`] is an ordered sequence of homogeneous, plane-parallel
//! [`Layer`]s. The first layer is the semi-infinite incidence medium
//! (ambient), the last is the semi-infinite exit medium (substrate), and
//! everything in between is traversed in physical order from the incidence
//! side. The thicknesses of the two outer media are ignored.

use nalgebra::Complex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TmmError};

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(re: f64, d: f64) -> Layer {
        Layer::new(Complex::new(re, 0.0), d)
    }

    #[test]
    fn named_views() {
        let stack = Stack::new(vec![
            layer(1.0, 0.0),
            layer(1.5, 100.0),
            layer(2.0, 50.0),
            layer(1.52, 0.0),
        ])
        .unwrap();
        assert_eq!(stack.ambient().n.re, 1.0);
        assert_eq!(stack.substrate().n.re, 1.52);
        let interior: Vec<f64> = stack.interior().iter().map(|l| l.n.re).collect();
        assert_eq!(interior, vec![1.5, 2.0]);
        assert_eq!(stack.len(), 4);
    }

    #[test]
    fn bare_interface_has_no_interior() {
        let stack = Stack::new(vec![layer(1.0, 0.0), layer(1.5, 0.0)]).unwrap();
        assert!(stack.interior().is_empty());
    }

    #[test]
    fn too_few_layers() {
        assert!(matches!(
            Stack::new(vec![layer(1.0, 0.0)]),
            Err(TmmError::InvalidInput(_))
        ));
        assert!(matches!(Stack::new(vec![]), Err(TmmError::InvalidInput(_))));
    }

    #[test]
    fn rejects_negative_interior_thickness() {
        let result = Stack::new(vec![layer(1.0, 0.0), layer(1.5, -1.0), layer(1.0, 0.0)]);
        assert!(matches!(result, Err(TmmError::InvalidInput(_))));
    }

    #[test]
    fn outer_thickness_is_ignored() {
        let result = Stack::new(vec![layer(1.0, -5.0), layer(1.5, f64::NAN)]);
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_non_finite_index() {
        let bad = Layer::new(Complex::new(f64::NAN, 0.0), 10.0);
        let result = Stack::new(vec![layer(1.0, 0.0), bad, layer(1.0, 0.0)]);
        assert!(matches!(result, Err(TmmError::InvalidInput(_))));
    }
}

/// A homogeneous layer with complex refractive index `n` and thickness `d`.
///
/// `d` is in the same length unit as the wavelength.
///
/// With the `i·sin δ` off-diagonal terms of the layer matrix, an index
/// `n' + i·n''` with `n'' > 0` amplifies the field (`R + T > 1`) and
/// `n'' < 0` attenuates it. Write absorbing media with a negative imaginary
/// part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub n: Complex<f64>,
    #[serde(default)]
    pub d: f64,
}

impl Layer {
    pub fn new(n: Complex<f64>, d: f64) -> Self {
        Self { n, d }
    }

    /// A semi-infinite medium; its thickness plays no role in the solution.
    pub fn semi_infinite(n: Complex<f64>) -> Self {
        Self { n, d: 0.0 }
    }
}

/// A validated, ordered layer stack with at least two layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    layers: Vec<Layer>,
}

impl Stack {
    /// Validates and wraps a layer sequence.
    ///
    /// Fails with [`TmmError::InvalidInput`] if there are fewer than two
    /// layers, if any refractive index is not finite, or if an interior
    /// thickness is negative or not finite.
    pub fn new(layers: Vec<Layer>) -> Result<Self> {
        if layers.len() < 2 {
            return Err(TmmError::invalid(format!(
                "a stack needs an ambient and a substrate medium, got {} layer(s)",
                layers.len()
            )));
        }
        for (i, layer) in layers.iter().enumerate() {
            if !(layer.n.re.is_finite() && layer.n.im.is_finite()) {
                return Err(TmmError::invalid(format!(
                    "layer {} has a non-finite refractive index {}",
                    i, layer.n
                )));
            }
        }
        let last = layers.len() - 1;
        for (i, layer) in layers.iter().enumerate().take(last).skip(1) {
            if !layer.d.is_finite() || layer.d < 0.0 {
                return Err(TmmError::invalid(format!(
                    "layer {} has invalid thickness {}",
                    i, layer.d
                )));
            }
        }
        Ok(Self { layers })
    }

    /// The incidence medium.
    pub fn ambient(&self) -> &Layer {
        &self.layers[0]
    }

    /// The exit medium.
    pub fn substrate(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    /// Interior layers in order of traversal from the ambient side.
    pub fn interior(&self) -> &[Layer] {
        &self.layers[1..self.layers.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false for a constructed stack; present alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
