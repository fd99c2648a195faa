//! Reflectance and transmittance of thin film stacks by the transfer matrix
//! method.
//!
//! A plane wave of wavelength `λ` is incident at angle `θ` on a stack of
//! plane-parallel homogeneous layers, each with a complex refractive index
//! and a thickness. The first and last layers are semi-infinite media. The
//! solver chains the characteristic matrix of every interior layer and
//! applies the boundary conditions of the outer media to obtain the power
//! reflectance `R` and transmittance `T`.
//!
//! # Modules
//!
//! - [`complex`]: range-reduced complex sine and cosine
//! - [`matrix`]: 2x2 complex matrix value type
//! - [`layer`]: layers and validated stacks
//! - [`snell`]: propagation angle inside each layer
//! - [`transfer`]: characteristic matrix of a single layer
//! - [`solver`]: global matrix accumulation and boundary assembly
//! - [`response`]: amplitude coefficients and power fractions
//! - [`settings`]: run configuration and command line

pub mod complex;
pub mod error;
pub mod layer;
pub mod matrix;
pub mod response;
pub mod settings;
pub mod snell;
pub mod solver;
pub mod transfer;

pub use error::{Result, TmmError};
pub use layer::{Layer, Stack};
pub use matrix::TransferMatrix;
pub use response::Response;
pub use solver::{solve, solve_tmm};
