//! Error types for the transfer matrix solver.
//!
//! Every numeric failure in the core is surfaced as a [`TmmError`] rather
//! than a NaN or infinity leaking into the reflectance and transmittance.
//! The three kinds mirror the ways a stack can fail to be solvable:
//!
//! - **Domain**: Snell's law has no real solution for a layer
//! - **Singular matrix**: a pivot or determinant vanished
//! - **Invalid input**: the stack or simulation parameters are malformed

use thiserror::Error;

/// Result alias used throughout the solver core.
pub type Result<T> = std::result::Result<T, TmmError>;

/// Failure of a transfer matrix solve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TmmError {
    /// The argument of the inverse sine in Snell's law fell outside [-1, 1]
    /// (or was not finite) for the layer at `layer` in the stack.
    #[error("no real refraction angle in layer {layer}: asin argument {argument} is outside [-1, 1]")]
    Domain { layer: usize, argument: f64 },

    /// A division by a zero or near-zero pivot.
    #[error("singular matrix: {context}")]
    SingularMatrix { context: String },

    /// Fewer than two layers, a non-positive wavelength, or non-finite
    /// layer data.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TmmError {
    pub(crate) fn singular(context: impl Into<String>) -> Self {
        TmmError::SingularMatrix {
            context: context.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        TmmError::InvalidInput(message.into())
    }
}
