//! Error types for basis construction

use thiserror::Error;

/// Errors that can occur while building a rectangular Zernike basis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZernikeError {
    /// Caller passed an argument outside the domain of the operation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A mode collapsed to (numerically) zero during orthonormalization,
    /// indicating a linearly dependent input set
    #[error("mode {index} is linearly dependent on earlier modes (residual norm {residual_norm:.3e})")]
    NumericalDegeneracy {
        /// Position of the offending mode in the input sequence
        index: usize,
        /// Norm of the residual after subtracting prior projections
        residual_norm: f64,
    },
}
