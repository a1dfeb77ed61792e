//! Gram-Schmidt orthonormalization under a discrete inner product
//!
//! Consumes mode values sampled on a grid and produces vectors that are
//! pairwise orthogonal and normalized so that the plain sample sum
//! Σ(bᵢ·bⱼ) equals δᵢⱼ / area, where `area = cell_measure * samples`.
//! Equivalently the pairwise sums form the matrix I / pi on the standard
//! area-pi grid.
//!
//! Projections use the modified Gram-Schmidt update: each coefficient is
//! computed from the running residual against an already-normalized
//! basis vector, which keeps orthogonality at machine precision where
//! the classical ordering degrades.

use log::trace;
use ndarray::Array2;

use crate::error::ZernikeError;

/// A residual below this fraction of the input vector's norm is treated
/// as linear dependence
const DEGENERACY_TOL: f64 = 1e-10;

fn inner(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(u, v)| u * v).sum()
}

/// Orthonormalize sampled mode values in input order
///
/// `cell_measure` is the per-sample area weight of the discrete inner
/// product (domain area divided by sample count; see
/// [`crate::grid::cell_measure`]). The output vectors satisfy
/// Σ(bᵢ²) = 1 / (cell_measure · samples).
///
/// # Errors
/// * `InvalidArgument` if `cell_measure` is not a positive finite number
///   or the arrays do not all share one shape
/// * `NumericalDegeneracy` if a mode's residual after subtracting the
///   projections onto earlier modes is numerically zero (linearly
///   dependent input, e.g. more modes than the grid can resolve)
pub fn orthonormalize(
    modes: Vec<Array2<f64>>,
    cell_measure: f64,
) -> Result<Vec<Array2<f64>>, ZernikeError> {
    if !cell_measure.is_finite() || cell_measure <= 0.0 {
        return Err(ZernikeError::InvalidArgument(format!(
            "cell measure must be positive and finite, got {cell_measure}"
        )));
    }
    let Some(first) = modes.first() else {
        return Ok(Vec::new());
    };
    let shape = first.dim();
    if let Some(mismatch) = modes.iter().find(|m| m.dim() != shape) {
        return Err(ZernikeError::InvalidArgument(format!(
            "all mode arrays must share shape {:?}, found {:?}",
            shape,
            mismatch.dim()
        )));
    }
    let area = cell_measure * first.len() as f64;

    let mut basis: Vec<Array2<f64>> = Vec::with_capacity(modes.len());
    for (index, raw) in modes.into_iter().enumerate() {
        let raw_norm = inner(&raw, &raw).sqrt();
        let mut residual = raw;
        for prior in &basis {
            // Prior vectors have sum-of-squares 1/area, so the projection
            // coefficient carries the factor `area`.
            let coeff = area * inner(&residual, prior);
            residual.scaled_add(-coeff, prior);
        }
        let residual_norm = inner(&residual, &residual).sqrt();
        trace!("mode {index}: raw norm {raw_norm:.6e}, residual norm {residual_norm:.6e}");
        if !residual_norm.is_finite() || residual_norm <= DEGENERACY_TOL * raw_norm {
            return Err(ZernikeError::NumericalDegeneracy {
                index,
                residual_norm,
            });
        }
        let scale = residual_norm * area.sqrt();
        residual.mapv_inplace(|v| v / scale);
        basis.push(residual);
    }
    Ok(basis)
}
