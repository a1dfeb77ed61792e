//! Full pipeline: index generation, evaluation, orthonormalization

use log::debug;
use ndarray::Array2;

use crate::cartesian::ZernikeMode;
use crate::error::ZernikeError;
use crate::gram_schmidt::orthonormalize;
use crate::grid::{cell_measure, rect_grid};
use crate::indices::mode_indices;

/// An orthonormal mode basis together with the grid it was sampled on
#[derive(Debug, Clone)]
pub struct RectangularBasis {
    /// Orthonormalized mode values, one array per requested mode, each
    /// matching the grid shape
    pub modes: Vec<Array2<f64>>,
    /// X coordinates of the sampling grid
    pub x: Array2<f64>,
    /// Y coordinates of the sampling grid
    pub y: Array2<f64>,
}

impl RectangularBasis {
    /// Pairwise raw-sum matrix G[i][j] = Σ(modes[i] · modes[j])
    ///
    /// For a well-conditioned basis this is I / pi: the orthonormality
    /// diagnostic used by the test suite and the CLI.
    pub fn gram_matrix(&self) -> Array2<f64> {
        let k = self.modes.len();
        Array2::from_shape_fn((k, k), |(i, j)| {
            self.modes[i]
                .iter()
                .zip(self.modes[j].iter())
                .map(|(a, b)| a * b)
                .sum()
        })
    }
}

/// Compute the first `n_modes` Zernike-derived modes orthonormalized
/// over a `width` x `height` rectangular grid of area pi
///
/// Modes are generated in canonical Zernike order, evaluated on the
/// grid, then orthonormalized in that order. The whole basis is
/// recomputed from scratch on every call.
///
/// # Errors
/// * `InvalidArgument` if either grid dimension is zero
/// * `NumericalDegeneracy` if the grid cannot resolve `n_modes`
///   independent functions
pub fn compute_basis(
    n_modes: usize,
    width: usize,
    height: usize,
) -> Result<RectangularBasis, ZernikeError> {
    let (x, y) = rect_grid(width, height)?;
    debug!("sampling {n_modes} modes on a {width}x{height} grid");

    let mut sampled = Vec::with_capacity(n_modes);
    for idx in mode_indices(n_modes) {
        let mode = ZernikeMode::new(idx.m, idx.n)?;
        sampled.push(mode.evaluate(&x, &y)?);
    }

    let modes = orthonormalize(sampled, cell_measure(width, height))?;
    debug!("orthonormalized {} modes", modes.len());
    Ok(RectangularBasis { modes, x, y })
}
