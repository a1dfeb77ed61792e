//! Zernike modes evaluated in cartesian coordinates
//!
//! A [`ZernikeMode`] is a pure function of position, fully determined by
//! its index pair: radial polynomial in r = √(x² + y²), sine or cosine
//! angular factor in θ = atan2(y, x), and a normalization constant.

use ndarray::Array2;

use crate::error::ZernikeError;
use crate::radial::{radial_polynomial, RadialTerm};

/// A single Zernike mode in cartesian form
///
/// All radial powers are non-negative integers, so evaluation is well
/// defined everywhere including r = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ZernikeMode {
    m: i32,
    n: u32,
    norm: f64,
    /// Radial terms with zero coefficients pruned
    terms: Vec<RadialTerm>,
}

impl ZernikeMode {
    /// Build the mode for azimuthal degree `m` (signed) and radial degree `n`
    ///
    /// Negative `m` selects the sine angular variant, non-negative the
    /// cosine variant. The normalization constant is √(n+1) for m = 0 and
    /// √(2(n+1)) otherwise.
    ///
    /// # Errors
    /// * `InvalidArgument` if `n < |m|`
    pub fn new(m: i32, n: u32) -> Result<Self, ZernikeError> {
        let abs_m = m.unsigned_abs();
        if n < abs_m {
            return Err(ZernikeError::InvalidArgument(format!(
                "radial degree n={n} must be at least |m|={abs_m}"
            )));
        }
        let terms = radial_polynomial(abs_m, n)?
            .into_iter()
            .filter(|t| t.coefficient != 0)
            .collect();
        let norm = if m == 0 {
            ((n + 1) as f64).sqrt()
        } else {
            (2.0 * (n + 1) as f64).sqrt()
        };
        Ok(Self { m, n, norm, terms })
    }

    /// Azimuthal degree (signed)
    pub fn m(&self) -> i32 {
        self.m
    }

    /// Radial degree
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Evaluate the mode at a single point
    pub fn evaluate_point(&self, x: f64, y: f64) -> f64 {
        let r = x.hypot(y);
        let theta = y.atan2(x);
        let radial: f64 = self
            .terms
            .iter()
            .map(|t| t.coefficient as f64 * r.powi(t.power as i32))
            .sum();
        let abs_m = self.m.unsigned_abs() as f64;
        let angular = if self.m < 0 {
            (abs_m * theta).sin()
        } else {
            (abs_m * theta).cos()
        };
        self.norm * radial * angular
    }

    /// Evaluate the mode elementwise over coordinate arrays
    ///
    /// # Errors
    /// * `InvalidArgument` if `x` and `y` differ in shape
    pub fn evaluate(
        &self,
        x: &Array2<f64>,
        y: &Array2<f64>,
    ) -> Result<Array2<f64>, ZernikeError> {
        if x.dim() != y.dim() {
            return Err(ZernikeError::InvalidArgument(format!(
                "coordinate shapes differ: x is {:?}, y is {:?}",
                x.dim(),
                y.dim()
            )));
        }
        Ok(Array2::from_shape_fn(x.raw_dim(), |(i, j)| {
            self.evaluate_point(x[[i, j]], y[[i, j]])
        }))
    }
}
