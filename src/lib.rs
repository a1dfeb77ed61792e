//! Orthonormal Zernike-derived mode bases over rectangular apertures
//!
//! Classical Zernike polynomials are orthogonal on the unit disk; on a
//! rectangular aperture they are not. This crate evaluates the Zernike
//! modes on a rectangular grid scaled to area pi and re-orthonormalizes
//! them with Gram-Schmidt under the grid's discrete inner product,
//! yielding a basis suitable for wavefront analysis on rectangular
//! sensors:
//!
//! - **Indices** - canonical (m, n) mode enumeration
//! - **Radial** - exact integer radial polynomial terms
//! - **Cartesian** - mode evaluation at arbitrary coordinates
//! - **Grid** - area-pi rectangular sampling grids
//! - **Gram-Schmidt** - orthonormalization under the discrete inner product
//!
//! # Example
//!
//! ```
//! use rect_zernike::compute_basis;
//!
//! let basis = compute_basis(4, 20, 30).unwrap();
//! assert_eq!(basis.modes.len(), 4);
//! assert_eq!(basis.modes[0].dim(), (20, 30));
//!
//! // Pairwise sample sums form I / pi
//! let gram = basis.gram_matrix();
//! assert!((gram[[0, 0]] - 1.0 / std::f64::consts::PI).abs() < 1e-6);
//! assert!(gram[[0, 1]].abs() < 1e-6);
//! ```

pub mod basis;
pub mod cartesian;
pub mod error;
pub mod gram_schmidt;
pub mod grid;
pub mod indices;
pub mod radial;

// Re-exports for easier access
pub use basis::{compute_basis, RectangularBasis};
pub use cartesian::ZernikeMode;
pub use error::ZernikeError;
pub use gram_schmidt::orthonormalize;
pub use grid::{cell_measure, rect_grid};
pub use indices::{mode_indices, ModeIndex};
pub use radial::{radial_coefficient, radial_polynomial, RadialTerm};
