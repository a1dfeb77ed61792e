//! Rectangular sampling grids of total area pi
//!
//! The domain is scaled so that every grid, whatever its aspect ratio,
//! covers the same area as the unit disk. That keeps the discrete inner
//! product weights comparable to the circular-aperture convention.

use std::f64::consts::PI;

use ndarray::Array2;

use crate::error::ZernikeError;

/// Build coordinate arrays for a `width` x `height` sampling of a
/// rectangle of area pi centered on the origin
///
/// Returns `(x, y)` of shape `(width, height)`: x varies along axis 0,
/// y along axis 1, with endpoints included on both axes. The aspect
/// ratio of the rectangle matches `width / height`.
///
/// # Errors
/// * `InvalidArgument` if either dimension is zero
pub fn rect_grid(width: usize, height: usize) -> Result<(Array2<f64>, Array2<f64>), ZernikeError> {
    if width == 0 || height == 0 {
        return Err(ZernikeError::InvalidArgument(format!(
            "grid dimensions must be positive, got {width}x{height}"
        )));
    }
    let ratio = width as f64 / height as f64;
    let span_y = (PI / ratio).sqrt();
    let span_x = span_y * ratio;

    // Inclusive-endpoint linspace; a single-sample axis sits at the lower
    // endpoint.
    let step = |span: f64, count: usize| {
        if count > 1 {
            span / (count - 1) as f64
        } else {
            0.0
        }
    };
    let (dx, dy) = (step(span_x, width), step(span_y, height));

    let x = Array2::from_shape_fn((width, height), |(i, _)| -span_x / 2.0 + dx * i as f64);
    let y = Array2::from_shape_fn((width, height), |(_, j)| -span_y / 2.0 + dy * j as f64);
    Ok((x, y))
}

/// Per-sample area weight of the discrete inner product on a
/// `width` x `height` grid: pi / (width * height)
pub fn cell_measure(width: usize, height: usize) -> f64 {
    PI / (width * height) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shape_matches_dimensions() {
        let (x, y) = rect_grid(200, 300).unwrap();
        assert_eq!(x.dim(), (200, 300));
        assert_eq!(y.dim(), (200, 300));
    }

    #[test]
    fn test_area_is_pi() {
        for (w, h) in [(200, 300), (10, 10), (7, 50)] {
            let (x, y) = rect_grid(w, h).unwrap();
            let span_x = x[[w - 1, 0]] - x[[0, 0]];
            let span_y = y[[0, h - 1]] - y[[0, 0]];
            assert_relative_eq!(span_x * span_y, PI, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_aspect_ratio() {
        let (x, y) = rect_grid(40, 10).unwrap();
        let span_x = x[[39, 0]] - x[[0, 0]];
        let span_y = y[[0, 9]] - y[[0, 0]];
        assert_relative_eq!(span_x / span_y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centered_on_origin() {
        let (x, y) = rect_grid(21, 31).unwrap();
        assert_relative_eq!(x[[10, 0]], 0.0, epsilon = 1e-12);
        assert_relative_eq!(y[[0, 15]], 0.0, epsilon = 1e-12);
        assert_relative_eq!(x[[0, 0]], -x[[20, 0]], epsilon = 1e-12);
        assert_relative_eq!(y[[0, 0]], -y[[0, 30]], epsilon = 1e-12);
    }

    #[test]
    fn test_coordinates_constant_along_other_axis() {
        let (x, y) = rect_grid(5, 6).unwrap();
        for i in 0..5 {
            for j in 0..6 {
                assert_eq!(x[[i, j]], x[[i, 0]]);
                assert_eq!(y[[i, j]], y[[0, j]]);
            }
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            rect_grid(0, 10),
            Err(ZernikeError::InvalidArgument(_))
        ));
        assert!(matches!(
            rect_grid(10, 0),
            Err(ZernikeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cell_measure() {
        assert_relative_eq!(cell_measure(200, 300), PI / 60_000.0, epsilon = 1e-15);
    }
}
