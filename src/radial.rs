//! Radial part of the Zernike polynomial
//!
//! The radial polynomial R(m,n)(r) = Σ_l c_l · r^(n-2l) has exact integer
//! coefficients. They are computed here as binomial products in `u128`,
//! which is algebraically identical to the textbook factorial quotient
//! (-1)^l (n-l)! / (l! ((n+m)/2-l)! ((n-m)/2-l)!) but stays exact far
//! beyond the range where 64-bit factorials overflow.

use num_integer::binomial;

use crate::error::ZernikeError;

/// One summand of a radial polynomial: `coefficient * r^power`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadialTerm {
    /// Exact integer coefficient
    pub coefficient: i64,
    /// Power of r
    pub power: u32,
}

/// Exact coefficient c_l of the radial polynomial R(m,n)
///
/// `m` is the azimuthal degree magnitude (callers pass `|m|`). Returns 0
/// whenever `n - m` is odd (the degenerate mode class contributes
/// nothing).
///
/// # Errors
/// * `InvalidArgument` if `n < m`, if `l` exceeds `(n - m) / 2`, or if
///   the coefficient does not fit an `i64`
pub fn radial_coefficient(m: u32, n: u32, l: u32) -> Result<i64, ZernikeError> {
    if n < m {
        return Err(ZernikeError::InvalidArgument(format!(
            "radial degree n={n} must be at least azimuthal magnitude m={m}"
        )));
    }
    if (n - m) % 2 != 0 {
        return Ok(0);
    }
    let half_diff = (n - m) / 2;
    if l > half_diff {
        return Err(ZernikeError::InvalidArgument(format!(
            "term index l={l} exceeds (n - m) / 2 = {half_diff} for (m={m}, n={n})"
        )));
    }

    // (n-l)! / (l! ((n+m)/2-l)! ((n-m)/2-l)!) == C(n-l, l) * C(n-2l, (n-m)/2-l)
    let magnitude = binomial((n - l) as u128, l as u128)
        .checked_mul(binomial((n - 2 * l) as u128, (half_diff - l) as u128))
        .and_then(|c| i64::try_from(c).ok())
        .ok_or_else(|| {
            ZernikeError::InvalidArgument(format!(
                "radial coefficient overflows i64 for (m={m}, n={n}, l={l})"
            ))
        })?;

    Ok(if l % 2 == 0 { magnitude } else { -magnitude })
}

/// All terms of the radial polynomial R(m,n), highest power first
///
/// Returns an empty list when `n - m` is odd: every coefficient of the
/// degenerate class is zero, so there is nothing to evaluate.
///
/// # Errors
/// * `InvalidArgument` if `n < m` or a coefficient overflows
pub fn radial_polynomial(m: u32, n: u32) -> Result<Vec<RadialTerm>, ZernikeError> {
    if n < m {
        return Err(ZernikeError::InvalidArgument(format!(
            "radial degree n={n} must be at least azimuthal magnitude m={m}"
        )));
    }
    if (n - m) % 2 != 0 {
        return Ok(Vec::new());
    }
    (0..=(n - m) / 2)
        .map(|l| {
            Ok(RadialTerm {
                coefficient: radial_coefficient(m, n, l)?,
                power: n - 2 * l,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(m: u32, n: u32) -> Vec<(i64, u32)> {
        radial_polynomial(m, n)
            .unwrap()
            .into_iter()
            .map(|t| (t.coefficient, t.power))
            .collect()
    }

    #[test]
    fn test_piston_is_constant_one() {
        assert_eq!(terms(0, 0), vec![(1, 0)]);
    }

    #[test]
    fn test_tilt_is_r() {
        assert_eq!(terms(1, 1), vec![(1, 1)]);
    }

    #[test]
    fn test_defocus_is_2r2_minus_1() {
        assert_eq!(terms(0, 2), vec![(2, 2), (-1, 0)]);
    }

    #[test]
    fn test_coma_is_3r3_minus_2r() {
        assert_eq!(terms(1, 3), vec![(3, 3), (-2, 1)]);
    }

    #[test]
    fn test_spherical_is_6r4_minus_6r2_plus_1() {
        assert_eq!(terms(0, 4), vec![(6, 4), (-6, 2), (1, 0)]);
    }

    #[test]
    fn test_odd_parity_coefficient_is_zero() {
        for (m, n) in [(0u32, 1u32), (0, 3), (1, 2), (2, 5), (3, 4)] {
            for l in 0..3 {
                assert_eq!(radial_coefficient(m, n, l).unwrap(), 0, "(m={m}, n={n}, l={l})");
            }
        }
    }

    #[test]
    fn test_odd_parity_polynomial_is_empty() {
        assert!(radial_polynomial(0, 1).unwrap().is_empty());
        assert!(radial_polynomial(1, 4).unwrap().is_empty());
    }

    #[test]
    fn test_n_less_than_m_rejected() {
        assert!(matches!(
            radial_polynomial(3, 1),
            Err(ZernikeError::InvalidArgument(_))
        ));
        assert!(matches!(
            radial_coefficient(2, 0, 0),
            Err(ZernikeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_term_index_out_of_range_rejected() {
        assert!(matches!(
            radial_coefficient(0, 2, 2),
            Err(ZernikeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_matches_factorial_formula_for_moderate_degrees() {
        // Cross-check against the factorial quotient, which is exact in
        // f64 for these small degrees.
        fn fact(k: u32) -> f64 {
            (1..=k as u64).map(|v| v as f64).product()
        }
        for n in 0..=10u32 {
            for m in (n % 2..=n).step_by(2) {
                for l in 0..=(n - m) / 2 {
                    let expected = (-1f64).powi(l as i32) * fact(n - l)
                        / (fact(l) * fact((n + m) / 2 - l) * fact((n - m) / 2 - l));
                    let got = radial_coefficient(m, n, l).unwrap();
                    assert_eq!(got as f64, expected, "(m={m}, n={n}, l={l})");
                }
            }
        }
    }
}
