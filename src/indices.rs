//! Canonical enumeration of Zernike mode indices
//!
//! Modes are ordered by radial degree, then azimuthal degree:
//! (0,0), (-1,1), (1,1), (-2,2), (0,2), (2,2), (-3,3), ...

/// A single Zernike mode index: azimuthal degree `m` and radial degree `n`
///
/// Valid modes satisfy `n >= |m|` with `n - |m|` even; the enumeration
/// below only ever produces valid pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeIndex {
    /// Azimuthal degree (signed; negative selects the sine variant)
    pub m: i32,
    /// Radial degree
    pub n: u32,
}

/// Iterate the first `count` Zernike mode indices in canonical order
///
/// Returns a lazy, finite iterator; calling again with the same count
/// reproduces the same sequence. `count == 0` yields nothing.
///
/// # Example
/// ```
/// use rect_zernike::mode_indices;
///
/// let first: Vec<_> = mode_indices(3).map(|i| (i.m, i.n)).collect();
/// assert_eq!(first, vec![(0, 0), (-1, 1), (1, 1)]);
/// ```
pub fn mode_indices(count: usize) -> impl Iterator<Item = ModeIndex> {
    std::iter::successors(Some(ModeIndex { m: 0, n: 0 }), |prev| {
        if prev.m == prev.n as i32 {
            let n = prev.n + 1;
            Some(ModeIndex { m: -(n as i32), n })
        } else {
            Some(ModeIndex { m: prev.m + 2, n: prev.n })
        }
    })
    .take(count)
}
