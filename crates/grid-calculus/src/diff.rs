//! Discrete gradient along one array axis.
//!
//! Second-order centered differences in the interior and first-order
//! one-sided differences at both edges, with unit sample spacing. Callers
//! divide by the physical spacing themselves.

use ndarray::{Array, ArrayBase, Axis, Data, Dimension, Zip};

/// Difference `a` along `axis`.
///
/// An axis with fewer than two samples has no neighbours to difference and
/// yields zeros.
pub fn gradient_along<S, D>(a: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut out = Array::zeros(a.raw_dim());
    let n = a.len_of(axis);
    if n < 2 {
        return out;
    }

    Zip::from(a.lanes(axis))
        .and(out.lanes_mut(axis))
        .for_each(|src, mut dst| {
            dst[0] = src[1] - src[0];
            dst[n - 1] = src[n - 1] - src[n - 2];
            for i in 1..n - 1 {
                dst[i] = (src[i + 1] - src[i - 1]) / 2.0;
            }
        });

    out
}

/// True when every finite element of `a` is within `tolerance` of zero.
///
/// Non-finite differences come from missing coordinates and are skipped,
/// so an array with no finite elements is vacuously zero.
pub fn is_uniformly_zero<S, D>(a: &ArrayBase<S, D>, tolerance: f64) -> bool
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    a.iter().filter(|v| v.is_finite()).all(|v| v.abs() <= tolerance)
}

/// True when some finite element of `a` is farther than `tolerance` from zero.
pub fn has_finite_change<S, D>(a: &ArrayBase<S, D>, tolerance: f64) -> bool
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    a.iter().any(|v| v.is_finite() && v.abs() > tolerance)
}
