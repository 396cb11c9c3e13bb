//! Continuous Fréchet distance decision procedure.
//!
//! Decides whether the (continuous) Fréchet distance between two polygonal
//! curves is at most ε using the free-space diagram of Alt and Godau. The
//! diagram is the parameter rectangle `[0, |a|-1] × [0, |b|-1]`, split into
//! one cell per pair of segments; a parameter pair is *free* when the two
//! curve points are within ε. Inside each cell the free space is convex, so
//! on every cell boundary it is a single interval.
//!
//! The cells are swept bottom row to top row, left to right, carrying the
//! reachable part of each boundary. Only one row of bottom intervals is
//! kept, in the caller's [`DistanceScratch`].
//!
//! Interval endpoints that coincide with vertices are decided from the
//! vertex-to-vertex distance rather than from the quadratic, so a threshold
//! equal to the discrete Fréchet distance (or to the equal-time distance)
//! is always accepted despite rounding.
//!
//! # Example
//!
//! ```
//! use frechetum::frechet::{continuous_frechet_at_most, DistanceScratch};
//! use frechetum::Point2;
//!
//! let a = vec![Point2::new(0.0_f64, 0.0), Point2::new(0.0, 10.0)];
//! let b = vec![Point2::new(0.0_f64, 0.0), Point2::new(0.0, 5.0)];
//!
//! let mut scratch = DistanceScratch::new();
//! assert!(continuous_frechet_at_most(&a, &b, 5.0, &mut scratch).unwrap());
//! assert!(!continuous_frechet_at_most(&a, &b, 4.999, &mut scratch).unwrap());
//! ```

use super::{ensure_non_empty, DistanceScratch};
use crate::error::{FrechetError, Result};
use crate::primitives::CurvePoint;
use num_traits::{Float, One, Zero};

/// A closed sub-interval of `[0, 1]`; empty when `lo > hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Interval<F> {
    pub(crate) lo: F,
    pub(crate) hi: F,
}

impl<F: Float> Interval<F> {
    #[inline]
    fn empty() -> Self {
        Self {
            lo: F::infinity(),
            hi: F::neg_infinity(),
        }
    }

    #[inline]
    fn full() -> Self {
        Self {
            lo: F::zero(),
            hi: F::one(),
        }
    }

    #[inline]
    fn point(t: F) -> Self {
        Self { lo: t, hi: t }
    }

    #[inline]
    fn is_empty(self) -> bool {
        !(self.lo <= self.hi)
    }

    #[inline]
    fn reaches_end(self) -> bool {
        !self.is_empty() && self.hi >= F::one()
    }

    #[inline]
    fn starts_at_zero(self) -> bool {
        !self.is_empty() && self.lo <= F::zero()
    }

    /// The part of `self` at or above `floor`.
    #[inline]
    fn above(self, floor: F) -> Self {
        Self {
            lo: self.lo.max(floor),
            hi: self.hi,
        }
    }
}

/// A propagated interval must stay on its cell edge.
fn ensure_in_cell<F: Float>(iv: Interval<F>, i: usize, j: usize) -> Result<()> {
    if iv.is_empty() || (iv.lo >= F::zero() && iv.hi <= F::one()) {
        return Ok(());
    }
    Err(FrechetError::InternalInvariantViolation(format!(
        "reachable interval left the edge of cell ({}, {})",
        i, j
    )))
}

impl<F: Float> Default for Interval<F> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Parameters `t ∈ [0, 1]` for which `start + t (end - start)` lies within
/// `eps` of `center`.
fn free_interval<P: CurvePoint>(
    start: P,
    end: P,
    center: P,
    eps: P::Scalar,
) -> Result<Interval<P::Scalar>> {
    let zero = P::Scalar::zero();
    let one = P::Scalar::one();

    let start_free = start.distance(center) <= eps;
    let end_free = end.distance(center) <= eps;

    // The disc is convex: both ends inside means the whole segment is.
    if start_free && end_free {
        return Ok(Interval::full());
    }

    let mut a = zero;
    let mut b = zero;
    let mut c = zero;
    for axis in 0..P::DIM {
        let d = end.coord(axis) - start.coord(axis);
        let w = start.coord(axis) - center.coord(axis);
        a = a + d * d;
        b = b + d * w;
        c = c + w * w;
    }
    let b = b + b;
    let c = c - eps * eps;

    let disc = b * b - (a + a) * (c + c);
    if a <= zero || disc < zero {
        // Tangent or degenerate: only the vertex decisions are trustworthy.
        return Ok(if start_free {
            Interval::point(zero)
        } else if end_free {
            Interval::point(one)
        } else {
            Interval::empty()
        });
    }

    let root = disc.sqrt();
    let two_a = a + a;
    let t1 = (-b - root) / two_a;
    let t2 = (-b + root) / two_a;
    if t1.is_nan() || t2.is_nan() {
        return Err(FrechetError::InternalInvariantViolation(
            "free-space boundary interval is not a number".into(),
        ));
    }

    // A free vertex pins its end of the interval; a blocked one keeps it
    // strictly inside the segment.
    let lo = if start_free {
        zero
    } else if end_free {
        t1.max(P::Scalar::epsilon()).min(one)
    } else {
        t1.max(P::Scalar::epsilon())
    };
    let hi = if end_free {
        one
    } else if start_free {
        t2.min(one - P::Scalar::epsilon()).max(zero)
    } else {
        t2.min(one - P::Scalar::epsilon())
    };

    Ok(Interval { lo, hi })
}

/// Decides whether the continuous Fréchet distance is at most `threshold`.
///
/// Monotone in `threshold`: once true, true for every larger threshold.
/// Accepts at `threshold = discrete_frechet_distance(a, b)` and at
/// `threshold = equal_time_distance(a, b)`, both of which are upper bounds
/// of the continuous distance.
///
/// # Errors
///
/// - [`FrechetError::EmptyCurve`] if either curve is empty.
/// - [`FrechetError::InternalInvariantViolation`] if the propagation meets
///   a state it cannot reach on finite input.
///
/// # Complexity
///
/// O(nm) time, O(n) space in `scratch`.
pub fn continuous_frechet_at_most<P: CurvePoint>(
    a: &[P],
    b: &[P],
    threshold: P::Scalar,
    scratch: &mut DistanceScratch<P::Scalar>,
) -> Result<bool> {
    ensure_non_empty(a, b)?;

    let n = a.len();
    let m = b.len();
    let eps = threshold;

    if !(a[0].distance(b[0]) <= eps && a[n - 1].distance(b[m - 1]) <= eps) {
        return Ok(false);
    }

    // A single point against a polyline: the farthest vertex decides.
    if n == 1 {
        return Ok(b.iter().all(|q| a[0].distance(*q) <= eps));
    }
    if m == 1 {
        return Ok(a.iter().all(|p| p.distance(b[0]) <= eps));
    }

    let cells = n - 1;
    let reach = &mut scratch.reach;
    reach.clear();
    reach.resize(cells, Interval::empty());

    // Bottom edge: reachable by walking along `a` while `b` waits at b_0.
    let mut open = true;
    for i in 0..cells {
        let free = free_interval(a[i], a[i + 1], b[0], eps)?;
        if open && free.starts_at_zero() {
            reach[i] = free;
            open = free.reaches_end();
        } else {
            reach[i] = Interval::empty();
            open = false;
        }
    }

    // Left edge, advanced one row at a time.
    let mut edge_open = true;

    for j in 0..m - 1 {
        let mut left = Interval::empty();
        if edge_open {
            let free = free_interval(b[j], b[j + 1], a[0], eps)?;
            if free.starts_at_zero() {
                left = free;
            }
        }
        edge_open = left.reaches_end();

        let mut any = edge_open;
        for i in 0..cells {
            let bottom = reach[i];
            let top_free = free_interval(a[i], a[i + 1], b[j + 1], eps)?;
            let right_free = free_interval(b[j], b[j + 1], a[i + 1], eps)?;

            let top = if !left.is_empty() {
                top_free
            } else if !bottom.is_empty() {
                top_free.above(bottom.lo)
            } else {
                Interval::empty()
            };

            let right = if !bottom.is_empty() {
                right_free
            } else if !left.is_empty() {
                right_free.above(left.lo)
            } else {
                Interval::empty()
            };

            ensure_in_cell(top, i, j)?;
            ensure_in_cell(right, i, j)?;

            any = any || !top.is_empty() || !right.is_empty();
            reach[i] = top;
            left = right;
        }

        if j == m - 2 {
            return Ok(left.reaches_end() || reach[cells - 1].reaches_end());
        }
        if !any {
            return Ok(false);
        }
    }

    Err(FrechetError::InternalInvariantViolation(
        "free-space sweep ended without visiting the last row".into(),
    ))
}
