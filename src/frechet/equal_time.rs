//! Equal-time distance.
//!
//! The equal-time distance walks both curves in lockstep, vertex `i` with
//! vertex `i` (or, for timestamped curves, position at time `t` with position
//! at time `t`), and reports the largest separation. It is a cheap upper
//! bound on both Fréchet distances.

use super::ensure_non_empty;
use crate::error::{FrechetError, Result};
use crate::primitives::{Curve, CurvePoint};
use num_traits::{Float, NumCast, Zero};

/// Computes `max_i d(a_i, b_i)` for two curves with the same vertex count.
///
/// # Errors
///
/// - [`FrechetError::EmptyCurve`] if either curve is empty.
/// - [`FrechetError::ShapeMismatch`] if the vertex counts differ.
///
/// # Example
///
/// ```
/// use frechetum::frechet::equal_time_distance;
/// use frechetum::Point2;
///
/// let a = vec![Point2::new(0.0_f64, 0.0), Point2::new(0.0, 10.0)];
/// let b = vec![Point2::new(0.0_f64, 0.0), Point2::new(0.0, 5.0)];
/// assert_eq!(equal_time_distance(&a, &b).unwrap(), 5.0);
/// ```
pub fn equal_time_distance<P: CurvePoint>(a: &[P], b: &[P]) -> Result<P::Scalar> {
    ensure_non_empty(a, b)?;
    if a.len() != b.len() {
        return Err(FrechetError::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter()
        .zip(b)
        .map(|(p, q)| p.distance(*q))
        .fold(P::Scalar::zero(), |acc, d| acc.max(d)))
}

/// Computes the equal-time distance of two curves, using their timestamps
/// when both have them.
///
/// With timestamps, each curve is interpolated linearly between its
/// vertices and held at its first (last) vertex before (after) its time
/// range. Vertices sharing a timestamp are visited in order while the other
/// curve waits, so the result is the cost of a genuine monotone coupling.
/// The separation of two linearly moving points is convex in time, hence
/// the maximum over all vertex timestamps is exact.
///
/// Without timestamps on both curves, the vertex index is the time and
/// [`equal_time_distance`] applies.
pub fn equal_time_distance_timed<P: CurvePoint>(a: &Curve<P>, b: &Curve<P>) -> Result<P::Scalar> {
    let (ta, tb) = match (a.timestamps(), b.timestamps()) {
        (Some(ta), Some(tb)) => (ta, tb),
        _ => return equal_time_distance(a.points(), b.points()),
    };
    let pa = a.points();
    let pb = b.points();

    let mut max = P::Scalar::zero();
    for (p, &t) in pa.iter().zip(ta) {
        max = max.max(p.distance(position_entering(pb, tb, t)));
    }
    for (q, &t) in pb.iter().zip(tb) {
        max = max.max(q.distance(position_leaving(pa, ta, t)));
    }
    Ok(max)
}

/// Position at time `t`, taking the first vertex among those stamped `t`.
fn position_entering<P: CurvePoint>(points: &[P], times: &[f64], t: f64) -> P {
    let k = times.partition_point(|&s| s < t);
    if k == 0 {
        return points[0];
    }
    if k == times.len() {
        return points[points.len() - 1];
    }
    if times[k] == t {
        return points[k];
    }
    interpolate(points[k - 1], points[k], times[k - 1], times[k], t)
}

/// Position at time `t`, taking the last vertex among those stamped `t`.
fn position_leaving<P: CurvePoint>(points: &[P], times: &[f64], t: f64) -> P {
    let k = times.partition_point(|&s| s <= t);
    if k == 0 {
        return points[0];
    }
    let last = k - 1;
    if last == times.len() - 1 || times[last] == t {
        return points[last];
    }
    interpolate(points[last], points[k], times[last], times[k], t)
}

#[inline]
fn interpolate<P: CurvePoint>(p: P, q: P, t0: f64, t1: f64, t: f64) -> P {
    let u = (t - t0) / (t1 - t0);
    p.lerp(q, <P::Scalar as NumCast>::from(u).unwrap_or_else(P::Scalar::zero))
}
