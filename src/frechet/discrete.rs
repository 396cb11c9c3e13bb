//! Discrete Fréchet distance.
//!
//! The discrete Fréchet distance couples only the vertices of the two
//! curves: both walkers jump from vertex to vertex, never backtracking, and
//! the distance is the longest leash any coupling needs at its worst
//! moment, minimized over couplings.
//!
//! Three flavours are provided:
//!
//! - [`discrete_frechet_distance_exact`]: the textbook full-grid DP, kept
//!   as a reference.
//! - [`discrete_frechet_distance`] and [`discrete_frechet_distance_bounded`]:
//!   the same recurrence on two rolling rows held in a [`DistanceScratch`],
//!   with an optional early reject once the answer provably exceeds a bound.
//! - [`discrete_frechet_at_most`]: a yes/no answer found by depth-first
//!   search over the boolean free-space grid, with an explicit stack.
//!
//! # Example
//!
//! ```
//! use frechetum::frechet::{discrete_frechet_distance, DistanceScratch};
//! use frechetum::Point2;
//!
//! let path1 = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(2.0, 0.0),
//! ];
//! let path2 = vec![
//!     Point2::new(0.0_f64, 1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(2.0, 1.0),
//! ];
//!
//! let mut scratch = DistanceScratch::new();
//! let dist = discrete_frechet_distance(&path1, &path2, &mut scratch).unwrap();
//! assert!((dist - 1.0).abs() < 1e-10);
//! ```

use super::{ensure_non_empty, DistanceScratch};
use crate::error::Result;
use crate::primitives::CurvePoint;
use num_traits::Float;

/// Computes the discrete Fréchet distance with the full O(nm) table.
///
/// Reference implementation: every coupling value is kept in one row-major
/// table, so it is easy to check by hand and serves as the baseline the
/// rolling variants are tested against.
///
/// # Errors
///
/// [`FrechetError::EmptyCurve`](crate::FrechetError::EmptyCurve) if either curve is empty.
///
/// # Complexity
///
/// O(nm) time and space, where n = |a| and m = |b|.
pub fn discrete_frechet_distance_exact<P: CurvePoint>(a: &[P], b: &[P]) -> Result<P::Scalar> {
    ensure_non_empty(a, b)?;

    let m = b.len();
    let mut table: Vec<P::Scalar> = Vec::with_capacity(a.len() * m);

    for (i, p) in a.iter().enumerate() {
        for (j, q) in b.iter().enumerate() {
            let here = i * m + j;
            // Cheapest predecessor; border cells have only one.
            let reach = match (i, j) {
                (0, 0) => P::Scalar::neg_infinity(),
                (0, _) => table[here - 1],
                (_, 0) => table[here - m],
                _ => table[here - m].min(table[here - 1]).min(table[here - m - 1]),
            };
            table.push(p.distance(*q).max(reach));
        }
    }

    Ok(table[a.len() * m - 1])
}

/// Computes the discrete Fréchet distance using two rolling rows.
///
/// The rows are indexed by the shorter curve and live in `scratch`, so
/// repeated calls on one thread do not allocate once the scratch has grown.
/// The result is bit-identical to [`discrete_frechet_distance_exact`].
///
/// # Complexity
///
/// O(nm) time, O(min(n, m)) space.
pub fn discrete_frechet_distance<P: CurvePoint>(
    a: &[P],
    b: &[P],
    scratch: &mut DistanceScratch<P::Scalar>,
) -> Result<P::Scalar> {
    discrete_frechet_distance_bounded(a, b, P::Scalar::infinity(), scratch)
}

/// Computes the discrete Fréchet distance, giving up early above `bound`.
///
/// If the true distance is at most `bound` the exact value is returned.
/// Otherwise the result is some value strictly greater than `bound` that is
/// also a lower bound on the true distance: the distance between the first
/// vertices, between the last vertices, or the minimum of the first DP row
/// that lies entirely above `bound`. Callers using this as a fast reject
/// should only rely on `result > bound`.
///
/// With `bound = +inf` this is exactly [`discrete_frechet_distance`].
pub fn discrete_frechet_distance_bounded<P: CurvePoint>(
    a: &[P],
    b: &[P],
    bound: P::Scalar,
    scratch: &mut DistanceScratch<P::Scalar>,
) -> Result<P::Scalar> {
    ensure_non_empty(a, b)?;

    // The shorter curve indexes the rows.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    // Every coupling pairs the first vertices and the last vertices.
    let first = outer[0].distance(inner[0]);
    if first > bound {
        return Ok(first);
    }
    let last = outer[outer.len() - 1].distance(inner[inner.len() - 1]);
    if last > bound {
        return Ok(last);
    }

    let m = inner.len();
    scratch.prepare_rows(m + 1);
    let DistanceScratch {
        prev_row: prev,
        curr_row: curr,
        ..
    } = scratch;

    // Column j of the grid lives at index j + 1; index 0 is a sentinel.
    for p in outer {
        curr[0] = P::Scalar::infinity();
        let mut row_min = P::Scalar::infinity();

        for (j, q) in inner.iter().enumerate() {
            let dist = p.distance(*q);
            let prev_min = prev[j + 1].min(curr[j]).min(prev[j]);
            let value = dist.max(prev_min);
            curr[j + 1] = value;
            row_min = row_min.min(value);
        }

        // Any monotone coupling crosses this row.
        if row_min > bound {
            return Ok(row_min);
        }

        std::mem::swap(prev, curr);
    }

    Ok(prev[m])
}

/// Decides whether the discrete Fréchet distance is at most `threshold`.
///
/// Runs a depth-first search from `(0, 0)` to `(|a|-1, |b|-1)` over the
/// vertex pairs within `threshold` of each other, moving right, up or
/// diagonally. The work list and visited marks live in `scratch`, so long
/// curves cannot overflow the call stack.
///
/// Agrees with `discrete_frechet_distance(a, b) <= threshold`.
///
/// # Complexity
///
/// O(nm) time and space in the worst case; usually far less when the
/// answer is yes, since diagonal moves are tried first.
pub fn discrete_frechet_at_most<P: CurvePoint>(
    a: &[P],
    b: &[P],
    threshold: P::Scalar,
    scratch: &mut DistanceScratch<P::Scalar>,
) -> Result<bool> {
    ensure_non_empty(a, b)?;

    let n = a.len();
    let m = b.len();

    // Written negated so a NaN threshold answers no.
    if !(a[0].distance(b[0]) <= threshold && a[n - 1].distance(b[m - 1]) <= threshold) {
        return Ok(false);
    }

    scratch.prepare_search(n * m);
    let DistanceScratch { visited, stack, .. } = scratch;

    let goal = n * m - 1;
    visited[0] = true;
    stack.push(0);

    while let Some(idx) = stack.pop() {
        if idx == goal {
            return Ok(true);
        }
        let i = idx / m;
        let j = idx % m;

        // Pushed last, popped first: prefer the diagonal.
        let moves = [(i + 1, j), (i, j + 1), (i + 1, j + 1)];
        for (ni, nj) in moves {
            if ni >= n || nj >= m {
                continue;
            }
            let next = ni * m + nj;
            if visited[next] {
                continue;
            }
            if a[ni].distance(b[nj]) <= threshold {
                visited[next] = true;
                stack.push(next);
            }
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrechetError;
    use crate::primitives::{Point1, Point2};
    use crate::sampling::RandomStream;
    use approx::assert_relative_eq;

    fn walk(rng: &mut RandomStream, len: usize) -> Vec<Point2<f64>> {
        let mut x = rng.next_f64() * 10.0;
        let mut y = rng.next_f64() * 10.0;
        (0..len)
            .map(|_| {
                x += rng.next_f64() - 0.5;
                y += rng.next_f64() - 0.5;
                Point2::new(x, y)
            })
            .collect()
    }

    fn random_pairs(seed: u64, count: usize) -> Vec<(Vec<Point2<f64>>, Vec<Point2<f64>>)> {
        let mut rng = RandomStream::new(seed);
        (0..count)
            .map(|_| {
                let la = 1 + rng.next_below(25) as usize;
                let lb = 1 + rng.next_below(25) as usize;
                (walk(&mut rng, la), walk(&mut rng, lb))
            })
            .collect()
    }

    #[test]
    fn test_identical() {
        let p = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let mut scratch = DistanceScratch::new();
        assert_eq!(discrete_frechet_distance(&p, &p, &mut scratch).unwrap(), 0.0);
        assert_eq!(discrete_frechet_distance_exact(&p, &p).unwrap(), 0.0);
    }

    #[test]
    fn test_vertical_segments() {
        let a = vec![Point2::new(0.0, 0.0), Point2::new(0.0, 10.0)];
        let b = vec![Point2::new(0.0, 0.0), Point2::new(0.0, 5.0)];
        let mut scratch = DistanceScratch::new();
        assert_eq!(discrete_frechet_distance(&a, &b, &mut scratch).unwrap(), 5.0);
    }

    #[test]
    fn test_parallel_lines() {
        let p = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let q = vec![
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 1.0),
        ];
        let mut scratch = DistanceScratch::new();
        let dist = discrete_frechet_distance(&p, &q, &mut scratch).unwrap();
        assert_relative_eq!(dist, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_different_lengths() {
        let p = vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)];
        let q = vec![
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 1.0),
        ];
        let mut scratch = DistanceScratch::new();
        let dist = discrete_frechet_distance(&p, &q, &mut scratch).unwrap();
        assert_relative_eq!(dist, std::f64::consts::SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_single_points() {
        let p = vec![Point2::new(0.0, 0.0)];
        let q = vec![Point2::new(3.0, 4.0)];
        let mut scratch = DistanceScratch::new();
        assert_eq!(discrete_frechet_distance(&p, &q, &mut scratch).unwrap(), 5.0);
    }

    #[test]
    fn test_one_dimensional() {
        let p: Vec<Point1<f64>> = [0.0, 2.0, 4.0].iter().map(|&x| Point1::new(x)).collect();
        let q: Vec<Point1<f64>> = [1.0, 4.5].iter().map(|&x| Point1::new(x)).collect();
        let mut scratch = DistanceScratch::new();
        let dist = discrete_frechet_distance(&p, &q, &mut scratch).unwrap();
        assert_eq!(dist, discrete_frechet_distance_exact(&p, &q).unwrap());
        assert_eq!(dist, 1.0);
    }

    #[test]
    fn test_empty_curve_rejected() {
        let p: Vec<Point2<f64>> = vec![];
        let q = vec![Point2::new(0.0, 0.0)];
        let mut scratch = DistanceScratch::new();

        assert_eq!(
            discrete_frechet_distance(&p, &q, &mut scratch).unwrap_err(),
            FrechetError::EmptyCurve
        );
        assert_eq!(
            discrete_frechet_distance_exact(&q, &p).unwrap_err(),
            FrechetError::EmptyCurve
        );
        assert_eq!(
            discrete_frechet_at_most(&q, &p, 1.0, &mut scratch).unwrap_err(),
            FrechetError::EmptyCurve
        );
    }

    #[test]
    fn test_exact_border_cells() {
        let p = [Point2::new(0.0_f64, 0.0)];
        let q = [Point2::new(0.0, 0.0), Point2::new(3.0, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(discrete_frechet_distance_exact(&p, &q).unwrap(), 3.0);
        assert_eq!(discrete_frechet_distance_exact(&q, &p).unwrap(), 3.0);

        let r = [Point2::new(0.0_f64, 1.0), Point2::new(3.0, 1.0), Point2::new(1.0, 1.0)];
        assert_eq!(discrete_frechet_distance_exact(&q, &r).unwrap(), 1.0);
    }

    #[test]
    fn test_symmetric() {
        let mut scratch = DistanceScratch::new();
        for (a, b) in random_pairs(1, 200) {
            let ab = discrete_frechet_distance(&a, &b, &mut scratch).unwrap();
            let ba = discrete_frechet_distance(&b, &a, &mut scratch).unwrap();
            assert_eq!(ab, ba);
            assert_eq!(
                discrete_frechet_distance_exact(&a, &b).unwrap(),
                discrete_frechet_distance_exact(&b, &a).unwrap()
            );
        }
    }

    #[test]
    fn test_rolling_matches_exact() {
        // One scratch reused across pairs of varying length.
        let mut scratch = DistanceScratch::new();
        for (a, b) in random_pairs(2, 200) {
            let exact = discrete_frechet_distance_exact(&a, &b).unwrap();
            let rolling = discrete_frechet_distance(&a, &b, &mut scratch).unwrap();
            assert_eq!(exact, rolling);
        }
    }

    #[test]
    fn test_bounded_infinite_bound() {
        let mut scratch = DistanceScratch::new();
        for (a, b) in random_pairs(3, 100) {
            let expected = discrete_frechet_distance(&a, &b, &mut scratch).unwrap();
            let actual =
                discrete_frechet_distance_bounded(&a, &b, f64::INFINITY, &mut scratch).unwrap();
            assert_eq!(expected, actual);
        }
    }

    #[test]
    fn test_bounded_at_exact_distance() {
        let mut scratch = DistanceScratch::new();
        for (a, b) in random_pairs(4, 100) {
            let expected = discrete_frechet_distance(&a, &b, &mut scratch).unwrap();
            let actual = discrete_frechet_distance_bounded(&a, &b, expected, &mut scratch).unwrap();
            assert_eq!(expected, actual);
        }
    }

    #[test]
    fn test_bounded_rejects_above_bound() {
        let mut scratch = DistanceScratch::new();
        for (a, b) in random_pairs(5, 100) {
            let exact = discrete_frechet_distance(&a, &b, &mut scratch).unwrap();
            if exact == 0.0 {
                continue;
            }
            let bound = exact * 0.5;
            let result = discrete_frechet_distance_bounded(&a, &b, bound, &mut scratch).unwrap();
            assert!(result > bound, "result {} not above bound {}", result, bound);
            assert!(result <= exact, "result {} exceeds exact {}", result, exact);
        }
    }

    #[test]
    fn test_predicate_agrees_with_distance() {
        let mut scratch = DistanceScratch::new();
        for (a, b) in random_pairs(6, 150) {
            let dist = discrete_frechet_distance(&a, &b, &mut scratch).unwrap();
            assert!(discrete_frechet_at_most(&a, &b, dist, &mut scratch).unwrap());
            assert!(discrete_frechet_at_most(&a, &b, 2.0 * dist, &mut scratch).unwrap());
            if dist > 0.0 {
                assert!(!discrete_frechet_at_most(&a, &b, 0.99 * dist, &mut scratch).unwrap());
            }
        }
    }

    #[test]
    fn test_predicate_at_zero() {
        let mut scratch = DistanceScratch::new();
        let a = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 1.0),
        ];
        let mut b = a.clone();
        assert!(discrete_frechet_at_most(&a, &b, 0.0, &mut scratch).unwrap());

        b[1] = Point2::new(1.0, 2.0 + 1e-9);
        assert!(!discrete_frechet_at_most(&a, &b, 0.0, &mut scratch).unwrap());
    }

    #[test]
    fn test_predicate_respects_ordering() {
        // Crossing paths: endpoints are 2 apart, so nothing below 2 works.
        let p = vec![Point2::new(0.0, 0.0), Point2::new(2.0, 2.0)];
        let q = vec![Point2::new(0.0, 2.0), Point2::new(2.0, 0.0)];
        let mut scratch = DistanceScratch::new();

        assert!(discrete_frechet_at_most(&p, &q, 2.0, &mut scratch).unwrap());
        assert!(!discrete_frechet_at_most(&p, &q, 1.9, &mut scratch).unwrap());
    }

    #[test]
    fn test_long_curves_do_not_recurse() {
        let a: Vec<Point2<f64>> = (0..3000).map(|i| Point2::new(i as f64, 0.0)).collect();
        let b: Vec<Point2<f64>> = (0..3000).map(|i| Point2::new(i as f64, 0.5)).collect();
        let mut scratch = DistanceScratch::new();
        assert!(discrete_frechet_at_most(&a, &b, 0.5, &mut scratch).unwrap());
        assert!(!discrete_frechet_at_most(&a, &b, 0.49, &mut scratch).unwrap());
    }
}
