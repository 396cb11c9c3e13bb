//! The point abstraction shared by every curve algorithm.

use num_traits::Float;
use std::fmt;

/// A fixed-dimension point that curves can be built from.
///
/// Both arguments of every distance or hashing call share the same point
/// type, so mixing dimensions is rejected by the compiler rather than at
/// run time.
pub trait CurvePoint: Copy + Send + Sync + 'static {
    /// Coordinate type.
    type Scalar: Float + Send + Sync + fmt::Debug;

    /// Number of coordinates.
    const DIM: usize;

    /// Returns the coordinate along `axis` (`axis < DIM`).
    fn coord(self, axis: usize) -> Self::Scalar;

    /// Computes the squared Euclidean distance to another point.
    fn distance_squared(self, other: Self) -> Self::Scalar;

    /// Computes the Euclidean distance to another point.
    #[inline]
    fn distance(self, other: Self) -> Self::Scalar {
        self.distance_squared(other).sqrt()
    }

    /// Linearly interpolates between `self` and `other`.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self;
}
