//! 1D point type, used for univariate time series.

use super::CurvePoint;
use num_traits::Float;
use std::fmt;
use serde::{Deserialize, Serialize};

/// A point on the real line.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point1<F> {
    pub x: F,
}

impl<F: Float> Point1<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F) -> Self {
        Self { x }
    }
}

impl<F: Float + Send + Sync + fmt::Debug + 'static> CurvePoint for Point1<F> {
    type Scalar = F;
    const DIM: usize = 1;

    #[inline]
    fn coord(self, axis: usize) -> F {
        debug_assert!(axis < Self::DIM);
        self.x
    }

    #[inline]
    fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        dx * dx
    }

    #[inline]
    fn distance(self, other: Self) -> F {
        (other.x - self.x).abs()
    }

    #[inline]
    fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
        }
    }
}

impl<F: Float> From<F> for Point1<F> {
    fn from(x: F) -> Self {
        Self::new(x)
    }
}
