//! Polygonal curves.

use super::CurvePoint;
use crate::error::{FrechetError, Result};
use serde::Serialize;

/// An identified, non-empty polygonal chain, optionally timestamped.
///
/// The vertex order is semantic. Curves are immutable once built; the
/// algorithms borrow their points through [`Curve::points`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve<P> {
    id: u64,
    points: Vec<P>,
    timestamps: Option<Vec<f64>>,
}

impl<P: CurvePoint> Curve<P> {
    /// Creates a curve from its vertices.
    ///
    /// Returns [`FrechetError::EmptyCurve`] if `points` is empty.
    pub fn new(id: u64, points: Vec<P>) -> Result<Self> {
        if points.is_empty() {
            return Err(FrechetError::EmptyCurve);
        }
        Ok(Self {
            id,
            points,
            timestamps: None,
        })
    }

    /// Creates a curve whose vertices carry timestamps.
    ///
    /// The timestamp count must match the point count and the sequence must
    /// be non-decreasing.
    pub fn with_timestamps(id: u64, points: Vec<P>, timestamps: Vec<f64>) -> Result<Self> {
        if timestamps.len() != points.len() {
            return Err(FrechetError::ShapeMismatch {
                left: points.len(),
                right: timestamps.len(),
            });
        }
        if timestamps.iter().any(|t| !t.is_finite()) {
            return Err(FrechetError::config("timestamps must be finite"));
        }
        if timestamps.windows(2).any(|w| w[1] < w[0]) {
            return Err(FrechetError::config("timestamps must be non-decreasing"));
        }
        let mut curve = Self::new(id, points)?;
        curve.timestamps = Some(timestamps);
        Ok(curve)
    }

    /// The curve identifier.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The vertices, in order.
    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Per-vertex timestamps, if the curve was built with them.
    #[inline]
    pub fn timestamps(&self) -> Option<&[f64]> {
        self.timestamps.as_deref()
    }

    /// Number of vertices (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
