//! Randomly shifted grids and the per-grid curve walk.
//!
//! A grid of side `R` with offset `o` maps a point `x` to the cell
//! `floor((x + o) / R)` on every axis. A curve is hashed by walking its
//! vertices and recording each cell it enters, skipping consecutive repeats.
//! Curves that stay within a small Fréchet distance of each other tend to
//! enter the same cells in the same order, and the random offsets make that
//! tendency a probability rather than a property of the input's alignment.

use super::fingerprint::{grid_seed, mix, Fingerprint};
use crate::error::{FrechetError, Result};
use crate::primitives::CurvePoint;
use crate::sampling::streams;
use num_traits::{Float, NumCast, ToPrimitive, Zero};
use std::marker::PhantomData;

/// Cell buffers used while walking a curve through one grid.
#[derive(Debug, Clone, Default)]
pub(crate) struct WalkBuffers {
    current: Vec<i64>,
    previous: Vec<i64>,
}

/// Reusable buffers for hashing, owned by one thread.
#[derive(Debug, Clone, Default)]
pub struct HashScratch {
    pub(crate) walk: WalkBuffers,
    pub(crate) cells: Vec<i64>,
    pub(crate) bounds: Vec<usize>,
    pub(crate) keys: Vec<u64>,
    pub(crate) left: Vec<u64>,
    pub(crate) right: Vec<u64>,
}

impl HashScratch {
    /// Creates an empty scratch. Buffers grow on first use.
    pub fn new() -> Self {
        Self::default()
    }
}

/// `k` uniform grids of side `R`, each shifted by its own random offset.
///
/// Read-only once built, so one family can be shared by every worker.
#[derive(Debug, Clone)]
pub struct HashFamily<P: CurvePoint> {
    resolution: P::Scalar,
    offsets: Vec<P::Scalar>,
    functions: usize,
    _point: PhantomData<P>,
}

impl<P: CurvePoint> HashFamily<P> {
    /// Builds `functions` grids of side `resolution` over `P::DIM` axes.
    ///
    /// Grid `g` draws its offsets from the `g`-th stream derived from `seed`,
    /// uniformly in `[0, resolution)` per axis.
    ///
    /// # Errors
    ///
    /// [`FrechetError::Config`] if `functions == 0` or `resolution` is not a
    /// positive finite number.
    pub fn new(resolution: P::Scalar, functions: usize, seed: u64) -> Result<Self> {
        if functions == 0 {
            return Err(FrechetError::config("hash family needs at least one grid"));
        }
        if !(resolution > P::Scalar::zero()) || !resolution.is_finite() {
            return Err(FrechetError::config(
                "grid resolution must be positive and finite",
            ));
        }

        let mut offsets = Vec::with_capacity(functions * P::DIM);
        for mut stream in streams(seed, functions) {
            for _ in 0..P::DIM {
                let u = <P::Scalar as NumCast>::from(stream.next_f64())
                    .unwrap_or_else(P::Scalar::zero);
                offsets.push(u * resolution);
            }
        }

        log::debug!(
            "configured hash family: {} grids, {} axes, seed {:#x}",
            functions,
            P::DIM,
            seed
        );

        Ok(Self {
            resolution,
            offsets,
            functions,
            _point: PhantomData,
        })
    }

    /// Number of grids.
    #[inline]
    pub fn functions(&self) -> usize {
        self.functions
    }

    /// Cell side length.
    #[inline]
    pub fn resolution(&self) -> P::Scalar {
        self.resolution
    }

    /// Offset of grid `g` along `axis`.
    #[inline]
    pub fn offset(&self, g: usize, axis: usize) -> P::Scalar {
        self.offsets[g * P::DIM + axis]
    }

    /// Writes the cell of `p` in grid `g` into `out` (`P::DIM` entries).
    fn cell_of(&self, g: usize, p: P, out: &mut Vec<i64>) -> Result<()> {
        out.clear();
        for axis in 0..P::DIM {
            let scaled = ((p.coord(axis) + self.offset(g, axis)) / self.resolution).floor();
            let idx = scaled
                .to_i64()
                .ok_or_else(|| FrechetError::config("coordinate cannot be mapped to a grid cell"))?;
            out.push(idx);
        }
        Ok(())
    }

    /// Walks `points` through grid `g`, calling `visit` once per entered cell.
    fn walk(
        &self,
        g: usize,
        points: &[P],
        buffers: &mut WalkBuffers,
        mut visit: impl FnMut(&[i64]),
    ) -> Result<()> {
        let WalkBuffers { current, previous } = buffers;
        previous.clear();
        for &p in points {
            self.cell_of(g, p, current)?;
            if current == previous {
                continue;
            }
            previous.clone_from(current);
            visit(current);
        }
        Ok(())
    }

    /// Computes the fingerprint of a curve: the sequence of cells it
    /// enters in every grid, plus their composite key.
    ///
    /// # Errors
    ///
    /// - [`FrechetError::EmptyCurve`] if `points` is empty.
    /// - [`FrechetError::Config`] if a coordinate is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use frechetum::hash::{HashFamily, HashScratch};
    /// use frechetum::Point2;
    ///
    /// let family = HashFamily::<Point2<f64>>::new(1.0, 4, 42).unwrap();
    /// let curve = vec![Point2::new(0.0, 0.0), Point2::new(0.1, 0.1), Point2::new(5.0, 5.0)];
    ///
    /// let mut scratch = HashScratch::new();
    /// let a = family.hash_curve(&curve, &mut scratch).unwrap();
    /// let b = family.hash_curve(&curve, &mut scratch).unwrap();
    /// assert_eq!(a.key(), b.key());
    /// assert_eq!(a.grids(), 4);
    /// ```
    pub fn hash_curve(&self, points: &[P], scratch: &mut HashScratch) -> Result<Fingerprint> {
        if points.is_empty() {
            return Err(FrechetError::EmptyCurve);
        }
        let HashScratch {
            walk,
            cells,
            bounds,
            ..
        } = scratch;
        cells.clear();
        bounds.clear();

        for g in 0..self.functions {
            self.walk(g, points, walk, |cell| cells.extend_from_slice(cell))?;
            bounds.push(cells.len());
        }

        Ok(Fingerprint::new(cells.clone(), bounds.clone(), P::DIM))
    }

    /// Computes one key per grid without materializing the cell sequences.
    ///
    /// Entry `g` depends only on the cells the curve enters in grid `g`, so
    /// two curves agree on it exactly when their grid-`g` sequences match
    /// (up to hash collisions).
    pub fn grid_keys<'s>(&self, points: &[P], scratch: &'s mut HashScratch) -> Result<&'s [u64]> {
        let HashScratch { walk, keys, .. } = scratch;
        self.grid_keys_into(points, walk, keys)?;
        Ok(keys.as_slice())
    }

    pub(crate) fn grid_keys_into(
        &self,
        points: &[P],
        walk: &mut WalkBuffers,
        out: &mut Vec<u64>,
    ) -> Result<()> {
        if points.is_empty() {
            return Err(FrechetError::EmptyCurve);
        }
        out.clear();
        for g in 0..self.functions {
            let mut h = grid_seed(g);
            self.walk(g, points, walk, |cell| {
                for &c in cell {
                    h = mix(h, c as u64);
                }
            })?;
            out.push(h);
        }
        Ok(())
    }
}
