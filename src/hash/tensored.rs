//! Tensored multihash.
//!
//! Concatenating grids sharpens a hash (fewer false candidates) but also
//! makes true neighbours miss each other. The usual remedy is many
//! independent concatenations, OR-ed together, which costs one curve walk
//! per grid per table. Tensoring gets `k²` tables from `2k` walks: each
//! table key is the pair `(left_i, right_j)` of one grid from a left family
//! and one from a right family.

use super::fingerprint::mix;
use super::grid::{HashFamily, HashScratch};
use crate::error::Result;
use crate::primitives::CurvePoint;
use crate::sampling::SplitMix64;

/// Two hash families whose grid keys are combined pairwise.
#[derive(Debug, Clone)]
pub struct TensoredHasher<P: CurvePoint> {
    left: HashFamily<P>,
    right: HashFamily<P>,
}

impl<P: CurvePoint> TensoredHasher<P> {
    /// Builds left and right families of `functions` grids each, with
    /// seeds derived from `seed`.
    ///
    /// # Errors
    ///
    /// Same as [`HashFamily::new`].
    pub fn new(resolution: P::Scalar, functions: usize, seed: u64) -> Result<Self> {
        let mut seeds = SplitMix64::new(seed);
        let left = HashFamily::new(resolution, functions, seeds.next_u64())?;
        let right = HashFamily::new(resolution, functions, seeds.next_u64())?;
        Ok(Self { left, right })
    }

    /// Number of keys per curve (`functions²`).
    #[inline]
    pub fn tables(&self) -> usize {
        self.left.functions() * self.right.functions()
    }

    /// The left family.
    pub fn left(&self) -> &HashFamily<P> {
        &self.left
    }

    /// The right family.
    pub fn right(&self) -> &HashFamily<P> {
        &self.right
    }

    /// Writes the `functions²` table keys of a curve into `out`.
    ///
    /// `out[i * functions + j]` combines left grid `i` with right grid `j`;
    /// two curves are candidates when they agree on any entry.
    ///
    /// # Errors
    ///
    /// [`FrechetError::EmptyCurve`](crate::FrechetError::EmptyCurve) if
    /// `points` is empty.
    pub fn tensored_keys(
        &self,
        points: &[P],
        scratch: &mut HashScratch,
        out: &mut Vec<u64>,
    ) -> Result<()> {
        let HashScratch {
            walk, left, right, ..
        } = scratch;
        self.left.grid_keys_into(points, walk, left)?;
        self.right.grid_keys_into(points, walk, right)?;

        out.clear();
        out.reserve(left.len() * right.len());
        for &l in left.iter() {
            for &r in right.iter() {
                out.push(mix(l, r));
            }
        }
        Ok(())
    }
}
