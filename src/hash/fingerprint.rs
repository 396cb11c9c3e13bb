//! Curve fingerprints produced by a [`HashFamily`](super::HashFamily).

use crate::sampling::derive_seed;

/// Folds one value into a running 64-bit hash.
#[inline]
pub(crate) fn mix(h: u64, v: u64) -> u64 {
    derive_seed(h.rotate_left(23) ^ v)
}

/// Initial hash state of grid `g`.
#[inline]
pub(crate) fn grid_seed(g: usize) -> u64 {
    derive_seed(0x6772_6964 ^ g as u64)
}

/// The cell sequences a curve visits in every grid of a family.
///
/// Cells are stored flat, `dim` coordinates per cell, grid after grid;
/// `bounds[g]` is the end of grid `g`'s run. Two curves are candidate
/// neighbours when their [`key`](Fingerprint::key)s (or prefix keys) match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    cells: Vec<i64>,
    bounds: Vec<usize>,
    dim: usize,
    key: u64,
}

impl Fingerprint {
    pub(crate) fn new(cells: Vec<i64>, bounds: Vec<usize>, dim: usize) -> Self {
        let mut fp = Self {
            cells,
            bounds,
            dim,
            key: 0,
        };
        fp.key = fp.prefix_key(usize::MAX);
        fp
    }

    /// The composite key over every cell of every grid.
    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// A composite key over the first `len` cells of each grid.
    ///
    /// Shorter prefixes collide more often; `prefix_key(usize::MAX)` equals
    /// [`key`](Fingerprint::key).
    pub fn prefix_key(&self, len: usize) -> u64 {
        let mut key = derive_seed(self.bounds.len() as u64);
        for g in 0..self.bounds.len() {
            let cells = self.grid_cells(g);
            let take = len.saturating_mul(self.dim).min(cells.len());
            let mut h = grid_seed(g);
            for &c in &cells[..take] {
                h = mix(h, c as u64);
            }
            key = mix(key, h);
        }
        key
    }

    /// Number of grids the fingerprint spans.
    #[inline]
    pub fn grids(&self) -> usize {
        self.bounds.len()
    }

    /// Flattened cell coordinates visited in grid `g`.
    pub fn grid_cells(&self, g: usize) -> &[i64] {
        let start = if g == 0 { 0 } else { self.bounds[g - 1] };
        &self.cells[start..self.bounds[g]]
    }

    /// Number of cells (not coordinates) visited in grid `g`.
    pub fn grid_len(&self, g: usize) -> usize {
        self.grid_cells(g).len() / self.dim.max(1)
    }

    /// Length of the longest common prefix of `self` and `other` in grid `g`,
    /// counted in cells.
    pub fn common_prefix(&self, other: &Self, g: usize) -> usize {
        let dim = self.dim.max(1);
        self.grid_cells(g)
            .chunks(dim)
            .zip(other.grid_cells(g).chunks(dim))
            .take_while(|(a, b)| a == b)
            .count()
    }
}
