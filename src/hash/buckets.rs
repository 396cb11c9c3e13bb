//! Candidate bucketing and verified similarity joins.

use super::grid::HashScratch;
use super::tensored::TensoredHasher;
use crate::error::Result;
use crate::frechet::{discrete_frechet_at_most, DistanceScratch};
use crate::primitives::{Curve, CurvePoint};
use std::collections::HashMap;

/// Groups item indices by hash key and enumerates colliding pairs.
#[derive(Debug, Clone, Default)]
pub struct CandidateBuckets {
    buckets: HashMap<u64, Vec<usize>>,
}

impl CandidateBuckets {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files item `index` under `key`.
    pub fn insert(&mut self, key: u64, index: usize) {
        let bucket = self.buckets.entry(key).or_default();
        if bucket.last() != Some(&index) {
            bucket.push(index);
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Every unordered pair `(i, j)`, `i < j`, sharing at least one key,
    /// sorted and without duplicates.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for bucket in self.buckets.values() {
            for (x, &i) in bucket.iter().enumerate() {
                for &j in &bucket[x + 1..] {
                    if i != j {
                        out.push((i.min(j), i.max(j)));
                    }
                }
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }
}

/// Finds pairs of curves within discrete Fréchet distance `threshold`.
///
/// Candidates come from the tensored hash tables; each one is then checked
/// with [`discrete_frechet_at_most`], so every reported pair is a true
/// match. Pairs the hash never brings together are missed; a finer
/// resolution or more functions trades speed for fewer misses.
///
/// Returns `(id_a, id_b)` pairs with `id_a` belonging to the curve that
/// comes first in `curves`.
pub fn similarity_join<P: CurvePoint>(
    curves: &[Curve<P>],
    threshold: P::Scalar,
    hasher: &TensoredHasher<P>,
    hash_scratch: &mut HashScratch,
    distance_scratch: &mut DistanceScratch<P::Scalar>,
) -> Result<Vec<(u64, u64)>> {
    let mut buckets = CandidateBuckets::new();
    let mut keys = Vec::with_capacity(hasher.tables());
    for (index, curve) in curves.iter().enumerate() {
        hasher.tensored_keys(curve.points(), hash_scratch, &mut keys)?;
        for &key in &keys {
            buckets.insert(key, index);
        }
    }

    let candidates = buckets.pairs();
    let mut matches = Vec::new();
    for &(i, j) in &candidates {
        let (a, b) = (&curves[i], &curves[j]);
        if discrete_frechet_at_most(a.points(), b.points(), threshold, distance_scratch)? {
            matches.push((a.id(), b.id()));
        }
    }

    log::debug!(
        "similarity join: {} curves, {} buckets, {} candidates, {} verified",
        curves.len(),
        buckets.len(),
        candidates.len(),
        matches.len()
    );
    Ok(matches)
}
