//! All-pairs run configuration.

use crate::error::{FrechetError, Result};
use serde::{Deserialize, Serialize};

/// Pair budget used when sizing the sampling probability: C(1000, 2).
pub const DEFAULT_PAIR_BUDGET: usize = 499_500;

/// How each sampled pair is measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PairMetric {
    /// Exact discrete Fréchet distance.
    #[default]
    Discrete,
    /// Discrete Fréchet distance with early rejection above `bound`; pairs
    /// beyond the bound report a lower bound of their distance that still
    /// exceeds `bound`.
    DiscreteBounded {
        /// Rejection bound.
        bound: f64,
    },
}

/// Configuration of [`run_all_pairs`](super::run_all_pairs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairwiseConfig {
    /// Probability with which each unordered pair is measured and emitted.
    pub sampling_probability: f64,
    /// Number of compute threads; 0 means one per available core.
    pub workers: usize,
    /// Root seed of the per-worker random streams.
    pub seed: u64,
    /// Capacity of the channel between workers and the writer.
    pub channel_capacity: usize,
    /// Distance to compute for sampled pairs.
    pub metric: PairMetric,
}

impl Default for PairwiseConfig {
    fn default() -> Self {
        Self {
            sampling_probability: 1.0,
            workers: 0,
            seed: 0x5eed,
            channel_capacity: 1024,
            metric: PairMetric::Discrete,
        }
    }
}

impl PairwiseConfig {
    /// Sets the sampling probability.
    pub fn with_sampling_probability(mut self, p: f64) -> Self {
        self.sampling_probability = p;
        self
    }

    /// Sets the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the root seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the metric.
    pub fn with_metric(mut self, metric: PairMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Sizes the sampling probability so that about `max_pairs` of the
    /// pairs among `n` curves are emitted.
    pub fn with_pair_budget(mut self, n: usize, max_pairs: usize) -> Self {
        self.sampling_probability = sampling_probability_for_budget(n, max_pairs);
        self
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// [`FrechetError::Config`] when the probability lies outside `[0, 1]`,
    /// the channel capacity is zero, or the bounded metric has a NaN bound.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.sampling_probability) {
            return Err(FrechetError::config(format!(
                "sampling probability {} is outside [0, 1]",
                self.sampling_probability
            )));
        }
        if self.channel_capacity == 0 {
            return Err(FrechetError::config("channel capacity must be positive"));
        }
        if let PairMetric::DiscreteBounded { bound } = self.metric {
            if bound.is_nan() {
                return Err(FrechetError::config("distance bound must not be NaN"));
            }
        }
        Ok(())
    }

    /// The number of worker threads a run will start.
    pub fn resolved_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    }
}

/// Probability that emits about `max_pairs` of the C(n, 2) pairs, capped at 1.
pub fn sampling_probability_for_budget(n: usize, max_pairs: usize) -> f64 {
    let pairs = n.saturating_mul(n.saturating_sub(1)) / 2;
    if pairs == 0 {
        return 1.0;
    }
    (max_pairs as f64 / pairs as f64).min(1.0)
}
