//! Per-worker state and the pair loop each worker runs.

use super::config::PairMetric;
use super::sink::PairRecord;
use crate::error::{FrechetError, Result};
use crate::frechet::{discrete_frechet_distance, discrete_frechet_distance_bounded, DistanceScratch};
use crate::primitives::{Curve, CurvePoint};
use crate::sampling::RandomStream;
use crossbeam_channel::Sender;
use num_traits::{Float, NumCast};
use std::sync::atomic::{AtomicBool, Ordering};

/// Everything one worker thread owns for the duration of a run.
///
/// Built once when the pool starts and dropped when it finishes, so the
/// per-pair work allocates nothing once the scratch rows have grown.
#[derive(Debug)]
pub struct WorkerContext<F> {
    /// Position of this worker in the pool.
    pub index: usize,
    /// Dynamic-programming buffers.
    pub scratch: DistanceScratch<F>,
    /// Private sampling stream.
    pub rng: RandomStream,
}

/// Counters reported by one worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct WorkerStats {
    pub(crate) visited: u64,
    pub(crate) sampled: u64,
}

impl<F: Float> WorkerContext<F> {
    /// Creates the context of worker `index`.
    pub fn new(index: usize, rng: RandomStream) -> Self {
        Self {
            index,
            scratch: DistanceScratch::new(),
            rng,
        }
    }

    /// Measures one pair with the configured metric.
    fn measure<P>(&mut self, a: &[P], b: &[P], metric: PairMetric) -> Result<F>
    where
        P: CurvePoint<Scalar = F>,
    {
        match metric {
            PairMetric::Discrete => discrete_frechet_distance(a, b, &mut self.scratch),
            PairMetric::DiscreteBounded { bound } => {
                let bound = <F as NumCast>::from(bound).unwrap_or_else(F::infinity);
                discrete_frechet_distance_bounded(a, b, bound, &mut self.scratch)
            }
        }
    }

    /// Visits every pair `(i, j)`, `i < j`, whose outer index `i` is
    /// congruent to this worker's index modulo `workers`, in increasing `j`
    /// for each `i`. A pair is measured and sent when this worker's next
    /// uniform draw is at most `probability`.
    ///
    /// Stops early when `abort` is raised by another worker.
    pub(crate) fn run<P>(
        &mut self,
        curves: &[Curve<P>],
        probability: f64,
        metric: PairMetric,
        workers: usize,
        tx: &Sender<PairRecord<F>>,
        abort: &AtomicBool,
    ) -> Result<WorkerStats>
    where
        P: CurvePoint<Scalar = F>,
    {
        let n = curves.len();
        let mut stats = WorkerStats::default();

        for i in (self.index..n).step_by(workers.max(1)) {
            if abort.load(Ordering::Relaxed) {
                break;
            }
            let a = &curves[i];
            for b in &curves[i + 1..] {
                stats.visited += 1;
                if self.rng.next_f64() > probability {
                    continue;
                }
                let distance = self.measure(a.points(), b.points(), metric)?;
                tx.send(PairRecord {
                    a: a.id(),
                    b: b.id(),
                    distance,
                })
                .map_err(|_| FrechetError::Sink("result writer stopped".into()))?;
                stats.sampled += 1;
            }
        }

        Ok(stats)
    }
}
