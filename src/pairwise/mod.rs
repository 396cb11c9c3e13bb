//! Parallel all-pairs distance computation.
//!
//! [`run_all_pairs`] measures a random sample of the unordered pairs of a
//! curve set. Each worker thread owns a [`WorkerContext`] (scratch buffers
//! and a private random stream) and a disjoint, interleaved share of the
//! outer index range; results travel over a bounded channel to a single
//! writer thread that owns the [`PairSink`].
//!
//! # Example
//!
//! ```
//! use frechetum::pairwise::{run_all_pairs, PairRecord, PairwiseConfig};
//! use frechetum::{Curve, Point2};
//!
//! let curves: Vec<Curve<Point2<f64>>> = (0..5)
//!     .map(|k| Curve::new(k, vec![Point2::new(0.0, k as f64), Point2::new(1.0, k as f64)]).unwrap())
//!     .collect();
//!
//! let mut out: Vec<PairRecord<f64>> = Vec::new();
//! let config = PairwiseConfig::default().with_workers(2);
//! let summary = run_all_pairs(&curves, &config, &mut out).unwrap();
//! assert_eq!(summary.emitted, 10);
//! assert_eq!(out.len(), 10);
//! ```

mod config;
mod sink;
mod worker;

pub use config::{
    sampling_probability_for_budget, PairMetric, PairwiseConfig, DEFAULT_PAIR_BUDGET,
};
pub use sink::{LineSink, PairRecord, PairSink};
pub use worker::WorkerContext;

use crate::error::{FrechetError, Result};
use crate::primitives::{Curve, CurvePoint};
use crate::sampling::streams;
use crossbeam_channel::Receiver;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

/// Totals of one all-pairs run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Number of curves.
    pub curves: usize,
    /// Worker threads used.
    pub workers: usize,
    /// Pairs visited (always C(n, 2) for a completed run).
    pub visited: u64,
    /// Records delivered to the sink.
    pub emitted: u64,
}

/// Measures a random sample of all unordered curve pairs in parallel.
///
/// Every pair is visited exactly once across the pool; it is measured and
/// emitted when the visiting worker's next uniform draw is at most
/// `config.sampling_probability`, so about `p · C(n, 2)` records come out.
/// With a fixed seed and worker count the emitted set is reproducible;
/// the order across workers is not.
///
/// Fewer than two curves is not an error: nothing is emitted.
///
/// # Errors
///
/// - [`FrechetError::Config`] if `config` is invalid.
/// - The first per-pair error of any worker; the run stops on it.
/// - [`FrechetError::Sink`] if the sink rejects a record.
/// - [`FrechetError::WorkerPanicked`] if a thread panicked.
pub fn run_all_pairs<P, S>(
    curves: &[Curve<P>],
    config: &PairwiseConfig,
    sink: &mut S,
) -> Result<RunSummary>
where
    P: CurvePoint,
    S: PairSink<P::Scalar>,
{
    config.validate()?;

    let n = curves.len();
    let pairs = (n as u64) * (n.saturating_sub(1) as u64) / 2;
    let workers = config.resolved_workers().min(n.max(1));
    let probability = config.sampling_probability;

    log::info!(
        "all-pairs over {} curves ({} pairs), sampling probability {}, {} workers",
        n,
        pairs,
        probability,
        workers
    );

    if n < 2 {
        sink.finish()?;
        return Ok(RunSummary {
            curves: n,
            workers: 0,
            visited: 0,
            emitted: 0,
        });
    }

    let started = Instant::now();
    let contexts: Vec<WorkerContext<P::Scalar>> = streams(config.seed, workers)
        .into_iter()
        .enumerate()
        .map(|(index, rng)| WorkerContext::new(index, rng))
        .collect();

    let (tx, rx) = crossbeam_channel::bounded::<PairRecord<P::Scalar>>(config.channel_capacity);
    let abort = AtomicBool::new(false);
    let metric = config.metric;

    let (visited, outcome) = thread::scope(|s| {
        let writer = s.spawn(move || drain(rx, sink));

        let handles: Vec<_> = contexts
            .into_iter()
            .map(|mut ctx| {
                let tx = tx.clone();
                let abort = &abort;
                s.spawn(move || {
                    let res = ctx.run(curves, probability, metric, workers, &tx, abort);
                    if let Err(e) = &res {
                        log::warn!("worker {} failed: {}", ctx.index, e);
                        abort.store(true, Ordering::Relaxed);
                    }
                    res
                })
            })
            .collect();
        drop(tx);

        let mut visited = 0u64;
        let mut first_error = None;
        for (worker, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(stats)) => {
                    log::debug!(
                        "worker {} visited {} pairs, sampled {}",
                        worker,
                        stats.visited,
                        stats.sampled
                    );
                    visited += stats.visited;
                }
                Ok(Err(e)) => {
                    first_error.get_or_insert(e);
                }
                Err(_) => {
                    abort.store(true, Ordering::Relaxed);
                    first_error.get_or_insert(FrechetError::WorkerPanicked { worker });
                }
            }
        }

        let written = writer
            .join()
            .unwrap_or(Err(FrechetError::WorkerPanicked { worker: workers }));

        // The writer's own failure explains the workers' send errors.
        let outcome = match (written, first_error) {
            (Err(e), _) => Err(e),
            (Ok(_), Some(e)) => Err(e),
            (Ok(emitted), None) => Ok(emitted),
        };
        (visited, outcome)
    });

    let emitted = outcome?;
    log::info!(
        "all-pairs finished: {} of {} pairs emitted in {:.2?}",
        emitted,
        visited,
        started.elapsed()
    );

    Ok(RunSummary {
        curves: n,
        workers,
        visited,
        emitted,
    })
}

/// Writer loop: hands every record to the sink, then finishes it.
fn drain<F, S: PairSink<F>>(rx: Receiver<PairRecord<F>>, sink: &mut S) -> Result<u64> {
    let mut emitted = 0u64;
    for record in rx {
        sink.emit(record)?;
        emitted += 1;
    }
    sink.finish()?;
    Ok(emitted)
}
