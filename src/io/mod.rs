//! Dataset loading seam and the all-pairs driver over it.
//!
//! The on-disk format is up to the host: implement [`CurveLoader`] for it
//! and hand the loader to [`run_dataset`], which picks the point type from
//! the dataset's dimension.

use crate::error::{FrechetError, Result};
use crate::pairwise::{run_all_pairs, PairSink, PairwiseConfig, RunSummary};
use crate::primitives::{Curve, Point1, Point2};
use std::path::Path;

/// Reads curve datasets of one or two dimensions.
pub trait CurveLoader {
    /// Number of coordinates per point stored in the dataset at `path`.
    fn peek_dimension(&self, path: &Path) -> Result<usize>;

    /// Loads a one-dimensional dataset.
    fn load_1d(&self, path: &Path) -> Result<Vec<Curve<Point1<f64>>>>;

    /// Loads a two-dimensional dataset.
    fn load_2d(&self, path: &Path) -> Result<Vec<Curve<Point2<f64>>>>;
}

/// Loads the dataset at `path` with the point type its dimension calls for
/// and runs [`run_all_pairs`] over it.
///
/// # Errors
///
/// [`FrechetError::Config`] for dimensions other than 1 and 2, otherwise
/// whatever the loader or the run reports.
pub fn run_dataset<L, S>(
    loader: &L,
    path: &Path,
    config: &PairwiseConfig,
    sink: &mut S,
) -> Result<RunSummary>
where
    L: CurveLoader + ?Sized,
    S: PairSink<f64>,
{
    let dimension = loader.peek_dimension(path)?;
    log::info!("dataset {} has dimension {}", path.display(), dimension);

    match dimension {
        1 => {
            let curves = loader.load_1d(path)?;
            run_all_pairs(&curves, config, sink)
        }
        2 => {
            let curves = loader.load_2d(path)?;
            run_all_pairs(&curves, config, sink)
        }
        d => Err(FrechetError::config(format!(
            "unsupported number of dimensions: {d}"
        ))),
    }
}
