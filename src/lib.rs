//! frechetum - Fréchet distances and curve fingerprints
//!
//! Similarity of polygonal curves under the Fréchet distance: an exact
//! discrete dynamic program with a bounded early-exit variant, discrete and
//! continuous decision procedures, the equal-time distance, grid
//! locality-sensitive fingerprints for candidate filtering, and a parallel
//! all-pairs driver that samples pairs reproducibly.
//!
//! # Example
//!
//! ```
//! use frechetum::frechet::{discrete_frechet_distance, DistanceScratch};
//! use frechetum::Point2;
//!
//! let a = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)];
//! let b = [Point2::new(0.0, 1.0), Point2::new(2.0, 1.0)];
//!
//! let mut scratch = DistanceScratch::new();
//! let d = discrete_frechet_distance(&a, &b, &mut scratch).unwrap();
//! assert!((d - 2.0_f64.sqrt()).abs() < 1e-12);
//! ```

pub mod error;
pub mod frechet;
pub mod hash;
pub mod io;
pub mod pairwise;
pub mod primitives;
pub mod sampling;

pub use error::{FrechetError, Result};
pub use frechet::{
    continuous_frechet_at_most, discrete_frechet_at_most, discrete_frechet_distance,
    discrete_frechet_distance_bounded, discrete_frechet_distance_exact, equal_time_distance,
    DistanceScratch,
};
pub use hash::{Fingerprint, HashFamily, TensoredHasher};
pub use pairwise::{run_all_pairs, PairRecord, PairSink, PairwiseConfig, RunSummary};
pub use primitives::{Curve, CurvePoint, Point1, Point2};
