//! Fréchet distance: exact, bounded and decision variants.
//!
//! The Fréchet distance measures similarity between curves while respecting
//! the ordering of points. It's often described as the "dog walking" distance:
//! a person walks along one curve and a dog along the other, connected by a
//! leash. The Fréchet distance is the minimum leash length needed for both
//! to walk from start to end, varying speed but never backtracking.
//!
//! # Discrete vs Continuous
//!
//! - **Discrete Fréchet**: only vertices are coupled, O(nm) dynamic program.
//! - **Continuous Fréchet**: every point of every segment is coupled; here
//!   only the decision version (is the distance at most ε?) is provided.
//!
//! Every routine that needs working memory borrows it from a
//! [`DistanceScratch`] owned by the calling thread.

mod continuous;
mod discrete;
mod equal_time;
mod scratch;

pub use continuous::continuous_frechet_at_most;
pub use discrete::{
    discrete_frechet_at_most, discrete_frechet_distance, discrete_frechet_distance_bounded,
    discrete_frechet_distance_exact,
};
pub use equal_time::{equal_time_distance, equal_time_distance_timed};
pub use scratch::DistanceScratch;

use crate::error::{FrechetError, Result};

#[inline]
pub(crate) fn ensure_non_empty<P>(a: &[P], b: &[P]) -> Result<()> {
    if a.is_empty() || b.is_empty() {
        return Err(FrechetError::EmptyCurve);
    }
    Ok(())
}
