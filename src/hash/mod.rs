//! Grid-based locality-sensitive hashing for curves.
//!
//! Fingerprints are candidate filters only. Anything they flag has to be
//! confirmed with the distance engine, as [`similarity_join`] does.

mod buckets;
mod fingerprint;
mod grid;
mod tensored;

pub use buckets::{similarity_join, CandidateBuckets};
pub use fingerprint::Fingerprint;
pub use grid::{HashFamily, HashScratch};
pub use tensored::TensoredHasher;
