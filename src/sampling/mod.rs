//! Reproducible randomness for hashing and pair sampling.

mod rng;

pub use rng::{derive_seed, streams, RandomStream, SplitMix64};
