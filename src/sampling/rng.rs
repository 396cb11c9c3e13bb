//! Seed mixing and reproducible random streams.
//!
//! [`SplitMix64`] turns one root seed into a sequence of decorrelated
//! sub-seeds; [`RandomStream`] (xorshift1024*) is the long-period generator
//! each worker thread or hash function owns. Nothing here is shared across
//! threads: every consumer gets its own stream.
//!
//! # Example
//!
//! ```
//! use frechetum::sampling::{derive_seed, RandomStream};
//!
//! let mut a = RandomStream::new(derive_seed(42));
//! let mut b = RandomStream::new(derive_seed(42));
//! assert_eq!(a.next_u64(), b.next_u64());
//!
//! let u = a.next_f64();
//! assert!((0.0..1.0).contains(&u));
//! assert!(a.next_below(10) < 10);
//! ```

use rand::RngCore;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const XORSHIFT1024_MULTIPLIER: u64 = 1_181_783_497_276_652_981;
const STATE_WORDS: usize = 16;

/// Avalanche-mixes a 64-bit value (the SplitMix64 finalizer).
///
/// Nearby inputs produce unrelated outputs, so `derive_seed(root + k)` gives
/// independent seeds for consecutive `k`.
#[inline]
pub fn derive_seed(root: u64) -> u64 {
    let mut z = root.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Converts 64 random bits to a uniform double in [0, 1) using the top 53.
#[inline]
fn unit_f64(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// SplitMix64 generator, used as a seed sequence.
///
/// Period 2^64, single word of state.
#[derive(Debug, Clone)]
pub struct SplitMix64(u64);

impl SplitMix64 {
    /// Creates a new sequence from the given seed.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw u64.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let out = derive_seed(self.0);
        self.0 = self.0.wrapping_add(GOLDEN_GAMMA);
        out
    }

    /// Uniform f64 in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }
}

/// A xorshift1024* generator.
///
/// Period 2^1024 - 1. The 16-word state is filled from a [`SplitMix64`]
/// sequence so any 64-bit seed, including zero, yields a valid state.
#[derive(Debug, Clone)]
pub struct RandomStream {
    state: [u64; STATE_WORDS],
    p: usize,
}

impl RandomStream {
    /// Creates a stream deterministically from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut seeder = SplitMix64::new(seed);
        let mut state = [0u64; STATE_WORDS];
        for word in state.iter_mut() {
            *word = seeder.next_u64();
        }
        Self { state, p: 0 }
    }

    /// Next raw u64.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[self.p];
        self.p = (self.p + 1) & (STATE_WORDS - 1);
        let mut s1 = self.state[self.p];
        s1 ^= s1 << 31;
        self.state[self.p] = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30);
        self.state[self.p].wrapping_mul(XORSHIFT1024_MULTIPLIER)
    }

    /// Uniform f64 in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }

    /// Uniform integer in [0, n). Returns 0 when `n == 0`.
    ///
    /// Uses Lemire's multiply-and-reject method, so there is no modulo bias.
    pub fn next_below(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        let threshold = n.wrapping_neg() % n;
        loop {
            let m = (self.next_u64() as u128) * (n as u128);
            if (m as u64) >= threshold {
                return (m >> 64) as u64;
            }
        }
    }

    /// Forks an independent stream, advancing `self` by one draw.
    pub fn split(&mut self) -> Self {
        Self::new(derive_seed(self.next_u64()))
    }
}

impl RngCore for RandomStream {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        RandomStream::next_u64(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = RandomStream::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Creates `count` decorrelated streams from one root seed.
///
/// Stream `k` is seeded with the `k`-th output of a [`SplitMix64`] sequence
/// started at `root`, so the set is reproducible and independent of `count`.
pub fn streams(root: u64, count: usize) -> Vec<RandomStream> {
    let mut seeds = SplitMix64::new(root);
    (0..count)
        .map(|_| RandomStream::new(seeds.next_u64()))
        .collect()
}
