//! Random-stream abstraction for the simulator.
//!
//! The simulator never touches ambient randomness. It asks a `StreamProvider`
//! for one `RandomSource` per trial, which keeps trials independent of each
//! other and of the order in which threads pick them up.

use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

/// A source of uniformly distributed floats.
pub trait RandomSource {
    /// Generates a random `f64` in the range `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Generates a random `f64` in the range `[low, high)`.
    ///
    /// Returns `low` for an empty range.
    #[inline]
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        low + (high - low) * self.next_f64()
    }
}

/// Hands out the random stream for a given trial index.
pub trait StreamProvider: Sync {
    type Stream: RandomSource;

    fn stream(&self, trial: u64) -> Self::Stream;

    /// The base seed, when the provider has one worth reporting.
    fn seed(&self) -> Option<u64> {
        None
    }
}

/// A deterministic stream backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededStream {
    inner: StdRng,
}

impl SeededStream {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededStream {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.inner.r#gen()
    }
}

/// Derives trial `i`'s stream from `base_seed + i`.
#[derive(Debug, Clone, Copy)]
pub struct SeededStreams {
    base_seed: u64,
}

impl SeededStreams {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Uses `seed` when given, otherwise draws a fresh base seed from the
    /// thread-local generator so that unseeded runs vary.
    pub fn from_optional(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(rand::random))
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }
}

impl StreamProvider for SeededStreams {
    type Stream = SeededStream;

    fn stream(&self, trial: u64) -> SeededStream {
        SeededStream::new(self.base_seed.wrapping_add(trial))
    }

    fn seed(&self) -> Option<u64> {
        Some(self.base_seed)
    }
}
