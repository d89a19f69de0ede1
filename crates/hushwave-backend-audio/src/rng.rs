//! Call-scoped PRNG for noise and pulse decisions.
//!
//! Each render owns exactly one [`NoiseRng`], seeded once at the start of the
//! call. PCG32 has a period of 2^64 and no degenerate zero state, so any
//! 64-bit seed is usable.

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform `[0, 1)` source backed by PCG32.
#[derive(Debug, Clone)]
pub struct NoiseRng {
    inner: Pcg32,
}

impl NoiseRng {
    /// Creates a generator from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Returns the next value, uniformly distributed in `[0, 1)`.
    #[inline]
    pub fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Returns the next value, uniformly distributed in `[-1, 1)`.
    #[inline]
    pub fn next_bipolar(&mut self) -> f64 {
        self.next_unit() * 2.0 - 1.0
    }
}

/// Draws a fresh seed from the operating system's CSPRNG.
pub fn fresh_seed() -> u64 {
    OsRng.next_u64()
}
