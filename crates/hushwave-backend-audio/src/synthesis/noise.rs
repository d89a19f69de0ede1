//! Filtered noise bed.

use crate::filter::OnePoleLowpass;
use crate::rng::NoiseRng;

/// Output level of the noise bed.
pub const NOISE_LEVEL: f64 = 0.18;

/// White noise through a one-pole low-pass.
#[derive(Debug, Clone)]
pub struct NoiseBed {
    filter: OnePoleLowpass,
}

impl NoiseBed {
    /// Creates a noise bed with its own filter state.
    ///
    /// # Arguments
    /// * `cutoff` - Low-pass cutoff in Hz
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn new(cutoff: f64, sample_rate: f64) -> Self {
        Self {
            filter: OnePoleLowpass::new(cutoff, sample_rate),
        }
    }

    /// Draws one noise value and returns the next filtered sample.
    #[inline]
    pub fn next(&mut self, rng: &mut NoiseRng) -> f64 {
        self.filter.process(rng.next_bipolar()) * NOISE_LEVEL
    }
}
