//! Sparse pulse layer.

use crate::rng::NoiseRng;

/// Amplitude of a single pulse.
pub const PULSE_LEVEL: f64 = 0.06;

/// Per-sample Bernoulli trial approximating a Poisson hit process.
///
/// With probability `density / sample_rate` a sample carries a pulse, giving
/// roughly `density` events per second. Kept as a Bernoulli trial for output
/// compatibility.
#[derive(Debug, Clone, Copy)]
pub struct PulseTrain {
    probability: f64,
}

impl PulseTrain {
    /// Creates a pulse train.
    ///
    /// # Arguments
    /// * `density` - Expected events per second
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn new(density: f64, sample_rate: f64) -> Self {
        Self {
            probability: density / sample_rate,
        }
    }

    /// Returns the per-sample hit probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Draws one trial and returns the pulse sample.
    #[inline]
    pub fn next(&self, rng: &mut NoiseRng) -> f64 {
        if rng.next_unit() < self.probability {
            PULSE_LEVEL
        } else {
            0.0
        }
    }
}
