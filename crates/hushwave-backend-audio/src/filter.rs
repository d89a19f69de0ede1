//! One-pole low-pass filter used to soften the noise bed.

use std::f64::consts::PI;

/// One-pole lowpass filter (simple RC filter).
///
/// `y[n] = a * y[n-1] + (1 - a) * x[n]` with `a = exp(-2π fc / fs)`.
/// Stable for any cutoff strictly between 0 and Nyquist.
#[derive(Debug, Clone)]
pub struct OnePoleLowpass {
    a: f64,
    y1: f64,
}

impl OnePoleLowpass {
    /// Creates a new filter with zeroed state.
    ///
    /// # Arguments
    /// * `cutoff` - Cutoff frequency in Hz
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn new(cutoff: f64, sample_rate: f64) -> Self {
        Self {
            a: Self::coefficient(cutoff, sample_rate),
            y1: 0.0,
        }
    }

    /// Computes the feedback coefficient for a cutoff.
    pub fn coefficient(cutoff: f64, sample_rate: f64) -> f64 {
        (-2.0 * PI * cutoff / sample_rate).exp()
    }

    /// Returns the feedback coefficient in use.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Resets the filter state.
    pub fn reset(&mut self) {
        self.y1 = 0.0;
    }

    /// Processes a single sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        self.y1 = self.a * self.y1 + (1.0 - self.a) * input;
        self.y1
    }
}
