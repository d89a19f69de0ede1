//! Per-invocation synthesis request.

use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

/// Fixed output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Duration substituted for zero, negative, or non-finite requests.
pub const MIN_DURATION_SECONDS: f64 = 1.0;

/// A single request to render one track.
///
/// Requests are created per call and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Requested length in seconds.
    pub duration_sec: f64,
    /// Recipe driving the render.
    pub recipe: Recipe,
    /// Fixed PRNG seed. `None` draws a fresh seed from the OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SynthesisRequest {
    /// Creates a request that will draw a fresh seed.
    pub fn new(duration_sec: f64, recipe: Recipe) -> Self {
        Self {
            duration_sec,
            recipe,
            seed: None,
        }
    }

    /// Pins the PRNG seed for a reproducible render.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the duration actually rendered.
    pub fn effective_duration(&self) -> f64 {
        if self.duration_sec.is_finite() && self.duration_sec > 0.0 {
            self.duration_sec
        } else {
            MIN_DURATION_SECONDS
        }
    }

    /// Returns the exact number of samples the render will contain.
    pub fn num_samples(&self) -> usize {
        (self.effective_duration() * SAMPLE_RATE as f64).round() as usize
    }
}
