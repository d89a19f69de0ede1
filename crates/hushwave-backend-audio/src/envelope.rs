//! Fade-in/fade-out envelope.

/// Curve exponent applied to both fades.
pub const FADE_CURVE: f64 = 1.6;

/// Power-curve fade-in and fade-out over a fixed-length buffer.
///
/// Both fades apply independently, so on buffers shorter than
/// `intro + outro` the overlapping region is attenuated by both.
#[derive(Debug, Clone, Copy)]
pub struct FadeEnvelope {
    intro_samples: f64,
    outro_samples: f64,
    total_samples: usize,
}

impl FadeEnvelope {
    /// Creates an envelope.
    ///
    /// # Arguments
    /// * `intro_sec` - Fade-in length in seconds
    /// * `outro_sec` - Fade-out length in seconds
    /// * `total_samples` - Buffer length
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn new(intro_sec: f64, outro_sec: f64, total_samples: usize, sample_rate: f64) -> Self {
        Self {
            intro_samples: intro_sec * sample_rate,
            outro_samples: outro_sec * sample_rate,
            total_samples,
        }
    }

    /// Returns the gain at sample index `i`.
    #[inline]
    pub fn gain(&self, i: usize) -> f64 {
        let mut gain = 1.0;

        let pos = i as f64;
        if pos < self.intro_samples {
            gain *= (pos / self.intro_samples).powf(FADE_CURVE);
        }

        let remaining = self.total_samples.saturating_sub(i) as f64;
        if remaining <= self.outro_samples {
            gain *= (remaining / self.outro_samples).powf(FADE_CURVE);
        }

        gain
    }
}
