//! Layered ambient synthesis.
//!
//! A track is the sum of three layers, each kept below the threshold at which
//! it would read as melody:
//! - `noise` - low-passed white noise bed
//! - `drone` - sub-bass sine with slow pitch drift
//! - `pulse` - sparse random clicks at a few events per minute
//!
//! The sum is shaped by two slow level modulators, the fade envelope, and a
//! soft clipper. Loudness normalization happens afterwards over the whole
//! buffer (see [`crate::mixer::normalize_loudness`]).

pub mod drone;
pub mod noise;
pub mod pulse;


use hushwave_spec::Recipe;

use crate::envelope::FadeEnvelope;
use crate::mixer::{soft_clip, SOFT_CLIP_DRIVE};
use crate::oscillator::{macro_level, swell};
use crate::rng::NoiseRng;

pub use drone::SubDrone;
pub use noise::NoiseBed;
pub use pulse::PulseTrain;

/// Output of the synthesis stage, before loudness normalization.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Soft-clipped samples in `(-1, 1)`.
    pub samples: Vec<f64>,
    /// Number of pulse events fired.
    pub pulses: usize,
}

/// Ambient synthesizer configured from a recipe.
///
/// Holds the filter state for one render; construct a fresh one per call.
#[derive(Debug, Clone)]
pub struct AmbientSynth {
    noise: NoiseBed,
    drone: SubDrone,
    pulse: PulseTrain,
    intro_sec: f64,
    outro_sec: f64,
    sample_rate: f64,
}

impl AmbientSynth {
    /// Creates a synthesizer for a validated recipe.
    pub fn new(recipe: &Recipe, sample_rate: f64) -> Self {
        Self {
            noise: NoiseBed::new(recipe.noise_cutoff_hz, sample_rate),
            drone: SubDrone::new(recipe.sub_hz),
            pulse: PulseTrain::new(recipe.pulse_density, sample_rate),
            intro_sec: recipe.intro_sec,
            outro_sec: recipe.outro_sec,
            sample_rate,
        }
    }

    /// Renders `num_samples` soft-clipped samples.
    ///
    /// Per sample, the RNG is drawn once for noise and once for the pulse
    /// trial, in that order.
    pub fn render(mut self, num_samples: usize, rng: &mut NoiseRng) -> Rendered {
        let envelope = FadeEnvelope::new(
            self.intro_sec,
            self.outro_sec,
            num_samples,
            self.sample_rate,
        );

        let mut samples = Vec::with_capacity(num_samples);
        let mut pulses = 0;

        for i in 0..num_samples {
            let t = i as f64 / self.sample_rate;

            let noise = self.noise.next(rng);
            let sub = self.drone.sample(t);
            let pulse = self.pulse.next(rng);
            if pulse != 0.0 {
                pulses += 1;
            }

            let raw = (noise + sub + pulse) * swell(t) * macro_level(t);
            let shaped = raw * envelope.gain(i);
            samples.push(soft_clip(shaped, SOFT_CLIP_DRIVE));
        }

        Rendered { samples, pulses }
    }
}
