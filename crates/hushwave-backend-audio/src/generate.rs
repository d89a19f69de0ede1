//! Top-level generation entry point.
//!
//! Rendering is total: every validated recipe and every duration (invalid
//! ones are replaced by the minimum) yields a well-formed artifact.

use hushwave_spec::{Proof, Recipe, SynthesisRequest, SAMPLE_RATE};
use tracing::{debug, info};

use crate::mixer::{normalize_loudness, NormalizeStats};
use crate::proof::assemble_proof;
use crate::rng::{fresh_seed, NoiseRng};
use crate::synthesis::{AmbientSynth, Rendered};
use crate::wav::WavWriter;

/// Encoded WAV bytes plus their shape.
#[derive(Debug, Clone)]
pub struct WavArtifact {
    /// Complete WAV file bytes.
    pub bytes: Vec<u8>,
    /// Number of samples in the file.
    pub num_samples: usize,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavArtifact {
    /// Returns the length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the artifact holds no bytes. Never true for artifacts
    /// produced by [`generate`].
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Diagnostics from one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    /// RMS of the clipped buffer before normalization.
    pub rms_before: f64,
    /// Loudness gain applied.
    pub gain: f64,
    /// Peak-ceiling scale applied after the loudness gain.
    pub peak_scale: f64,
    /// Number of pulse events.
    pub pulses: usize,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// The encoded track.
    pub wav: WavArtifact,
    /// Provenance record for `wav`.
    pub proof: Proof,
    /// Seed the PRNG was initialized with.
    pub seed: u64,
    /// Render diagnostics.
    pub stats: RenderStats,
}

/// Renders the soft-clipped buffer for a recipe, before normalization.
///
/// # Arguments
/// * `recipe` - Validated recipe
/// * `num_samples` - Exact output length
/// * `rng` - Call-scoped PRNG
pub fn generate_samples(recipe: &Recipe, num_samples: usize, rng: &mut NoiseRng) -> Rendered {
    AmbientSynth::new(recipe, SAMPLE_RATE as f64).render(num_samples, rng)
}

/// Renders a request into WAV bytes and a proof.
///
/// The request's recipe is clamped into range before use, so a recipe built
/// or deserialized without [`Recipe::from_value`] still renders within
/// bounds. The proof records the clamped recipe.
///
/// Durations are not capped here. Past [`MAX_DATA_LEN`](crate::wav::MAX_DATA_LEN)
/// bytes of PCM (about 13.5 hours) the WAV size fields saturate, so callers
/// that accept long durations must enforce a budget.
pub fn generate(request: &SynthesisRequest) -> GenerateResult {
    let duration_sec = request.effective_duration();
    let num_samples = request.num_samples();
    let recipe = &request.recipe.clamped();
    if *recipe != request.recipe {
        debug!(preset = %recipe.preset_name, "out-of-range recipe clamped");
    }

    if duration_sec != request.duration_sec {
        debug!(
            requested = request.duration_sec,
            substituted = duration_sec,
            "invalid duration replaced with minimum"
        );
    }

    let seed = match request.seed {
        Some(seed) => seed,
        None => fresh_seed(),
    };
    debug!(
        preset = %recipe.preset_name,
        num_samples,
        seeded_externally = request.seed.is_some(),
        "rendering"
    );

    let mut rng = NoiseRng::from_seed(seed);
    let Rendered {
        mut samples,
        pulses,
    } = generate_samples(recipe, num_samples, &mut rng);

    let NormalizeStats {
        rms_before,
        gain,
        peak_scale,
    } = normalize_loudness(&mut samples, recipe.target_db);
    debug!(rms_before, gain, peak_scale, pulses, "normalized");

    let bytes = WavWriter::mono(SAMPLE_RATE).write_mono(&samples);
    let proof = assemble_proof(&bytes, recipe, duration_sec);

    info!(
        preset = %recipe.preset_name,
        duration_sec,
        bytes = bytes.len(),
        hash = %proof.content_hash_short,
        "rendered track"
    );

    GenerateResult {
        wav: WavArtifact {
            bytes,
            num_samples,
            sample_rate: SAMPLE_RATE,
        },
        proof,
        seed,
        stats: RenderStats {
            rms_before,
            gain,
            peak_scale,
            pulses,
        },
    }
}
