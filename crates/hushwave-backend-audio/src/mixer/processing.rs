//! Audio processing functions for clipping and normalization.

/// Drive used by the synthesizer's soft clipper.
pub const SOFT_CLIP_DRIVE: f64 = 1.3;

/// Guard added to RMS computations so silence does not divide by zero.
pub const RMS_EPSILON: f64 = 1e-12;

/// Largest gain normalization may apply.
pub const MAX_GAIN: f64 = 6.0;

/// Highest absolute sample value after normalization.
pub const PEAK_CEILING: f64 = 0.99;

/// Applies tanh soft clipping.
///
/// `tanh(x · drive) / tanh(drive)`: odd, zero at zero, maps ±1 to ±1 and
/// stays strictly inside `(-1, 1)` for `|x| < 1`. For larger inputs the
/// output approaches `±1 / tanh(drive)`.
///
/// # Arguments
/// * `sample` - Input sample
/// * `drive` - Saturation amount, must be positive
#[inline]
pub fn soft_clip(sample: f64, drive: f64) -> f64 {
    (sample * drive).tanh() / drive.tanh()
}

/// Computes `sqrt(mean(x²) + ε)`. An empty buffer has RMS `sqrt(ε)`.
pub fn rms(samples: &[f64]) -> f64 {
    let mean_square = if samples.is_empty() {
        0.0
    } else {
        samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64
    };
    (mean_square + RMS_EPSILON).sqrt()
}

/// What [`normalize_loudness`] did to a buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeStats {
    /// RMS before any gain.
    pub rms_before: f64,
    /// Loudness gain applied (capped at [`MAX_GAIN`]).
    pub gain: f64,
    /// Second-stage peak scale (1.0 when the ceiling was not hit).
    pub peak_scale: f64,
}

/// Normalizes a buffer to a target RMS level with a peak ceiling.
///
/// Applies `min(target / (rms + ε), MAX_GAIN)`, then, if the resulting peak
/// exceeds [`PEAK_CEILING`], scales everything down so it sits exactly on
/// the ceiling.
///
/// # Arguments
/// * `samples` - Audio samples to normalize
/// * `target_db` - Target RMS level in dBFS
pub fn normalize_loudness(samples: &mut [f64], target_db: f64) -> NormalizeStats {
    let rms_before = rms(samples);
    let target = 10.0_f64.powf(target_db / 20.0);
    let gain = (target / (rms_before + RMS_EPSILON)).min(MAX_GAIN);

    for sample in samples.iter_mut() {
        *sample *= gain;
    }

    let peak = samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b));

    let mut peak_scale = 1.0;
    if peak > PEAK_CEILING {
        peak_scale = PEAK_CEILING / peak;
        for sample in samples.iter_mut() {
            *sample *= peak_scale;
        }
    }

    NormalizeStats {
        rms_before,
        gain,
        peak_scale,
    }
}
