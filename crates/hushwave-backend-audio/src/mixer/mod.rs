//! Post-processing of the rendered buffer: soft clipping and loudness
//! normalization.

mod processing;

#[cfg(test)]
mod tests_normalization;
#[cfg(test)]
mod tests_soft_clip;

pub use processing::{
    normalize_loudness, rms, soft_clip, NormalizeStats, MAX_GAIN, PEAK_CEILING, RMS_EPSILON,
    SOFT_CLIP_DRIVE,
};
