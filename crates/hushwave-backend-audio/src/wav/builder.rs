//! Sample-buffer front end for the writer.

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

/// Encodes float sample buffers as mono PCM16 WAV files.
#[derive(Debug, Clone, Copy)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Writer for mono files at `sample_rate`.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
        }
    }

    /// Returns the output format.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Quantizes `samples` and returns the complete file.
    pub fn write_mono(&self, samples: &[f64]) -> Vec<u8> {
        write_wav_to_vec(&self.format, &samples_to_pcm16(samples))
    }
}
