//! Header parsing and PCM extraction.

use crate::error::{AudioError, AudioResult};

use super::format::{BITS_PER_SAMPLE, CHANNELS, HEADER_LEN};

/// Header fields of a canonical WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl WavInfo {
    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

fn u16_at(bytes: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([bytes[pos], bytes[pos + 1]])
}

fn u32_at(bytes: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]])
}

/// Validates a canonical mono PCM16 header and returns its fields.
///
/// Only the exact 44-byte layout this crate writes is accepted; files with
/// extra chunks are rejected.
pub fn parse_header(wav_data: &[u8]) -> AudioResult<WavInfo> {
    if wav_data.len() < HEADER_LEN {
        return Err(AudioError::malformed(format!(
            "{} bytes is shorter than the {}-byte header",
            wav_data.len(),
            HEADER_LEN
        )));
    }

    for (pos, tag) in [(0, b"RIFF"), (8, b"WAVE"), (12, b"fmt "), (36, b"data")] {
        if &wav_data[pos..pos + 4] != tag {
            return Err(AudioError::malformed(format!(
                "expected '{}' at byte {}",
                String::from_utf8_lossy(tag),
                pos
            )));
        }
    }

    let chunk_size = u32_at(wav_data, 4) as usize;
    let fmt_size = u32_at(wav_data, 16);
    let audio_format = u16_at(wav_data, 20);
    let channels = u16_at(wav_data, 22);
    let sample_rate = u32_at(wav_data, 24);
    let byte_rate = u32_at(wav_data, 28);
    let block_align = u16_at(wav_data, 32);
    let bits_per_sample = u16_at(wav_data, 34);
    let data_size = u32_at(wav_data, 40) as usize;

    if fmt_size != 16 || audio_format != 1 {
        return Err(AudioError::malformed("not a plain PCM fmt chunk"));
    }
    if channels != CHANNELS || bits_per_sample != BITS_PER_SAMPLE || block_align != 2 {
        return Err(AudioError::malformed(format!(
            "expected mono 16-bit, found {} channel(s) at {} bits",
            channels, bits_per_sample
        )));
    }
    if sample_rate == 0 || byte_rate != sample_rate * 2 {
        return Err(AudioError::malformed("byte rate does not match sample rate"));
    }
    if data_size % 2 != 0 || HEADER_LEN + data_size != wav_data.len() {
        return Err(AudioError::malformed(format!(
            "data size {} does not match file length {}",
            data_size,
            wav_data.len()
        )));
    }
    if chunk_size != 36 + data_size {
        return Err(AudioError::malformed("RIFF chunk size is inconsistent"));
    }

    Ok(WavInfo {
        sample_rate,
        channels,
        bits_per_sample,
        num_samples: data_size / 2,
    })
}

/// Extracts PCM data from a canonical WAV buffer.
pub fn extract_pcm_data(wav_data: &[u8]) -> AudioResult<&[u8]> {
    parse_header(wav_data)?;
    Ok(&wav_data[HEADER_LEN..])
}
