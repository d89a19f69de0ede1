//! Output format: mono, 16-bit signed PCM.

/// Length of the canonical header in bytes.
pub const HEADER_LEN: usize = 44;

/// Channel count of every file this crate writes.
pub const CHANNELS: u16 = 1;

/// Bit depth of every file this crate writes.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Sample layout of a hushwave WAV file. Only the rate varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Mono PCM16 at `sample_rate`.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: CHANNELS,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Bytes in one sample frame.
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    /// Payload bytes per second of audio.
    pub(crate) fn byte_rate(&self) -> u32 {
        u32::from(self.block_align()) * self.sample_rate
    }
}
