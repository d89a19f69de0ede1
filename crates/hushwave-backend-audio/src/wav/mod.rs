//! Canonical mono PCM16 WAV writer and reader.
//!
//! Output is always the 44-byte RIFF/WAVE/fmt/data header followed by
//! little-endian signed 16-bit samples. No extra chunks, no timestamps.

mod builder;
mod format;
mod pcm;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use builder::WavWriter;
pub use format::{WavFormat, BITS_PER_SAMPLE, CHANNELS, HEADER_LEN};
pub use pcm::{extract_pcm_data, parse_header, WavInfo};
pub use writer::{
    data_len_field, encode_header, samples_to_pcm16, write_wav, write_wav_to_vec, MAX_DATA_LEN,
};
