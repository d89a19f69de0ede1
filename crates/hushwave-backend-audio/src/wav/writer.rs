//! Header encoding and PCM16 conversion.

use std::io::{self, Write};

use super::format::{WavFormat, HEADER_LEN};

/// Encodes the canonical header for `data_len` bytes of PCM payload.
pub fn encode_header(format: &WavFormat, data_len: u32) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    let fields: [(usize, &[u8]); 13] = [
        (0, b"RIFF"),
        (4, &(36 + data_len).to_le_bytes()),
        (8, b"WAVE"),
        (12, b"fmt "),
        (16, &16u32.to_le_bytes()),
        (20, &1u16.to_le_bytes()),
        (22, &format.channels.to_le_bytes()),
        (24, &format.sample_rate.to_le_bytes()),
        (28, &format.byte_rate().to_le_bytes()),
        (32, &format.block_align().to_le_bytes()),
        (34, &format.bits_per_sample.to_le_bytes()),
        (36, b"data"),
        (40, &data_len.to_le_bytes()),
    ];
    for (offset, bytes) in fields {
        header[offset..offset + bytes.len()].copy_from_slice(bytes);
    }
    header
}

/// Largest PCM payload whose RIFF size field (`36 + data_len`) fits in a u32.
/// About 13.5 hours of mono 44.1 kHz PCM16.
pub const MAX_DATA_LEN: usize = (u32::MAX - 36) as usize;

/// Returns the header size field for `len` payload bytes, or `None` if the
/// payload is too large for a RIFF file.
pub fn data_len_field(len: usize) -> Option<u32> {
    if len > MAX_DATA_LEN {
        None
    } else {
        u32::try_from(len).ok()
    }
}

/// Streams a header followed by `pcm_data` into `out`.
///
/// Fails with `InvalidInput` if `pcm_data` exceeds [`MAX_DATA_LEN`].
pub fn write_wav<W: Write>(out: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_len = data_len_field(pcm_data.len()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} bytes of PCM data do not fit in a RIFF header", pcm_data.len()),
        )
    })?;
    out.write_all(&encode_header(format, data_len))?;
    out.write_all(pcm_data)
}

/// Builds a complete in-memory WAV file.
///
/// Callers must keep `pcm_data` within [`MAX_DATA_LEN`]; the CLI enforces
/// this through its duration budgets. Beyond it the size fields saturate at
/// the maximum and no longer describe the payload.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let data_len = data_len_field(pcm_data.len()).unwrap_or(MAX_DATA_LEN as u32);
    let mut file = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    file.extend_from_slice(&encode_header(format, data_len));
    file.extend_from_slice(pcm_data);
    file
}

/// Quantizes samples to little-endian PCM16.
///
/// Each sample is clamped to `[-1, 1]`, scaled by 32767 and rounded half
/// away from zero, so a scaled value of exactly -0.5 encodes as -1 and +0.5
/// as +1. NaN encodes as 0.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|&s| ((s.clamp(-1.0, 1.0) * 32767.0).round() as i16).to_le_bytes())
        .collect()
}
