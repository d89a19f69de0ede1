//! Tests for the WAV writer module.

use pretty_assertions::assert_eq;

use super::builder::WavWriter;
use super::format::{WavFormat, HEADER_LEN};
use super::pcm::{extract_pcm_data, parse_header};
use super::writer::{
    data_len_field, encode_header, samples_to_pcm16, write_wav, write_wav_to_vec, MAX_DATA_LEN,
};

// =========================================================================
// WavFormat tests
// =========================================================================

#[test]
fn test_wav_format_mono() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.block_align(), 2);
    assert_eq!(format.byte_rate(), 88200);
    assert_eq!(WavWriter::mono(44100).format(), format);
}

// =========================================================================
// PCM conversion tests
// =========================================================================

#[test]
fn test_samples_to_pcm16_normal_range() {
    let samples = vec![0.0, 0.5, -0.5, 0.25, -0.25];
    let pcm = samples_to_pcm16(&samples);

    assert_eq!(pcm.len(), 10);
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
    // (0.5 * 32767).round() = 16384
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 16384);
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -16384);
    // (0.25 * 32767).round() = 8192
    assert_eq!(i16::from_le_bytes([pcm[6], pcm[7]]), 8192);
}

#[test]
fn test_samples_to_pcm16_boundaries_and_clipping() {
    let samples = vec![1.0, -1.0, 1.5, -7.0, f64::MAX, f64::MIN];
    let pcm = samples_to_pcm16(&samples);
    let values: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(values, vec![32767, -32767, 32767, -32767, 32767, -32767]);
}

#[test]
fn test_samples_to_pcm16_ceiling() {
    let pcm = samples_to_pcm16(&[0.99, -0.99]);
    // 0.99 * 32767 = 32439.33
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 32439);
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -32439);
}

#[test]
fn test_samples_to_pcm16_rounds_ties_away_from_zero() {
    let pcm = samples_to_pcm16(&[0.5 / 32767.0, -0.5 / 32767.0, 1.5 / 32767.0]);
    let values: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(values, vec![1, -1, 2]);
}

// =========================================================================
// Header layout tests
// =========================================================================

#[test]
fn test_data_len_field_limit() {
    assert_eq!(data_len_field(0), Some(0));
    assert_eq!(data_len_field(5_292_000), Some(5_292_000));
    assert_eq!(data_len_field(MAX_DATA_LEN), Some(u32::MAX - 36));
    assert_eq!(data_len_field(MAX_DATA_LEN + 1), None);
    assert_eq!(data_len_field(usize::MAX), None);
}

#[test]
fn test_header_is_byte_exact() {
    let pcm = samples_to_pcm16(&[0.0, 0.5, -0.5]);
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &pcm);

    let mut expected = Vec::new();
    expected.extend_from_slice(b"RIFF");
    expected.extend_from_slice(&42u32.to_le_bytes());
    expected.extend_from_slice(b"WAVE");
    expected.extend_from_slice(b"fmt ");
    expected.extend_from_slice(&16u32.to_le_bytes());
    expected.extend_from_slice(&1u16.to_le_bytes());
    expected.extend_from_slice(&1u16.to_le_bytes());
    expected.extend_from_slice(&44100u32.to_le_bytes());
    expected.extend_from_slice(&88200u32.to_le_bytes());
    expected.extend_from_slice(&2u16.to_le_bytes());
    expected.extend_from_slice(&16u16.to_le_bytes());
    expected.extend_from_slice(b"data");
    expected.extend_from_slice(&6u32.to_le_bytes());
    expected.extend_from_slice(&[0x00, 0x00, 0x00, 0x40, 0x00, 0xC0]);

    assert_eq!(wav, expected);
}

#[test]
fn test_encode_header_matches_file_prefix() {
    let pcm = samples_to_pcm16(&[0.1; 8]);
    let format = WavFormat::mono(22050);
    let wav = write_wav_to_vec(&format, &pcm);
    assert_eq!(&wav[..HEADER_LEN], &encode_header(&format, 16)[..]);
    assert_eq!(u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]), 44100);
}

#[test]
fn test_write_wav_to_writer_matches_vec() {
    let pcm = samples_to_pcm16(&[0.1, -0.2, 0.3]);
    let format = WavFormat::mono(44100);

    let mut streamed = Vec::new();
    write_wav(&mut streamed, &format, &pcm).unwrap();

    assert_eq!(streamed, write_wav_to_vec(&format, &pcm));
}

#[test]
fn test_wav_length_is_header_plus_two_per_sample() {
    let writer = WavWriter::mono(44100);
    for n in [0, 1, 2, 441, 44100] {
        let wav = writer.write_mono(&vec![0.25; n]);
        assert_eq!(wav.len(), HEADER_LEN + 2 * n);
    }
}

#[test]
fn test_empty_buffer_header() {
    let wav = WavWriter::mono(44100).write_mono(&[]);
    assert_eq!(wav.len(), HEADER_LEN);
    assert_eq!(u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]), 36);
    assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 0);
}

// =========================================================================
// Reader tests
// =========================================================================

#[test]
fn test_parse_header_round_trip() {
    let wav = WavWriter::mono(44100).write_mono(&vec![0.0; 4410]);
    let info = parse_header(&wav).unwrap();
    assert_eq!(info.sample_rate, 44100);
    assert_eq!(info.channels, 1);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.num_samples, 4410);
    assert!((info.duration_seconds() - 0.1).abs() < 1e-12);
}

#[test]
fn test_extract_pcm_data() {
    let samples = vec![0.5; 100];
    let wav = WavWriter::mono(44100).write_mono(&samples);
    let pcm = extract_pcm_data(&wav).unwrap();
    assert_eq!(pcm, samples_to_pcm16(&samples).as_slice());
}

#[test]
fn test_parse_header_rejects_truncated() {
    let wav = WavWriter::mono(44100).write_mono(&vec![0.0; 10]);
    assert!(parse_header(&wav[..20]).is_err());
    assert!(parse_header(&wav[..wav.len() - 2]).is_err());
}

#[test]
fn test_parse_header_rejects_bad_tags() {
    let mut wav = WavWriter::mono(44100).write_mono(&vec![0.0; 10]);
    wav[8..12].copy_from_slice(b"AVI ");
    let err = parse_header(&wav).unwrap_err();
    assert!(err.to_string().contains("WAVE"));
}

#[test]
fn test_parse_header_rejects_stereo() {
    let mut wav = WavWriter::mono(44100).write_mono(&vec![0.0; 10]);
    wav[22..24].copy_from_slice(&2u16.to_le_bytes());
    assert!(parse_header(&wav).is_err());
}
