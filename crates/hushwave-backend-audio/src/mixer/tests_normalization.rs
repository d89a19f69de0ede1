//! Tests for loudness normalization.

use super::*;

fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

#[test]
fn test_rms_of_constant() {
    let samples = vec![0.5; 100];
    assert!((rms(&samples) - 0.5).abs() < 1e-9);
}

#[test]
fn test_rms_of_silence_and_empty() {
    assert_eq!(rms(&[0.0; 10]), RMS_EPSILON.sqrt());
    assert_eq!(rms(&[]), RMS_EPSILON.sqrt());
}

#[test]
fn test_normalize_hits_target_rms() {
    // Square-ish wave with RMS 0.05; -16 dB target needs gain ~3.17
    let mut samples: Vec<f64> = (0..1000)
        .map(|i| if i % 2 == 0 { 0.05 } else { -0.05 })
        .collect();
    let stats = normalize_loudness(&mut samples, -16.0);

    let target = 10.0_f64.powf(-16.0 / 20.0);
    assert!((rms(&samples) - target).abs() < 1e-6);
    assert_eq!(stats.peak_scale, 1.0);
    assert!(stats.gain < MAX_GAIN);
}

#[test]
fn test_normalize_gain_is_capped() {
    let mut samples = vec![0.001, -0.001, 0.001, -0.001];
    let stats = normalize_loudness(&mut samples, -14.0);

    assert_eq!(stats.gain, MAX_GAIN);
    assert!((samples[0] - 0.006).abs() < 1e-12);
}

#[test]
fn test_normalize_silence_stays_silent() {
    let mut samples = vec![0.0; 64];
    let stats = normalize_loudness(&mut samples, -16.0);

    assert!(samples.iter().all(|&s| s == 0.0));
    assert_eq!(stats.gain, MAX_GAIN);
}

#[test]
fn test_normalize_enforces_peak_ceiling() {
    // One spike on a quiet bed: RMS gain would push the spike past 0.99.
    let mut samples = vec![0.01; 1000];
    samples[500] = 0.5;
    let stats = normalize_loudness(&mut samples, -14.0);

    assert!(stats.peak_scale < 1.0);
    assert!((peak(&samples) - PEAK_CEILING).abs() < 1e-12);
}

#[test]
fn test_normalize_peak_never_exceeds_ceiling() {
    for target_db in [-18.0, -16.0, -14.0] {
        for level in [0.001, 0.05, 0.3, 0.9, 1.0] {
            let mut samples: Vec<f64> = (0..2000)
                .map(|i| level * ((i as f64) * 0.01).sin())
                .collect();
            normalize_loudness(&mut samples, target_db);
            assert!(peak(&samples) <= PEAK_CEILING + 1e-12);
        }
    }
}

#[test]
fn test_normalize_preserves_relative_amplitudes() {
    let mut samples = vec![0.2, 0.1, 0.05];
    normalize_loudness(&mut samples, -16.0);

    assert!((samples[1] / samples[0] - 0.5).abs() < 1e-12);
    assert!((samples[2] / samples[0] - 0.25).abs() < 1e-12);
}
