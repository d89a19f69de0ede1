//! End-to-end generation contract tests.

use hushwave_backend_audio::wav::{extract_pcm_data, parse_header};
use hushwave_backend_audio::{generate, verify_proof};
use hushwave_spec::{Category, Recipe, SynthesisRequest};
use serde_json::json;

fn scenario_recipe() -> Recipe {
    Recipe::from_value(
        &json!({
            "sub_hz": 45,
            "noise_cutoff_hz": 1800,
            "pulse_density": 0.15,
            "intro_sec": 2,
            "outro_sec": 3,
            "target_db": -16
        }),
        Category::Focus,
    )
}

fn decoded_peak(bytes: &[u8]) -> i16 {
    extract_pcm_data(bytes)
        .unwrap()
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]).saturating_abs())
        .max()
        .unwrap_or(0)
}

#[test]
fn test_sixty_second_scenario_length() {
    let request = SynthesisRequest::new(60.0, scenario_recipe()).with_seed(2024);
    let result = generate(&request);

    assert_eq!(result.wav.num_samples, 2_646_000);
    assert_eq!(result.wav.len(), 5_292_044);

    let info = parse_header(&result.wav.bytes).unwrap();
    assert_eq!(info.num_samples, 2_646_000);
    assert_eq!(info.sample_rate, 44_100);
}

#[test]
fn test_length_formula_across_durations() {
    for duration in [0.25, 1.0, 1.23456, 3.0, 7.5] {
        let request = SynthesisRequest::new(duration, Recipe::default()).with_seed(5);
        let result = generate(&request);
        let expected = (duration * 44_100.0_f64).round() as usize;
        assert_eq!(result.wav.num_samples, expected);
        assert_eq!(result.wav.len(), 44 + 2 * expected);
    }
}

#[test]
fn test_zero_and_negative_durations_still_render() {
    for duration in [0.0, -1.0, -600.0, f64::NAN] {
        let request = SynthesisRequest::new(duration, Recipe::default()).with_seed(3);
        let result = generate(&request);
        assert_eq!(result.wav.len(), 44 + 2 * 44_100);
        assert!(parse_header(&result.wav.bytes).is_ok());
    }
}

#[test]
fn test_peak_ceiling_for_all_categories() {
    // 0.99 * 32767 rounds to 32439
    for category in Category::ALL {
        for seed in [1, 2] {
            let request = SynthesisRequest::new(8.0, category.default_recipe()).with_seed(seed);
            let result = generate(&request);
            assert!(decoded_peak(&result.wav.bytes) <= 32439, "{} seed {}", category, seed);
        }
    }
}

#[test]
fn test_peak_ceiling_at_recipe_extremes() {
    let loud = Recipe::from_value(
        &json!({
            "noise_cutoff_hz": 3200, "sub_hz": 70, "pulse_density": 0.2,
            "intro_sec": 1, "outro_sec": 2, "target_db": -14
        }),
        Category::Uplift,
    );
    let quiet = Recipe::from_value(
        &json!({
            "noise_cutoff_hz": 900, "sub_hz": 35, "pulse_density": 0.06,
            "intro_sec": 3, "outro_sec": 4, "target_db": -18
        }),
        Category::Sleep,
    );
    for recipe in [loud, quiet] {
        let result = generate(&SynthesisRequest::new(6.0, recipe).with_seed(77));
        assert!(decoded_peak(&result.wav.bytes) <= 32439);
    }
}

#[test]
fn test_fixed_seed_is_byte_identical() {
    let request = SynthesisRequest::new(4.0, scenario_recipe()).with_seed(123_456);
    let a = generate(&request);
    let b = generate(&request);

    assert_eq!(a.wav.bytes, b.wav.bytes);
    assert_eq!(a.proof.content_hash, b.proof.content_hash);
}

#[test]
fn test_different_seeds_differ() {
    let a = generate(&SynthesisRequest::new(2.0, scenario_recipe()).with_seed(1));
    let b = generate(&SynthesisRequest::new(2.0, scenario_recipe()).with_seed(2));

    assert_ne!(a.wav.bytes, b.wav.bytes);
    assert_ne!(a.proof.content_hash, b.proof.content_hash);
}

#[test]
fn test_proof_matches_artifact() {
    let recipe = scenario_recipe();
    let result = generate(&SynthesisRequest::new(3.0, recipe.clone()).with_seed(8));

    assert_eq!(result.proof.recipe, recipe);
    assert_eq!(result.proof.byte_length, result.wav.len() as u64);
    assert_eq!(result.proof.sample_rate, 44_100);
    assert!(verify_proof(&result.wav.bytes, &result.proof).is_ok());
}

#[test]
fn test_concurrent_renders_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let request = SynthesisRequest::new(1.0, scenario_recipe()).with_seed(99);
                generate(&request).wav.bytes
            })
        })
        .collect();

    let outputs: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_deserialized_out_of_range_request_is_clamped() {
    let request: SynthesisRequest = serde_json::from_value(json!({
        "duration_sec": 2.0,
        "seed": 17,
        "recipe": {
            "preset_name": "Loud",
            "noise_cutoff_hz": 1500.0,
            "sub_hz": 9000.0,
            "pulse_density": 5000.0,
            "intro_sec": 0.0,
            "outro_sec": -1.0,
            "target_db": 12.0
        }
    }))
    .unwrap();
    assert!(!request.recipe.is_valid());

    let result = generate(&request);
    let recipe = &result.proof.recipe;

    assert!(recipe.is_valid());
    assert_eq!(recipe.sub_hz, 70.0);
    assert_eq!(recipe.pulse_density, 0.20);
    assert_eq!(recipe.intro_sec, 1.0);
    assert_eq!(recipe.outro_sec, 2.0);
    assert_eq!(recipe.target_db, -14.0);
    // 0.2 pulses per second over 2 s, nowhere near one per sample
    assert!(result.stats.pulses < 50);

    let clamped = SynthesisRequest::new(2.0, request.recipe.clamped()).with_seed(17);
    assert_eq!(generate(&clamped).wav.bytes, result.wav.bytes);
}
