//! Tests for soft clipping functions.

use super::*;

#[test]
fn test_soft_clip_zero() {
    for drive in [0.1, 0.5, 1.0, SOFT_CLIP_DRIVE, 4.0, 20.0] {
        assert_eq!(soft_clip(0.0, drive), 0.0);
    }
}

#[test]
fn test_soft_clip_exact_formula() {
    let x = 0.3;
    let expected = (0.3_f64 * 1.3).tanh() / 1.3_f64.tanh();
    assert_eq!(soft_clip(x, SOFT_CLIP_DRIVE), expected);
}

#[test]
fn test_soft_clip_unit_endpoints() {
    assert!((soft_clip(1.0, SOFT_CLIP_DRIVE) - 1.0).abs() < 1e-15);
    assert!((soft_clip(-1.0, SOFT_CLIP_DRIVE) + 1.0).abs() < 1e-15);
}

#[test]
fn test_soft_clip_inside_unit_range() {
    for k in -999..=999 {
        let x = k as f64 / 1000.0;
        assert!(soft_clip(x, SOFT_CLIP_DRIVE).abs() < 1.0, "x = {}", x);
    }
}

#[test]
fn test_soft_clip_bounded_for_any_finite_input() {
    let ceiling = 1.0 / SOFT_CLIP_DRIVE.tanh();
    for x in [2.0, 10.0, 1e6, f64::MAX, -2.0, -1e6, f64::MIN] {
        let y = soft_clip(x, SOFT_CLIP_DRIVE);
        assert!(y.is_finite());
        assert!(y.abs() <= ceiling);
    }
}

#[test]
fn test_soft_clip_is_odd() {
    for x in [0.01, 0.1, 0.34, 0.7, 0.95] {
        let pos = soft_clip(x, SOFT_CLIP_DRIVE);
        let neg = soft_clip(-x, SOFT_CLIP_DRIVE);
        assert_eq!(pos, -neg);
    }
}

#[test]
fn test_soft_clip_compresses() {
    // Mid-range input is boosted slightly, large input compressed.
    let small = soft_clip(0.1, SOFT_CLIP_DRIVE);
    let large = soft_clip(0.9, SOFT_CLIP_DRIVE);
    assert!(small > 0.1);
    assert!(large / 0.9 < small / 0.1);
}
