//! Slow modulators and the drifting sine used by the drone layer.
//!
//! All functions take absolute time in seconds, so they carry no state and
//! can be evaluated at any sample index.

use std::f64::consts::TAU;

/// Rate of the drone pitch drift, in Hz.
pub const DRIFT_RATE_HZ: f64 = 0.03;
/// Rate of the amplitude swell, in Hz.
pub const SWELL_RATE_HZ: f64 = 0.015;
/// Rate of the macro level modulation, in Hz.
pub const MACRO_RATE_HZ: f64 = 0.007;

/// Sine of `2π · freq · t`.
#[inline]
pub fn sine(freq: f64, t: f64) -> f64 {
    (TAU * freq * t).sin()
}

/// Pitch drift multiplier, oscillating in `[0.4, 1.2]`.
#[inline]
pub fn drift(t: f64) -> f64 {
    0.8 + 0.4 * sine(DRIFT_RATE_HZ, t)
}

/// Amplitude swell, oscillating in `[0.3, 1.0]`.
#[inline]
pub fn swell(t: f64) -> f64 {
    0.65 + 0.35 * sine(SWELL_RATE_HZ, t)
}

/// Macro level modulation, oscillating in `[0.8, 1.0]`.
#[inline]
pub fn macro_level(t: f64) -> f64 {
    0.9 + 0.1 * sine(MACRO_RATE_HZ, t)
}
