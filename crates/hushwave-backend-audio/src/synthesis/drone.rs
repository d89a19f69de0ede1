//! Sub-bass drone with slow pitch drift.

use crate::oscillator::{drift, sine};

/// Output level of the drone.
pub const DRONE_LEVEL: f64 = 0.10;

/// Sine drone whose frequency wanders with [`drift`].
///
/// The phase is computed as `2π · f · drift(t) · t` directly from time, so
/// the drone is stateless.
#[derive(Debug, Clone, Copy)]
pub struct SubDrone {
    base_hz: f64,
}

impl SubDrone {
    /// Creates a drone at `base_hz`.
    pub fn new(base_hz: f64) -> Self {
        Self { base_hz }
    }

    /// Returns the drone sample at time `t` seconds.
    #[inline]
    pub fn sample(&self, t: f64) -> f64 {
        sine(self.base_hz * drift(t), t) * DRONE_LEVEL
    }
}
