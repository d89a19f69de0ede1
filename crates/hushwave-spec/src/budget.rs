//! Duration budget profiles.
//!
//! The engine itself accepts any positive duration. Callers enforce an upper
//! bound through a budget profile before invoking it, which keeps sample
//! counts in the low millions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::request::SAMPLE_RATE;

/// Duration limits for a single render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationBudget {
    /// Maximum track length in seconds.
    pub max_duration_seconds: f64,
}

impl Default for DurationBudget {
    fn default() -> Self {
        Self {
            max_duration_seconds: Self::DEFAULT_MAX_DURATION_SECONDS,
        }
    }
}

impl DurationBudget {
    /// Returns the default maximum duration in seconds.
    pub const DEFAULT_MAX_DURATION_SECONDS: f64 = 180.0;

    /// Returns the maximum number of samples this budget permits.
    pub fn max_samples(&self) -> usize {
        (self.max_duration_seconds * SAMPLE_RATE as f64).round() as usize
    }
}

/// A named budget profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetProfile {
    /// Profile identifier (e.g., "default", "strict").
    pub name: String,
    /// Duration limits.
    pub duration: DurationBudget,
}

impl Default for BudgetProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            duration: DurationBudget::default(),
        }
    }
}

impl BudgetProfile {
    /// Names accepted by [`BudgetProfile::by_name`].
    pub const NAMES: [&'static str; 3] = ["default", "strict", "extended"];

    /// Returns the strict profile for shared or constrained hosts.
    pub fn strict() -> Self {
        Self {
            name: "strict".to_string(),
            duration: DurationBudget {
                max_duration_seconds: 60.0,
            },
        }
    }

    /// Returns the extended profile for offline batch renders.
    pub fn extended() -> Self {
        Self {
            name: "extended".to_string(),
            duration: DurationBudget {
                max_duration_seconds: 600.0,
            },
        }
    }

    /// Looks up a profile by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "strict" => Some(Self::strict()),
            "extended" => Some(Self::extended()),
            _ => None,
        }
    }

    /// Checks a requested duration against this profile.
    ///
    /// Only the upper bound is enforced; non-positive and NaN durations are
    /// left to the engine's minimum-duration substitution.
    pub fn check_duration(&self, duration_sec: f64) -> Result<(), BudgetError> {
        let max = self.duration.max_duration_seconds;
        if duration_sec > max {
            return Err(BudgetError::new(
                &self.name,
                "duration_seconds",
                duration_sec,
                max,
            ));
        }
        Ok(())
    }
}

/// Error type for budget validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetError {
    /// Profile that rejected the request.
    pub profile: String,
    /// Limit name that was exceeded.
    pub limit: String,
    /// The actual value that exceeded the limit.
    pub actual: String,
    /// The maximum allowed value.
    pub maximum: String,
}

impl fmt::Display for BudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} budget exceeded: {} is {}, maximum is {}",
            self.profile, self.limit, self.actual, self.maximum
        )
    }
}

impl std::error::Error for BudgetError {}

impl BudgetError {
    /// Creates a new budget error.
    pub fn new(
        profile: impl Into<String>,
        limit: impl Into<String>,
        actual: impl fmt::Display,
        maximum: impl fmt::Display,
    ) -> Self {
        Self {
            profile: profile.into(),
            limit: limit.into(),
            actual: actual.to_string(),
            maximum: maximum.to_string(),
        }
    }
}
