//! Track categories and their fallback recipes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Recipe;

/// Intended listening context for a track.
///
/// The category selects the defaults used when a provider omits or garbles
/// a recipe field, and the static recipe used when no provider answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Concentration and deep work.
    #[default]
    Focus,
    /// Unwinding, low activity.
    Calm,
    /// Darkest and quietest.
    Sleep,
    /// Brighter, busier texture.
    Uplift,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Focus,
        Category::Calm,
        Category::Sleep,
        Category::Uplift,
    ];

    /// Returns the lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Focus => "focus",
            Category::Calm => "calm",
            Category::Sleep => "sleep",
            Category::Uplift => "uplift",
        }
    }

    /// Returns the static fallback recipe for this category.
    pub fn default_recipe(&self) -> Recipe {
        let (noise_cutoff_hz, sub_hz, pulse_density, intro_sec, outro_sec, target_db) = match self
        {
            Category::Focus => (1800.0, 45.0, 0.12, 2.0, 3.0, -16.0),
            Category::Calm => (1400.0, 40.0, 0.08, 2.5, 3.5, -17.0),
            Category::Sleep => (1000.0, 38.0, 0.06, 3.0, 4.0, -18.0),
            Category::Uplift => (2600.0, 60.0, 0.18, 1.5, 2.5, -14.0),
        };

        Recipe {
            preset_name: self.label().to_string(),
            noise_cutoff_hz,
            sub_hz,
            pulse_density,
            intro_sec,
            outro_sec,
            target_db,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a category label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category '{}' (expected focus, calm, sleep, or uplift)",
            self.input
        )
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == needle)
            .ok_or_else(|| ParseCategoryError {
                input: s.to_string(),
            })
    }
}
