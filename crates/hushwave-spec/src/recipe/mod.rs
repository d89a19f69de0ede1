//! Recipe types and the recipe validator.
//!
//! A recipe is the small parameter set that drives one synthesis run. Recipes
//! come from untrusted providers, so the only way to build one from loose
//! input is [`Recipe::from_value`], which coerces and clamps every field.

mod bounds;
mod category;
mod coerce;


pub use bounds::Bound;
pub use category::{Category, ParseCategoryError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use coerce::{coerce_name, coerce_number};

/// Maximum length of a preset name, in characters.
pub const MAX_PRESET_NAME_CHARS: usize = 64;

/// A validated synthesis recipe.
///
/// Every numeric field lies in its closed interval (see the associated
/// `Bound` constants). Instances produced by [`Recipe::from_value`] or
/// [`Recipe::clamped`] always satisfy this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name of the preset.
    pub preset_name: String,
    /// Cutoff of the noise bed low-pass filter, in Hz.
    pub noise_cutoff_hz: f64,
    /// Base frequency of the sub-bass drone, in Hz.
    pub sub_hz: f64,
    /// Expected pulse events per second.
    pub pulse_density: f64,
    /// Fade-in length in seconds.
    pub intro_sec: f64,
    /// Fade-out length in seconds.
    pub outro_sec: f64,
    /// Target RMS loudness in dBFS.
    pub target_db: f64,
}

impl Recipe {
    /// Allowed range for `noise_cutoff_hz`.
    pub const NOISE_CUTOFF_HZ: Bound = Bound::new(900.0, 3200.0);
    /// Allowed range for `sub_hz`.
    pub const SUB_HZ: Bound = Bound::new(35.0, 70.0);
    /// Allowed range for `pulse_density`.
    pub const PULSE_DENSITY: Bound = Bound::new(0.06, 0.20);
    /// Allowed range for `intro_sec`.
    pub const INTRO_SEC: Bound = Bound::new(1.0, 3.0);
    /// Allowed range for `outro_sec`.
    pub const OUTRO_SEC: Bound = Bound::new(2.0, 4.0);
    /// Allowed range for `target_db`.
    pub const TARGET_DB: Bound = Bound::new(-18.0, -14.0);

    /// Builds a valid recipe from arbitrary JSON.
    ///
    /// Each field accepts a JSON number or a numeric string, looked up by its
    /// snake_case key and then its camelCase alias. Missing, malformed, or
    /// non-finite values take the category default; everything is then
    /// clamped into range. Non-object input yields the category default.
    ///
    /// # Arguments
    /// * `value` - Untrusted recipe JSON
    /// * `category` - Category whose defaults fill the gaps
    pub fn from_value(value: &Value, category: Category) -> Self {
        let defaults = category.default_recipe();
        let Some(fields) = value.as_object() else {
            return defaults;
        };

        let lookup = |key: &str, alias: &str| fields.get(key).or_else(|| fields.get(alias));
        let number = |key: &str, alias: &str, bound: Bound, fallback: f64| {
            let raw = lookup(key, alias).and_then(coerce_number).unwrap_or(fallback);
            bound.clamp(raw)
        };

        Self {
            preset_name: lookup("preset_name", "presetName")
                .and_then(coerce_name)
                .unwrap_or(defaults.preset_name),
            noise_cutoff_hz: number(
                "noise_cutoff_hz",
                "noiseCutoffHz",
                Self::NOISE_CUTOFF_HZ,
                defaults.noise_cutoff_hz,
            ),
            sub_hz: number("sub_hz", "subHz", Self::SUB_HZ, defaults.sub_hz),
            pulse_density: number(
                "pulse_density",
                "pulseDensity",
                Self::PULSE_DENSITY,
                defaults.pulse_density,
            ),
            intro_sec: number("intro_sec", "introSec", Self::INTRO_SEC, defaults.intro_sec),
            outro_sec: number("outro_sec", "outroSec", Self::OUTRO_SEC, defaults.outro_sec),
            target_db: number("target_db", "targetDb", Self::TARGET_DB, defaults.target_db),
        }
    }

    /// Parses recipe JSON text and validates it.
    ///
    /// Unparsable text is treated like any other malformed input and yields
    /// the category default.
    pub fn from_json_lossy(json: &str, category: Category) -> Self {
        let value = serde_json::from_str(json).unwrap_or(Value::Null);
        Self::from_value(&value, category)
    }

    /// Returns a copy with every field forced back into range.
    ///
    /// Non-finite fields take the [`Category::default`] value. Applying this
    /// to an already valid recipe returns it unchanged.
    pub fn clamped(&self) -> Self {
        let fallback = Category::default().default_recipe();
        let fix = |bound: Bound, value: f64, default: f64| {
            bound.clamp(if value.is_finite() { value } else { default })
        };

        Self {
            preset_name: coerce_name(&Value::String(self.preset_name.clone()))
                .unwrap_or(fallback.preset_name),
            noise_cutoff_hz: fix(
                Self::NOISE_CUTOFF_HZ,
                self.noise_cutoff_hz,
                fallback.noise_cutoff_hz,
            ),
            sub_hz: fix(Self::SUB_HZ, self.sub_hz, fallback.sub_hz),
            pulse_density: fix(Self::PULSE_DENSITY, self.pulse_density, fallback.pulse_density),
            intro_sec: fix(Self::INTRO_SEC, self.intro_sec, fallback.intro_sec),
            outro_sec: fix(Self::OUTRO_SEC, self.outro_sec, fallback.outro_sec),
            target_db: fix(Self::TARGET_DB, self.target_db, fallback.target_db),
        }
    }

    /// Returns true if every field lies within its documented bounds.
    pub fn is_valid(&self) -> bool {
        !self.preset_name.trim().is_empty()
            && self.preset_name.chars().count() <= MAX_PRESET_NAME_CHARS
            && Self::NOISE_CUTOFF_HZ.contains(self.noise_cutoff_hz)
            && Self::SUB_HZ.contains(self.sub_hz)
            && Self::PULSE_DENSITY.contains(self.pulse_density)
            && Self::INTRO_SEC.contains(self.intro_sec)
            && Self::OUTRO_SEC.contains(self.outro_sec)
            && Self::TARGET_DB.contains(self.target_db)
    }

    /// Converts the recipe to a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "preset_name": self.preset_name,
            "noise_cutoff_hz": self.noise_cutoff_hz,
            "sub_hz": self.sub_hz,
            "pulse_density": self.pulse_density,
            "intro_sec": self.intro_sec,
            "outro_sec": self.outro_sec,
            "target_db": self.target_db,
        })
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Category::default().default_recipe()
    }
}
