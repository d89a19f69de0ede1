//! Hushwave Spec Library
//!
//! This crate provides the data model shared by the hushwave engine and its
//! callers: validated recipes, synthesis requests, duration budgets, and the
//! provenance record that accompanies every rendered track.
//!
//! # Overview
//!
//! A recipe arrives from an untrusted provider (a language-model generator or
//! a static fallback) as loose JSON. [`Recipe::from_value`] turns any such
//! value into a fully valid [`Recipe`]; it never fails.
//!
//! # Example
//!
//! ```
//! use hushwave_spec::{Category, Recipe, SynthesisRequest};
//!
//! let raw = serde_json::json!({
//!     "preset_name": "rainy desk",
//!     "noise_cutoff_hz": "2400",
//!     "sub_hz": 500,
//!     "target_db": null
//! });
//!
//! let recipe = Recipe::from_value(&raw, Category::Focus);
//! assert_eq!(recipe.noise_cutoff_hz, 2400.0);
//! assert_eq!(recipe.sub_hz, 70.0);
//! assert_eq!(recipe.target_db, -16.0);
//!
//! let request = SynthesisRequest::new(60.0, recipe);
//! assert_eq!(request.num_samples(), 60 * 44_100);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types
//! - [`recipe`]: Recipe, categories, and the validator
//! - [`request`]: Per-invocation synthesis request
//! - [`budget`]: Duration policy profiles
//! - [`proof`]: Provenance record types

pub mod budget;
pub mod error;
pub mod proof;
pub mod recipe;
pub mod request;

// Re-export commonly used types at the crate root
pub use budget::{BudgetError, BudgetProfile, DurationBudget};
pub use error::{SpecError, SpecResult};
pub use proof::{Policy, Proof};
pub use recipe::{Bound, Category, ParseCategoryError, Recipe};
pub use request::{SynthesisRequest, MIN_DURATION_SECONDS, SAMPLE_RATE};
