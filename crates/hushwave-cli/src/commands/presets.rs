//! Presets command implementation
//!
//! Lists the built-in category defaults.

use anyhow::Result;
use colored::Colorize;
use hushwave_spec::{Category, Recipe};
use serde::{Deserialize, Serialize};
use std::process::ExitCode;

use super::json_output::print_json;

/// One row of `presets --json` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetEntry {
    /// Category key.
    pub category: Category,
    /// Human-readable label.
    pub label: String,
    /// Default recipe.
    pub recipe: Recipe,
}

/// Returns one entry per category, in declaration order.
pub fn entries() -> Vec<PresetEntry> {
    Category::ALL
        .iter()
        .map(|category| PresetEntry {
            category: *category,
            label: category.label().to_string(),
            recipe: category.default_recipe(),
        })
        .collect()
}

/// Run the presets command.
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries = entries();
    if json_output {
        print_json(&entries)?;
        return Ok(ExitCode::SUCCESS);
    }

    for entry in &entries {
        let r = &entry.recipe;
        println!(
            "{} {}",
            format!("{:<8}", entry.category.to_string()).cyan().bold(),
            r.preset_name
        );
        println!(
            "         cutoff {:.0} Hz, sub {:.0} Hz, pulses {:.2}/s, fades {:.1}s/{:.1}s, target {:.0} dBFS",
            r.noise_cutoff_hz, r.sub_hz, r.pulse_density, r.intro_sec, r.outro_sec, r.target_db
        );
    }
    Ok(ExitCode::SUCCESS)
}
