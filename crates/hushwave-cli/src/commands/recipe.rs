//! Recipe command implementation
//!
//! Runs a recipe document through the validator and prints the result, so
//! provider output can be checked without rendering.

use anyhow::Result;
use colored::Colorize;
use hushwave_spec::Category;
use std::process::ExitCode;

use crate::provider::{resolve_recipe, ExternalProvider, RecipeSource};

/// Run the recipe command.
///
/// # Arguments
/// * `recipe` - Recipe file path, or `-` for stdin
/// * `category` - Category whose defaults fill missing fields
///
/// # Returns
/// Exit code: 0 if the document was used, 1 if it fell back to the default
pub fn run(recipe: &str, category: Category) -> Result<ExitCode> {
    let provider = ExternalProvider::new(RecipeSource::from_arg(recipe));
    let resolved = resolve_recipe(Some(&provider), category);

    println!("{}", serde_json::to_string_pretty(&resolved.recipe)?);

    if resolved.fell_back {
        eprintln!(
            "{} recipe could not be used, showing {} default",
            "WARNING".yellow().bold(),
            category
        );
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
