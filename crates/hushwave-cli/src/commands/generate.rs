//! Generate command implementation
//!
//! Resolves a recipe, enforces the duration budget, renders the track and
//! writes `<slug>-<hash16>.wav` plus `<slug>-<hash16>.proof.json` to the
//! output root.

use anyhow::Result;
use colored::Colorize;
use hushwave_backend_audio::generate;
use hushwave_spec::{Category, Proof, SynthesisRequest};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use super::json_output::{error_codes, print_json, warning_codes, JsonError, JsonWarning};
use crate::config::{resolve_budget, CliConfig};
use crate::provider::{resolve_recipe, ExternalProvider, RecipeProvider, RecipeSource};

/// Options for one `generate` invocation. Unset fields come from the config.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Track category.
    pub category: Option<Category>,
    /// Requested duration in seconds.
    pub duration_sec: Option<f64>,
    /// Recipe file path, or `-` for stdin.
    pub recipe: Option<String>,
    /// Fixed PRNG seed.
    pub seed: Option<u64>,
    /// Output directory.
    pub out_root: Option<PathBuf>,
    /// Budget profile name.
    pub budget: Option<String>,
}

/// Where a generated track landed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTrack {
    /// Category the recipe was resolved for.
    pub category: Category,
    /// Path of the WAV file.
    pub wav_path: String,
    /// Path of the proof file.
    pub proof_path: String,
    /// Seed used for the render.
    pub seed: u64,
    /// Provider that supplied the recipe.
    pub provider: String,
    /// True if the requested recipe could not be used.
    pub fell_back: bool,
    /// Provenance record.
    pub proof: Proof,
}

/// JSON output for the generate command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered during generation
    pub errors: Vec<JsonError>,
    /// Warnings encountered during generation
    pub warnings: Vec<JsonWarning>,
    /// Generated track (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GeneratedTrack>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(track: GeneratedTrack) -> Self {
        let mut warnings = Vec::new();
        if track.fell_back {
            warnings.push(JsonWarning::new(
                warning_codes::PROVIDER_FALLBACK,
                format!("recipe could not be used, fell back to {} default", track.category),
            ));
        }
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(track),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}

/// Run the generate command.
///
/// # Returns
/// Exit code: 0 on success, 1 on budget or I/O failure
pub fn run(options: &GenerateOptions, config: &CliConfig, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(options, config)
    } else {
        run_human(options, config)
    }
}

fn run_human(options: &GenerateOptions, config: &CliConfig) -> Result<ExitCode> {
    let track = execute(options, config).map_err(|e| anyhow::anyhow!(e.message))?;

    if track.fell_back {
        println!(
            "{} recipe could not be used, using {} default",
            "WARNING".yellow().bold(),
            track.category
        );
    }
    println!("{} {}", "Category:".cyan().bold(), track.category);
    println!(
        "{} {} ({})",
        "Recipe:".cyan().bold(),
        track.proof.recipe.preset_name,
        track.provider
    );
    println!(
        "{} {:.2}s, {} bytes",
        "Rendered:".dimmed(),
        track.proof.duration_sec,
        track.proof.byte_length
    );
    println!("{} {}", "Seed:".dimmed(), track.seed);
    println!("{} {}", "WAV:".green().bold(), track.wav_path);
    println!("{} {}", "Proof:".green().bold(), track.proof_path);

    Ok(ExitCode::SUCCESS)
}

fn run_json(options: &GenerateOptions, config: &CliConfig) -> Result<ExitCode> {
    match execute(options, config) {
        Ok(track) => {
            print_json(&GenerateOutput::success(track))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            print_json(&GenerateOutput::failure(vec![error]))?;
            Ok(ExitCode::from(1))
        }
    }
}

/// Resolves, renders and persists one track.
pub fn execute(options: &GenerateOptions, config: &CliConfig) -> Result<GeneratedTrack, JsonError> {
    let category = options.category.unwrap_or(config.default_category);
    let duration_sec = options.duration_sec.unwrap_or(config.default_duration_sec);
    let budget_name = options.budget.as_deref().unwrap_or(&config.budget);
    let out_root = options.out_root.as_deref().unwrap_or(&config.out_root);

    let budget = resolve_budget(budget_name)
        .map_err(|e| JsonError::new(error_codes::UNKNOWN_BUDGET, e.to_string()))?;
    budget
        .check_duration(duration_sec)
        .map_err(|e| JsonError::new(error_codes::BUDGET_EXCEEDED, e.to_string()))?;

    let external = options
        .recipe
        .as_deref()
        .map(|arg| ExternalProvider::new(RecipeSource::from_arg(arg)));
    let resolved = resolve_recipe(
        external.as_ref().map(|p| p as &dyn RecipeProvider),
        category,
    );

    let mut request = SynthesisRequest::new(duration_sec, resolved.recipe);
    if let Some(seed) = options.seed {
        request = request.with_seed(seed);
    }
    let result = generate(&request);

    let stem = format!(
        "{}-{}",
        slugify(&result.proof.recipe.preset_name),
        result.proof.content_hash_short
    );
    let wav_path = out_root.join(format!("{}.wav", stem));
    let proof_path = out_root.join(format!("{}.proof.json", stem));

    let proof_json = result
        .proof
        .to_json_pretty()
        .map_err(|e| JsonError::new(error_codes::GENERATION_ERROR, e.to_string()))?;

    fs::create_dir_all(out_root).map_err(|e| write_error(out_root, e))?;
    fs::write(&wav_path, &result.wav.bytes).map_err(|e| write_error(&wav_path, e))?;
    fs::write(&proof_path, proof_json).map_err(|e| write_error(&proof_path, e))?;

    info!(wav = %wav_path.display(), proof = %proof_path.display(), "wrote track");

    Ok(GeneratedTrack {
        category,
        wav_path: wav_path.display().to_string(),
        proof_path: proof_path.display().to_string(),
        seed: result.seed,
        provider: resolved.provider.to_string(),
        fell_back: resolved.fell_back,
        proof: result.proof,
    })
}

fn write_error(path: &Path, e: std::io::Error) -> JsonError {
    JsonError::new(
        error_codes::FILE_WRITE,
        format!("Failed to write {}: {}", path.display(), e),
    )
    .with_file(path.display().to_string())
}

/// Turns a preset name into a lowercase file-name stem.
///
/// Runs of non-alphanumeric characters become a single `-`. Names with no
/// usable characters become `track`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "track".to_string()
    } else {
        slug
    }
}
