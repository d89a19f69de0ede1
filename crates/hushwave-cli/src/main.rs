//! Hushwave CLI - procedural ambient background tracks
//!
//! Renders recipe-driven ambient WAV files with a provenance proof, and
//! verifies files against their proofs.

use clap::{ArgAction, Parser, Subcommand};
use hushwave_spec::Category;
use std::path::PathBuf;
use std::process::ExitCode;

use hushwave_cli::commands;
use hushwave_cli::commands::generate::GenerateOptions;
use hushwave_cli::config::CliConfig;
use hushwave_cli::logging;

/// Hushwave - Procedural Ambient Track Generator
#[derive(Parser)]
#[command(name = "hushwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a config file (default: <config dir>/hushwave/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a track and write it with its proof
    Generate {
        /// Track category (focus, calm, sleep, uplift)
        #[arg(short, long)]
        category: Option<Category>,

        /// Duration in seconds
        #[arg(short, long)]
        duration: Option<f64>,

        /// Recipe JSON file, or '-' for stdin (falls back to the category default)
        #[arg(short, long)]
        recipe: Option<String>,

        /// Fixed PRNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory
        #[arg(short, long)]
        out_root: Option<PathBuf>,

        /// Budget profile (default, strict, extended)
        #[arg(long)]
        budget: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the built-in category presets
    Presets {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a recipe document and print the result
    Recipe {
        /// Recipe JSON file, or '-' for stdin
        #[arg(short, long)]
        recipe: String,

        /// Category whose defaults fill missing fields
        #[arg(short, long, default_value = "focus")]
        category: Category,
    },

    /// Check a WAV file against its proof
    Verify {
        /// Path to the WAV file
        #[arg(short, long)]
        wav: String,

        /// Path to the proof file
        #[arg(short, long)]
        proof: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Generate {
            category,
            duration,
            recipe,
            seed,
            out_root,
            budget,
            json,
        } => {
            let options = GenerateOptions {
                category,
                duration_sec: duration,
                recipe,
                seed,
                out_root,
                budget,
            };
            commands::generate::run(&options, &config, json)
        }
        Commands::Presets { json } => commands::presets::run(json),
        Commands::Recipe { recipe, category } => commands::recipe::run(&recipe, category),
        Commands::Verify { wav, proof, json } => commands::verify::run(&wav, &proof, json),
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
