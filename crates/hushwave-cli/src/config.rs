//! CLI configuration file.
//!
//! Looked up in this order: `--config <path>`, then
//! `<config dir>/hushwave/config.json`, then built-in defaults. Command-line
//! flags override whatever the file says.

use anyhow::{Context, Result};
use hushwave_spec::{BudgetProfile, Category};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings shared by all commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Category used when `--category` is not given.
    pub default_category: Category,
    /// Duration used when `--duration` is not given.
    pub default_duration_sec: f64,
    /// Budget profile name.
    pub budget: String,
    /// Directory generated files are written to.
    pub out_root: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_category: Category::default(),
            default_duration_sec: 60.0,
            budget: "default".to_string(),
            out_root: PathBuf::from("."),
        }
    }
}

impl CliConfig {
    /// Returns the per-user config path, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hushwave").join("config.json"))
    }

    /// Parses a config from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CliConfig = serde_json::from_str(json).context("invalid config JSON")?;
        config.budget_profile()?;
        Ok(config)
    }

    /// Loads the config.
    ///
    /// An explicit path must exist; the per-user path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolves the configured budget profile.
    pub fn budget_profile(&self) -> Result<BudgetProfile> {
        resolve_budget(&self.budget)
    }
}

/// Looks up a budget profile by name with a helpful error.
pub fn resolve_budget(name: &str) -> Result<BudgetProfile> {
    BudgetProfile::by_name(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown budget profile: {} (expected {})",
            name,
            BudgetProfile::NAMES.join(", ")
        )
    })
}
