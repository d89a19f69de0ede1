//! Recipe providers.
//!
//! A provider turns a category into a raw recipe document. Whatever it
//! returns is untrusted and always goes through
//! [`Recipe::from_value`](hushwave_spec::Recipe::from_value) before it
//! reaches the engine. When a provider fails, [`resolve_recipe`] falls back
//! to the category default.

use hushwave_spec::{Category, Recipe};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors a provider can report.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The recipe source could not be read.
    #[error("failed to read recipe from {source_name}: {error}")]
    Read {
        source_name: String,
        #[source]
        error: io::Error,
    },

    /// No JSON object could be found in the provider output.
    #[error("no JSON object found in recipe from {source_name}")]
    NoJsonObject { source_name: String },

    /// The extracted text is not valid JSON.
    #[error("invalid recipe JSON from {source_name}: {error}")]
    Json {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },
}

/// Something that can propose a recipe for a category.
pub trait RecipeProvider {
    /// Short name used in logs and output.
    fn name(&self) -> &'static str;

    /// Returns an unvalidated recipe document for `category`.
    fn provide(&self, category: Category) -> Result<Value, ProviderError>;
}

/// Returns the built-in default recipe for the category.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProvider;

impl RecipeProvider for DefaultProvider {
    fn name(&self) -> &'static str {
        "default"
    }

    fn provide(&self, category: Category) -> Result<Value, ProviderError> {
        Ok(category.default_recipe().to_value())
    }
}

/// Where an [`ExternalProvider`] reads from.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeSource {
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
    /// Text already in memory.
    Text(String),
}

impl RecipeSource {
    /// Parses a `--recipe` argument; `-` means stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            RecipeSource::Stdin
        } else {
            RecipeSource::File(PathBuf::from(arg))
        }
    }

    fn display_name(&self) -> String {
        match self {
            RecipeSource::File(path) => path.display().to_string(),
            RecipeSource::Stdin => "stdin".to_string(),
            RecipeSource::Text(_) => "inline text".to_string(),
        }
    }

    fn read(&self) -> io::Result<String> {
        match self {
            RecipeSource::File(path) => fs::read_to_string(path),
            RecipeSource::Stdin => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            RecipeSource::Text(text) => Ok(text.clone()),
        }
    }
}

/// Reads a recipe produced outside the process, for example by a language
/// model or a hand-edited file.
///
/// The output may wrap the JSON object in prose or code fences; the outermost
/// `{ ... }` span is extracted before parsing.
#[derive(Debug, Clone)]
pub struct ExternalProvider {
    source: RecipeSource,
}

impl ExternalProvider {
    /// Creates a provider for the given source.
    pub fn new(source: RecipeSource) -> Self {
        Self { source }
    }

    /// Returns the source.
    pub fn source(&self) -> &RecipeSource {
        &self.source
    }
}

impl RecipeProvider for ExternalProvider {
    fn name(&self) -> &'static str {
        "external"
    }

    fn provide(&self, _category: Category) -> Result<Value, ProviderError> {
        let source_name = self.source.display_name();
        let text = self.source.read().map_err(|error| ProviderError::Read {
            source_name: source_name.clone(),
            error,
        })?;

        let json = extract_json_object(&text).ok_or_else(|| ProviderError::NoJsonObject {
            source_name: source_name.clone(),
        })?;

        serde_json::from_str(json).map_err(|error| ProviderError::Json { source_name, error })
    }
}

/// Returns the span from the first `{` to the last `}`, if any.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// A validated recipe plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRecipe {
    /// The validated recipe.
    pub recipe: Recipe,
    /// Name of the provider that supplied the document.
    pub provider: &'static str,
    /// True if the preferred provider failed and the default was used.
    pub fell_back: bool,
}

/// Resolves a recipe for `category`.
///
/// Tries `preferred` first when given. Any provider error is logged and the
/// category default is used instead. The chosen document is validated either
/// way, so the result is always in range.
pub fn resolve_recipe(preferred: Option<&dyn RecipeProvider>, category: Category) -> ResolvedRecipe {
    if let Some(provider) = preferred {
        match provider.provide(category) {
            Ok(value) => {
                debug!(provider = provider.name(), %category, "provider returned recipe");
                return ResolvedRecipe {
                    recipe: Recipe::from_value(&value, category),
                    provider: provider.name(),
                    fell_back: false,
                };
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "recipe provider failed, using default");
            }
        }
    }

    let fallback = DefaultProvider;
    let recipe = match fallback.provide(category) {
        Ok(value) => Recipe::from_value(&value, category),
        Err(_) => category.default_recipe(),
    };
    ResolvedRecipe {
        recipe,
        provider: fallback.name(),
        fell_back: preferred.is_some(),
    }
}
