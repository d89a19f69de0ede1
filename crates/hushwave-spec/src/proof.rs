//! Provenance record attached to every rendered track.
//!
//! A proof is derived solely from the encoded WAV bytes and the recipe that
//! produced them. The engine assembles it; callers decide whether and where
//! to store it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::recipe::Recipe;

/// Number of hex characters in the display form of a content hash.
pub const SHORT_HASH_LEN: usize = 16;

/// Usage policy declared for every generated track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Melodic content of the track.
    pub melody: String,
    /// Intended use.
    pub usage: String,
    /// Licensing terms.
    pub license: String,
    /// Human-readable declaration.
    pub statement: String,
}

impl Policy {
    /// Returns the fixed policy carried by every proof.
    pub fn standard() -> Self {
        Self {
            melody: "none".to_string(),
            usage: "background".to_string(),
            license: "royalty-free".to_string(),
            statement: "Procedurally generated ambient texture with no melodic or harmonic \
                        composition, intended for unobtrusive background use."
                .to_string(),
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Provenance metadata for one rendered track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proof {
    /// Engine name and version.
    pub engine_id: String,
    /// Recipe used for the render.
    pub recipe: Recipe,
    /// Rendered duration in seconds.
    pub duration_sec: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Hex BLAKE3-256 digest of the complete WAV bytes.
    pub content_hash: String,
    /// Leading characters of `content_hash` for display.
    pub content_hash_short: String,
    /// Length of the WAV file in bytes.
    pub byte_length: u64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Usage declaration.
    pub policy: Policy,
}

impl Proof {
    /// Parses a proof from JSON.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let proof: Proof = serde_json::from_str(json)?;
        if proof.content_hash.len() != 64
            || !proof.content_hash.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(SpecError::invalid_document(
                "proof",
                "content_hash must be 64 hex characters",
            ));
        }
        Ok(proof)
    }

    /// Serializes the proof as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the display form of a full content hash.
    pub fn short_hash(content_hash: &str) -> String {
        content_hash.chars().take(SHORT_HASH_LEN).collect()
    }
}
