//! Content fingerprinting and proof assembly.

use chrono::{DateTime, Utc};
use hushwave_spec::{Policy, Proof, Recipe, SAMPLE_RATE};

use crate::error::{AudioError, AudioResult};

/// Engine identity recorded in every proof.
pub fn engine_id() -> String {
    format!("hushwave-backend-audio v{}", env!("CARGO_PKG_VERSION"))
}

/// Returns the hex BLAKE3-256 digest of `bytes`.
pub fn content_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Assembles a proof for encoded WAV bytes, stamped with the current time.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
/// * `recipe` - Recipe used for the render
/// * `duration_sec` - Rendered duration
pub fn assemble_proof(wav_data: &[u8], recipe: &Recipe, duration_sec: f64) -> Proof {
    assemble_proof_at(wav_data, recipe, duration_sec, Utc::now())
}

/// Assembles a proof with an explicit creation time.
pub fn assemble_proof_at(
    wav_data: &[u8],
    recipe: &Recipe,
    duration_sec: f64,
    created_at: DateTime<Utc>,
) -> Proof {
    let hash = content_hash(wav_data);
    Proof {
        engine_id: engine_id(),
        recipe: recipe.clone(),
        duration_sec,
        sample_rate: SAMPLE_RATE,
        content_hash_short: Proof::short_hash(&hash),
        content_hash: hash,
        byte_length: wav_data.len() as u64,
        created_at,
        policy: Policy::standard(),
    }
}

/// Checks WAV bytes against a proof.
///
/// Compares byte length first, then the content hash.
pub fn verify_proof(wav_data: &[u8], proof: &Proof) -> AudioResult<()> {
    let actual_len = wav_data.len() as u64;
    if actual_len != proof.byte_length {
        return Err(AudioError::LengthMismatch {
            expected: proof.byte_length,
            actual: actual_len,
        });
    }

    let actual = content_hash(wav_data);
    if !actual.eq_ignore_ascii_case(&proof.content_hash) {
        return Err(AudioError::HashMismatch {
            expected: proof.content_hash.clone(),
            actual,
        });
    }

    Ok(())
}
