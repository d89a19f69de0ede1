//! Verify command implementation
//!
//! Checks a WAV file against its proof: canonical header, byte length, and
//! content hash.

use anyhow::Result;
use colored::Colorize;
use hushwave_backend_audio::wav::parse_header;
use hushwave_backend_audio::verify_proof;
use hushwave_spec::Proof;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, print_json, JsonError};

/// Details of a successful verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResult {
    /// Hash recorded in the proof (and matched by the file).
    pub content_hash: String,
    /// File length in bytes.
    pub byte_length: u64,
    /// Samples in the file.
    pub num_samples: usize,
    /// Sample rate from the header.
    pub sample_rate: u32,
    /// Preset recorded in the proof.
    pub preset_name: String,
}

/// JSON output for the verify command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOutput {
    /// Whether the file matches the proof
    pub success: bool,
    /// Errors encountered during verification
    pub errors: Vec<JsonError>,
    /// Verification result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<VerifyResult>,
}

impl VerifyOutput {
    /// Creates a successful verify output.
    pub fn success(result: VerifyResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed verify output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Run the verify command.
///
/// # Arguments
/// * `wav_path` - Path to the WAV file
/// * `proof_path` - Path to the *.proof.json file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the file matches, 1 otherwise
pub fn run(wav_path: &str, proof_path: &str, json_output: bool) -> Result<ExitCode> {
    let outcome = check(Path::new(wav_path), Path::new(proof_path));

    if json_output {
        let output = match outcome {
            Ok(result) => VerifyOutput::success(result),
            Err(error) => VerifyOutput::failure(vec![error]),
        };
        print_json(&output)?;
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    println!("{} {}", "WAV:".cyan().bold(), wav_path);
    println!("{} {}", "Proof:".cyan().bold(), proof_path);

    match outcome {
        Ok(result) => {
            println!("{} {}", "Preset:".dimmed(), result.preset_name);
            println!(
                "{} {} samples @ {} Hz, {} bytes",
                "Audio:".dimmed(),
                result.num_samples,
                result.sample_rate,
                result.byte_length
            );
            println!("{} {}", "Hash:".dimmed(), result.content_hash);
            println!("\n{} File matches proof", "PASSED".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            println!("\n{} [{}] {}", "FAILED".red().bold(), error.code, error.message);
            Ok(ExitCode::from(1))
        }
    }
}

/// Loads both files and checks one against the other.
pub fn check(wav_path: &Path, proof_path: &Path) -> Result<VerifyResult, JsonError> {
    let wav = fs::read(wav_path).map_err(|e| read_error(wav_path, e))?;
    let proof_text = fs::read_to_string(proof_path).map_err(|e| read_error(proof_path, e))?;

    let proof = Proof::from_json(&proof_text).map_err(|e| {
        JsonError::new(error_codes::JSON_PARSE, e.to_string())
            .with_file(proof_path.display().to_string())
    })?;

    let info = parse_header(&wav).map_err(|e| {
        JsonError::new(e.code(), e.to_string()).with_file(wav_path.display().to_string())
    })?;

    verify_proof(&wav, &proof).map_err(|e| {
        JsonError::new(e.code(), e.to_string()).with_file(wav_path.display().to_string())
    })?;

    tracing::debug!(hash = %proof.content_hash_short, "verified");

    Ok(VerifyResult {
        content_hash: proof.content_hash,
        byte_length: wav.len() as u64,
        num_samples: info.num_samples,
        sample_rate: info.sample_rate,
        preset_name: proof.recipe.preset_name,
    })
}

fn read_error(path: &Path, e: std::io::Error) -> JsonError {
    JsonError::new(
        error_codes::FILE_READ,
        format!("Failed to read {}: {}", path.display(), e),
    )
    .with_file(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hushwave_backend_audio::generate;
    use hushwave_spec::{Category, SynthesisRequest};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn write_pair(dir: &Path) -> (PathBuf, PathBuf) {
        let request = SynthesisRequest::new(1.0, Category::Focus.default_recipe()).with_seed(3);
        let result = generate(&request);
        let wav = dir.join("t.wav");
        let proof = dir.join("t.proof.json");
        fs::write(&wav, &result.wav.bytes).unwrap();
        fs::write(&proof, result.proof.to_json_pretty().unwrap()).unwrap();
        (wav, proof)
    }

    #[test]
    fn test_check_passes_for_matching_pair() {
        let dir = tempfile::tempdir().unwrap();
        let (wav, proof) = write_pair(dir.path());
        let result = check(&wav, &proof).unwrap();
        assert_eq!(result.num_samples, 44_100);
        assert_eq!(result.sample_rate, 44_100);
        assert_eq!(result.byte_length, 44 + 2 * 44_100);
    }

    #[test]
    fn test_check_detects_tampering() {
        let dir = tempfile::tempdir().unwrap();
        let (wav, proof) = write_pair(dir.path());

        let mut bytes = fs::read(&wav).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        fs::write(&wav, &bytes).unwrap();

        let err = check(&wav, &proof).unwrap_err();
        assert_eq!(err.code, "AUDIO_002");
    }

    #[test]
    fn test_check_detects_truncation() {
        let dir = tempfile::tempdir().unwrap();
        let (wav, proof) = write_pair(dir.path());

        let bytes = fs::read(&wav).unwrap();
        fs::write(&wav, &bytes[..bytes.len() - 2]).unwrap();

        // the header's data size no longer matches, so parsing fails first
        let err = check(&wav, &proof).unwrap_err();
        assert_eq!(err.code, "AUDIO_001");
    }

    #[test]
    fn test_check_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = check(&dir.path().join("a.wav"), &dir.path().join("a.proof.json")).unwrap_err();
        assert_eq!(err.code, error_codes::FILE_READ);
    }

    #[test]
    fn test_check_reports_bad_proof_json() {
        let dir = tempfile::tempdir().unwrap();
        let (wav, proof) = write_pair(dir.path());
        fs::write(&proof, "{ not json").unwrap();
        let err = check(&wav, &proof).unwrap_err();
        assert_eq!(err.code, error_codes::JSON_PARSE);
    }
}
