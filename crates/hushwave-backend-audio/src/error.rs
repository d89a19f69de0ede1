//! Error types for audio backend.
//!
//! Rendering is total and never produces these; they come from reading
//! artifacts back and checking them against a proof.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur when inspecting or verifying artifacts.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The byte buffer is not a canonical mono PCM16 WAV file.
    #[error("malformed WAV: {message}")]
    MalformedWav {
        /// What was wrong with the header.
        message: String,
    },

    /// Content hash does not match the proof.
    #[error("content hash mismatch: proof has {expected}, file hashes to {actual}")]
    HashMismatch {
        /// Hash recorded in the proof.
        expected: String,
        /// Hash of the bytes on hand.
        actual: String,
    },

    /// Byte length does not match the proof.
    #[error("length mismatch: proof has {expected} bytes, file has {actual}")]
    LengthMismatch {
        /// Length recorded in the proof.
        expected: u64,
        /// Length of the bytes on hand.
        actual: u64,
    },
}

impl AudioError {
    /// Creates a malformed WAV error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedWav {
            message: message.into(),
        }
    }

    /// Returns a stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::MalformedWav { .. } => "AUDIO_001",
            AudioError::HashMismatch { .. } => "AUDIO_002",
            AudioError::LengthMismatch { .. } => "AUDIO_003",
        }
    }
}
