//! Error types for recipe and proof processing.

use thiserror::Error;

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while reading or writing spec documents.
///
/// Recipe validation itself is total and has no error variant; these cover
/// the surrounding JSON plumbing only.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A document parsed but did not have the expected shape.
    #[error("invalid {document}: {message}")]
    InvalidDocument {
        /// Which document kind was being read.
        document: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

impl SpecError {
    /// Creates an invalid document error.
    pub fn invalid_document(document: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            document,
            message: message.into(),
        }
    }
}
