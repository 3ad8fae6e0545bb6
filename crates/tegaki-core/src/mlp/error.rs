//! Error types for model loading and classification

use std::io;

/// Errors surfaced while obtaining or using the digit model
///
/// All variants collapse to a single "model unavailable" state in the UI;
/// the payloads exist for developer diagnostics.
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    /// Blob byte length is not a whole number of f32 values
    #[error("truncated weight blob: {len} bytes is not a multiple of 4")]
    TruncatedBlob { len: usize },

    /// Blob decoded to the wrong number of weights
    #[error("invalid model length: expected {expected} weights, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Classification requested before a valid model was loaded
    #[error("no model loaded")]
    NotReady,

    /// Byte transport failure
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;
