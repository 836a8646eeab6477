//! Error types for the core crate

use thiserror::Error;

/// Result type alias for label operations
pub type Result<T> = std::result::Result<T, LabelError>;

/// Errors that can occur when decoding label values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    /// Label value is not a label-safe non-negative integer
    #[error("Failed to parse label value {value:?}: {reason}")]
    Parse {
        /// The raw label value
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl LabelError {
    /// Create a parse error for a label value
    pub fn parse(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
