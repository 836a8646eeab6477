//! Error types for descriptor manipulation

use thiserror::Error;

/// Result type alias for workflow operations
pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Errors that can occur when manipulating a run descriptor
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Substituted text no longer deserializes into a descriptor
    #[error("Failed to {operation}: substituted manifest does not deserialize. Workflow: {manifest}")]
    TemplateCorruption {
        /// The substitution that was attempted
        operation: &'static str,
        /// The serialized descriptor before substitution
        manifest: String,
        #[source]
        source: serde_json::Error,
    },

    /// Descriptor could not be serialized
    #[error("Failed to serialize workflow: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WorkflowError {
    /// Check if this error is a template corruption error
    pub fn is_template_corruption(&self) -> bool {
        matches!(self, Self::TemplateCorruption { .. })
    }
}
