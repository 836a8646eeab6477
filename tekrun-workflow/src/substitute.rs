//! Template substitution
//!
//! Run-scoped placeholders are replaced by patching the serialized descriptor
//! as text. Strategies sit behind [`SubstitutionStrategy`] so a structured
//! patch can replace the textual one without touching callers.
//!
//! The textual strategy performs no escaping. Substituted values must contain
//! neither placeholder tokens nor characters that are significant inside a
//! JSON string (quotes, backslashes, control characters); run identifiers
//! assigned by the control plane satisfy this.

use tekrun_core::domain::pipeline_run::PipelineRun;
use tekrun_core::keys::{
    PLACEHOLDER_ORIGINAL_RUN_NAME, PLACEHOLDER_PIPELINE_RUN_UID, PLACEHOLDER_WORKFLOW_UID,
};

use crate::error::{Result, WorkflowError};
use crate::workflow::Workflow;

/// Replaces placeholder tokens throughout a descriptor
pub trait SubstitutionStrategy {
    /// Returns a copy of `run` with every `(token, value)` replacement applied
    ///
    /// # Arguments
    /// * `run` - The descriptor to patch
    /// * `operation` - Name of the calling operation, for error reports
    /// * `replacements` - Token/value pairs, applied in order
    fn substitute(
        &self,
        run: &PipelineRun,
        operation: &'static str,
        replacements: &[(&str, &str)],
    ) -> Result<PipelineRun>;
}

/// Serialize, replace every occurrence as literal text, deserialize
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSubstitution;

impl SubstitutionStrategy for TextSubstitution {
    fn substitute(
        &self,
        run: &PipelineRun,
        operation: &'static str,
        replacements: &[(&str, &str)],
    ) -> Result<PipelineRun> {
        let manifest = serde_json::to_string(run)?;

        let patched = replacements
            .iter()
            .fold(manifest.clone(), |text, (token, value)| text.replace(*token, value));

        serde_json::from_str(&patched).map_err(|source| WorkflowError::TemplateCorruption {
            operation,
            manifest,
            source,
        })
    }
}

impl Workflow {
    /// Replaces both run UID placeholders with `id`
    ///
    /// On error the bound descriptor is left unchanged.
    pub fn replace_uid(&mut self, id: &str) -> Result<()> {
        self.replace_uid_with(&TextSubstitution, id)
    }

    pub fn replace_uid_with(&mut self, strategy: &dyn SubstitutionStrategy, id: &str) -> Result<()> {
        self.run = strategy.substitute(
            &self.run,
            "replace run uid",
            &[(PLACEHOLDER_WORKFLOW_UID, id), (PLACEHOLDER_PIPELINE_RUN_UID, id)],
        )?;
        tracing::debug!("Replaced run uid placeholders with {}", id);
        Ok(())
    }

    /// Replaces the original run name placeholder with `name`
    ///
    /// On error the bound descriptor is left unchanged.
    pub fn replace_original_run_name(&mut self, name: &str) -> Result<()> {
        self.replace_original_run_name_with(&TextSubstitution, name)
    }

    pub fn replace_original_run_name_with(
        &mut self,
        strategy: &dyn SubstitutionStrategy,
        name: &str,
    ) -> Result<()> {
        self.run = strategy.substitute(
            &self.run,
            "replace original run name",
            &[(PLACEHOLDER_ORIGINAL_RUN_NAME, name)],
        )?;
        tracing::debug!("Replaced original run name placeholder with {}", name);
        Ok(())
    }
}
