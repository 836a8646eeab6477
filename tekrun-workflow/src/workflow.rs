//! The descriptor wrapper

use tekrun_core::domain::pipeline_run::PipelineRun;
use tekrun_core::keys::LABEL_RUN_ID;

/// Wraps a run descriptor with the operations of the descriptor layer
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    pub(crate) run: PipelineRun,
}

impl Workflow {
    /// Binds a wrapper to a descriptor
    pub fn new(run: PipelineRun) -> Self {
        Self { run }
    }

    /// The bound descriptor
    pub fn get(&self) -> &PipelineRun {
        &self.run
    }

    /// Unbinds and returns the descriptor
    pub fn into_inner(self) -> PipelineRun {
        self.run
    }

    pub fn name(&self) -> &str {
        &self.run.metadata.name
    }

    /// Canonical JSON text of the descriptor
    ///
    /// Returns an empty string (and logs) if the descriptor cannot be serialized.
    pub fn to_string_for_store(&self) -> String {
        match serde_json::to_string(&self.run) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Could not marshal the workflow {}: {}", self.name(), e);
                String::new()
            }
        }
    }

    /// Sets a label, allocating the label map if needed
    pub fn set_label(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.run
            .metadata
            .labels_mut()
            .insert(key.into(), value.into());
    }

    /// Sets an annotation, allocating the annotation map if needed
    pub fn set_annotation(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.run
            .metadata
            .annotations_mut()
            .insert(key.into(), value.into());
    }

    /// Records the run identifier assigned by the pipeline API
    pub fn set_run_id_label(&mut self, id: impl Into<String>) {
        self.set_label(LABEL_RUN_ID, id);
    }
}

impl From<PipelineRun> for Workflow {
    fn from(run: PipelineRun) -> Self {
        Self::new(run)
    }
}
