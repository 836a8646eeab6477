//! Well-known keys
//!
//! Label and annotation keys written by the scheduling controller and read by
//! the status-reporting path, plus the placeholder tokens the pipeline
//! compiler leaves in run templates.

/// Name of the scheduled workflow that created the run
pub const LABEL_SCHEDULED_WORKFLOW_NAME: &str =
    "scheduledworkflows.kubeflow.org/scheduledWorkflowName";

/// Scheduled epoch (seconds) of the run
pub const LABEL_WORKFLOW_EPOCH: &str = "scheduledworkflows.kubeflow.org/workflowEpoch";

/// Sequence index of the run within its schedule
pub const LABEL_WORKFLOW_INDEX: &str = "scheduledworkflows.kubeflow.org/workflowIndex";

/// Marks runs created by a scheduled workflow
pub const LABEL_IS_OWNED_BY_SCHEDULED_WORKFLOW: &str =
    "scheduledworkflows.kubeflow.org/isOwnedByScheduledWorkflow";

/// Present once the final state of the run has been archived
pub const LABEL_PERSISTED_FINAL_STATE: &str = "pipeline/persistedFinalState";

/// Run identifier assigned by the pipeline API
pub const LABEL_RUN_ID: &str = "pipeline/runid";

/// Set to `"true"` on runs compiled in v2-compatible mode
pub const ANNOTATION_V2_PIPELINE: &str = "pipelines.kubeflow.org/v2_pipeline";

/// Legacy run UID placeholder
pub const PLACEHOLDER_WORKFLOW_UID: &str = "{{workflow.uid}}";

/// Context-scoped run UID placeholder
pub const PLACEHOLDER_PIPELINE_RUN_UID: &str = "$(context.pipelineRun.uid)";

/// Placeholder for the name of the run a retry or rerun was derived from
pub const PLACEHOLDER_ORIGINAL_RUN_NAME: &str = "$ORIG_PR_NAME";
