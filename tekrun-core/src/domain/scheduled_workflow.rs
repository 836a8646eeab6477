//! Scheduled workflow reference
//!
//! The scheduling entity that periodically creates runs. Only its identity is
//! needed here; trigger evaluation belongs to the scheduling controller.

use super::meta::GroupVersionKind;

pub const SCHEDULED_WORKFLOW_GROUP: &str = "kubeflow.org";
pub const SCHEDULED_WORKFLOW_VERSION: &str = "v1beta1";
pub const SCHEDULED_WORKFLOW_KIND: &str = "ScheduledWorkflow";

/// Group/version/kind of the scheduled workflow resource
pub fn scheduled_workflow_gvk() -> GroupVersionKind {
    GroupVersionKind::new(
        SCHEDULED_WORKFLOW_GROUP,
        SCHEDULED_WORKFLOW_VERSION,
        SCHEDULED_WORKFLOW_KIND,
    )
}

/// Identity of a scheduled workflow instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledWorkflowRef {
    pub name: String,
    pub uid: String,
}

impl ScheduledWorkflowRef {
    pub fn new(name: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uid: uid.into(),
        }
    }
}
