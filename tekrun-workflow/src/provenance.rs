//! Provenance linkage to the scheduled workflow that created a run

use tekrun_core::domain::meta::OwnerReference;
use tekrun_core::domain::scheduled_workflow::{ScheduledWorkflowRef, scheduled_workflow_gvk};
use tekrun_core::keys::{
    LABEL_IS_OWNED_BY_SCHEDULED_WORKFLOW, LABEL_SCHEDULED_WORKFLOW_NAME, LABEL_WORKFLOW_EPOCH,
    LABEL_WORKFLOW_INDEX,
};
use tekrun_core::label::{format_i64_for_label, retrieve_i64_from_label};

use crate::workflow::Workflow;

impl Workflow {
    /// UID of the owning scheduled workflow, or empty if there is none
    ///
    /// Owner references are scanned in order; the first match wins.
    pub fn scheduled_workflow_uid(&self) -> &str {
        self.scheduling_parent()
            .map(|reference| reference.uid.as_str())
            .unwrap_or_default()
    }

    /// Whether the run is owned by a scheduled workflow
    pub fn has_scheduled_workflow_parent(&self) -> bool {
        self.scheduling_parent().is_some()
    }

    fn scheduling_parent(&self) -> Option<&OwnerReference> {
        let gvk = scheduled_workflow_gvk();
        self.run
            .metadata
            .owner_references()
            .iter()
            .find(|reference| reference.is_kind(&gvk) && !reference.uid.is_empty())
    }

    /// Makes `schedule` the sole controlling owner of the run
    pub fn set_owner_reference(&mut self, schedule: &ScheduledWorkflowRef) {
        let gvk = scheduled_workflow_gvk();
        tracing::debug!(
            "Setting controller reference to {} {} ({})",
            gvk,
            schedule.name,
            schedule.uid
        );
        self.run.metadata.owner_references = Some(vec![OwnerReference::controller(
            &gvk,
            &schedule.name,
            &schedule.uid,
        )]);
    }

    /// Writes the labels identifying a scheduled run
    pub fn set_canonical_labels(&mut self, name: &str, scheduled_epoch: i64, index: i64) {
        self.set_label(LABEL_SCHEDULED_WORKFLOW_NAME, name);
        self.set_label(LABEL_WORKFLOW_EPOCH, format_i64_for_label(scheduled_epoch));
        self.set_label(LABEL_WORKFLOW_INDEX, format_i64_for_label(index));
        self.set_label(LABEL_IS_OWNED_BY_SCHEDULED_WORKFLOW, "true");
    }

    /// Scheduled epoch in seconds, or 0 if the label is absent or malformed
    pub fn scheduled_at_in_sec_or_0(&self) -> i64 {
        let Some(value) = self.run.metadata.label(LABEL_WORKFLOW_EPOCH) else {
            return 0;
        };

        match retrieve_i64_from_label(value) {
            Ok(epoch) => epoch,
            Err(e) => {
                tracing::error!(
                    "Could not retrieve scheduled epoch from label key ({}) and label value ({}): {}",
                    LABEL_WORKFLOW_EPOCH,
                    value,
                    e
                );
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use tekrun_core::domain::pipeline_run::PipelineRun;

    fn scheduler_reference(uid: &str) -> OwnerReference {
        OwnerReference {
            api_version: "kubeflow.org/v1beta1".to_string(),
            kind: "ScheduledWorkflow".to_string(),
            name: "nightly".to_string(),
            uid: uid.to_string(),
            ..Default::default()
        }
    }

    fn other_reference(uid: &str) -> OwnerReference {
        OwnerReference {
            api_version: "apps/v1".to_string(),
            kind: "ReplicaSet".to_string(),
            name: "rs".to_string(),
            uid: uid.to_string(),
            ..Default::default()
        }
    }

    fn owned_by(references: Option<Vec<OwnerReference>>) -> Workflow {
        let mut run = PipelineRun::default();
        run.metadata.owner_references = references;
        Workflow::new(run)
    }

    #[test]
    fn test_no_owner_references() {
        let workflow = owned_by(None);
        assert_eq!(workflow.scheduled_workflow_uid(), "");
        assert!(!workflow.has_scheduled_workflow_parent());

        let workflow = owned_by(Some(vec![]));
        assert_eq!(workflow.scheduled_workflow_uid(), "");
        assert!(!workflow.has_scheduled_workflow_parent());
    }

    #[test]
    fn test_only_foreign_owner_references() {
        let workflow = owned_by(Some(vec![other_reference("x")]));
        assert_eq!(workflow.scheduled_workflow_uid(), "");
        assert!(!workflow.has_scheduled_workflow_parent());
    }

    #[test]
    fn test_scheduler_reference_found() {
        let workflow = owned_by(Some(vec![other_reference("x"), scheduler_reference("abc-123")]));
        assert_eq!(workflow.scheduled_workflow_uid(), "abc-123");
        assert!(workflow.has_scheduled_workflow_parent());
    }

    #[test]
    fn test_scheduler_reference_without_uid_is_ignored() {
        let workflow = owned_by(Some(vec![scheduler_reference("")]));
        assert_eq!(workflow.scheduled_workflow_uid(), "");
        assert!(!workflow.has_scheduled_workflow_parent());
    }

    #[test]
    fn test_wrong_version_is_ignored() {
        let mut reference = scheduler_reference("abc");
        reference.api_version = "kubeflow.org/v1alpha1".to_string();
        let workflow = owned_by(Some(vec![reference]));
        assert!(!workflow.has_scheduled_workflow_parent());
    }

    #[test]
    fn test_first_match_wins() {
        let workflow = owned_by(Some(vec![
            scheduler_reference(""),
            scheduler_reference("first"),
            scheduler_reference("second"),
        ]));
        assert_eq!(workflow.scheduled_workflow_uid(), "first");
    }

    #[test]
    fn test_set_owner_reference_replaces_existing() {
        let mut workflow = owned_by(Some(vec![other_reference("x"), scheduler_reference("old")]));

        workflow.set_owner_reference(&ScheduledWorkflowRef::new("nightly", "new-uid"));

        let logs = capture_logs(|| {
            workflow.set_owner_reference(&ScheduledWorkflowRef::new("nightly", "newer-uid"))
        });
        assert!(logs.contains("kubeflow.org/v1beta1, Kind=ScheduledWorkflow nightly (newer-uid)"));

        let references = workflow.get().metadata.owner_references();
        assert_eq!(references.len(), 1);
        assert_eq!(references[0].name, "nightly");
        assert_eq!(references[0].controller, Some(true));
        assert_eq!(workflow.scheduled_workflow_uid(), "newer-uid");
    }

    #[test]
    fn test_canonical_labels() {
        let mut workflow = owned_by(None);
        workflow.set_label("team", "ml");
        workflow.set_canonical_labels("nightly", 1_700_000_000, 7);

        let meta = &workflow.get().metadata;
        assert_eq!(meta.label(LABEL_SCHEDULED_WORKFLOW_NAME), Some("nightly"));
        assert_eq!(meta.label(LABEL_WORKFLOW_EPOCH), Some("1700000000"));
        assert_eq!(meta.label(LABEL_WORKFLOW_INDEX), Some("7"));
        assert_eq!(meta.label(LABEL_IS_OWNED_BY_SCHEDULED_WORKFLOW), Some("true"));
        assert_eq!(meta.label("team"), Some("ml"));
        assert_eq!(workflow.scheduled_at_in_sec_or_0(), 1_700_000_000);
    }

    #[test]
    fn test_scheduled_at_defaults_to_zero() {
        let mut workflow = owned_by(None);
        let logs = capture_logs(|| assert_eq!(workflow.scheduled_at_in_sec_or_0(), 0));
        assert!(logs.is_empty());

        workflow.set_label(LABEL_WORKFLOW_EPOCH, "not-a-number");
        let logs = capture_logs(|| assert_eq!(workflow.scheduled_at_in_sec_or_0(), 0));
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("Could not retrieve scheduled epoch"));
        assert!(logs.contains("not-a-number"));
    }
}
