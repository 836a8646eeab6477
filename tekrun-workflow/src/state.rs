//! State classification
//!
//! Status fields are authored by the pipeline engine. Everything here degrades
//! to a safe default (empty, zero, false) instead of failing on unexpected shapes.

use chrono::{DateTime, Utc};
use tekrun_core::keys::{ANNOTATION_V2_PIPELINE, LABEL_PERSISTED_FINAL_STATE};

use crate::workflow::Workflow;

/// Condition reasons after which the engine never touches a run again
///
/// This is a closed set mirroring the engine's terminal phases. Reasons not
/// listed here are treated as non-final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalReason {
    Succeeded,
    Failed,
    Completed,
    Cancelled,
    /// Pre-v1 engine spelling of `Cancelled`
    PipelineRunCancelled,
    PipelineRunCouldntCancel,
    PipelineRunTimeout,
    StoppedRunFinally,
    CancelledRunFinally,
    InvalidTaskResultReference,
}

impl TerminalReason {
    pub const ALL: [TerminalReason; 10] = [
        TerminalReason::Succeeded,
        TerminalReason::Failed,
        TerminalReason::Completed,
        TerminalReason::Cancelled,
        TerminalReason::PipelineRunCancelled,
        TerminalReason::PipelineRunCouldntCancel,
        TerminalReason::PipelineRunTimeout,
        TerminalReason::StoppedRunFinally,
        TerminalReason::CancelledRunFinally,
        TerminalReason::InvalidTaskResultReference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalReason::Succeeded => "Succeeded",
            TerminalReason::Failed => "Failed",
            TerminalReason::Completed => "Completed",
            TerminalReason::Cancelled => "Cancelled",
            TerminalReason::PipelineRunCancelled => "PipelineRunCancelled",
            TerminalReason::PipelineRunCouldntCancel => "PipelineRunCouldntCancel",
            TerminalReason::PipelineRunTimeout => "PipelineRunTimeout",
            TerminalReason::StoppedRunFinally => "StoppedRunFinally",
            TerminalReason::CancelledRunFinally => "CancelledRunFinally",
            TerminalReason::InvalidTaskResultReference => "InvalidTaskResultReference",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_reason(reason: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|terminal| terminal.as_str() == reason)
    }
}

impl std::fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Workflow {
    /// Whether the run has a non-zero completion time
    pub fn is_finished(&self) -> bool {
        self.run
            .status
            .completion_time
            .is_some_and(|time| time != DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Completion time in Unix seconds, or 0 if the run has not finished
    pub fn finished_at(&self) -> i64 {
        match self.run.status.completion_time {
            Some(time) if self.is_finished() => time.timestamp(),
            _ => 0,
        }
    }

    /// Reason of the first condition, or empty if there are no conditions
    pub fn condition(&self) -> &str {
        self.run
            .status
            .conditions
            .first()
            .map(|condition| condition.reason.as_str())
            .unwrap_or_default()
    }

    /// Whether the first condition carries a terminal reason
    pub fn is_in_final_state(&self) -> bool {
        TerminalReason::from_reason(self.condition()).is_some()
    }

    /// Whether the final state has been archived; only the label's presence counts
    pub fn persisted_final_state(&self) -> bool {
        self.run
            .metadata
            .label(LABEL_PERSISTED_FINAL_STATE)
            .is_some()
    }

    /// Whether the run was compiled as a v2-compatible pipeline
    pub fn is_v2_compatible(&self) -> bool {
        self.run.metadata.annotation(ANNOTATION_V2_PIPELINE) == Some("true")
    }

    /// Object store key of an artifact produced by `node_id`
    ///
    /// Empty until the run has child nodes. The key is derived, not looked
    /// up: the artifact is not guaranteed to exist.
    pub fn find_object_store_artifact_key_or_empty(
        &self,
        node_id: &str,
        artifact_name: &str,
    ) -> String {
        if self.run.status.child_references.is_empty() {
            return String::new();
        }
        format!(
            "artifacts/{}/{}/{}.tgz",
            self.run.metadata.name, node_id, artifact_name
        )
    }
}
