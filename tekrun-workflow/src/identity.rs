//! Identity and naming

use tekrun_core::domain::meta::ObjectMeta;
use tekrun_core::domain::pipeline_run::{PipelineRun, PipelineRunStatus};

use crate::workflow::Workflow;

/// Longest generated-name prefix, in characters
const MAX_GENERATE_NAME_CHARS: usize = 200;

impl Workflow {
    /// Derives a submission-ready copy of this descriptor
    ///
    /// The copy keeps kind, API version and spec. Status and identity metadata
    /// are dropped, and the name becomes a generated-name prefix of at most
    /// 200 characters so the copy never collides with the original.
    pub fn spec_only_clone(&self) -> Workflow {
        let prefix = truncate_chars(&self.run.metadata.name, MAX_GENERATE_NAME_CHARS);
        tracing::debug!("Cloning workflow {} with generated name prefix {}", self.name(), prefix);

        Workflow::new(PipelineRun {
            api_version: self.run.api_version.clone(),
            kind: self.run.kind.clone(),
            metadata: ObjectMeta::with_generate_name(prefix),
            spec: self.run.spec.clone(),
            status: PipelineRunStatus::default(),
        })
    }

    /// Sets an explicit name, clearing any generated-name prefix
    pub fn override_name(&mut self, name: impl Into<String>) {
        self.run.metadata.generate_name.clear();
        self.run.metadata.name = name.into();
    }
}

/// First `max` characters of `s`, never splitting a character
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
