//! Pipeline run descriptor
//!
//! The declarative record submitted to the control plane to execute a
//! pipeline. Fields the descriptor layer does not interpret are kept in
//! `extra` maps and written back unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::meta::ObjectMeta;

/// A pipeline run descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRun {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: PipelineRunSpec,

    #[serde(default, skip_serializing_if = "PipelineRunStatus::is_empty")]
    pub status: PipelineRunStatus,
}

/// Desired state of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunSpec {
    /// Declared parameters in template order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,

    #[serde(default, skip_serializing_if = "TaskRunTemplate::is_empty")]
    pub task_run_template: TaskRunTemplate,

    /// Pipeline spec, timeouts, workspaces and anything else the compiler wrote
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Template applied to every task run of the pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunTemplate {
    /// Execution identity
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_account_name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskRunTemplate {
    pub fn is_empty(&self) -> bool {
        self.service_account_name.is_empty() && self.extra.is_empty()
    }
}

/// A named run parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub value: ParamValue,
}

impl Param {
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::String(value.into()),
        }
    }
}

/// Parameter value in one of the shapes the engine accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Array(Vec<String>),
    Object(BTreeMap<String, String>),
}

impl ParamValue {
    /// String view of the value; empty for array and object values
    pub fn as_str(&self) -> &str {
        match self {
            ParamValue::String(value) => value,
            ParamValue::Array(_) | ParamValue::Object(_) => "",
        }
    }
}

impl Default for ParamValue {
    fn default() -> Self {
        ParamValue::String(String::new())
    }
}

/// Observed state of a run, authored by the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunStatus {
    /// Most significant condition first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// Present only once the run has finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,

    /// Task runs and custom runs spawned by this run
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_references: Vec<ChildReference>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PipelineRunStatus {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
            && self.start_time.is_none()
            && self.completion_time.is_none()
            && self.child_references.is_empty()
            && self.extra.is_empty()
    }
}

/// A status condition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type", default)]
    pub condition_type: String,

    /// "True", "False" or "Unknown"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reference to a child node of the run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildReference {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pipeline_task_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
