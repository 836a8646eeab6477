//! Object metadata shared by every control-plane resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Standard object metadata
///
/// `name` and `generate_name` are mutually exclusive in intent: a descriptor
/// ready for submission carries exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Prefix the control plane completes into a unique name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generate_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_references: Option<Vec<OwnerReference>>,

    /// Generation, finalizers, managed fields and anything else the control plane wrote
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ObjectMeta {
    /// Metadata carrying only a generated-name prefix
    pub fn with_generate_name(prefix: impl Into<String>) -> Self {
        Self {
            generate_name: prefix.into(),
            ..Default::default()
        }
    }

    /// Label value for `key`, treating absent labels as empty
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(key))
            .map(String::as_str)
    }

    /// Annotation value for `key`, treating absent annotations as empty
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations
            .as_ref()
            .and_then(|annotations| annotations.get(key))
            .map(String::as_str)
    }

    /// Labels map, allocated on first use
    pub fn labels_mut(&mut self) -> &mut BTreeMap<String, String> {
        self.labels.get_or_insert_with(BTreeMap::new)
    }

    /// Annotations map, allocated on first use
    pub fn annotations_mut(&mut self) -> &mut BTreeMap<String, String> {
        self.annotations.get_or_insert_with(BTreeMap::new)
    }

    /// Owner references in source order, empty when absent
    pub fn owner_references(&self) -> &[OwnerReference] {
        self.owner_references.as_deref().unwrap_or_default()
    }
}

/// Reference to an owning object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub uid: String,

    /// True when the owner is the managing controller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_owner_deletion: Option<bool>,
}

impl OwnerReference {
    /// Build a controller reference to `name`/`uid` of the given kind
    ///
    /// Controller references also block deletion of the owner until the
    /// dependent is gone.
    pub fn controller(
        gvk: &GroupVersionKind,
        name: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            api_version: gvk.api_version(),
            kind: gvk.kind.clone(),
            name: name.into(),
            uid: uid.into(),
            controller: Some(true),
            block_owner_deletion: Some(true),
        }
    }

    /// Whether this reference points at an object of `gvk`
    pub fn is_kind(&self, gvk: &GroupVersionKind) -> bool {
        self.api_version == gvk.api_version() && self.kind == gvk.kind
    }
}

/// Group, version and kind of a resource type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    pub fn new(group: &str, version: &str, kind: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
        }
    }

    /// The `apiVersion` string, `group/version` or just `version` for the core group
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl std::fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, Kind={}", self.api_version(), self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version() {
        let gvk = GroupVersionKind::new("kubeflow.org", "v1beta1", "ScheduledWorkflow");
        assert_eq!(gvk.api_version(), "kubeflow.org/v1beta1");

        let core = GroupVersionKind::new("", "v1", "Pod");
        assert_eq!(core.api_version(), "v1");
    }

    #[test]
    fn test_absent_maps_read_as_empty() {
        let meta = ObjectMeta::default();
        assert_eq!(meta.label("any"), None);
        assert_eq!(meta.annotation("any"), None);
        assert!(meta.owner_references().is_empty());
    }

    #[test]
    fn test_maps_allocated_on_write() {
        let mut meta = ObjectMeta::default();
        meta.labels_mut().insert("a".to_string(), "1".to_string());
        meta.annotations_mut().insert("b".to_string(), "2".to_string());
        assert_eq!(meta.label("a"), Some("1"));
        assert_eq!(meta.annotation("b"), Some("2"));
    }

    #[test]
    fn test_metadata_serialization_omits_empty_fields() {
        let meta = ObjectMeta::with_generate_name("train-");
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json, serde_json::json!({ "generateName": "train-" }));
    }

    #[test]
    fn test_controller_reference() {
        let gvk = GroupVersionKind::new("kubeflow.org", "v1beta1", "ScheduledWorkflow");
        let reference = OwnerReference::controller(&gvk, "nightly", "abc-123");
        assert_eq!(reference.api_version, "kubeflow.org/v1beta1");
        assert_eq!(reference.controller, Some(true));
        assert_eq!(reference.block_owner_deletion, Some(true));
        assert!(reference.is_kind(&gvk));
    }
}
