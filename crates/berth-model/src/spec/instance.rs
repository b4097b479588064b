use serde::{Deserialize, Serialize};

use crate::{LogicalId, Properties, Tags, de::nullable};

/// Provisioning request submitted by the orchestrator.
///
/// `InstanceSpec` says *what* to provision in generic terms:
/// - `properties`: provider-specific payload, decoded by the provider
/// - `tags`: caller-level tags, merged into the instance labels
/// - `logical_id`: optional fixed address the instance must be reachable at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceSpec {
    /// Provider-specific payload. Required by every provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    /// Caller-level tags.
    ///
    /// On key collision the provider-level tags inside `properties` win.
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Tags::is_empty"
    )]
    pub tags: Tags,

    /// Orchestrator-assigned address for this instance.
    #[serde(rename = "LogicalID")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_id: Option<LogicalId>,
}

impl InstanceSpec {
    /// Create a spec carrying the given payload and no tags.
    pub fn new(properties: Properties) -> Self {
        Self {
            properties: Some(properties),
            ..Default::default()
        }
    }

    /// Pin the instance to a logical address.
    pub fn with_logical_id(mut self, id: impl Into<LogicalId>) -> Self {
        self.logical_id = Some(id.into());
        self
    }

    /// Add a caller-level tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::InstanceSpec;

    #[test]
    fn decodes_orchestrator_payload() {
        let spec: InstanceSpec = serde_json::from_value(json!({
            "Properties": {"Config": {"Image": "nginx"}},
            "Tags": {"group": "web"},
            "LogicalID": "10.0.0.5",
        }))
        .unwrap();

        assert!(spec.properties.is_some());
        assert_eq!(spec.tags.get("group"), Some("web"));
        assert_eq!(spec.logical_id.unwrap().as_str(), "10.0.0.5");
    }

    #[test]
    fn null_properties_decode_as_absent() {
        let spec: InstanceSpec =
            serde_json::from_value(json!({"Properties": null, "Tags": null})).unwrap();
        assert!(spec.properties.is_none());
        assert!(spec.tags.is_empty());
        assert!(spec.logical_id.is_none());
    }
}
