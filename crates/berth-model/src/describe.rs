use serde::{Deserialize, Serialize};

use crate::{InstanceId, LogicalId, Tags, de::nullable};

/// Read projection of one live instance, rebuilt on every describe call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceDescription {
    #[serde(rename = "ID")]
    pub id: InstanceId,

    /// Address taken from one of the instance's network endpoints.
    #[serde(rename = "LogicalID")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_id: Option<LogicalId>,

    /// The engine's label set, verbatim.
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Tags,
}

/// Group selector for a describe call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRequest {
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Tags,
}
