use serde::{Deserialize, Serialize};

/// Identifies a provider implementation to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VendorInfo {
    pub name: String,
    pub version: String,
    #[serde(rename = "URL")]
    pub url: String,
}
