use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Tags, de::nullable};

/// Container creation settings (`Config` in the engine API).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerConfig {
    /// Image reference, e.g. `nginx:1.27` or `registry:5000/app@sha256:...`.
    #[serde(default, deserialize_with = "nullable")]
    pub image: String,

    /// Environment in `KEY=value` form.
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub env: Vec<String>,

    /// Container labels. Replaced wholesale by the reconciled tag set on provision.
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Tags::is_empty"
    )]
    pub labels: Tags,

    /// Remaining engine fields (`Cmd`, `Entrypoint`, `ExposedPorts`, ...), passed through as given.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContainerConfig {
    /// Create a config for the given image.
    pub fn with_image(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Default::default()
        }
    }
}

/// Host-level runtime options (`HostConfig` in the engine API).
///
/// Opaque to the adapter: resource limits, mounts, restart policy and friends are forwarded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostConfig(pub Value);

impl HostConfig {
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}
