use serde::{Deserialize, Serialize};

use crate::{ContainerConfig, HostConfig, NetworkingConfig, Tags, de::nullable};

/// Container provisioning request decoded from [`crate::InstanceSpec::properties`].
///
/// Lives for a single provision call: the provider decodes it, folds the reconciled tags into
/// `config.labels`, optionally pins an endpoint address and hands the result to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInstanceRequest {
    /// Provider-level tags. Win over caller-level tags on collision.
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Tags::is_empty"
    )]
    pub tags: Tags,

    /// Container settings. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ContainerConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_config: Option<HostConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networking_config: Option<NetworkingConfig>,

    /// Network whose endpoint receives the logical address.
    ///
    /// Empty means [`crate::DEFAULT_NETWORK`].
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "String::is_empty"
    )]
    pub network_name: String,
}

impl CreateInstanceRequest {
    /// Sample request advertised to operators as a starting point.
    pub fn example() -> Self {
        Self {
            tags: [("tag1", "value1"), ("tag2", "value2")]
                .into_iter()
                .collect(),
            config: Some(ContainerConfig {
                image: "docker/dind".into(),
                env: vec!["var1=value1".into(), "var2=value2".into()],
                ..Default::default()
            }),
            host_config: Some(HostConfig::default()),
            networking_config: Some(NetworkingConfig::default()),
            network_name: String::new(),
        }
    }
}
