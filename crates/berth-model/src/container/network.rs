use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Network attachments requested at creation time, keyed by network name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkingConfig {
    #[serde(default, deserialize_with = "endpoints")]
    pub endpoints_config: BTreeMap<String, EndpointSettings>,
}

impl NetworkingConfig {
    /// Return this configuration with `network`'s endpoint address set to `address`.
    ///
    /// The endpoint entry is created when missing; its other settings and every other network
    /// entry are left as they were.
    pub fn with_endpoint_address(mut self, network: &str, address: impl Into<String>) -> Self {
        let endpoint = self.endpoints_config.remove(network).unwrap_or_default();
        self.endpoints_config.insert(
            network.to_string(),
            EndpointSettings {
                ip_address: address.into(),
                ..endpoint
            },
        );
        self
    }

    pub fn endpoint(&self, network: &str) -> Option<&EndpointSettings> {
        self.endpoints_config.get(network)
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints_config.is_empty()
    }
}

/// Settings of one network endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointSettings {
    /// Address of the container on this network.
    #[serde(
        rename = "IPAddress",
        default,
        deserialize_with = "crate::de::nullable",
        skip_serializing_if = "String::is_empty"
    )]
    pub ip_address: String,

    /// Remaining engine fields (`Aliases`, `IPAMConfig`, `MacAddress`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EndpointSettings {
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            ip_address: address.into(),
            ..Default::default()
        }
    }
}

/// Accepts `null` for the whole map as well as for individual entries.
fn endpoints<'de, D>(d: D) -> Result<BTreeMap<String, EndpointSettings>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Option<EndpointSettings>>>::deserialize(d)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, settings)| (name, settings.unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn with_endpoint_address_creates_missing_entry() {
        let cfg = NetworkingConfig::default().with_endpoint_address("bridge", "10.0.0.5");
        assert_eq!(cfg.endpoints_config.len(), 1);
        assert_eq!(cfg.endpoint("bridge").unwrap().ip_address, "10.0.0.5");
    }

    #[test]
    fn with_endpoint_address_keeps_other_settings() {
        let mut existing = EndpointSettings::default();
        existing.extra.insert("Aliases".into(), json!(["web"]));

        let mut cfg = NetworkingConfig::default();
        cfg.endpoints_config.insert("backend".into(), existing);
        let frontend = EndpointSettings::with_address("172.20.0.9");
        cfg.endpoints_config.insert("frontend".into(), frontend);

        let cfg = cfg.with_endpoint_address("backend", "172.18.0.2");

        let backend = cfg.endpoint("backend").unwrap();
        assert_eq!(backend.ip_address, "172.18.0.2");
        assert_eq!(backend.extra["Aliases"], json!(["web"]));
        assert_eq!(cfg.endpoint("frontend").unwrap().ip_address, "172.20.0.9");
    }

    #[test]
    fn decodes_engine_json_with_null_entries() {
        let cfg: NetworkingConfig = serde_json::from_value(json!({
            "EndpointsConfig": {
                "bridge": null,
                "overlay": {"IPAddress": "10.1.0.3", "Aliases": ["db"]},
            }
        }))
        .unwrap();

        assert_eq!(cfg.endpoint("bridge"), Some(&EndpointSettings::default()));
        let overlay = cfg.endpoint("overlay").unwrap();
        assert_eq!(overlay.ip_address, "10.1.0.3");
        assert_eq!(overlay.extra["Aliases"], json!(["db"]));

        let none: NetworkingConfig =
            serde_json::from_value(json!({"EndpointsConfig": null})).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn encodes_address_under_engine_name() {
        let cfg = NetworkingConfig::default().with_endpoint_address("bridge", "10.0.0.5");
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["EndpointsConfig"]["bridge"]["IPAddress"], "10.0.0.5");
    }
}
