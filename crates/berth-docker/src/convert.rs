//! Conversions between `berth` model types and `bollard` engine types.
use std::collections::{BTreeMap, HashMap};

use bollard::{
    container::{Config, ListContainersOptions},
    models::ContainerSummary,
};
use serde_json::Value;

use berth_core::{ContainerRecord, CreateContainer, ListFilter, RuntimeError};
use berth_model::{EndpointSettings, Tags};

/// Build the engine's create body.
///
/// Both sides speak the engine's JSON, so the body is assembled as JSON and decoded once;
/// fields the model does not type (`Cmd`, `ExposedPorts`, host options, ...) come through as given.
pub(crate) fn to_create_config(request: &CreateContainer) -> Result<Config<String>, RuntimeError> {
    let mut body = serde_json::to_value(&request.config).map_err(invalid_config)?;
    let Value::Object(fields) = &mut body else {
        return Err(RuntimeError::Api(
            "invalid container config: not an object".into(),
        ));
    };

    if let Some(host) = request.host_config.as_ref().filter(|h| !h.is_empty()) {
        fields.insert("HostConfig".into(), host.0.clone());
    }
    if let Some(networking) = &request.networking_config {
        let networking = serde_json::to_value(networking).map_err(invalid_config)?;
        fields.insert("NetworkingConfig".into(), networking);
    }

    serde_json::from_value(body).map_err(invalid_config)
}

fn invalid_config(err: serde_json::Error) -> RuntimeError {
    RuntimeError::Api(format!("invalid container config: {err}"))
}

/// List every container (not only running ones) matching `filter`.
pub(crate) fn to_list_options(filter: &ListFilter) -> ListContainersOptions<String> {
    let filters: HashMap<String, Vec<String>> = filter.to_query().into_iter().collect();
    ListContainersOptions {
        all: true,
        filters,
        ..Default::default()
    }
}

pub(crate) fn to_record(summary: ContainerSummary) -> ContainerRecord {
    let labels = summary
        .labels
        .map(|labels| labels.into_iter().collect::<Tags>());

    let networks = summary
        .network_settings
        .and_then(|settings| settings.networks)
        .map(|networks| {
            networks
                .into_iter()
                .map(|(name, endpoint)| {
                    let address = endpoint.ip_address.unwrap_or_default();
                    (name, EndpointSettings::with_address(address))
                })
                .collect::<BTreeMap<_, _>>()
        });

    ContainerRecord {
        id: summary.id.unwrap_or_default(),
        labels,
        networks,
    }
}
