//! Provision request translation: [`InstanceSpec`] to a concrete [`CreateContainer`] call.
use tracing::{debug, trace};

use berth_model::{
    CreateInstanceRequest, DEFAULT_NETWORK, InstanceSpec, LogicalId, NetworkingConfig, Properties,
};

use crate::{error::ProviderError, runtime::CreateContainer, tags::merge_tags};

/// Decode the provider payload of a spec.
///
/// Fails with `MissingInput` when there is no payload and `InvalidInput` when it does not decode.
pub fn decode_request(
    properties: Option<&Properties>,
) -> Result<CreateInstanceRequest, ProviderError> {
    let properties = properties.ok_or(ProviderError::MissingInput("properties must be set"))?;
    properties.decode().map_err(ProviderError::InvalidInput)
}

/// Build the container creation call for `spec`.
///
/// Steps, each failing fast:
/// 1. decode the payload into a [`CreateInstanceRequest`];
/// 2. require `Config`;
/// 3. label the container with the caller tags merged under the request tags;
/// 4. pin the logical address on the target network, if the spec carries one;
/// 5. require a non-empty image.
///
/// No collaborator is called here.
pub fn build_create_request(spec: &InstanceSpec) -> Result<CreateContainer, ProviderError> {
    let request = decode_request(spec.properties.as_ref())?;
    let CreateInstanceRequest {
        tags,
        config,
        host_config,
        networking_config,
        network_name,
    } = request;

    let mut config = config.ok_or(ProviderError::MissingInput("config must be set"))?;

    let labels = merge_tags([&spec.tags, &tags]);
    trace!(keys = ?labels.keys(), "reconciled instance labels");
    config.labels = labels.into_tags();

    let networking_config = match &spec.logical_id {
        Some(logical_id) => Some(pin_logical_address(
            networking_config,
            &network_name,
            logical_id,
        )),
        None => networking_config,
    };

    if config.image.is_empty() {
        return Err(ProviderError::MissingInput("no image specified"));
    }

    Ok(CreateContainer {
        name: String::new(),
        config,
        host_config,
        networking_config,
    })
}

/// Networking config with `logical_id` set as the endpoint address on `network_name`.
///
/// An empty `network_name` targets [`DEFAULT_NETWORK`]. Missing levels are created;
/// other network entries are kept as they are.
fn pin_logical_address(
    networking: Option<NetworkingConfig>,
    network_name: &str,
    logical_id: &LogicalId,
) -> NetworkingConfig {
    let network = if network_name.is_empty() {
        DEFAULT_NETWORK
    } else {
        network_name
    };
    debug!(network, address = %logical_id, "pinning logical address");

    networking
        .unwrap_or_default()
        .with_endpoint_address(network, logical_id.as_str())
}
