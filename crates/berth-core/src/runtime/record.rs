use std::collections::BTreeMap;

use berth_model::{ContainerConfig, EndpointSettings, HostConfig, NetworkingConfig, Tags};

/// Fully resolved container creation call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateContainer {
    /// Container name; empty lets the engine generate one.
    pub name: String,
    pub config: ContainerConfig,
    pub host_config: Option<HostConfig>,
    pub networking_config: Option<NetworkingConfig>,
}

/// Engine response to a create call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedContainer {
    pub id: String,
    pub warnings: Vec<String>,
}

impl CreatedContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            warnings: Vec::new(),
        }
    }
}

/// Options for container removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Kill the container first if it is running.
    pub force: bool,
    /// Remove anonymous volumes attached to the container.
    pub remove_volumes: bool,
    /// Remove the link instead of the container.
    pub remove_links: bool,
}

impl RemoveOptions {
    /// Forced removal with volumes, links untouched.
    pub const fn destroy() -> Self {
        Self {
            force: true,
            remove_volumes: true,
            remove_links: false,
        }
    }
}

/// One container as reported by a list call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerRecord {
    pub id: String,
    pub labels: Option<Tags>,
    /// Endpoint settings keyed by network name.
    pub networks: Option<BTreeMap<String, EndpointSettings>>,
}
