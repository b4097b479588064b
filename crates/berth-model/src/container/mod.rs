//! Container-engine configuration carried inside a [`crate::CreateInstanceRequest`].
//!
//! Field names follow the engine's JSON (`Image`, `Env`, `Labels`, `EndpointsConfig`,
//! `IPAddress`, ...). Only the fields the adapter reads or writes are typed; everything else is
//! kept verbatim so that caller settings survive the round trip to the engine.
mod config;
pub use config::{ContainerConfig, HostConfig};

mod network;
pub use network::{EndpointSettings, NetworkingConfig};
