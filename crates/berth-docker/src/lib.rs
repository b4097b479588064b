//! Docker Engine backend for `berth-core`.
//!
//! [`DockerRuntime`] implements [`berth_core::ContainerRuntime`] on top of the `bollard` client.
//! Model types are converted to engine types at this boundary and nowhere else.
mod config;
pub use config::{DockerConfig, DockerEndpoint};

mod convert;

mod error;
pub use error::DockerError;

mod image;
pub use image::ImageReference;

mod runtime;
pub use runtime::DockerRuntime;

/// Runtime name reported in logs and metrics.
pub const RUNTIME_DOCKER: &str = "docker";
