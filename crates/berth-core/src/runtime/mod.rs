//! Container runtime collaborator.
//!
//! The provider never talks to an engine directly: it goes through [`ContainerRuntime`], a narrow
//! async interface covering image pull, container create, remove and list. Concrete engines live
//! in their own crates (see `berth-docker`).
mod filter;
pub use filter::{ContainerStatus, LabelSelector, ListFilter};

mod record;
pub use record::{ContainerRecord, CreateContainer, CreatedContainer, RemoveOptions};

#[cfg(test)]
pub(crate) mod fake;

use std::pin::Pin;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::error::RuntimeError;

/// Progress stream returned by an image pull.
///
/// End of stream is the pull's completion signal; an I/O error while reading is a pull failure.
pub type PullStream = Pin<Box<dyn AsyncRead + Send>>;

/// Narrow interface to a single container engine host.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Runtime name used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Start pulling `image` and return its progress stream.
    async fn pull_image(&self, image: &str) -> Result<PullStream, RuntimeError>;

    /// Create (but do not start) a container.
    async fn create_container(
        &self,
        request: CreateContainer,
    ) -> Result<CreatedContainer, RuntimeError>;

    async fn remove_container(&self, id: &str, options: RemoveOptions)
    -> Result<(), RuntimeError>;

    /// List containers matching `filter`, in the engine's order.
    async fn list_containers(
        &self,
        filter: &ListFilter,
    ) -> Result<Vec<ContainerRecord>, RuntimeError>;
}
