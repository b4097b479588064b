pub mod error;
pub mod metrics;
pub mod provider;
pub mod runtime;
pub mod tags;

pub use error::{ProviderError, RuntimeError};
pub use metrics::{MetricsBackend, MetricsHandle, NoOpMetrics, OperationOutcome, noop_metrics};
pub use provider::{ContainerInstancePlugin, InstanceProvider};
pub use runtime::{
    ContainerRecord, ContainerRuntime, ContainerStatus, CreateContainer, CreatedContainer,
    LabelSelector, ListFilter, PullStream, RemoveOptions,
};
pub use tags::{TagSet, merge_tags};

pub mod prelude {
    pub use crate::error::{ProviderError, RuntimeError};
    pub use crate::provider::{ContainerInstancePlugin, InstanceProvider};
    pub use crate::runtime::ContainerRuntime;
}
