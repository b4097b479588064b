//! Generic instance-management contract and its container implementation.
//!
//! [`InstanceProvider`] is what the orchestration layer programs against. A provider turns
//! generic [`InstanceSpec`]s into concrete units on its backend and reports them back as
//! [`InstanceDescription`]s. [`ContainerInstancePlugin`] is the container-engine variant.
mod describe;
pub use describe::{describe_container, describe_group_request};

mod translate;
pub use translate::{build_create_request, decode_request};

mod plugin;
pub use plugin::ContainerInstancePlugin;

use async_trait::async_trait;

use berth_model::{
    InstanceDescription, InstanceId, InstanceSpec, Properties, Tags, VendorInfo,
};

use crate::error::ProviderError;

/// Instance lifecycle contract exposed to the orchestrator.
#[async_trait]
pub trait InstanceProvider: Send + Sync {
    /// Name, version and home of this provider.
    fn vendor_info(&self) -> VendorInfo;

    /// Sample payload for [`InstanceSpec::properties`].
    fn example_properties(&self) -> Result<Properties, ProviderError>;

    /// Check a payload without side effects.
    async fn validate(&self, properties: &Properties) -> Result<(), ProviderError>;

    /// Create a new instance and return its identity.
    async fn provision(&self, spec: InstanceSpec) -> Result<InstanceId, ProviderError>;

    /// Remove an instance.
    async fn destroy(&self, id: &InstanceId) -> Result<(), ProviderError>;

    /// Replace the labels of an existing instance.
    async fn label(&self, id: &InstanceId, labels: Tags) -> Result<(), ProviderError>;

    /// List live instances carrying all of `tags`.
    async fn describe_instances(
        &self,
        tags: &Tags,
    ) -> Result<Vec<InstanceDescription>, ProviderError>;
}
