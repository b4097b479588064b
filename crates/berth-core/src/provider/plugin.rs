use std::{fmt, sync::Arc, time::Instant};

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use berth_model::{
    CreateInstanceRequest, InstanceDescription, InstanceId, InstanceSpec, Properties, Tags,
    VendorInfo,
};

use crate::{
    error::{ProviderError, RuntimeError},
    metrics::{MetricsHandle, OperationOutcome, noop_metrics},
    provider::{
        InstanceProvider, build_create_request, decode_request, describe_container,
        describe_group_request,
    },
    runtime::{ContainerRuntime, RemoveOptions},
};

const VENDOR_NAME: &str = "berth-instance-docker";
const VENDOR_URL: &str = "https://github.com/berth-rs/berth";

/// Instance provider backed by containers on a single engine host.
///
/// Holds only read-only state: the runtime handle, the namespace tags that scope every
/// operation, and a metrics handle. Calls never share mutable state, so one plugin can serve
/// concurrent callers.
pub struct ContainerInstancePlugin {
    runtime: Arc<dyn ContainerRuntime>,
    namespace_tags: Tags,
    metrics: MetricsHandle,
}

impl ContainerInstancePlugin {
    /// Create a plugin over `runtime`, scoped to `namespace_tags`.
    pub fn new(runtime: Arc<dyn ContainerRuntime>, namespace_tags: Tags) -> Self {
        Self {
            runtime,
            namespace_tags,
            metrics: noop_metrics(),
        }
    }

    /// Replace the metrics backend and return updated plugin.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn namespace_tags(&self) -> &Tags {
        &self.namespace_tags
    }

    /// Vendor info of this provider; needs no runtime.
    pub fn vendor() -> VendorInfo {
        VendorInfo {
            name: VENDOR_NAME.into(),
            version: env!("CARGO_PKG_VERSION").into(),
            url: VENDOR_URL.into(),
        }
    }

    /// Pull `image` and drain its progress stream to the end.
    ///
    /// The stream is owned by this scope and dropped on every exit path.
    async fn pull_image(&self, image: &str) -> Result<(), RuntimeError> {
        let mut progress = self.runtime.pull_image(image).await?;
        let read = tokio::io::copy(&mut progress, &mut tokio::io::sink()).await?;
        debug!(image, bytes = read, "image pull complete");
        Ok(())
    }

    fn observe<T>(
        &self,
        operation: &'static str,
        started: Instant,
        res: &Result<T, ProviderError>,
    ) {
        let elapsed = started.elapsed().as_millis() as u64;
        match res {
            Ok(_) => {
                self.metrics
                    .record_operation(operation, OperationOutcome::Success, elapsed)
            }
            Err(e) => {
                warn!(operation, kind = e.kind(), error = %e, "operation failed");
                self.metrics
                    .record_operation(operation, OperationOutcome::Failure, elapsed);
                self.metrics.record_error(operation, e.kind());
            }
        }
    }

    async fn do_provision(&self, spec: &InstanceSpec) -> Result<InstanceId, ProviderError> {
        let create = build_create_request(spec)?;
        let image = create.config.image.clone();

        self.pull_image(&image).await?;

        let created = self.runtime.create_container(create).await?;
        for warning in &created.warnings {
            warn!(image = %image, warning = %warning, "engine warning on create");
        }
        if created.id.is_empty() {
            return Err(ProviderError::ProtocolViolation(
                "create returned an empty container id".into(),
            ));
        }

        info!(id = %created.id, image = %image, "instance provisioned");
        Ok(InstanceId::new(created.id))
    }

    async fn do_describe(&self, tags: &Tags) -> Result<Vec<InstanceDescription>, ProviderError> {
        let filter = describe_group_request(&self.namespace_tags, tags);
        let containers = self.runtime.list_containers(&filter).await?;
        debug!(count = containers.len(), "listed group containers");

        Ok(containers.into_iter().map(describe_container).collect())
    }
}

impl fmt::Debug for ContainerInstancePlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerInstancePlugin")
            .field("runtime", &self.runtime.name())
            .field("namespace_tags", &self.namespace_tags)
            .field("metrics", &"<handle>")
            .finish()
    }
}

#[async_trait]
impl InstanceProvider for ContainerInstancePlugin {
    fn vendor_info(&self) -> VendorInfo {
        Self::vendor()
    }

    fn example_properties(&self) -> Result<Properties, ProviderError> {
        Properties::encode(&CreateInstanceRequest::example())
            .map_err(|e| ProviderError::Internal(e.to_string()))
    }

    async fn validate(&self, properties: &Properties) -> Result<(), ProviderError> {
        let request = decode_request(Some(properties))?;
        let config = request
            .config
            .ok_or(ProviderError::MissingInput("config must be set"))?;
        if config.image.is_empty() {
            return Err(ProviderError::MissingInput("no image specified"));
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self, spec), fields(logical_id = ?spec.logical_id))]
    async fn provision(&self, spec: InstanceSpec) -> Result<InstanceId, ProviderError> {
        let started = Instant::now();
        let res = self.do_provision(&spec).await;
        self.observe("provision", started, &res);
        res
    }

    #[instrument(level = "debug", skip(self, id), fields(id = %id))]
    async fn destroy(&self, id: &InstanceId) -> Result<(), ProviderError> {
        let started = Instant::now();
        let res = self
            .runtime
            .remove_container(id.as_str(), RemoveOptions::destroy())
            .await
            .map_err(ProviderError::from);
        self.observe("destroy", started, &res);
        if res.is_ok() {
            info!("instance destroyed");
        }
        res
    }

    async fn label(&self, _id: &InstanceId, _labels: Tags) -> Result<(), ProviderError> {
        Err(ProviderError::NotImplemented(
            "container label updates are not supported",
        ))
    }

    #[instrument(level = "debug", skip(self, tags), fields(group = ?tags))]
    async fn describe_instances(
        &self,
        tags: &Tags,
    ) -> Result<Vec<InstanceDescription>, ProviderError> {
        let started = Instant::now();
        let res = self.do_describe(tags).await;
        self.observe("describe", started, &res);
        res
    }
}
