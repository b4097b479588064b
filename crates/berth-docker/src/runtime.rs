use std::{fmt, io};

use async_trait::async_trait;
use bollard::{
    API_DEFAULT_VERSION, Docker,
    container::{CreateContainerOptions, RemoveContainerOptions},
    image::CreateImageOptions,
};
use bytes::Bytes;
use futures_util::StreamExt;
use tokio_util::io::StreamReader;
use tracing::{debug, trace};

use berth_core::{
    ContainerRecord, ContainerRuntime, CreateContainer, CreatedContainer, ListFilter, PullStream,
    RemoveOptions, RuntimeError,
};

use crate::{
    RUNTIME_DOCKER,
    config::{DockerConfig, DockerEndpoint},
    convert::{to_create_config, to_list_options, to_record},
    error::{DockerError, runtime_error},
    image::ImageReference,
};

/// [`ContainerRuntime`] backed by a Docker Engine.
#[derive(Clone)]
pub struct DockerRuntime {
    docker: Docker,
}

impl DockerRuntime {
    /// Build a client for the configured endpoint.
    ///
    /// No request is made; use [`DockerRuntime::ping`] to check reachability.
    pub fn connect(cfg: &DockerConfig) -> Result<Self, DockerError> {
        let docker = match cfg.endpoint()? {
            DockerEndpoint::Local => Docker::connect_with_local_defaults()?,
            DockerEndpoint::Unix(path) => {
                Docker::connect_with_unix(&path, cfg.timeout_secs, API_DEFAULT_VERSION)?
            }
            DockerEndpoint::Http(addr) => {
                Docker::connect_with_http(&addr, cfg.timeout_secs, API_DEFAULT_VERSION)?
            }
        };
        Ok(Self { docker })
    }

    /// Wrap an existing client.
    pub fn from_client(docker: Docker) -> Self {
        Self { docker }
    }

    pub async fn ping(&self) -> Result<(), DockerError> {
        self.docker.ping().await?;
        Ok(())
    }
}

impl fmt::Debug for DockerRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockerRuntime").finish_non_exhaustive()
    }
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    fn name(&self) -> &'static str {
        RUNTIME_DOCKER
    }

    async fn pull_image(&self, image: &str) -> Result<PullStream, RuntimeError> {
        let reference = ImageReference::parse(image);
        debug!(image = %reference, "pulling image");

        let options = CreateImageOptions {
            from_image: reference.repository.clone(),
            tag: reference.pull_tag().to_string(),
            ..Default::default()
        };
        let progress = self
            .docker
            .create_image(Some(options), None, None)
            .map(|item| match item {
                Ok(info) => match info.error {
                    Some(message) => Err(io::Error::other(message)),
                    None => {
                        trace!(status = ?info.status, progress = ?info.progress, "pull progress");
                        serde_json::to_vec(&info)
                            .map(Bytes::from)
                            .map_err(io::Error::other)
                    }
                },
                Err(e) => Err(io::Error::other(e)),
            });

        Ok(Box::pin(StreamReader::new(progress)))
    }

    async fn create_container(
        &self,
        request: CreateContainer,
    ) -> Result<CreatedContainer, RuntimeError> {
        let config = to_create_config(&request)?;
        let options = (!request.name.is_empty()).then(|| CreateContainerOptions {
            name: request.name.clone(),
            platform: None,
        });

        let response = self
            .docker
            .create_container(options, config)
            .await
            .map_err(runtime_error)?;

        Ok(CreatedContainer {
            id: response.id,
            warnings: response.warnings,
        })
    }

    async fn remove_container(
        &self,
        id: &str,
        options: RemoveOptions,
    ) -> Result<(), RuntimeError> {
        let options = RemoveContainerOptions {
            force: options.force,
            v: options.remove_volumes,
            link: options.remove_links,
        };
        self.docker
            .remove_container(id, Some(options))
            .await
            .map_err(runtime_error)
    }

    async fn list_containers(
        &self,
        filter: &ListFilter,
    ) -> Result<Vec<ContainerRecord>, RuntimeError> {
        let summaries = self
            .docker
            .list_containers(Some(to_list_options(filter)))
            .await
            .map_err(runtime_error)?;

        Ok(summaries.into_iter().map(to_record).collect())
    }
}
