use std::{fs, net::SocketAddr, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use berth_docker::DockerConfig;
use berth_model::Tags;
use berth_observe::LoggerConfig;

use crate::cli::Cli;

/// Daemon configuration, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    pub listen: SocketAddr,
    pub logger: LoggerConfig,
    pub docker: DockerConfig,
    /// Tags stamped on every instance and required when describing groups.
    pub namespace: Tags,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 24864)),
            logger: LoggerConfig::default(),
            docker: DockerConfig::default(),
            namespace: Tags::new(),
        }
    }
}

impl AgentConfig {
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        toml::from_str(raw).context("failed to parse configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("invalid configuration {}", path.display()))
    }

    /// File values (or defaults) with command line overrides applied.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let cfg = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(cfg.with_overrides(cli))
    }

    fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(listen) = cli.listen {
            self.listen = listen;
        }
        if let Some(level) = &cli.log_level {
            self.logger.level = level.clone();
        }
        if let Some(format) = cli.log_format {
            self.logger.format = format;
        }
        if let Some(endpoint) = &cli.docker_endpoint {
            self.docker.endpoint = endpoint.clone();
        }
        for (key, value) in &cli.namespace {
            self.namespace.insert(key.as_str(), value.as_str());
        }
        self
    }
}
