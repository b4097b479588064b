mod cli;
mod config;

use std::sync::Arc;

use anyhow::Context;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use berth_api::HttpApi;
use berth_core::ContainerInstancePlugin;
use berth_docker::DockerRuntime;
use berth_model::CreateInstanceRequest;
use berth_observe::init_logger;
use berth_prometheus::{Encoder, PrometheusMetrics, TextEncoder};

use crate::{
    cli::{Cli, Commands},
    config::AgentConfig,
};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = AgentConfig::resolve(&cli)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(cfg).await,
        command => {
            println!("{}", render_offline(command)?);
            Ok(())
        }
    }
}

/// JSON output of the sub-commands that never talk to the engine.
fn render_offline(command: Commands) -> anyhow::Result<String> {
    let json = match command {
        Commands::Example => serde_json::to_string_pretty(&CreateInstanceRequest::example())?,
        Commands::Info => serde_json::to_string_pretty(&ContainerInstancePlugin::vendor())?,
        Commands::Serve => anyhow::bail!("serve has no offline output"),
    };
    Ok(json)
}

async fn serve(cfg: AgentConfig) -> anyhow::Result<()> {
    // 1) logger
    init_logger(&cfg.logger)?;
    info!(listen = %cfg.listen, docker = %cfg.docker.endpoint, "starting berth-agentd");

    // 2) docker
    let docker = DockerRuntime::connect(&cfg.docker).context("docker client")?;
    docker.ping().await.context("docker engine unreachable")?;

    // 3) plugin + metrics
    let metrics = Arc::new(PrometheusMetrics::new()?);
    let plugin = ContainerInstancePlugin::new(Arc::new(docker), cfg.namespace.clone())
        .with_metrics(metrics.clone());
    info!(namespace = ?plugin.namespace_tags(), "plugin ready");

    // 4) http
    let app = HttpApi::new(Arc::new(plugin)).router().merge(
        Router::new()
            .route("/metrics", get(render_metrics))
            .with_state(metrics),
    );

    let listener = TcpListener::bind(cfg.listen)
        .await
        .with_context(|| format!("bind {}", cfg.listen))?;
    info!(addr = %cfg.listen, "http api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("berth-agentd stopped");
    Ok(())
}

async fn render_metrics(
    State(metrics): State<Arc<PrometheusMetrics>>,
) -> Result<String, StatusCode> {
    let mut buf = Vec::new();
    TextEncoder::new()
        .encode(&metrics.gather(), &mut buf)
        .map_err(|e| {
            error!(error = %e, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    String::from_utf8(buf).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn info_renders_without_docker() {
        let out = render_offline(Commands::Info).unwrap();
        let info: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(info["Name"], "berth-instance-docker");
        assert_eq!(info["Version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn example_renders_request_properties() {
        let out = render_offline(Commands::Example).unwrap();
        let example: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(example["Config"]["Image"], "docker/dind");
        assert_eq!(example["Tags"]["tag1"], "value1");
    }

    #[test]
    fn serve_has_no_offline_output() {
        assert!(render_offline(Commands::Serve).is_err());
    }
}
