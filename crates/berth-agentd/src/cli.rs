use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};

use berth_observe::{LoggerFormat, LoggerLevel};

/// Command line of the `berth-agentd` daemon.
#[derive(Debug, Parser)]
#[command(
    name = "berth-agentd",
    version,
    about = "Container-backed instance provider for group orchestrators."
)]
pub struct Cli {
    /// Load configuration from PATH instead of using built-in defaults.
    #[arg(global = true, short, long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address the HTTP API binds to.
    #[arg(global = true, long, value_name = "ADDR")]
    pub listen: Option<SocketAddr>,

    /// Log filter directive, e.g. `info` or `berth_core=debug,info`.
    #[arg(global = true, long, value_name = "FILTER")]
    pub log_level: Option<LoggerLevel>,

    /// Log output format: text, json or journald.
    #[arg(global = true, long, value_name = "FORMAT")]
    pub log_format: Option<LoggerFormat>,

    /// Docker Engine endpoint: local, unix://PATH, tcp://HOST:PORT or http://HOST:PORT.
    #[arg(global = true, long, value_name = "URI")]
    pub docker_endpoint: Option<String>,

    /// Namespace tag stamped on every instance; repeatable.
    #[arg(
        global = true,
        long = "namespace",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value
    )]
    pub namespace: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Serve the instance API (default).
    Serve,
    /// Print the example instance properties as JSON.
    Example,
    /// Print vendor information as JSON.
    Info,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
