use serde::{Deserialize, Serialize};

use crate::error::DockerError;

/// Connection settings for the Docker Engine API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerConfig {
    /// `local` (platform default socket), `unix:///path/to/docker.sock`,
    /// `tcp://host:port` or `http://host:port`.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            endpoint: "local".into(),
            timeout_secs: 120,
        }
    }
}

/// Parsed form of [`DockerConfig::endpoint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockerEndpoint {
    Local,
    Unix(String),
    Http(String),
}

impl DockerConfig {
    pub fn endpoint(&self) -> Result<DockerEndpoint, DockerError> {
        let raw = self.endpoint.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("local") {
            return Ok(DockerEndpoint::Local);
        }
        if let Some(path) = raw.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(DockerError::InvalidEndpoint(raw.to_string()));
            }
            return Ok(DockerEndpoint::Unix(path.to_string()));
        }
        if let Some(addr) = raw.strip_prefix("tcp://") {
            if addr.is_empty() {
                return Err(DockerError::InvalidEndpoint(raw.to_string()));
            }
            return Ok(DockerEndpoint::Http(format!("http://{addr}")));
        }
        if raw.starts_with("http://") {
            return Ok(DockerEndpoint::Http(raw.to_string()));
        }
        Err(DockerError::InvalidEndpoint(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(raw: &str) -> Result<DockerEndpoint, DockerError> {
        DockerConfig {
            endpoint: raw.into(),
            ..Default::default()
        }
        .endpoint()
    }

    #[test]
    fn default_is_local() {
        assert_eq!(
            DockerConfig::default().endpoint().unwrap(),
            DockerEndpoint::Local
        );
        assert_eq!(endpoint("").unwrap(), DockerEndpoint::Local);
    }

    #[test]
    fn parses_unix_and_tcp() {
        assert_eq!(
            endpoint("unix:///var/run/docker.sock").unwrap(),
            DockerEndpoint::Unix("/var/run/docker.sock".into())
        );
        assert_eq!(
            endpoint("tcp://10.0.0.1:2375").unwrap(),
            DockerEndpoint::Http("http://10.0.0.1:2375".into())
        );
        assert_eq!(
            endpoint("http://localhost:2375").unwrap(),
            DockerEndpoint::Http("http://localhost:2375".into())
        );
    }

    #[test]
    fn rejects_unknown_schemes() {
        for bad in ["ssh://host", "unix://", "tcp://", "docker.sock"] {
            assert!(
                matches!(endpoint(bad), Err(DockerError::InvalidEndpoint(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let cfg: DockerConfig = serde_json::from_str(r#"{"endpoint": "tcp://h:1"}"#).unwrap();
        assert_eq!(cfg.timeout_secs, 120);
    }
}
