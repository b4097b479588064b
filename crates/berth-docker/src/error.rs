use thiserror::Error;

use berth_core::RuntimeError;

#[derive(Debug, Error)]
pub enum DockerError {
    #[error("invalid docker endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("docker client error: {0}")]
    Client(#[from] bollard::errors::Error),
}

/// Map a client error to the runtime error the provider forwards.
pub(crate) fn runtime_error(err: bollard::errors::Error) -> RuntimeError {
    match err {
        bollard::errors::Error::DockerResponseServerError {
            status_code: 404,
            message,
        } => RuntimeError::NotFound(message),
        other => RuntimeError::Api(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_responses_map_to_not_found() {
        let err = runtime_error(bollard::errors::Error::DockerResponseServerError {
            status_code: 404,
            message: "No such container: abc".into(),
        });
        assert!(matches!(err, RuntimeError::NotFound(_)));
        assert_eq!(err.to_string(), "no such container: No such container: abc");
    }

    #[test]
    fn other_responses_map_to_api_errors() {
        let err = runtime_error(bollard::errors::Error::DockerResponseServerError {
            status_code: 409,
            message: "conflict".into(),
        });
        assert!(matches!(err, RuntimeError::Api(_)));
    }
}
