use thiserror::Error;

use berth_model::ModelError;

/// Failure reported by a container runtime collaborator.
///
/// The provider forwards these unchanged; see [`ProviderError::Runtime`].
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime api error: {0}")]
    Api(String),

    #[error("no such container: {0}")]
    NotFound(String),

    #[error("image pull stream failed: {0}")]
    Stream(#[from] std::io::Error),
}

/// Errors returned by [`crate::InstanceProvider`] operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    #[error("invalid input: {0}")]
    InvalidInput(#[source] ModelError),

    #[error("unexpected runtime response: {0}")]
    ProtocolViolation(String),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ProviderError {
    /// Low-cardinality error class for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::MissingInput(_) => "missing_input",
            ProviderError::InvalidInput(_) => "invalid_input",
            ProviderError::ProtocolViolation(_) => "protocol_violation",
            ProviderError::Runtime(_) => "runtime",
            ProviderError::NotImplemented(_) => "not_implemented",
            ProviderError::Internal(_) => "internal",
        }
    }
}
