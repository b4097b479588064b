use std::sync::Arc;

/// How a provider operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOutcome {
    Success,
    Failure,
}

impl OperationOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            OperationOutcome::Success => "success",
            OperationOutcome::Failure => "failure",
        }
    }
}

/// Backend metrics collection interface.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record a finished provider operation.
    ///
    /// # Arguments
    /// - `operation`: `provision`, `destroy`, `describe`, ...
    /// - `outcome`: whether it succeeded
    /// - `duration_ms`: wall time in milliseconds
    fn record_operation(&self, operation: &str, outcome: OperationOutcome, duration_ms: u64);

    /// Record the class of a failed operation (see [`crate::ProviderError::kind`]).
    fn record_error(&self, operation: &str, error_kind: &str);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
