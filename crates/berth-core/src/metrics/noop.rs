use crate::metrics::backend::{MetricsBackend, OperationOutcome};

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_operation(&self, _: &str, _: OperationOutcome, _: u64) {}

    #[inline(always)]
    fn record_error(&self, _: &str, _: &str) {}
}
