//! Metrics collection abstraction for provider operations.
//!
//! Backends (prometheus, statsd, ...) implement [`MetricsBackend`] and are injected into
//! [`crate::ContainerInstancePlugin`] via `with_metrics`.
mod backend;
pub use backend::{MetricsBackend, MetricsHandle, OperationOutcome};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
