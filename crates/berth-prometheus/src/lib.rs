//! Prometheus metrics backend for berth provider operations.
//!
//! [`PrometheusMetrics`] implements [`berth_core::MetricsBackend`]; plug it into the plugin with
//! `ContainerInstancePlugin::with_metrics` and expose [`PrometheusMetrics::gather`] over HTTP.
//!
//! ## Metrics
//! - `berth_operations_total{operation, outcome}` - Counter
//! - `berth_operation_duration_seconds{operation}` - Histogram
//! - `berth_errors_total{operation, error_kind}` - Counter
mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
