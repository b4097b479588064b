use std::sync::Arc;

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, proto::MetricFamily};

use berth_core::{MetricsBackend, OperationOutcome};

/// Prometheus metrics backend.
///
/// Label cardinality is bounded: `operation` is one of the provider operations, `outcome` is
/// `success`/`failure` and `error_kind` comes from `ProviderError::kind`.
#[derive(Clone)]
pub struct PrometheusMetrics {
    operations: CounterVec,
    durations: HistogramVec,
    errors: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a backend registering its collectors in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let operations = CounterVec::new(
            Opts::new("operations_total", "Provider operations by outcome").namespace("berth"),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(operations.clone()))?;

        let durations = HistogramVec::new(
            HistogramOpts::new(
                "operation_duration_seconds",
                "Provider operation duration in seconds",
            )
            .namespace("berth")
            .buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 15.0, 60.0, 300.0]),
            &["operation"],
        )?;
        registry.register(Box::new(durations.clone()))?;

        let errors = CounterVec::new(
            Opts::new("errors_total", "Failed provider operations by error kind")
                .namespace("berth"),
            &["operation", "error_kind"],
        )?;
        registry.register(Box::new(errors.clone()))?;

        Ok(Self {
            operations,
            durations,
            errors,
            registry,
        })
    }

    /// Create a backend with a private registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_operation(&self, operation: &str, outcome: OperationOutcome, duration_ms: u64) {
        self.operations
            .with_label_values(&[operation, outcome.as_label()])
            .inc();
        self.durations
            .with_label_values(&[operation])
            .observe(duration_ms as f64 / 1000.0);
    }

    fn record_error(&self, operation: &str, error_kind: &str) {
        self.errors
            .with_label_values(&[operation, error_kind])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family<'a>(families: &'a [MetricFamily], name: &str) -> &'a MetricFamily {
        families
            .iter()
            .find(|f| f.name() == name)
            .unwrap_or_else(|| panic!("metric {name} not found"))
    }

    #[test]
    fn operations_are_counted_by_outcome() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_operation("provision", OperationOutcome::Success, 1200);
        metrics.record_operation("provision", OperationOutcome::Failure, 5);
        metrics.record_operation("destroy", OperationOutcome::Success, 40);

        let families = metrics.gather();
        assert_eq!(
            family(&families, "berth_operations_total")
                .get_metric()
                .len(),
            3
        );
        assert_eq!(
            family(&families, "berth_operation_duration_seconds")
                .get_metric()
                .len(),
            2
        );
    }

    #[test]
    fn errors_are_counted_by_kind() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_error("provision", "missing_input");
        metrics.record_error("provision", "missing_input");
        metrics.record_error("describe", "runtime");

        let families = metrics.gather();
        assert_eq!(
            family(&families, "berth_errors_total").get_metric().len(),
            2
        );
    }

    #[test]
    fn shares_custom_registry() {
        let registry = Arc::new(Registry::new());
        let metrics = PrometheusMetrics::new_with_registry(registry.clone()).unwrap();

        metrics.record_error("destroy", "runtime");
        assert!(!registry.gather().is_empty());
    }
}
