//! Prometheus self-telemetry metrics for the exporter process.
//!
//! These metrics describe the exporter itself, never device data, and are
//! registered once into the process-wide registry at startup. Device gauges
//! live in request-scoped registries built by the collect handler and must
//! not appear here.

use prometheus::{Counter, CounterVec, Gauge, Opts, Registry};

/// Outcome label values for collect request accounting.
pub const OUTCOME_SUCCESS: &str = "success";
pub const OUTCOME_BAD_REQUEST: &str = "bad_request";
pub const OUTCOME_ERROR: &str = "error";

/// Static metric set served by the /metrics endpoint.
#[derive(Clone)]
pub struct ExporterMetrics {
    /// Count of /collect requests handled, by outcome.
    pub collect_requests_total: CounterVec,
    /// Duration of the most recent successful collection.
    pub collect_duration_seconds: Gauge,
    /// Count of all HTTP requests served by the exporter.
    pub http_requests_total: Counter,
}

impl ExporterMetrics {
    /// Creates the metric set and registers it into `registry`.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let collect_requests_total = CounterVec::new(
            Opts::new(
                "mystrom_exporter_collect_requests_total",
                "Number of /collect requests handled, partitioned by outcome",
            ),
            &["outcome"],
        )?;
        let collect_duration_seconds = Gauge::new(
            "mystrom_exporter_collect_duration_seconds",
            "Time spent serving the most recent successful /collect request",
        )?;
        let http_requests_total = Counter::new(
            "mystrom_exporter_http_requests_total",
            "Number of HTTP requests served by the exporter",
        )?;

        registry.register(Box::new(collect_requests_total.clone()))?;
        registry.register(Box::new(collect_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;

        Ok(Self {
            collect_requests_total,
            collect_duration_seconds,
            http_requests_total,
        })
    }
}
