//! Application state management for the exporter.
//!
//! This module defines the shared application state that is passed
//! to HTTP handlers.

use prometheus::Registry;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::metrics::ExporterMetrics;

/// Type alias for shared application state.
pub type SharedState = Arc<AppState>;

/// Global application state shared across requests.
///
/// Everything here is either written once at startup or internally
/// synchronized (prometheus counters, the reqwest connection pool), so
/// handlers share it without additional locking.
pub struct AppState {
    /// Process-wide default registry. Holds exporter self-telemetry only;
    /// per-request device registries are created and dropped by the collect
    /// handler and never touch this one.
    pub registry: Registry,
    pub metrics: ExporterMetrics,
    /// Shared outbound HTTP client; connection pool reuse across collections.
    pub http_client: reqwest::Client,
    pub config: Arc<Config>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}
