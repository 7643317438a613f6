//! myStrom WiFi Switch Prometheus Exporter Library
//!
//! This library bridges pull-based Prometheus scraping onto myStrom WiFi
//! Switch smart plugs. Each request to the `/collect` endpoint fetches the
//! addressed device's status report over HTTP and renders temperature, relay
//! state, energy and uptime readings in Prometheus text format. The exporter
//! keeps no state between scrapes: every collection builds its own
//! request-scoped registry, so concurrent scrapes of different (or the same)
//! device cannot contaminate each other.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Instant;
//!
//! use mystrom_exporter::{build_router, AppState, Config, ExporterMetrics};
//! use prometheus::Registry;
//!
//! # async fn serve() -> anyhow::Result<()> {
//! let registry = Registry::new();
//! let metrics = ExporterMetrics::new(&registry)?;
//!
//! let state = Arc::new(AppState {
//!     registry,
//!     metrics,
//!     http_client: reqwest::Client::new(),
//!     config: Arc::new(Config::default()),
//!     start_time: Instant::now(),
//! });
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, build_router(state)).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod handlers;
pub mod metrics;
pub mod state;

// Re-export main types for convenience
pub use collector::{collect_switch_metrics, CollectError, SwitchReport};
pub use config::Config;
pub use metrics::ExporterMetrics;
pub use state::{AppState, SharedState};

use axum::{routing::get, Router};

use handlers::{collect_handler, health_handler, metrics_handler, root_handler};

/// Builds the exporter HTTP router with all endpoints wired to `state`.
pub fn build_router(state: SharedState) -> Router {
    let mut app = Router::new()
        .route("/", get(root_handler))
        .route("/metrics", get(metrics_handler))
        .route("/collect", get(collect_handler));

    if state.config.enable_health.unwrap_or(true) {
        app = app.route("/health", get(health_handler));
    }

    app.with_state(state)
}
