//! Health check endpoint handler.
//!
//! This module provides the `/health` endpoint handler that returns
//! exporter health and request statistics as plain text.

use axum::{extract::State, response::IntoResponse};
use std::fmt::Write as FmtWrite;
use tracing::{debug, instrument};

use crate::metrics::{OUTCOME_BAD_REQUEST, OUTCOME_ERROR, OUTCOME_SUCCESS};
use crate::state::SharedState;

// Time conversion constants
const SECONDS_PER_HOUR: f64 = 3600.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Footer text for human-readable HTTP endpoints.
pub const FOOTER_TEXT: &str =
    "Project: https://github.com/cansp-dev/mystrom-exporter — Support: exporter@herakles.now";

/// Handler for the /health endpoint.
#[instrument(skip(state))]
pub async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    debug!("Processing /health request");
    state.metrics.http_requests_total.inc();

    let uptime_seconds = state.start_time.elapsed().as_secs_f64();
    let uptime_hours = uptime_seconds / SECONDS_PER_HOUR;
    let uptime_str = if uptime_hours < 1.0 {
        format!("{:.1} minutes", uptime_hours * MINUTES_PER_HOUR)
    } else if uptime_hours < HOURS_PER_DAY {
        format!("{:.1} hours", uptime_hours)
    } else {
        format!("{:.1} days", uptime_hours / HOURS_PER_DAY)
    };

    let collects_ok = state
        .metrics
        .collect_requests_total
        .with_label_values(&[OUTCOME_SUCCESS])
        .get();
    let collects_bad_request = state
        .metrics
        .collect_requests_total
        .with_label_values(&[OUTCOME_BAD_REQUEST])
        .get();
    let collects_failed = state
        .metrics
        .collect_requests_total
        .with_label_values(&[OUTCOME_ERROR])
        .get();
    let http_requests = state.metrics.http_requests_total.get();

    let mut body = String::new();
    let _ = writeln!(body, "myStrom Exporter Health");
    let _ = writeln!(body, "=======================");
    let _ = writeln!(body, "Status:   OK");
    let _ = writeln!(body, "Version:  {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(body, "Uptime:   {}", uptime_str);
    let _ = writeln!(body);
    let _ = writeln!(body, "Requests");
    let _ = writeln!(body, "--------");
    let _ = writeln!(body, "http_requests_total:   {}", http_requests);
    let _ = writeln!(body, "collects_success:      {}", collects_ok);
    let _ = writeln!(body, "collects_bad_request:  {}", collects_bad_request);
    let _ = writeln!(body, "collects_failed:       {}", collects_failed);
    let _ = writeln!(body);
    let _ = writeln!(body, "{}", FOOTER_TEXT);

    body
}
