//! Collect endpoint handler: one on-demand device scrape per request.
//!
//! This module provides the `/collect` endpoint handler. Each invocation
//! builds its own empty registry, hands it to the collector together with
//! the target address, and renders whatever came back. Requests never share
//! a registry, so concurrent scrapes cannot contaminate each other.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use prometheus::{Encoder, Registry, TextEncoder};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, error, instrument, warn};

use crate::collector::collect_switch_metrics;
use crate::metrics::{OUTCOME_BAD_REQUEST, OUTCOME_ERROR, OUTCOME_SUCCESS};
use crate::state::SharedState;

/// Query parameters accepted by the /collect endpoint.
#[derive(Debug, Deserialize)]
pub struct CollectParams {
    /// Base URL of the target device (scheme + host, no trailing path).
    pub hostname: Option<String>,
}

/// Handler for the /collect endpoint.
#[instrument(skip(state, params))]
pub async fn collect_handler(
    State(state): State<SharedState>,
    Query(params): Query<CollectParams>,
) -> Response {
    let start = Instant::now();
    state.metrics.http_requests_total.inc();

    let hostname = match params.hostname.as_deref() {
        Some(h) if !h.is_empty() => h,
        _ => {
            state
                .metrics
                .collect_requests_total
                .with_label_values(&[OUTCOME_BAD_REQUEST])
                .inc();
            return (
                StatusCode::BAD_REQUEST,
                "must provide 'hostname' request parameter\n",
            )
                .into_response();
        }
    };

    debug!(hostname, "processing /collect request");

    // Request-scoped registry: created empty, filled once, rendered, dropped.
    let registry = Registry::new();
    let timeout = state.config.collect_timeout_secs.map(Duration::from_secs);

    if let Err(err) =
        collect_switch_metrics(&state.http_client, hostname, &registry, timeout).await
    {
        warn!(hostname, error = %err, "collection failed");
        state
            .metrics
            .collect_requests_total
            .with_label_values(&[OUTCOME_ERROR])
            .inc();
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("could not collect metrics from {}: {}\n", hostname, err),
        )
            .into_response();
    }

    let families = registry.gather();
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    if let Err(err) = encoder.encode(&families, &mut buffer) {
        error!(hostname, error = %err, "failed to encode collected metrics");
        state
            .metrics
            .collect_requests_total
            .with_label_values(&[OUTCOME_ERROR])
            .inc();
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to encode metrics",
        )
            .into_response();
    }

    state
        .metrics
        .collect_requests_total
        .with_label_values(&[OUTCOME_SUCCESS])
        .inc();
    state
        .metrics
        .collect_duration_seconds
        .set(start.elapsed().as_secs_f64());

    debug!(
        hostname,
        bytes = buffer.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "collect request completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, encoder.format_type())],
        buffer,
    )
        .into_response()
}
