//! HTTP endpoint handlers for the exporter.
//!
//! This module provides handlers for all HTTP endpoints:
//! - `/collect`: On-demand device scrape endpoint
//! - `/metrics`: Exporter self-telemetry in Prometheus format
//! - `/health`: Health check endpoint
//! - `/`: Landing page

pub mod collect;
pub mod health;
pub mod metrics;
pub mod root;

// Re-export handlers
pub use collect::collect_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use root::root_handler;
