//! Device collection: fetch a switch status report and translate it into
//! request-scoped Prometheus gauges.
//!
//! One collection is one outbound `GET <device>/report`, one decode, and one
//! all-or-nothing registry population. Nothing is retried here; a failed
//! fetch yields a failed collection and the next scrape starts from scratch.

use prometheus::{Gauge, Registry};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Status report returned by a myStrom switch under `/report`.
///
/// Real devices report more fields (instantaneous power, boot id); only the
/// exported ones are decoded and the rest are dropped. Missing fields fall
/// back to their zero value, matching the sparse reports older firmware
/// versions produce.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SwitchReport {
    pub relay: bool,
    pub temperature: f64,
    pub energy_since_boot: f64,
    pub time_since_boot: i64,
}

/// Errors raised while collecting metrics from a device.
///
/// Each variant names the phase that failed so the scrape response can tell
/// an unreachable device from a malformed report.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("could not build get request for call: {0}")]
    BuildRequest(#[source] reqwest::Error),

    #[error("could not get report: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("could not decode report: {0}")]
    Decode(#[source] reqwest::Error),

    /// Duplicate gauge registration. Cannot happen with a fresh per-request
    /// registry.
    #[error("could not register gauge {name}: {source}")]
    Register {
        name: &'static str,
        #[source]
        source: prometheus::Error,
    },
}

/// Fetches the report from `<addr>/report` and populates `registry` with the
/// four switch gauges.
///
/// On any error the registry is left exactly as it was received: gauges are
/// only created and registered after fetch and decode both succeeded. The
/// outbound call is dropped (and thereby aborted) if the caller's own future
/// is cancelled; `timeout` additionally bounds it when set.
pub async fn collect_switch_metrics(
    client: &reqwest::Client,
    addr: &str,
    registry: &Registry,
    timeout: Option<Duration>,
) -> Result<(), CollectError> {
    let mut builder = client.get(format!("{}/report", addr));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let request = builder.build().map_err(CollectError::BuildRequest)?;

    let response = client.execute(request).await.map_err(CollectError::Fetch)?;

    // Status is not checked; a non-2xx answer with a JSON-free body surfaces
    // as a decode failure.
    let report: SwitchReport = response.json().await.map_err(CollectError::Decode)?;

    debug!(addr, ?report, "decoded switch report");

    populate_registry(&report, registry)
}

/// Translates a decoded report into the four gauges and registers them.
fn populate_registry(report: &SwitchReport, registry: &Registry) -> Result<(), CollectError> {
    register_gauge(
        registry,
        "mystrom_switch_temperature",
        "Temperature measured by the device",
        report.temperature,
    )?;
    // The relay gauge is set unconditionally: a scrape of a switched-off
    // device must read 0, not a missing series.
    register_gauge(
        registry,
        "mystrom_switch_relay_state",
        "State of the relay, 1 is on and 0 is off",
        if report.relay { 1.0 } else { 0.0 },
    )?;
    register_gauge(
        registry,
        "mystrom_switch_energy_since_boot_wattseconds",
        "Total energy measured since the last power up or restart in watt seconds",
        report.energy_since_boot,
    )?;
    register_gauge(
        registry,
        "mystrom_switch_time_since_boot_seconds",
        "Time since the last power up or restart in seconds",
        report.time_since_boot as f64,
    )?;

    Ok(())
}

fn register_gauge(
    registry: &Registry,
    name: &'static str,
    help: &'static str,
    value: f64,
) -> Result<(), CollectError> {
    let gauge = Gauge::new(name, help).map_err(|source| CollectError::Register { name, source })?;
    gauge.set(value);
    registry
        .register(Box::new(gauge))
        .map_err(|source| CollectError::Register { name, source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::{Encoder, TextEncoder};

    fn render(registry: &Registry) -> String {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&registry.gather(), &mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_decode_drops_unknown_fields() {
        let payload = r#"{
            "power": 29.37,
            "Ws": 30.97,
            "relay": true,
            "temperature": 21.25,
            "boot_id": "not used",
            "energy_since_boot": 123478.12,
            "time_since_boot": 2781
        }"#;

        let report: SwitchReport = serde_json::from_str(payload).unwrap();
        assert!(report.relay);
        assert_eq!(report.temperature, 21.25);
        assert_eq!(report.energy_since_boot, 123478.12);
        assert_eq!(report.time_since_boot, 2781);
    }

    #[test]
    fn test_report_decode_defaults_missing_fields() {
        let report: SwitchReport = serde_json::from_str(r#"{"temperature": 18.0}"#).unwrap();
        assert!(!report.relay);
        assert_eq!(report.temperature, 18.0);
        assert_eq!(report.energy_since_boot, 0.0);
        assert_eq!(report.time_since_boot, 0);
    }

    #[test]
    fn test_populate_sets_all_four_gauges() {
        let report = SwitchReport {
            relay: true,
            temperature: 12.5,
            energy_since_boot: 123478.12,
            time_since_boot: 2781,
        };
        let registry = Registry::new();
        populate_registry(&report, &registry).unwrap();

        let rendered = render(&registry);
        assert!(rendered.contains("mystrom_switch_temperature 12.5"));
        assert!(rendered.contains("mystrom_switch_relay_state 1"));
        assert!(rendered.contains("mystrom_switch_energy_since_boot_wattseconds 123478.12"));
        assert!(rendered.contains("mystrom_switch_time_since_boot_seconds 2781"));
    }

    #[test]
    fn test_relay_off_reads_zero_not_missing() {
        let report = SwitchReport {
            relay: false,
            ..SwitchReport::default()
        };
        let registry = Registry::new();
        populate_registry(&report, &registry).unwrap();

        let rendered = render(&registry);
        assert!(rendered.contains("mystrom_switch_relay_state 0"));
    }

    #[test]
    fn test_duplicate_registration_is_an_error() {
        let report = SwitchReport::default();
        let registry = Registry::new();
        populate_registry(&report, &registry).unwrap();

        let err = populate_registry(&report, &registry).unwrap_err();
        assert!(matches!(err, CollectError::Register { .. }));
    }
}
